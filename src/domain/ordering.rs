//! Order Model
//!
//! Pure position arithmetic for ordered containers: tasks within a
//! column and columns within a board share one implementation through
//! the [`Ordered`] trait. Within a container, orders are kept as a
//! permutation of `0..n-1`.

use super::entity::{BoardError, BoardResult, Ordered};

/// Next free position in a container: `max + 1`, or `0` when empty
pub fn next_order<T: Ordered>(items: &[T]) -> u32 {
    items.iter().map(|item| item.order()).max().map_or(0, |max| max + 1)
}

/// Append an item to a container, assigning it the next free position
pub fn append<T: Ordered>(items: &mut Vec<T>, mut item: T) {
    item.set_order(next_order(items));
    items.push(item);
}

/// Move the item at `from_order` to `to_order`, shifting everything in
/// between by one slot toward the vacated position.
///
/// Returns the reordered list. Moving to the same position returns the
/// input unchanged. Positions outside `0..len` and an id that does not
/// sit at `from_order` are rejected with `InvalidOrderIndex` so no
/// state is ever silently corrupted.
pub fn move_within<T: Ordered>(
    items: &[T],
    id: &T::Id,
    from_order: u32,
    to_order: u32,
) -> BoardResult<Vec<T>> {
    let len = items.len() as u32;
    if from_order >= len || to_order >= len {
        return Err(BoardError::InvalidOrderIndex(format!(
            "order {} -> {} is outside 0..{}",
            from_order, to_order, len
        )));
    }
    let moved = items
        .iter()
        .find(|item| item.id() == *id)
        .ok_or_else(|| BoardError::InvalidOrderIndex("item not found in container".to_string()))?;
    if moved.order() != from_order {
        return Err(BoardError::InvalidOrderIndex(format!(
            "item sits at order {}, not {}",
            moved.order(),
            from_order
        )));
    }
    if from_order == to_order {
        return Ok(items.to_vec());
    }

    let mut reordered = Vec::with_capacity(items.len());
    for item in items {
        let mut item = item.clone();
        let order = item.order();
        if item.id() == *id {
            item.set_order(to_order);
        } else if from_order < to_order && order > from_order && order <= to_order {
            item.set_order(order - 1);
        } else if from_order > to_order && order >= to_order && order < from_order {
            item.set_order(order + 1);
        }
        reordered.push(item);
    }
    Ok(reordered)
}

/// Remove an item and renumber the survivors to `0..n-2`, preserving
/// their relative order
pub fn remove_and_renumber<T: Ordered>(items: &[T], id: &T::Id) -> Vec<T> {
    let mut survivors: Vec<T> = items.iter().filter(|item| item.id() != *id).cloned().collect();
    reindex(&mut survivors);
    survivors
}

/// Renumber a container to sequential positions `0..n-1` by current
/// order. The sort is stable, so items sharing a position keep their
/// relative order.
pub fn reindex<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| item.order());
    for (position, item) in items.iter_mut().enumerate() {
        item.set_order(position as u32);
    }
}
