//! Board DragDrop Utilities
//!
//! Drag session tracking for board UIs, decoupled from any rendering
//! layer: the embedding view forwards its drag events as plain method
//! calls and receives a [`DropOutcome`] to act on.

use log::debug;

/// A pointer position, in the same coordinate space as [`Rect`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// An axis-aligned bounding box, typically a drop target's on-screen
/// extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// The task currently being dragged and where it came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraggedTask {
    pub task_id: String,
    pub source_column_id: u32,
}

/// What a completed drop asks the board to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Same-column drop onto a specific row
    Reorder {
        task_id: String,
        column_id: u32,
        to_order: u32,
    },
    /// Drop into a different column
    Move {
        task_id: String,
        from_column_id: u32,
        to_column_id: u32,
    },
}

/// Tracks one in-progress drag gesture
///
/// At most one session is active at a time; a new drag-start replaces
/// whatever was tracked before. Outside an active drag the hovered
/// column is always cleared.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    dragging: Option<DraggedTask>,
    hovered_column_id: Option<u32>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.dragging.is_none()
    }

    pub fn dragged(&self) -> Option<&DraggedTask> {
        self.dragging.as_ref()
    }

    pub fn hovered_column_id(&self) -> Option<u32> {
        self.hovered_column_id
    }

    /// Whether this task is the one being dragged (used to dim it)
    pub fn is_task_dragged(&self, task_id: &str) -> bool {
        self.dragging
            .as_ref()
            .map(|dragged| dragged.task_id == task_id)
            .unwrap_or(false)
    }

    /// Whether this column is the current drop target (used to
    /// highlight it)
    pub fn is_column_hovered(&self, column_id: u32) -> bool {
        self.hovered_column_id == Some(column_id)
    }

    /// Begin a new session
    pub fn on_drag_start(&mut self, task_id: impl Into<String>, column_id: u32) {
        let task_id = task_id.into();
        debug!("drag start: task {} from column {}", task_id, column_id);
        self.dragging = Some(DraggedTask {
            task_id,
            source_column_id: column_id,
        });
        self.hovered_column_id = None;
    }

    /// Track the column under the pointer, for visual feedback only
    pub fn on_drag_over(&mut self, column_id: u32) {
        if self.dragging.is_some() {
            self.hovered_column_id = Some(column_id);
        }
    }

    /// Clear the hover, but only when the pointer has actually left
    /// the hovered container's bounding box. Crossing into a child
    /// element fires a leave event while still inside the box; those
    /// must not flicker the highlight off.
    pub fn on_drag_leave(&mut self, pointer: Point, hovered_bounds: Rect) {
        if self.dragging.is_some() && !hovered_bounds.contains(pointer) {
            self.hovered_column_id = None;
        }
    }

    /// Resolve the gesture against a drop target and reset to idle.
    ///
    /// Same-column drops need a target row to mean anything; a
    /// same-column drop without one resolves to nothing, like a drop
    /// with no active session.
    pub fn on_drop(&mut self, column_id: u32, target_order: Option<u32>) -> Option<DropOutcome> {
        let dragged = self.dragging.take()?;
        self.hovered_column_id = None;

        if dragged.source_column_id == column_id {
            let to_order = target_order?;
            debug!(
                "drop: task {} reorders to {} in column {}",
                dragged.task_id, to_order, column_id
            );
            Some(DropOutcome::Reorder {
                task_id: dragged.task_id,
                column_id,
                to_order,
            })
        } else {
            debug!(
                "drop: task {} moves from column {} to column {}",
                dragged.task_id, dragged.source_column_id, column_id
            );
            Some(DropOutcome::Move {
                task_id: dragged.task_id,
                from_column_id: dragged.source_column_id,
                to_column_id: column_id,
            })
        }
    }

    /// Unconditionally reset to idle; covers drags released outside
    /// any valid drop target
    pub fn on_drag_end(&mut self) {
        self.dragging = None;
        self.hovered_column_id = None;
    }
}

/// Tracks a column drag by list index
///
/// Columns are dragged within a single board, so an index pair is all
/// the drop needs to report.
#[derive(Clone, Debug, Default)]
pub struct ColumnDrag {
    dragged_index: Option<usize>,
}

impl ColumnDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged_index
    }

    pub fn on_drag_start(&mut self, index: usize) {
        self.dragged_index = Some(index);
    }

    /// Resolve to `(from_index, to_index)`; dropping a column onto its
    /// own slot resolves to nothing
    pub fn on_drop(&mut self, drop_index: usize) -> Option<(usize, usize)> {
        let from_index = self.dragged_index.take()?;
        if from_index == drop_index {
            return None;
        }
        Some((from_index, drop_index))
    }

    pub fn on_drag_end(&mut self) {
        self.dragged_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_end_without_drop_resets_to_idle() {
        let mut session = DragSession::new();
        session.on_drag_start("t1", 1);
        session.on_drag_over(2);
        session.on_drag_end();
        assert!(session.is_idle());
        assert_eq!(session.hovered_column_id(), None);
    }

    #[test]
    fn test_same_column_drop_resolves_to_reorder() {
        let mut session = DragSession::new();
        session.on_drag_start("t1", 1);
        let outcome = session.on_drop(1, Some(0));
        assert_eq!(
            outcome,
            Some(DropOutcome::Reorder {
                task_id: "t1".to_string(),
                column_id: 1,
                to_order: 0,
            })
        );
        assert!(session.is_idle());
    }

    #[test]
    fn test_cross_column_drop_resolves_to_move() {
        let mut session = DragSession::new();
        session.on_drag_start("t1", 1);
        let outcome = session.on_drop(3, None);
        assert_eq!(
            outcome,
            Some(DropOutcome::Move {
                task_id: "t1".to_string(),
                from_column_id: 1,
                to_column_id: 3,
            })
        );
    }

    #[test]
    fn test_same_column_drop_without_target_row_resolves_to_nothing() {
        let mut session = DragSession::new();
        session.on_drag_start("t1", 1);
        assert_eq!(session.on_drop(1, None), None);
        assert!(session.is_idle());
    }

    #[test]
    fn test_drop_without_session_is_ignored() {
        let mut session = DragSession::new();
        assert_eq!(session.on_drop(1, Some(0)), None);
    }

    #[test]
    fn test_drag_over_outside_session_keeps_hover_clear() {
        let mut session = DragSession::new();
        session.on_drag_over(2);
        assert_eq!(session.hovered_column_id(), None);
    }

    #[test]
    fn test_drag_leave_inside_bounds_keeps_hover() {
        let mut session = DragSession::new();
        session.on_drag_start("t1", 1);
        session.on_drag_over(2);
        let bounds = Rect::new(0, 0, 100, 100);
        session.on_drag_leave(Point { x: 50, y: 50 }, bounds);
        assert!(session.is_column_hovered(2));
        session.on_drag_leave(Point { x: 150, y: 50 }, bounds);
        assert_eq!(session.hovered_column_id(), None);
    }

    #[test]
    fn test_dragged_task_queries() {
        let mut session = DragSession::new();
        session.on_drag_start("t1", 1);
        assert!(session.is_task_dragged("t1"));
        assert!(!session.is_task_dragged("t2"));
    }

    #[test]
    fn test_column_drag_resolves_index_pair() {
        let mut drag = ColumnDrag::new();
        drag.on_drag_start(2);
        assert_eq!(drag.on_drop(0), Some((2, 0)));
        assert_eq!(drag.dragged_index(), None);
    }

    #[test]
    fn test_column_drag_onto_own_slot_resolves_to_nothing() {
        let mut drag = ColumnDrag::new();
        drag.on_drag_start(1);
        assert_eq!(drag.on_drop(1), None);
    }
}
