//! Column Entity
//!
//! An ordered lane of task cards, owned by exactly one board.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Ordered};

/// A column on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier, assigned by the server
    pub id: u32,
    /// Owning board
    #[serde(rename = "boardId", default)]
    pub board_id: u32,
    /// Display name
    pub name: String,
    /// Position within the owning board
    #[serde(default)]
    pub order: u32,
}

impl Column {
    /// Create a new column at the given position of a board
    pub fn new(id: u32, board_id: u32, name: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            board_id,
            name: name.into(),
            order,
        }
    }
}

impl Entity for Column {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Ordered for Column {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_creation() {
        let column = Column::new(4, 1, "In Progress", 2);
        assert_eq!(column.id(), 4);
        assert_eq!(column.board_id, 1);
        assert_eq!(column.order, 2);
    }
}
