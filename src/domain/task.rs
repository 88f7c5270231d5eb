//! Task Entity
//!
//! A draggable card owned by exactly one column.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Ordered};

/// A task card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the server (opaque string)
    pub id: String,
    /// Card title
    pub title: String,
    /// Optional longer description
    #[serde(default)]
    pub description: String,
    /// Owning column
    #[serde(rename = "columnId")]
    pub column_id: u32,
    /// Position within the owning column
    #[serde(default)]
    pub order: u32,
}

impl Task {
    /// Create a new task at the given position of a column
    pub fn new(id: impl Into<String>, title: impl Into<String>, column_id: u32, order: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            column_id,
            order,
        }
    }

    /// Attach a description, builder-style
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Hand the task to another column at the given position. Nothing
    /// else about the task changes; neighbors in either column are the
    /// caller's business.
    pub fn move_to_column(&mut self, column_id: u32, order: u32) {
        self.column_id = column_id;
        self.order = order;
    }
}

impl Entity for Task {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

impl Ordered for Task {
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
    fn test_task_creation() {
        let task = Task::new("t1", "Write release notes", 3, 0);
        assert_eq!(task.id(), "t1");
        assert_eq!(task.column_id, 3);
        assert_eq!(task.order, 0);
        assert!(task.description.is_empty());
    }

    #[test]
    fn test_task_with_description() {
        let task = Task::new("t2", "Fix login", 1, 2).with_description("repro steps attached");
        assert_eq!(task.description, "repro steps attached");
    }

    #[test]
    fn test_move_to_column_changes_only_ownership_and_position() {
        let mut task = Task::new("t4", "Review PR", 1, 2).with_description("waiting on CI");
        task.move_to_column(9, 0);
        assert_eq!(task.column_id, 9);
        assert_eq!(task.order, 0);
        assert_eq!(task.title, "Review PR");
        assert_eq!(task.description, "waiting on CI");
    }

    #[test]
    fn test_task_serialization_uses_column_id_alias() {
        let task = Task::new("t3", "Ship it", 7, 1);
        let json = serde_json::to_value(&task).expect("Failed to serialize task");
        assert_eq!(json["columnId"], 7);
    }
}
