//! Board API Contract
//!
//! The abstract asynchronous interface the mutation layer confirms
//! against. Implementations can use HTTP, in-memory doubles, etc.

use async_trait::async_trait;

use crate::domain::{BoardResult, BoardSnapshot, Column, Task};

use super::types::{ColumnOrder, ColumnUpdate, NewColumn, NewTask, TaskUpdate};

/// Remote board operations
///
/// Every call resolves to a success value or a message-carrying
/// [`crate::domain::BoardError`]; the caller decides what a failure
/// means for local state.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Fetch a board with its columns and their cards
    async fn fetch_board(&self, board_id: u32) -> BoardResult<BoardSnapshot>;

    /// Create a task in a column
    async fn create_task(&self, column_id: u32, task: &NewTask) -> BoardResult<Task>;

    /// Partially update a task
    async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> BoardResult<Task>;

    /// Delete a task
    async fn delete_task(&self, task_id: &str) -> BoardResult<()>;

    /// Create a batch of columns on a board
    async fn create_columns(&self, board_id: u32, columns: &[NewColumn]) -> BoardResult<Vec<Column>>;

    /// Partially update a column
    async fn update_column(&self, column_id: u32, update: &ColumnUpdate) -> BoardResult<Column>;

    /// Delete a column
    async fn delete_column(&self, column_id: u32) -> BoardResult<()>;

    /// Persist a board-wide column arrangement in one call
    async fn reorder_columns(&self, board_id: u32, orders: &[ColumnOrder]) -> BoardResult<Vec<Column>>;
}
