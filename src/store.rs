//! In-Memory Board State
//!
//! The single local copy of the board: a flat task list, the column
//! list, and the current notification. Mutation managers snapshot and
//! mutate this through the helpers below; the revision counters let a
//! late rollback detect that a newer operation has already rewritten
//! the collection it wants to restore.

use crate::domain::{ordering, Board, BoardSnapshot, Column, Task};
use crate::notify::Notification;

/// Client-side board state
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// The loaded board, if any
    pub board: Option<Board>,
    /// All columns of the loaded board
    pub columns: Vec<Column>,
    /// All tasks of the loaded board, across every column
    pub tasks: Vec<Task>,
    /// Current transient notification
    pub notification: Option<Notification>,
    tasks_rev: u64,
    columns_rev: u64,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Reads
    // ========================

    /// Tasks of one column, sorted by position
    pub fn tasks_for_column(&self, column_id: u32) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.column_id == column_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|task| task.order);
        tasks
    }

    /// All columns, sorted by position
    pub fn columns_sorted(&self) -> Vec<Column> {
        let mut columns = self.columns.clone();
        columns.sort_by_key(|column| column.order);
        columns
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn tasks_rev(&self) -> u64 {
        self.tasks_rev
    }

    pub fn columns_rev(&self) -> u64 {
        self.columns_rev
    }

    // ========================
    // Task list helpers
    // ========================

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replace a task by id, if present
    pub fn update_task(&mut self, updated: Task) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == updated.id) {
            *task = updated;
        }
    }

    pub fn remove_task(&mut self, task_id: &str) {
        self.tasks.retain(|task| task.id != task_id);
    }

    /// Swap out one column's tasks, leaving every other column untouched
    pub fn replace_column_tasks(&mut self, column_id: u32, column_tasks: Vec<Task>) {
        self.tasks.retain(|task| task.column_id != column_id);
        self.tasks.extend(column_tasks);
    }

    // ========================
    // Column list helpers
    // ========================

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn update_column(&mut self, updated: Column) {
        if let Some(column) = self.columns.iter_mut().find(|column| column.id == updated.id) {
            *column = updated;
        }
    }

    pub fn remove_column(&mut self, column_id: u32) {
        self.columns.retain(|column| column.id != column_id);
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    // ========================
    // Optimistic mutation bookkeeping
    // ========================

    /// Start a logical mutation of the task list; returns the revision
    /// this mutation owns
    pub fn begin_tasks_mutation(&mut self) -> u64 {
        self.tasks_rev += 1;
        self.tasks_rev
    }

    /// Start a logical mutation of the column list
    pub fn begin_columns_mutation(&mut self) -> u64 {
        self.columns_rev += 1;
        self.columns_rev
    }

    /// Restore the task list from a snapshot, unless a newer mutation
    /// has touched it since `rev` was issued. Returns whether the
    /// restore was applied.
    pub fn restore_tasks(&mut self, snapshot: Vec<Task>, rev: u64) -> bool {
        if self.tasks_rev != rev {
            return false;
        }
        self.tasks = snapshot;
        true
    }

    /// Restore the column list, unless superseded
    pub fn restore_columns(&mut self, snapshot: Vec<Column>, rev: u64) -> bool {
        if self.columns_rev != rev {
            return false;
        }
        self.columns = snapshot;
        true
    }

    /// Adopt the server-returned column list after a confirmed reorder,
    /// unless superseded
    pub fn adopt_columns(&mut self, mut columns: Vec<Column>, rev: u64) -> bool {
        if self.columns_rev != rev {
            return false;
        }
        ordering::reindex(&mut columns);
        self.columns = columns;
        true
    }

    /// Replace everything with a freshly fetched snapshot. Both
    /// revisions advance, so confirmations still in flight for the
    /// previous state resolve as no-ops.
    pub fn load_snapshot(&mut self, snapshot: BoardSnapshot) {
        let (board, columns, tasks) = snapshot.flatten();
        self.board = Some(board);
        self.columns = columns;
        self.tasks = tasks;
        self.tasks_rev += 1;
        self.columns_rev += 1;
    }

    // ========================
    // Notifications
    // ========================

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn clear_notification(&mut self) {
        self.notification = None;
    }
}
