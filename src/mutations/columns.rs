//! Column Mutations
//!
//! Column management for the loaded board: batch creation, rename,
//! deletion, and the board-wide reorder confirmed through a single
//! bulk call.

use std::sync::Arc;

use log::warn;

use crate::api::types::{ColumnOrder, ColumnUpdate, NewColumn};
use crate::api::BoardApi;
use crate::domain::{ordering, BoardError, BoardResult, Column};
use crate::notify::Notification;

use super::tasks::fallback_message;
use super::SharedState;

/// Column operations against one shared board state
#[derive(Clone)]
pub struct ColumnManager {
    api: Arc<dyn BoardApi>,
    state: SharedState,
}

impl ColumnManager {
    pub fn new(api: Arc<dyn BoardApi>, state: SharedState) -> Self {
        Self { api, state }
    }

    /// Create a batch of columns at the end of the board.
    ///
    /// Columns get their identity from the server, so the batch is
    /// confirmed first and appended to local state on success.
    pub async fn add_columns(&self, board_id: u32, names: &[String]) -> BoardResult<Vec<Column>> {
        let payload: Vec<NewColumn> = {
            let state = self.state.lock().await;
            let base = ordering::next_order(&state.columns);
            names
                .iter()
                .enumerate()
                .map(|(index, name)| NewColumn {
                    name: name.clone(),
                    order: base + index as u32,
                })
                .collect()
        };

        match self.api.create_columns(board_id, &payload).await {
            Ok(created) => {
                let mut state = self.state.lock().await;
                state.begin_columns_mutation();
                for column in &created {
                    state.add_column(column.clone());
                }
                state.notify(Notification::success("Columns added successfully"));
                Ok(created)
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.notify(Notification::error(fallback_message(
                    &err,
                    "Failed to add columns",
                )));
                Err(err)
            }
        }
    }

    /// Rename a column (optionally repositioning it)
    pub async fn update_column(&self, column_id: u32, updates: ColumnUpdate) -> BoardResult<()> {
        let (previous, rev) = {
            let mut state = self.state.lock().await;
            let previous = state.columns.clone();
            let rev = state.begin_columns_mutation();
            if let Some(column) = state.columns.iter_mut().find(|column| column.id == column_id) {
                if let Some(name) = &updates.name {
                    column.name = name.clone();
                }
                if let Some(order) = updates.order {
                    column.order = order;
                }
            }
            (previous, rev)
        };

        match self.api.update_column(column_id, &updates).await {
            Ok(_) => Ok(()),
            Err(err) => {
                self.rollback(previous, rev, &err, "Failed to update column").await;
                Err(err)
            }
        }
    }

    /// Delete a column, closing the gap it leaves on the board
    pub async fn delete_column(&self, column_id: u32) -> BoardResult<()> {
        let (previous, rev) = {
            let mut state = self.state.lock().await;
            let previous = state.columns.clone();
            let rev = state.begin_columns_mutation();
            let survivors = ordering::remove_and_renumber(&state.columns_sorted(), &column_id);
            state.set_columns(survivors);
            (previous, rev)
        };

        match self.api.delete_column(column_id).await {
            Ok(()) => {
                let mut state = self.state.lock().await;
                state.notify(Notification::success("Column deleted successfully"));
                Ok(())
            }
            Err(err) => {
                self.rollback(previous, rev, &err, "Failed to delete column").await;
                Err(err)
            }
        }
    }

    /// Move a column to a new position, persisting the whole
    /// arrangement in one bulk call
    pub async fn reorder_column(
        &self,
        board_id: u32,
        column_id: u32,
        to_order: u32,
    ) -> BoardResult<()> {
        let (previous, rev, orders) = {
            let mut state = self.state.lock().await;
            let columns = state.columns_sorted();
            let from_order = match columns.iter().find(|column| column.id == column_id) {
                Some(column) => column.order,
                None => {
                    let err = BoardError::NotFound("Column not found".to_string());
                    state.notify(Notification::error(err.message()));
                    return Err(err);
                }
            };
            let reordered = match ordering::move_within(&columns, &column_id, from_order, to_order) {
                Ok(reordered) => reordered,
                Err(err) => {
                    state.notify(Notification::error(fallback_message(
                        &err,
                        "Failed to reorder columns",
                    )));
                    return Err(err);
                }
            };
            if from_order == to_order {
                return Ok(());
            }

            let orders: Vec<ColumnOrder> = reordered
                .iter()
                .map(|column| ColumnOrder {
                    id: column.id,
                    order: column.order,
                })
                .collect();
            let previous = state.columns.clone();
            let rev = state.begin_columns_mutation();
            state.set_columns(reordered);
            (previous, rev, orders)
        };

        match self.api.reorder_columns(board_id, &orders).await {
            Ok(confirmed) => {
                let mut state = self.state.lock().await;
                if !state.adopt_columns(confirmed, rev) {
                    warn!(
                        "discarding stale column arrangement for superseded revision {}",
                        rev
                    );
                }
                Ok(())
            }
            Err(err) => {
                self.rollback(previous, rev, &err, "Failed to reorder columns").await;
                Err(err)
            }
        }
    }

    /// Act on a completed column drag: indices of the sorted column
    /// list map directly onto positions
    pub async fn handle_column_drop(
        &self,
        board_id: u32,
        from_index: usize,
        to_index: usize,
    ) -> BoardResult<()> {
        let column_id = {
            let state = self.state.lock().await;
            match state.columns_sorted().get(from_index) {
                Some(column) => column.id,
                None => {
                    return Err(BoardError::InvalidOrderIndex(format!(
                        "no column at index {}",
                        from_index
                    )))
                }
            }
        };
        self.reorder_column(board_id, column_id, to_index as u32).await
    }

    async fn rollback(&self, snapshot: Vec<Column>, rev: u64, err: &BoardError, fallback: &str) {
        let mut state = self.state.lock().await;
        if !state.restore_columns(snapshot, rev) {
            warn!(
                "discarding stale column rollback for superseded revision {}",
                rev
            );
        }
        state.notify(Notification::error(fallback_message(err, fallback)));
    }
}
