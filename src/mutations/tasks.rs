//! Task Mutations
//!
//! Optimistic create/update/move/reorder/delete for task cards, plus
//! the dispatch point for completed drag gestures.

use std::sync::Arc;

use boardyet_dragdrop::DropOutcome;
use futures::future::try_join_all;
use log::warn;

use crate::api::types::{NewTask, TaskUpdate};
use crate::api::BoardApi;
use crate::domain::{ordering, BoardError, BoardResult, Task};
use crate::notify::Notification;

use super::SharedState;

/// Optimistic task operations against one shared board state
#[derive(Clone)]
pub struct TaskManager {
    api: Arc<dyn BoardApi>,
    state: SharedState,
}

impl TaskManager {
    pub fn new(api: Arc<dyn BoardApi>, state: SharedState) -> Self {
        Self { api, state }
    }

    /// Create a task at the end of a column.
    ///
    /// A placeholder card appears immediately; the server-assigned
    /// task replaces it on success, and it disappears again on
    /// failure.
    pub async fn create_task(
        &self,
        column_id: u32,
        title: &str,
        description: &str,
    ) -> BoardResult<Task> {
        let (placeholder_id, order) = {
            let mut state = self.state.lock().await;
            let rev = state.begin_tasks_mutation();
            let order = ordering::next_order(&state.tasks_for_column(column_id));
            let placeholder_id = format!("pending-{}", rev);
            state.add_task(
                Task::new(placeholder_id.clone(), title, column_id, order)
                    .with_description(description),
            );
            (placeholder_id, order)
        };

        let payload = NewTask {
            title: title.to_string(),
            description: description.to_string(),
            order,
        };
        match self.api.create_task(column_id, &payload).await {
            Ok(created) => {
                let mut state = self.state.lock().await;
                state.remove_task(&placeholder_id);
                state.add_task(created.clone());
                state.notify(Notification::success("Task created successfully"));
                Ok(created)
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.remove_task(&placeholder_id);
                state.notify(Notification::error(fallback_message(
                    &err,
                    "Failed to create task",
                )));
                Err(err)
            }
        }
    }

    /// Apply a partial update to a task
    pub async fn update_task(&self, task_id: &str, updates: TaskUpdate) -> BoardResult<()> {
        let (previous, rev) = {
            let mut state = self.state.lock().await;
            let previous = state.tasks.clone();
            let rev = state.begin_tasks_mutation();
            if let Some(task) = state.tasks.iter_mut().find(|task| task.id == task_id) {
                apply_update(task, &updates);
            }
            (previous, rev)
        };

        match self.api.update_task(task_id, &updates).await {
            Ok(_) => {
                let mut state = self.state.lock().await;
                state.notify(Notification::success("Task updated successfully"));
                Ok(())
            }
            Err(err) => {
                self.rollback(previous, rev, &err, "Failed to update task").await;
                Err(err)
            }
        }
    }

    /// Move a task to the end of another column
    pub async fn move_task(
        &self,
        task_id: &str,
        from_column_id: u32,
        to_column_id: u32,
    ) -> BoardResult<()> {
        let (previous, rev, to_order) = {
            let mut state = self.state.lock().await;
            let current_column = match state.find_task(task_id).map(|task| task.column_id) {
                Some(column_id) => column_id,
                None => {
                    let err = BoardError::NotFound("Task not found".to_string());
                    state.notify(Notification::error(err.message()));
                    return Err(err);
                }
            };
            if current_column != from_column_id {
                let err = BoardError::InvalidOrderIndex(
                    "Task is not in the expected column".to_string(),
                );
                state.notify(Notification::error(err.message()));
                return Err(err);
            }

            let to_order = ordering::next_order(&state.tasks_for_column(to_column_id));
            let previous = state.tasks.clone();
            let rev = state.begin_tasks_mutation();
            if let Some(task) = state.tasks.iter_mut().find(|task| task.id == task_id) {
                task.move_to_column(to_column_id, to_order);
            }
            (previous, rev, to_order)
        };

        let updates = TaskUpdate::placement(to_column_id, to_order);
        match self.api.update_task(task_id, &updates).await {
            Ok(_) => {
                let mut state = self.state.lock().await;
                state.notify(Notification::success(format!(
                    "Task moved from column {} to column {}",
                    from_column_id, to_column_id
                )));
                Ok(())
            }
            Err(err) => {
                self.rollback(previous, rev, &err, "Failed to move task").await;
                Err(err)
            }
        }
    }

    /// Reorder a task within its column.
    ///
    /// Every shifted neighbor needs its own confirmation call; the
    /// whole operation commits or rolls back as one.
    pub async fn reorder_task(
        &self,
        task_id: &str,
        from_order: u32,
        to_order: u32,
        column_id: u32,
    ) -> BoardResult<()> {
        if from_order == to_order {
            return Ok(());
        }

        let (previous, rev, changed) = {
            let mut state = self.state.lock().await;
            let column_tasks = state.tasks_for_column(column_id);
            let reordered = match ordering::move_within(
                &column_tasks,
                &task_id.to_string(),
                from_order,
                to_order,
            ) {
                Ok(reordered) => reordered,
                Err(err) => {
                    state.notify(Notification::error(fallback_message(
                        &err,
                        "Failed to reorder task",
                    )));
                    return Err(err);
                }
            };

            let changed: Vec<Task> = reordered
                .iter()
                .filter(|task| {
                    column_tasks
                        .iter()
                        .find(|before| before.id == task.id)
                        .map(|before| before.order != task.order)
                        .unwrap_or(true)
                })
                .cloned()
                .collect();

            let previous = state.tasks.clone();
            let rev = state.begin_tasks_mutation();
            state.replace_column_tasks(column_id, reordered);
            (previous, rev, changed)
        };

        let confirmations = changed.iter().map(|task| {
            let api = Arc::clone(&self.api);
            let task_id = task.id.clone();
            let update = TaskUpdate::order(task.order);
            async move { api.update_task(&task_id, &update).await }
        });

        match try_join_all(confirmations).await {
            Ok(_) => Ok(()),
            Err(err) => {
                self.rollback(previous, rev, &err, "Failed to reorder task").await;
                Err(err)
            }
        }
    }

    /// Delete a task, closing the gap it leaves in its column
    pub async fn delete_task(&self, task_id: &str) -> BoardResult<()> {
        let (previous, rev) = {
            let mut state = self.state.lock().await;
            let previous = state.tasks.clone();
            let rev = state.begin_tasks_mutation();
            if let Some(task) = state.find_task(task_id).cloned() {
                let survivors =
                    ordering::remove_and_renumber(&state.tasks_for_column(task.column_id), &task.id);
                state.replace_column_tasks(task.column_id, survivors);
            }
            (previous, rev)
        };

        match self.api.delete_task(task_id).await {
            Ok(()) => {
                let mut state = self.state.lock().await;
                state.notify(Notification::success("Task deleted successfully"));
                Ok(())
            }
            Err(err) => {
                self.rollback(previous, rev, &err, "Failed to delete task").await;
                Err(err)
            }
        }
    }

    /// Act on a completed drag gesture
    pub async fn handle_drop(&self, outcome: DropOutcome) -> BoardResult<()> {
        match outcome {
            DropOutcome::Move {
                task_id,
                from_column_id,
                to_column_id,
            } => self.move_task(&task_id, from_column_id, to_column_id).await,
            DropOutcome::Reorder {
                task_id,
                column_id,
                to_order,
            } => {
                let from_order = {
                    let mut state = self.state.lock().await;
                    match state.find_task(&task_id).map(|task| task.order) {
                        Some(order) => order,
                        None => {
                            let err = BoardError::NotFound("Task not found".to_string());
                            state.notify(Notification::error(err.message()));
                            return Err(err);
                        }
                    }
                };
                self.reorder_task(&task_id, from_order, to_order, column_id).await
            }
        }
    }

    async fn rollback(&self, snapshot: Vec<Task>, rev: u64, err: &BoardError, fallback: &str) {
        let mut state = self.state.lock().await;
        if !state.restore_tasks(snapshot, rev) {
            warn!("discarding stale task rollback for superseded revision {}", rev);
        }
        state.notify(Notification::error(fallback_message(err, fallback)));
    }
}

fn apply_update(task: &mut Task, updates: &TaskUpdate) {
    if let Some(title) = &updates.title {
        task.title = title.clone();
    }
    if let Some(description) = &updates.description {
        task.description = description.clone();
    }
    if let Some(column_id) = updates.column_id {
        task.column_id = column_id;
    }
    if let Some(order) = updates.order {
        task.order = order;
    }
}

pub(super) fn fallback_message(err: &BoardError, fallback: &str) -> String {
    let message = err.message();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}
