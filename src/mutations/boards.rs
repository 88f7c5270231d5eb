//! Board Loading
//!
//! Fetching a board replaces the whole local state: the server is the
//! source of truth, and a fresh snapshot supersedes every local copy,
//! including any confirmation still in flight for the old one.

use std::sync::Arc;

use crate::api::BoardApi;
use crate::domain::BoardResult;
use crate::notify::Notification;

use super::tasks::fallback_message;
use super::SharedState;

/// Board-level operations against one shared board state
#[derive(Clone)]
pub struct BoardManager {
    api: Arc<dyn BoardApi>,
    state: SharedState,
}

impl BoardManager {
    pub fn new(api: Arc<dyn BoardApi>, state: SharedState) -> Self {
        Self { api, state }
    }

    /// Fetch a board and adopt it wholesale
    pub async fn load_board(&self, board_id: u32) -> BoardResult<()> {
        match self.api.fetch_board(board_id).await {
            Ok(snapshot) => {
                self.state.lock().await.load_snapshot(snapshot);
                Ok(())
            }
            Err(err) => {
                self.state
                    .lock()
                    .await
                    .notify(Notification::error(fallback_message(
                        &err,
                        "Failed to load board",
                    )));
                Err(err)
            }
        }
    }
}
