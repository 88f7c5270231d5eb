//! Optimistic Mutation Layer
//!
//! Every operation follows the same shape: snapshot the affected
//! collection, apply the change locally so the UI reflects it at once,
//! confirm against the remote API, and on failure restore the snapshot
//! and surface an error notification. A rollback whose collection has
//! been rewritten by a newer operation in the meantime is discarded
//! (last-issued-wins), so overlapping operations cannot resurrect
//! stale state.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::BoardState;

mod boards;
mod columns;
mod tasks;


pub use boards::BoardManager;
pub use columns::ColumnManager;
pub use tasks::TaskManager;

/// Board state shared between the managers and the embedding UI
pub type SharedState = Arc<Mutex<BoardState>>;

/// Wrap a fresh state for sharing
pub fn shared_state() -> SharedState {
    Arc::new(Mutex::new(BoardState::new()))
}
