//! Board Yet Client Core
//!
//! Layered architecture:
//! - domain: Board entities, the pure order model, and the error taxonomy
//! - api: Abstract board API contract and the HTTP implementation
//! - store: The in-memory board state shared across mutations
//! - mutations: Optimistic mutation managers with all-or-nothing rollback
//!
//! Drag gesture tracking lives in the `boardyet-dragdrop` crate; its
//! [`DropOutcome`](boardyet_dragdrop::DropOutcome) feeds
//! [`mutations::TaskManager::handle_drop`].

pub mod api;
pub mod domain;
pub mod mutations;
pub mod notify;
pub mod store;

pub use api::{ApiConfig, BoardApi, HttpBoardApi};
pub use domain::{Board, BoardError, BoardResult, Column, Task};
pub use mutations::{shared_state, BoardManager, ColumnManager, SharedState, TaskManager};
pub use notify::{Notification, NotificationKind};
pub use store::BoardState;
