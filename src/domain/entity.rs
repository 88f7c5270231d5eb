//! Domain Layer - Core Entity Traits
//!
//! Basic contracts shared by all board entities, plus the error
//! taxonomy surfaced by every fallible operation in this crate.

use serde::{Deserialize, Serialize};

/// Core trait for all board entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Entities that occupy an ordered slot within a container
/// (tasks within a column, columns within a board)
pub trait Ordered: Entity {
    /// Zero-based position within the owning container
    fn order(&self) -> u32;

    /// Replace the position within the owning container
    fn set_order(&mut self, order: u32);
}

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Error taxonomy for board operations
///
/// `InvalidOrderIndex` is raised locally, before any network call.
/// The other kinds classify failures of the remote board API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardError {
    /// Local precondition violation; nothing was applied
    InvalidOrderIndex(String),
    /// The request did not complete
    Network(String),
    /// The API rejected the payload
    Validation(String),
    /// The target item or container no longer exists server-side
    NotFound(String),
    /// Fallback for anything else the API returned
    Unknown(String),
}

impl BoardError {
    /// Human-readable message carried by every error kind
    pub fn message(&self) -> &str {
        match self {
            BoardError::InvalidOrderIndex(msg)
            | BoardError::Network(msg)
            | BoardError::Validation(msg)
            | BoardError::NotFound(msg)
            | BoardError::Unknown(msg) => msg,
        }
    }
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidOrderIndex(msg) => write!(f, "Invalid order index: {}", msg),
            BoardError::Network(msg) => write!(f, "Network error: {}", msg),
            BoardError::Validation(msg) => write!(f, "Validation error: {}", msg),
            BoardError::NotFound(msg) => write!(f, "Not found: {}", msg),
            BoardError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for BoardError {}
