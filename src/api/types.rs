//! Board API payload types
//!
//! Request bodies sent to the remote API and the response envelope it
//! wraps results in. Partial updates skip unset fields entirely.

use serde::{Deserialize, Serialize};

// ========================
// Request payloads
// ========================

/// Payload for creating a task
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub order: u32,
}

/// Partial task update; unset fields are left untouched server-side
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl TaskUpdate {
    /// Update only the position
    pub fn order(order: u32) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    /// Update only the title
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Move to another column at the given position
    pub fn placement(column_id: u32, order: u32) -> Self {
        Self {
            column_id: Some(column_id),
            order: Some(order),
            ..Self::default()
        }
    }
}

/// Payload for creating a column
#[derive(Debug, Clone, Serialize)]
pub struct NewColumn {
    pub name: String,
    pub order: u32,
}

/// Partial column update
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColumnUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// One entry of a bulk column reorder
#[derive(Debug, Clone, Serialize)]
pub struct ColumnOrder {
    pub id: u32,
    pub order: u32,
}

// ========================
// Response envelope
// ========================

/// Body shape the API wraps every successful response in
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
