//! Board Entity
//!
//! The board itself plus the snapshot shape the server returns on a
//! full fetch (columns carrying their cards), with the flattening that
//! turns a snapshot into the client's working state.

use serde::{Deserialize, Deserializer, Serialize};

use super::column::Column;
use super::ordering;
use super::task::Task;

/// A kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub name: String,
}

/// Server-returned board fetch: the board with its columns, each
/// column carrying its cards
#[derive(Debug, Clone, Deserialize)]
pub struct BoardSnapshot {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnSnapshot>,
}

/// One column of a [`BoardSnapshot`]
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnSnapshot {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub cards: Vec<CardSnapshot>,
}

/// One card of a [`ColumnSnapshot`]
///
/// The server is loose about card shapes: ids may arrive as numbers,
/// titles may live under `title` or `name`, order may be missing.
#[derive(Debug, Clone, Deserialize)]
pub struct CardSnapshot {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

impl BoardSnapshot {
    /// Flatten the nested snapshot into the client's working shape:
    /// the board, its columns, and one flat task list. Every container
    /// is reindexed to sequential positions on the way in.
    pub fn flatten(self) -> (Board, Vec<Column>, Vec<Task>) {
        let board = Board {
            id: self.id,
            name: self.name,
        };

        let mut columns = Vec::with_capacity(self.columns.len());
        let mut tasks = Vec::new();
        for column in self.columns {
            let mut column_tasks: Vec<Task> = column
                .cards
                .into_iter()
                .map(|card| Task {
                    id: card.id,
                    title: card
                        .title
                        .or(card.name)
                        .unwrap_or_else(|| "Untitled Card".to_string()),
                    description: card.description.unwrap_or_default(),
                    column_id: column.id,
                    order: card.order.unwrap_or(0),
                })
                .collect();
            ordering::reindex(&mut column_tasks);
            tasks.extend(column_tasks);

            columns.push(Column {
                id: column.id,
                board_id: board.id,
                name: column.name,
                order: column.order,
            });
        }
        ordering::reindex(&mut columns);

        (board, columns, tasks)
    }
}
