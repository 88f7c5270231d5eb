//! HTTP Board API
//!
//! reqwest-backed implementation of [`BoardApi`]. Responses arrive as
//! a JSON envelope (`data` plus optional `message`/`error`); failures
//! are classified into the board error taxonomy by HTTP status.

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{BoardError, BoardResult, BoardSnapshot, Column, Task};

use super::config::ApiConfig;
use super::traits::BoardApi;
use super::types::{ApiEnvelope, ColumnOrder, ColumnUpdate, NewColumn, NewTask, TaskUpdate};

mod endpoints {
    pub fn board(board_id: u32) -> String {
        format!("/boards/{}", board_id)
    }

    pub fn board_columns(board_id: u32) -> String {
        format!("/boards/{}/columns", board_id)
    }

    pub fn column(column_id: u32) -> String {
        format!("/columns/{}", column_id)
    }

    pub fn column_tasks(column_id: u32) -> String {
        format!("/columns/{}/tasks", column_id)
    }

    pub fn columns_reorder() -> String {
        "/columns/reorder".to_string()
    }

    pub fn task(task_id: &str) -> String {
        format!("/tasks/{}", task_id)
    }
}

/// Classify a non-success HTTP status into a board error
fn classify_status(status: u16, message: String) -> BoardError {
    match status {
        404 => BoardError::NotFound(message),
        422 => BoardError::Validation(message),
        _ => BoardError::Unknown(message),
    }
}

/// HTTP client for the remote board API
pub struct HttpBoardApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpBoardApi {
    pub fn new(config: ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { client, config }
    }

    /// One round trip: send, surface transport failures as `Network`,
    /// classify non-success statuses, hand back the parsed body
    async fn request_value(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> BoardResult<Value> {
        let url = format!("{}{}", self.config.base_url, endpoint);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("Content-Type", "application/json")
            .header("X-App-Name", &self.config.app_name)
            .header("X-App-Version", &self.config.app_version);
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        if self.config.debug {
            debug!("API request: {} {}", method, url);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BoardError::Network(e.to_string()))?;
        let status = response.status();

        if self.config.debug {
            debug!("API response: {} {}", status, url);
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| BoardError::Unknown(format!("Invalid response body: {}", e)))?;

        if !status.is_success() {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .or_else(|| value.get("error").and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(classify_status(status.as_u16(), message));
        }

        Ok(value)
    }

    /// Round trip plus envelope unwrapping into the expected data type
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> BoardResult<T> {
        let value = self.request_value(method, endpoint, body).await?;
        let envelope: ApiEnvelope<T> = serde_json::from_value(value)
            .map_err(|e| BoardError::Unknown(format!("Unexpected response shape: {}", e)))?;
        envelope
            .data
            .ok_or_else(|| BoardError::Unknown("Response carried no data".to_string()))
    }

    fn payload<T: serde::Serialize>(payload: &T) -> BoardResult<Value> {
        serde_json::to_value(payload).map_err(|e| BoardError::Unknown(e.to_string()))
    }
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn fetch_board(&self, board_id: u32) -> BoardResult<BoardSnapshot> {
        self.request(Method::GET, &endpoints::board(board_id), None).await
    }

    async fn create_task(&self, column_id: u32, task: &NewTask) -> BoardResult<Task> {
        let body = Self::payload(task)?;
        self.request(Method::POST, &endpoints::column_tasks(column_id), Some(body))
            .await
    }

    async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> BoardResult<Task> {
        let body = Self::payload(update)?;
        self.request(Method::PUT, &endpoints::task(task_id), Some(body)).await
    }

    async fn delete_task(&self, task_id: &str) -> BoardResult<()> {
        self.request_value(Method::DELETE, &endpoints::task(task_id), None)
            .await
            .map(|_| ())
    }

    async fn create_columns(&self, board_id: u32, columns: &[NewColumn]) -> BoardResult<Vec<Column>> {
        let body = Self::payload(&serde_json::json!({ "columns": columns }))?;
        self.request(Method::POST, &endpoints::board_columns(board_id), Some(body))
            .await
    }

    async fn update_column(&self, column_id: u32, update: &ColumnUpdate) -> BoardResult<Column> {
        let body = Self::payload(update)?;
        self.request(Method::PUT, &endpoints::column(column_id), Some(body))
            .await
    }

    async fn delete_column(&self, column_id: u32) -> BoardResult<()> {
        self.request_value(Method::DELETE, &endpoints::column(column_id), None)
            .await
            .map(|_| ())
    }

    async fn reorder_columns(&self, board_id: u32, orders: &[ColumnOrder]) -> BoardResult<Vec<Column>> {
        let body = Self::payload(&serde_json::json!({
            "boardId": board_id,
            "columns": orders,
        }))?;
        self.request(Method::PUT, &endpoints::columns_reorder(), Some(body))
            .await
    }
}
