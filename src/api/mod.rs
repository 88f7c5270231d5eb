//! External Interface Layer
//!
//! The abstract [`BoardApi`] contract the mutation layer depends on,
//! the payload types it exchanges, and the reqwest-backed client that
//! talks to the real server.

mod config;
mod http;
mod traits;
pub mod types;

pub use config::ApiConfig;
pub use http::HttpBoardApi;
pub use traits::BoardApi;
