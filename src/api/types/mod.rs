//! Shared API types

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;

/// Body returned by every successful DELETE
#[derive(Debug, serde::Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self { status: "Deleted" }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
