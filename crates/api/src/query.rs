//! Query parameter types for the project and task handlers.

use planboard_core::error::CoreError;
use planboard_db::models::status::WorkStatus;
use serde::Deserialize;

use crate::error::AppError;

/// `?name=` for the project name search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

/// `?status=` for the status-only update endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct StatusParams {
    pub status: Option<String>,
}

impl StatusParams {
    /// Resolve the requested status from the query string, falling back to
    /// a JSON body of the form `{"status": "..."}`.
    ///
    /// Returns `Ok(None)` when neither carries a status; the service turns
    /// that into its own "required" error. An unknown code is a business
    /// error.
    pub fn resolve(self, body: &[u8]) -> Result<Option<WorkStatus>, AppError> {
        let raw = match self.status {
            Some(status) => Some(status),
            None if body.iter().all(u8::is_ascii_whitespace) => None,
            None => {
                let params: StatusParams = serde_json::from_slice(body)
                    .map_err(|e| AppError::BadRequest(format!("Invalid status body: {e}")))?;
                params.status
            }
        };
        raw.map(|value| parse_status(&value)).transpose()
    }
}

/// Parse a status code, reporting unknown values as a business error.
pub fn parse_status(value: &str) -> Result<WorkStatus, AppError> {
    value
        .trim()
        .parse::<WorkStatus>()
        .map_err(|e| AppError::Core(CoreError::Business(e.to_string())))
}
