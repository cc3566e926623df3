//! API data models

use serde::{Deserialize, Serialize};

/// Error body returned for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Query parameters for the search route
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    /// Accepted for interface compatibility, ignored by the kids surface
    pub filter: Option<String>,
}

/// Query parameters for the feed routes
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub region: Option<String>,
}
