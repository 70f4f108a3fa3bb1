use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

impl Default for PingResponse {
    fn default() -> Self {
        Self { message: "pong".to_string() }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self { error: error.to_string() }
    }
}
