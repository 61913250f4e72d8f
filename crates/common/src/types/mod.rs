use serde::{Deserialize, Serialize};

/// Body of the liveness probe.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pong {
    pub message: String,
}

impl Pong {
    pub fn new() -> Self {
        Self { message: "pong".into() }
    }
}

impl Default for Pong {
    fn default() -> Self { Self::new() }
}

/// Success envelope: `{"data": T}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Failure envelope: `{"error": "<message>"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
