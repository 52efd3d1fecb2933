use serde::{Deserialize, Serialize};

pub mod contact;

pub use contact::{ContactCreatedResponse, ContactInput};

/// Tokens the demo backend accepts without a signed JWT.
pub const DEMO_TOKENS: [&str; 3] = [
    "linq-demo-token",
    "linq-assessment-token",
    "linq-sales-engineer",
];

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}
