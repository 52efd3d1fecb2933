use serde::{Deserialize, Serialize};

/// Contact payload accepted by `POST /contacts` and returned by `GET /contacts`.
///
/// Optional fields are always present on the wire: an absent value is sent
/// as `null`, never as an empty string and never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
}

impl ContactInput {
    /// Builds an input, treating empty optional strings as not supplied.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        company: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: non_empty(phone),
            company: non_empty(company),
            notes: non_empty(notes),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Body returned by the backend after a contact was created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCreatedResponse {
    pub success: bool,
    pub contact_id: String,
    pub message: String,
}
