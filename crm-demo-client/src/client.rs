use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use shared_types::{ContactCreatedResponse, ContactInput};

use crate::config::ClientConfig;
use crate::display::{
    render, OutputSink, ResultDisplay, CONTACTS_RESULT_ID, CREATE_CONTACT_FORM_ID,
    CREATE_RESULT_ID, GET_TOKEN_ID, HEALTH_RESULT_ID,
};
use crate::error::ClientError;
use crate::form::{AuthToken, ContactForm};

/// Talks to the CRM integration API and turns each response into a
/// [`ResultDisplay`]. One request per call, no retries.
pub struct DemoClient {
    http: Client,
    base_url: String,
}

impl DemoClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base_url(config.base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn submit_contact(&self, input: &ContactInput, token: &AuthToken) -> ResultDisplay {
        tracing::debug!("Creating contact for {}", input.email);

        let request = self
            .http
            .post(self.url("/contacts"))
            .bearer_auth(token.as_str())
            .json(input);

        let result = execute(request).await;
        if let Ok(body) = &result {
            if let Some(created) = created_contact(body) {
                tracing::info!(contact_id = %created.contact_id, "{}", created.message);
            }
        }

        to_display(CREATE_RESULT_ID, result)
    }

    /// Submits the form, renders the outcome, and clears the form on success.
    pub async fn submit_form(&self, form: &mut ContactForm, sink: &dyn OutputSink) -> ResultDisplay {
        tracing::debug!(form = CREATE_CONTACT_FORM_ID, "Submitting form");

        let input = form.to_input();
        let display = self.submit_contact(&input, &form.token()).await;

        render(&display, sink);
        if display.is_success() {
            form.reset();
        }

        display
    }

    pub async fn list_contacts(&self, token: Option<&AuthToken>) -> ResultDisplay {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => {
                tracing::debug!(field = GET_TOKEN_ID, "No token selected");
                return to_display(CONTACTS_RESULT_ID, Err(ClientError::missing_token()));
            }
        };

        tracing::debug!("Listing contacts");

        let request = self
            .http
            .get(self.url("/contacts"))
            .bearer_auth(token.as_str());

        to_display(CONTACTS_RESULT_ID, execute(request).await)
    }

    pub async fn check_health(&self) -> ResultDisplay {
        let request = self.http.get(self.url("/health"));
        to_display(HEALTH_RESULT_ID, execute(request).await)
    }
}

/// Sends the request and returns the JSON body of a successful response.
async fn execute(request: RequestBuilder) -> Result<Value, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        return Err(ClientError::Api { status, body });
    }

    Ok(body)
}

/// Typed view of a create response, when the backend sent its usual shape.
fn created_contact(body: &Value) -> Option<ContactCreatedResponse> {
    serde_json::from_value(body.clone()).ok()
}

fn to_display(target_id: &str, result: Result<Value, ClientError>) -> ResultDisplay {
    let result = result.and_then(|body| Ok(serde_json::to_string_pretty(&body)?));

    match result {
        Ok(text) => {
            tracing::info!("{} succeeded", target_id);
            ResultDisplay::success(target_id, text)
        }
        Err(e) => {
            match e.detail() {
                Some(detail) => tracing::warn!("{} failed: {} ({})", target_id, e, detail),
                None => tracing::warn!("{} failed: {}", target_id, e),
            }
            ResultDisplay::error(target_id, e.to_display_text())
        }
    }
}
