use shared_types::ContactInput;

/// Opaque bearer credential. An empty token means none was selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AuthToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Raw values of the create-contact form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub notes: String,
    pub token: String,
    default_token: String,
}

impl ContactForm {
    /// Empty form whose token select starts at `default_token`.
    pub fn new(default_token: Option<&str>) -> Self {
        let default_token = default_token.unwrap_or_default().to_string();
        Self {
            token: default_token.clone(),
            default_token,
            ..Default::default()
        }
    }

    pub fn to_input(&self) -> ContactInput {
        ContactInput::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            Some(self.phone.clone()),
            Some(self.company.clone()),
            Some(self.notes.clone()),
        )
    }

    pub fn token(&self) -> AuthToken {
        AuthToken::new(self.token.clone())
    }

    /// Clears every field; the token select goes back to its default.
    pub fn reset(&mut self) {
        *self = Self::new(Some(self.default_token.as_str()));
    }

    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.company.is_empty()
            && self.notes.is_empty()
    }
}
