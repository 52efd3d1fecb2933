use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8200";
pub const DEFAULT_TOKEN: &str = "linq-demo-token";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClientConfig {
    pub api: Option<ApiConfig>,
    pub auth: Option<AuthConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: Some(ApiConfig::default()),
            auth: Some(AuthConfig::default()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    pub default_token: Option<String>,
    #[serde(default)]
    pub tokens: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_token: Some(DEFAULT_TOKEN.to_string()),
            tokens: shared_types::DEMO_TOKENS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl ClientConfig {
    /// Loads the user config, writing a default file on first use. A config
    /// file that cannot be created or read falls back to the built-in defaults.
    pub fn load_or_default() -> Self {
        Self::load_or_default_at(&get_config_path())
    }

    pub fn load_or_default_at(config_path: &Path) -> Self {
        match Self::load_at(config_path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", config_path);
                config
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load config at {:?}, using defaults: {}",
                    config_path,
                    e
                );
                Self::default()
            }
        }
    }

    fn load_at(config_path: &Path) -> Result<Self, ConfigError> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            let default_config = r#"
[api]
base_url = "http://127.0.0.1:8200"

[auth]
# Token preselected when none is given on the command line
default_token = "linq-demo-token"
tokens = ["linq-demo-token", "linq-assessment-token", "linq-sales-engineer"]
"#;
            std::fs::write(config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        Self::load_from(config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?;

        builder.try_deserialize()
    }

    pub fn base_url(&self) -> &str {
        self.api
            .as_ref()
            .map(|api| api.base_url.as_str())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Initial value of the token select. `None` leaves it empty.
    pub fn default_token(&self) -> Option<&str> {
        match &self.auth {
            Some(auth) => auth.default_token.as_deref(),
            None => Some(DEFAULT_TOKEN),
        }
    }

    pub fn tokens(&self) -> Vec<String> {
        match &self.auth {
            Some(auth) if !auth.tokens.is_empty() => auth.tokens.clone(),
            _ => AuthConfig::default().tokens,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api = Some(ApiConfig {
            base_url: base_url.into(),
        });
        self
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("crm-demo").join("client.toml")
    } else {
        PathBuf::from("client.toml")
    }
}
