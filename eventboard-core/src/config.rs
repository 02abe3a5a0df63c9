//! Board configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BoardError, BoardResult};
use crate::form::FEEDBACK_TTL;
use crate::pagination::{DEFAULT_PAGE_SIZE, Paginator};

/// The organization's spreadsheet web app.
pub static DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbyeXctRmbj5DCCOqC9gA7B7tJVRxMA-N8r9lcbZjE48KR0QHacLmFStMPKthXZpuD11/exec";

static DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Feedback lines stay up for at most a day.
pub const MAX_FEEDBACK_SECS: u64 = 24 * 60 * 60;

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_feedback_secs() -> u64 {
    FEEDBACK_TTL.as_secs()
}

/// Configuration at ~/.config/eventboard/config.toml
///
/// Every key can be overridden with an `EVENTBOARD_`-prefixed environment
/// variable, e.g. `EVENTBOARD_PAGE_SIZE=9`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_feedback_secs")]
    pub feedback_secs: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            endpoint: default_endpoint(),
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
            feedback_secs: default_feedback_secs(),
        }
    }
}

impl BoardConfig {
    pub fn config_path() -> BoardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BoardError::Config("Could not determine config directory".into()))?
            .join("eventboard");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> BoardResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path` (which may not exist) layered with the environment.
    pub fn load_from(path: &Path) -> BoardResult<Self> {
        let config: BoardConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("EVENTBOARD").try_parsing(true))
            .build()
            .map_err(|e| BoardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BoardError::Config(e.to_string()))?;

        config.validate()
    }

    fn validate(self) -> BoardResult<Self> {
        if self.page_size == 0 {
            return Err(BoardError::Config("page_size must be at least 1".into()));
        }
        if self.feedback_secs > MAX_FEEDBACK_SECS {
            return Err(BoardError::Config(format!(
                "feedback_secs must be at most {MAX_FEEDBACK_SECS}, got {}",
                self.feedback_secs
            )));
        }
        Ok(self)
    }

    pub fn paginator(&self) -> BoardResult<Paginator> {
        Paginator::new(self.page_size)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn feedback_ttl(&self) -> Duration {
        Duration::from_secs(self.feedback_secs)
    }

    /// Create a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> BoardResult<()> {
        let contents = format!(
            "\
# eventboard configuration

# Spreadsheet web app serving events and receiving proposals:
# endpoint = \"{DEFAULT_ENDPOINT}\"

# Event cards per page:
# page_size = {DEFAULT_PAGE_SIZE}

# Give up on the endpoint after this many seconds:
# request_timeout_secs = {DEFAULT_REQUEST_TIMEOUT_SECS}

# Seconds a submission message stays on screen:
# feedback_secs = {}
",
            FEEDBACK_TTL.as_secs()
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> BoardResult<String> {
        toml::to_string_pretty(self).map_err(|e| BoardError::Config(e.to_string()))
    }
}
