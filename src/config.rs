//! Target-server configuration for a test run.
//!
//! Every test constructs (or receives) its own `Config`; there is no process
//! global. `from_env` is the usual entry point against a real server, while
//! tests of this crate itself point `new` at a mock server URL.

use crate::error::TestError;

/// Environment variable holding the server's base URL, e.g. `http://localhost:8111`.
pub const BASE_URL_VAR: &str = "TEAMCITY_BASE_URL";

/// Environment variable holding the super-user authentication token.
pub const SUPERUSER_TOKEN_VAR: &str = "TEAMCITY_SUPERUSER_TOKEN";

/// Connection settings for the server under test.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub superuser_token: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>, superuser_token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Paths are joined with a leading slash throughout the request layer.
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            superuser_token: superuser_token.into(),
        }
    }

    /// Load configuration from the environment, honoring a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - Both variables were set
    /// - `Err(TestError::MissingConfig)` - Names the first missing variable
    pub fn from_env() -> Result<Self, TestError> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var(BASE_URL_VAR).map_err(|_| TestError::MissingConfig(BASE_URL_VAR))?;
        let superuser_token = std::env::var(SUPERUSER_TOKEN_VAR)
            .map_err(|_| TestError::MissingConfig(SUPERUSER_TOKEN_VAR))?;

        Ok(Self::new(base_url, superuser_token))
    }
}
