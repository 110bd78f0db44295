//! Request specifications: one HTTP-call configuration per identity.
//!
//! A `Specification` bundles the base URL, content negotiation, and
//! credentials for one identity. `Specifications` is the factory tests use
//! to obtain them; building a specification performs no I/O and cannot fail.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{config::Config, model::User};

/// Credentials attached to a specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    Anonymous,
    Basic { username: String, password: String },
}

/// An HTTP-call configuration bound to one identity.
#[derive(Debug, Clone)]
pub struct Specification {
    pub base_url: String,
    pub auth: Auth,
    /// When set, the request layer emits `tracing` debug events for every
    /// request and response issued under this specification.
    pub log_requests: bool,
}

impl Specification {
    /// Value for the `Authorization` header, if this identity carries
    /// credentials.
    pub fn authorization_header(&self) -> Option<String> {
        match &self.auth {
            Auth::Anonymous => None,
            Auth::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                Some(format!("Basic {encoded}"))
            }
        }
    }

    pub fn with_request_logging(mut self) -> Self {
        self.log_requests = true;
        self
    }
}

/// Factory for the three authentication modes the suite uses.
pub struct Specifications {
    config: Config,
}

impl Specifications {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn spec(&self, auth: Auth) -> Specification {
        Specification {
            base_url: self.config.base_url.clone(),
            auth,
            log_requests: false,
        }
    }

    /// Specification with no credentials at all.
    pub fn anonymous_spec(&self) -> Specification {
        self.spec(Auth::Anonymous)
    }

    /// Specification for the server's super user.
    ///
    /// The super user authenticates with an empty username and the configured
    /// token as the basic-auth password.
    pub fn super_user_spec(&self) -> Specification {
        self.spec(Auth::Basic {
            username: String::new(),
            password: self.config.superuser_token.clone(),
        })
    }

    /// Specification authenticating as a generated user.
    pub fn auth_spec(&self, user: &User) -> Specification {
        self.spec(Auth::Basic {
            username: user.username.clone(),
            password: user.password.clone(),
        })
    }
}
