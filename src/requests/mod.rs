//! Request layers over the server's REST API.
//!
//! Two layers share one transport. The unchecked layer
//! ([`unchecked`]) maps create/get/update/delete onto HTTP calls and hands
//! back the raw outcome for the caller to assert on; that is how tests
//! probe failure paths. The checked layer ([`checked`]) wraps it, requires
//! success, and returns typed entities; that is how tests build up state
//! that simply must exist. [`CheckedRequests`]/[`UncheckedRequests`] bundle
//! one request type per entity so a test acting as one identity reaches
//! everything through a single value.

pub mod checked;
pub mod unchecked;

use reqwest::{
    blocking::Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{error::TestError, spec::Specification};

pub use checked::CheckedRequests;
pub use unchecked::UncheckedRequests;

/// The raw outcome of one HTTP call: status plus full body text.
///
/// Returned by the unchecked layer regardless of outcome; `Err` is reserved
/// for transport failures. Assertion helpers panic so that a failed
/// expectation stops the current test with the observed status and body in
/// the message.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Deserialize the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TestError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Require an exact status code.
    ///
    /// # Panics
    /// Panics with the observed status and body when the status differs.
    pub fn assert_status(self, expected: StatusCode) -> Self {
        if self.status != expected {
            panic!(
                "expected status {expected}, got {status}; body: {body}",
                status = self.status,
                body = self.body
            );
        }
        self
    }

    /// Require the body to contain a fragment, typically a server validation
    /// message used as a test oracle.
    ///
    /// # Panics
    /// Panics with the full body when the fragment is absent.
    pub fn assert_body_contains(self, needle: &str) -> Self {
        if !self.body.contains(needle) {
            panic!(
                "expected body to contain {needle:?}; body: {body}",
                body = self.body
            );
        }
        self
    }

    /// Take the body text, consuming the response.
    pub fn into_body(self) -> String {
        self.body
    }
}

/// The create/get/update/delete contract every unchecked request type
/// implements.
///
/// `create` and `update` are generic over the payload so alternate creation
/// bodies (e.g. a from-scratch project description) go through the same seam.
/// `get`/`delete` take the entity's plain identifier; each implementation
/// builds the locator the server expects from it.
pub trait CrudRequest {
    fn create<B: Serialize>(&self, body: &B) -> Result<ApiResponse, TestError>;
    fn get(&self, id: &str) -> Result<ApiResponse, TestError>;
    fn update<B: Serialize>(&self, id: &str, body: &B) -> Result<ApiResponse, TestError>;
    fn delete(&self, id: &str) -> Result<ApiResponse, TestError>;
}

/// Shared transport bound to one specification.
///
/// Owns the HTTP client and applies the specification's base URL, content
/// negotiation, credentials, and logging toggle to every call.
pub(crate) struct Transport {
    spec: Specification,
    client: Client,
}

impl Transport {
    pub(crate) fn new(spec: Specification) -> Self {
        Self {
            spec,
            client: Client::new(),
        }
    }

    fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, TestError> {
        let url = format!("{}{}", self.spec.base_url, path);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(header) = self.spec.authorization_header() {
            request = request.header(AUTHORIZATION, header);
        }

        if let Some(body) = body {
            if self.spec.log_requests {
                debug!(%method, %url, %body, "issuing request");
            }
            request = request.body(body);
        } else if self.spec.log_requests {
            debug!(%method, %url, "issuing request");
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if self.spec.log_requests {
            debug!(%status, %body, "received response");
        }

        Ok(ApiResponse { status, body })
    }

    pub(crate) fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, TestError> {
        self.execute(Method::POST, path, Some(serde_json::to_string(body)?))
    }

    pub(crate) fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, TestError> {
        self.execute(Method::PUT, path, Some(serde_json::to_string(body)?))
    }

    pub(crate) fn get(&self, path: &str) -> Result<ApiResponse, TestError> {
        self.execute(Method::GET, path, None)
    }

    pub(crate) fn delete(&self, path: &str) -> Result<ApiResponse, TestError> {
        self.execute(Method::DELETE, path, None)
    }
}
