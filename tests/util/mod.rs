//! Shared harness for the API tests.
//!
//! Stands up a mock server playing the part of the TeamCity REST API and
//! wires the kit's configuration at it. Mock helpers match on the
//! `Authorization` header so every test also verifies which identity a call
//! went out as.

use std::sync::Once;

use mockito::{Matcher, Mock, ServerGuard};
use serde::Serialize;
use teamcity_test_kit::{Config, Specification, Specifications, TestDataStorage};

static TRACING: Once = Once::new();

/// Route the kit's request/response logging into test output, honoring
/// `RUST_LOG`.
fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Super-user token configured into every test server.
pub const SUPERUSER_TOKEN: &str = "superuser_token";

pub const USERS: &str = "/app/rest/users";
pub const PROJECTS: &str = "/app/rest/projects";
pub const BUILD_TYPES: &str = "/app/rest/buildTypes";

/// One mock server plus the per-test state the kit hands to test authors.
pub struct TestServer {
    pub server: ServerGuard,
    pub specs: Specifications,
    pub storage: TestDataStorage,
}

impl TestServer {
    pub fn new() -> Self {
        init_tracing();
        let server = mockito::Server::new();
        let specs = Specifications::new(Config::new(server.url(), SUPERUSER_TOKEN));

        Self {
            server,
            specs,
            storage: TestDataStorage::new(),
        }
    }

    /// Header matcher for the identity behind a specification.
    ///
    /// Anonymous specifications must send no `Authorization` header at all.
    fn auth_matcher(spec: &Specification) -> Matcher {
        match spec.authorization_header() {
            Some(value) => Matcher::Exact(value),
            None => Matcher::Missing,
        }
    }

    /// Mock a successful creation: POST on `path` as the given identity,
    /// answered with 200 and the given JSON body.
    pub fn mock_create_ok<T: Serialize>(
        &mut self,
        path: &str,
        spec: &Specification,
        response: &T,
    ) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("authorization", Self::auth_matcher(spec))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(response).unwrap())
            .create()
    }

    /// Mock a rejected creation: POST on `path` as the given identity,
    /// answered with `status` and a plain-text server message.
    pub fn mock_create_error(
        &mut self,
        path: &str,
        spec: &Specification,
        status: usize,
        message: &str,
    ) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("authorization", Self::auth_matcher(spec))
            .with_status(status)
            .with_body(message)
            .create()
    }

    /// Mock a successful GET on `path`, answered with the given JSON body.
    pub fn mock_get_ok<T: Serialize>(
        &mut self,
        path: &str,
        spec: &Specification,
        response: &T,
    ) -> Mock {
        self.server
            .mock("GET", path)
            .match_header("authorization", Self::auth_matcher(spec))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(response).unwrap())
            .create()
    }

    /// Mock a failing GET on `path`, answered with `status` and a message.
    pub fn mock_get_error(
        &mut self,
        path: &str,
        spec: &Specification,
        status: usize,
        message: &str,
    ) -> Mock {
        self.server
            .mock("GET", path)
            .match_header("authorization", Self::auth_matcher(spec))
            .with_status(status)
            .with_body(message)
            .create()
    }

    /// Mock a successful DELETE on `path`, answered with a confirmation body.
    pub fn mock_delete_ok(&mut self, path: &str, spec: &Specification, body: &str) -> Mock {
        self.server
            .mock("DELETE", path)
            .match_header("authorization", Self::auth_matcher(spec))
            .with_status(200)
            .with_body(body)
            .create()
    }
}
