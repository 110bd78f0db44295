use reqwest::StatusCode;
use serde::Serialize;

use crate::{
    error::TestError,
    model::User,
    requests::{unchecked::UncheckedUser, CrudRequest},
    spec::Specification,
};

/// User requests that must succeed. Users are located by username.
pub struct CheckedUser {
    unchecked: UncheckedUser,
}

impl CheckedUser {
    pub fn new(spec: Specification) -> Self {
        Self {
            unchecked: UncheckedUser::new(spec),
        }
    }

    /// Create a user and return the server's view of it.
    ///
    /// # Panics
    /// Panics with the observed status and body on any non-200 response.
    pub fn create<B: Serialize>(&self, body: &B) -> Result<User, TestError> {
        self.unchecked
            .create(body)?
            .assert_status(StatusCode::OK)
            .json()
    }

    /// Fetch a user by username.
    ///
    /// # Panics
    /// Panics with the observed status and body on any non-200 response.
    pub fn get(&self, username: &str) -> Result<User, TestError> {
        self.unchecked
            .get(username)?
            .assert_status(StatusCode::OK)
            .json()
    }

    /// Always panics: the suite exercises no user update endpoint, and a
    /// checked call against missing coverage must fail loudly.
    pub fn update<B: Serialize>(&self, _username: &str, _body: &B) -> User {
        panic!("update is not supported for users");
    }

    /// Delete a user by username and return the confirmation payload.
    ///
    /// # Panics
    /// Panics with the observed status and body on any non-200 response.
    pub fn delete(&self, username: &str) -> Result<String, TestError> {
        Ok(self
            .unchecked
            .delete(username)?
            .assert_status(StatusCode::OK)
            .into_body())
    }
}
