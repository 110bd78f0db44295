use reqwest::StatusCode;
use serde::Serialize;

use crate::{
    error::TestError,
    model::BuildType,
    requests::{unchecked::UncheckedBuildType, CrudRequest},
    spec::Specification,
};

/// Build-configuration requests that must succeed.
pub struct CheckedBuildType {
    unchecked: UncheckedBuildType,
}

impl CheckedBuildType {
    pub fn new(spec: Specification) -> Self {
        Self {
            unchecked: UncheckedBuildType::new(spec),
        }
    }

    /// Create a build configuration and return the server's view of it.
    ///
    /// # Panics
    /// Panics with the observed status and body on any non-200 response.
    pub fn create<B: Serialize>(&self, body: &B) -> Result<BuildType, TestError> {
        self.unchecked
            .create(body)?
            .assert_status(StatusCode::OK)
            .json()
    }

    /// Fetch a build configuration by id.
    ///
    /// # Panics
    /// Panics with the observed status and body on any non-200 response.
    pub fn get(&self, id: &str) -> Result<BuildType, TestError> {
        self.unchecked.get(id)?.assert_status(StatusCode::OK).json()
    }

    /// Always panics: the suite exercises no build-configuration update
    /// endpoint, and a checked call against missing coverage must fail loudly.
    pub fn update<B: Serialize>(&self, _id: &str, _body: &B) -> BuildType {
        panic!("update is not supported for build configurations");
    }

    /// Delete a build configuration by id and return the confirmation payload.
    ///
    /// # Panics
    /// Panics with the observed status and body on any non-200 response.
    pub fn delete(&self, id: &str) -> Result<String, TestError> {
        Ok(self
            .unchecked
            .delete(id)?
            .assert_status(StatusCode::OK)
            .into_body())
    }
}
