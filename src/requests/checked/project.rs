use reqwest::StatusCode;
use serde::Serialize;

use crate::{
    error::TestError,
    model::Project,
    requests::{unchecked::UncheckedProject, CrudRequest},
    spec::Specification,
};

/// Project requests that must succeed.
pub struct CheckedProject {
    unchecked: UncheckedProject,
}

impl CheckedProject {
    pub fn new(spec: Specification) -> Self {
        Self {
            unchecked: UncheckedProject::new(spec),
        }
    }

    /// Create a project and return the server's view of it.
    ///
    /// Accepts either a `Project` or a `NewProjectDescription` payload.
    ///
    /// # Panics
    /// Panics with the observed status and body on any non-200 response.
    pub fn create<B: Serialize>(&self, body: &B) -> Result<Project, TestError> {
        self.unchecked
            .create(body)?
            .assert_status(StatusCode::OK)
            .json()
    }

    /// Fetch a project by id.
    ///
    /// # Panics
    /// Panics with the observed status and body on any non-200 response.
    pub fn get(&self, id: &str) -> Result<Project, TestError> {
        self.unchecked.get(id)?.assert_status(StatusCode::OK).json()
    }

    /// Always panics: the suite exercises no project update endpoint, and a
    /// checked call against missing coverage must fail loudly.
    pub fn update<B: Serialize>(&self, _id: &str, _body: &B) -> Project {
        panic!("update is not supported for projects");
    }

    /// Delete a project by id and return the server's confirmation payload.
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
