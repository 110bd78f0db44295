use serde::Serialize;

use crate::{
    error::TestError,
    requests::{ApiResponse, CrudRequest, Transport},
    spec::Specification,
};

const ENDPOINT: &str = "/app/rest/projects";

/// Raw project requests.
///
/// `create` accepts either a `Project` or a `NewProjectDescription` payload;
/// the server distinguishes them by shape.
pub struct UncheckedProject {
    transport: Transport,
}

impl UncheckedProject {
    pub fn new(spec: Specification) -> Self {
        Self {
            transport: Transport::new(spec),
        }
    }
}

impl CrudRequest for UncheckedProject {
    fn create<B: Serialize>(&self, body: &B) -> Result<ApiResponse, TestError> {
        self.transport.post(ENDPOINT, body)
    }

    fn get(&self, id: &str) -> Result<ApiResponse, TestError> {
        self.transport.get(&format!("{ENDPOINT}/id:{id}"))
    }

    /// The suite exercises no project update endpoint.
    fn update<B: Serialize>(&self, _id: &str, _body: &B) -> Result<ApiResponse, TestError> {
        Err(TestError::Unsupported {
            entity: "project",
            operation: "update",
        })
    }

    fn delete(&self, id: &str) -> Result<ApiResponse, TestError> {
        self.transport.delete(&format!("{ENDPOINT}/id:{id}"))
    }
}
