use serde::Serialize;

use crate::{
    error::TestError,
    requests::{ApiResponse, CrudRequest, Transport},
    spec::Specification,
};

const ENDPOINT: &str = "/app/rest/buildTypes";

/// Raw build-configuration requests.
pub struct UncheckedBuildType {
    transport: Transport,
}

impl UncheckedBuildType {
    pub fn new(spec: Specification) -> Self {
        Self {
            transport: Transport::new(spec),
        }
    }
}

impl CrudRequest for UncheckedBuildType {
    fn create<B: Serialize>(&self, body: &B) -> Result<ApiResponse, TestError> {
        self.transport.post(ENDPOINT, body)
    }

    fn get(&self, id: &str) -> Result<ApiResponse, TestError> {
        self.transport.get(&format!("{ENDPOINT}/id:{id}"))
    }

    /// The suite exercises no build-configuration update endpoint.
    fn update<B: Serialize>(&self, _id: &str, _body: &B) -> Result<ApiResponse, TestError> {
        Err(TestError::Unsupported {
            entity: "build configuration",
            operation: "update",
        })
    }

    fn delete(&self, id: &str) -> Result<ApiResponse, TestError> {
        self.transport.delete(&format!("{ENDPOINT}/id:{id}"))
    }
}
