use serde::Serialize;

use crate::{
    error::TestError,
    requests::{ApiResponse, CrudRequest, Transport},
    spec::Specification,
};

const ENDPOINT: &str = "/app/rest/users";

/// Raw user requests. Users are located by username, not by id.
pub struct UncheckedUser {
    transport: Transport,
}

impl UncheckedUser {
    pub fn new(spec: Specification) -> Self {
        Self {
            transport: Transport::new(spec),
        }
    }
}

impl CrudRequest for UncheckedUser {
    fn create<B: Serialize>(&self, body: &B) -> Result<ApiResponse, TestError> {
        self.transport.post(ENDPOINT, body)
    }

    fn get(&self, username: &str) -> Result<ApiResponse, TestError> {
        self.transport.get(&format!("{ENDPOINT}/username:{username}"))
    }

    /// The suite exercises no user update endpoint.
    fn update<B: Serialize>(&self, _username: &str, _body: &B) -> Result<ApiResponse, TestError> {
        Err(TestError::Unsupported {
            entity: "user",
            operation: "update",
        })
    }

    fn delete(&self, username: &str) -> Result<ApiResponse, TestError> {
        self.transport
            .delete(&format!("{ENDPOINT}/username:{username}"))
    }
}
