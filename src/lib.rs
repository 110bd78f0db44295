pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod requests;
pub mod role;
pub mod soft;
pub mod spec;
pub mod storage;

pub use config::Config;
pub use error::TestError;
pub use soft::SoftAssertions;
pub use spec::{Specification, Specifications};
pub use storage::TestDataStorage;

pub mod prelude {
    pub use crate::{
        generator::{self, generate_roles},
        model::{BuildType, NewProjectDescription, Project, TestData, User},
        requests::{CheckedRequests, CrudRequest, UncheckedRequests},
        role::{scope, Role},
        Config, SoftAssertions, Specifications, TestDataStorage, TestError,
    };
}
