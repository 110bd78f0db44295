//! Raw request types: one per entity, no assertions.
//!
//! Each type maps the CRUD contract onto the entity's endpoint and returns
//! the full response for the caller to assert on. This is the seam both the
//! checked layer and expect-failure tests go through.

mod build_type;
mod project;
mod user;

pub use build_type::UncheckedBuildType;
pub use project::UncheckedProject;
pub use user::UncheckedUser;

use crate::spec::Specification;

/// One unchecked request type per entity, bound to a single specification.
pub struct UncheckedRequests {
    pub users: UncheckedUser,
    pub projects: UncheckedProject,
    pub build_types: UncheckedBuildType,
}

impl UncheckedRequests {
    pub fn new(spec: Specification) -> Self {
        Self {
            users: UncheckedUser::new(spec.clone()),
            projects: UncheckedProject::new(spec.clone()),
            build_types: UncheckedBuildType::new(spec),
        }
    }
}
