//! Verifying request types: success is asserted, bodies are decoded.
//!
//! Each type wraps the unchecked request of the same entity. A non-200
//! response panics immediately with the observed status and body, since a
//! checked call's entire purpose is "this must succeed". `Err` still means the
//! harness or target server is unreachable, so transport breakage and
//! behavioral mismatch stay distinguishable in test output.

mod build_type;
mod project;
mod user;

pub use build_type::CheckedBuildType;
pub use project::CheckedProject;
pub use user::CheckedUser;

use crate::spec::Specification;

/// One checked request type per entity, bound to a single specification.
///
/// Lets a test acting as one identity create and inspect users, projects,
/// and build configurations through one value.
pub struct CheckedRequests {
    pub users: CheckedUser,
    pub projects: CheckedProject,
    pub build_types: CheckedBuildType,
}

impl CheckedRequests {
    pub fn new(spec: Specification) -> Self {
        Self {
            users: CheckedUser::new(spec.clone()),
            projects: CheckedProject::new(spec.clone()),
            build_types: CheckedBuildType::new(spec),
        }
    }
}
