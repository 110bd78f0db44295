//! Random value generation and test-data bundle construction.
//!
//! Everything here is pure in-memory construction, mirroring the factory
//! style of fixture code: no I/O, no shared counters. Uniqueness relies on
//! entropy: 10 alphanumeric characters carry just under 60 bits, which makes
//! collisions negligible for the volume of a single test run.

use rand::{distr::Alphanumeric, Rng};

use crate::{
    model::{BuildType, Project, RoleAssignment, Roles, TestData, User},
    role::Role,
};

/// Default length for generated names and id suffixes.
pub const DEFAULT_LENGTH: usize = 10;

/// Prefix for generated entity ids.
///
/// The server requires ids to start with a letter; the prefix guarantees that
/// regardless of the random suffix.
const ID_PREFIX: &str = "test_";

/// Produce a random alphanumeric string of the given length.
pub fn random_string(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Produce a random name of the default length.
pub fn random_name() -> String {
    random_string(DEFAULT_LENGTH)
}

/// Produce a random entity id satisfying the server's id syntax
/// (starts with a letter; letters, digits and underscores only).
pub fn random_id() -> String {
    format!("{ID_PREFIX}{}", random_string(DEFAULT_LENGTH))
}

/// Build a single-assignment role list, for authorization-boundary tests.
///
/// # Arguments
/// - `role` - The role to grant
/// - `scope` - Role-scope locator (`scope::GLOBAL` or `scope::project(id)`)
pub fn generate_roles(role: Role, scope: impl Into<String>) -> Roles {
    Roles {
        role: vec![RoleAssignment::new(role, scope)],
    }
}

/// Generate a fresh, internally-consistent test-data bundle.
///
/// The user starts with no role assignments; tests grant roles explicitly
/// before creating the user server-side. The build configuration's `project`
/// field references the generated project, so the graph is consistent before
/// any HTTP call is made. Ids are assigned up front so tests can assert the
/// server echoes them back.
pub fn generate() -> TestData {
    let user = User::new(random_name(), random_name());
    let project = Project::new(random_id(), random_name());
    let build_type = BuildType::new(random_id(), random_name(), project.clone());

    TestData {
        user,
        project,
        build_type,
    }
}
