//! Entity records exchanged with the server's REST API.
//!
//! Every type here is a plain serde record carrying only the fields the test
//! suite populates or asserts on. Optional fields are omitted from the
//! payload when unset (never sent as `null`), so server-side defaulting,
//! such as deriving a project id from its name, is exercised for real.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A user account, also the identity behind per-user authenticated calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    // The server never echoes the password back, so it defaults to empty when
    // decoding a response.
    #[serde(default)]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Roles>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            roles: None,
        }
    }
}

/// Wire wrapper around a user's role assignments.
///
/// The server nests the list one level deep (`"roles": {"role": [...]}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roles {
    pub role: Vec<RoleAssignment>,
}

/// A single (role, scope) grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub role_id: Role,
    pub scope: String,
}

impl RoleAssignment {
    pub fn new(role_id: Role, scope: impl Into<String>) -> Self {
        Self {
            role_id,
            scope: scope.into(),
        }
    }
}

/// A project, used both as a creation payload and as a reference to an
/// existing project (via `locator`) inside other payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project: Option<Box<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            parent_project: None,
            locator: None,
        }
    }

    /// Reference to an existing project by locator, for use as a parent.
    pub fn by_locator(locator: impl Into<String>) -> Self {
        Self {
            id: None,
            name: String::new(),
            parent_project: None,
            locator: Some(locator.into()),
        }
    }
}

/// Alternate project-creation payload for the from-scratch creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project: Option<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_all_associated_settings: Option<bool>,
}

/// A build configuration owned by a project.
///
/// `project` is required by the server; it is optional here so tests can
/// deliberately omit it and assert the validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
}

impl BuildType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, project: Project) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            project: Some(project),
        }
    }
}

/// One generated, mutually-consistent User/Project/BuildType graph.
///
/// The bundle itself does not enforce creation order; callers must create the
/// project server-side before the build configuration that references it.
#[derive(Debug, Clone, PartialEq)]
pub struct TestData {
    pub user: User,
    pub project: Project,
    pub build_type: BuildType,
}
