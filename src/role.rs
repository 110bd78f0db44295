//! Server role identifiers and role-scope locators.

use serde::{Deserialize, Serialize};

/// Roles the server's RBAC model assigns to users.
///
/// Serialized with the server's own identifiers (`SYSTEM_ADMIN`, ...), which
/// is what the `roleId` field of a role assignment carries on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SystemAdmin,
    ProjectAdmin,
    ProjectDeveloper,
    ProjectViewer,
    AgentManager,
}

/// Role-scope locator strings.
///
/// A role assignment is either global or scoped to one project; the server
/// encodes the distinction in a short locator string.
pub mod scope {
    /// Scope covering the whole server.
    pub const GLOBAL: &str = "g";

    /// Scope covering a single project.
    pub fn project(project_id: &str) -> String {
        format!("p:{project_id}")
    }
}
