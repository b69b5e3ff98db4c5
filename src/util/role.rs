//! Role normalization for the backend's polymorphic role payloads.
//!
//! DESIGN
//! ======
//! Tenants deliver the user's role in three shapes: a bare string, an
//! object carrying `role_name`, or a snake_case `role_type`. Everything
//! downstream (guards, menus, redirects) consumes the closed enum produced
//! here; no other module re-derives role strings.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use crate::net::types::{RoleField, User};

/// Canonical role derived from any of the backend's role encodings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    Admin,
    Hr,
    TeamLead,
    Manager,
    Employee,
    /// Missing or unrecognized role payload.
    #[default]
    Unknown,
}

impl Role {
    /// Canonical lowercase, space-delimited tag.
    pub fn tag(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super admin",
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::TeamLead => "team lead",
            Role::Manager => "manager",
            Role::Employee => "employee",
            Role::Unknown => "unknown",
        }
    }

    /// Parse a role label; case, underscore, and surrounding-space agnostic.
    pub fn from_label(label: &str) -> Role {
        match label.trim().to_lowercase().replace('_', " ").as_str() {
            "super admin" => Role::SuperAdmin,
            "admin" => Role::Admin,
            "hr" => Role::Hr,
            "team lead" => Role::TeamLead,
            "manager" => Role::Manager,
            "employee" => Role::Employee,
            _ => Role::Unknown,
        }
    }

    /// Admin-grade capability: organization-wide management screens.
    pub fn is_admin_like(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin | Role::Hr)
    }

    /// Employee-grade capability: self-service screens.
    pub fn is_employee_like(self) -> bool {
        matches!(self, Role::Employee | Role::TeamLead)
    }
}

/// Derive the canonical role from a user payload.
///
/// Resolution order: `role_type`, then `role.role_name`, then a bare
/// `role` string. Deterministic and side-effect free, so guards may call
/// it on every render.
pub fn normalize_role(user: Option<&User>) -> Role {
    let Some(user) = user else {
        return Role::Unknown;
    };
    if let Some(role_type) = &user.role_type {
        return Role::from_label(role_type);
    }
    match &user.role {
        Some(RoleField::Named { role_name }) => Role::from_label(role_name),
        Some(RoleField::Plain(role)) => Role::from_label(role),
        None => Role::Unknown,
    }
}
