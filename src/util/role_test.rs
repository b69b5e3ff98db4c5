use super::*;
use crate::net::types::{RoleField, User};

fn user_with_role_type(role_type: &str) -> User {
    User { role_type: Some(role_type.to_owned()), ..User::default() }
}

fn user_with_role_name(role_name: &str) -> User {
    User { role: Some(RoleField::Named { role_name: role_name.to_owned() }), ..User::default() }
}

fn user_with_plain_role(role: &str) -> User {
    User { role: Some(RoleField::Plain(role.to_owned())), ..User::default() }
}

// =============================================================
// Three representations, one role
// =============================================================

#[test]
fn all_three_representations_agree() {
    assert_eq!(normalize_role(Some(&user_with_role_type("team_lead"))), Role::TeamLead);
    assert_eq!(normalize_role(Some(&user_with_role_name("Team Lead"))), Role::TeamLead);
    assert_eq!(normalize_role(Some(&user_with_plain_role("team lead"))), Role::TeamLead);
}

#[test]
fn role_type_takes_precedence_over_role() {
    let user = User {
        role_type: Some("employee".to_owned()),
        role: Some(RoleField::Plain("admin".to_owned())),
        ..User::default()
    };
    assert_eq!(normalize_role(Some(&user)), Role::Employee);
}

#[test]
fn case_and_underscores_are_irrelevant() {
    assert_eq!(normalize_role(Some(&user_with_plain_role("SUPER_ADMIN"))), Role::SuperAdmin);
    assert_eq!(normalize_role(Some(&user_with_role_name("Super Admin"))), Role::SuperAdmin);
    assert_eq!(normalize_role(Some(&user_with_role_type("HR"))), Role::Hr);
}

// =============================================================
// Missing and unrecognized input
// =============================================================

#[test]
fn missing_user_is_unknown() {
    assert_eq!(normalize_role(None), Role::Unknown);
}

#[test]
fn user_without_any_role_is_unknown() {
    assert_eq!(normalize_role(Some(&User::default())), Role::Unknown);
}

#[test]
fn unrecognized_label_is_unknown() {
    assert_eq!(normalize_role(Some(&user_with_plain_role("wizard"))), Role::Unknown);
    assert_eq!(normalize_role(Some(&user_with_role_type(""))), Role::Unknown);
}

// =============================================================
// Capability flags
// =============================================================

#[test]
fn admin_like_covers_admin_hr_and_super_admin() {
    assert!(Role::Admin.is_admin_like());
    assert!(Role::Hr.is_admin_like());
    assert!(Role::SuperAdmin.is_admin_like());
    assert!(!Role::Manager.is_admin_like());
    assert!(!Role::Employee.is_admin_like());
}

#[test]
fn employee_like_covers_employee_and_team_lead() {
    assert!(Role::Employee.is_employee_like());
    assert!(Role::TeamLead.is_employee_like());
    assert!(!Role::Admin.is_employee_like());
}

#[test]
fn manager_carries_neither_capability() {
    assert!(!Role::Manager.is_admin_like());
    assert!(!Role::Manager.is_employee_like());
}

// =============================================================
// Tags
// =============================================================

#[test]
fn tags_are_lowercase_and_space_delimited() {
    assert_eq!(Role::SuperAdmin.tag(), "super admin");
    assert_eq!(Role::TeamLead.tag(), "team lead");
    assert_eq!(Role::Unknown.tag(), "unknown");
}

#[test]
fn tags_round_trip_through_from_label() {
    for role in [Role::SuperAdmin, Role::Admin, Role::Hr, Role::TeamLead, Role::Manager, Role::Employee] {
        assert_eq!(Role::from_label(role.tag()), role);
    }
}
