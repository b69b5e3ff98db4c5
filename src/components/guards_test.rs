use super::*;
use crate::components::nav::{ADMIN_HOME, EMPLOYEE_HOME, SUPER_ADMIN_HOME};
use crate::net::types::RoleField;

fn user(role: &str) -> User {
    User { role: Some(RoleField::Plain(role.to_owned())), ..User::default() }
}

// =============================================================
// Checking state
// =============================================================

#[test]
fn loading_always_renders_the_waiting_state() {
    assert_eq!(evaluate_guard(true, None, None), GuardOutcome::Checking);
    let admin = user("admin");
    assert_eq!(
        evaluate_guard(true, Some(&admin), Some(&[AccessClass::SuperAdmin])),
        GuardOutcome::Checking
    );
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn missing_user_redirects_to_login() {
    assert_eq!(evaluate_guard(false, None, None), GuardOutcome::RedirectToLogin);
    assert_eq!(
        evaluate_guard(false, None, Some(&[AccessClass::All])),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn login_redirect_preserves_the_attempted_path() {
    assert_eq!(login_redirect_path("/attendance"), "/login?redirect=/attendance");
}

#[test]
fn login_redirect_skips_root_and_empty_paths() {
    assert_eq!(login_redirect_path("/"), "/login");
    assert_eq!(login_redirect_path(""), "/login");
}

// =============================================================
// Unrestricted routes
// =============================================================

#[test]
fn no_allowed_list_admits_any_authenticated_user() {
    let unknown = User::default();
    assert_eq!(evaluate_guard(false, Some(&unknown), None), GuardOutcome::Allow);
}

// =============================================================
// Restricted routes
// =============================================================

#[test]
fn all_admits_every_authenticated_role() {
    for role in ["super admin", "admin", "hr", "team lead", "manager", "employee", "wizard"] {
        let user = user(role);
        assert_eq!(
            evaluate_guard(false, Some(&user), Some(&[AccessClass::All])),
            GuardOutcome::Allow,
            "role {role} should be admitted by the all class"
        );
    }
}

#[test]
fn team_lead_denied_super_admin_route_lands_on_employee_home() {
    let team_lead = user("team lead");
    assert_eq!(
        evaluate_guard(false, Some(&team_lead), Some(&[AccessClass::SuperAdmin])),
        GuardOutcome::RedirectToRoleHome(EMPLOYEE_HOME)
    );
}

#[test]
fn hr_denied_super_admin_route_lands_on_admin_home() {
    let hr = user("hr");
    assert_eq!(
        evaluate_guard(false, Some(&hr), Some(&[AccessClass::SuperAdmin])),
        GuardOutcome::RedirectToRoleHome(ADMIN_HOME)
    );
}

#[test]
fn super_admin_denied_employee_route_lands_on_super_admin_home() {
    let super_admin = user("super admin");
    assert_eq!(
        evaluate_guard(false, Some(&super_admin), Some(&[AccessClass::Employee])),
        GuardOutcome::RedirectToRoleHome(SUPER_ADMIN_HOME)
    );
}

#[test]
fn manager_denied_restricted_route_lands_on_employee_home() {
    let manager = user("manager");
    assert_eq!(
        evaluate_guard(false, Some(&manager), Some(&[AccessClass::Admin, AccessClass::Employee])),
        GuardOutcome::RedirectToRoleHome(EMPLOYEE_HOME)
    );
}

// =============================================================
// Access classes
// =============================================================

#[test]
fn admin_class_admits_every_admin_like_role() {
    for role in [Role::Admin, Role::Hr, Role::SuperAdmin] {
        assert!(has_access(role, &[AccessClass::Admin]));
    }
    assert!(!has_access(Role::Employee, &[AccessClass::Admin]));
}

#[test]
fn employee_class_admits_team_leads() {
    assert!(has_access(Role::TeamLead, &[AccessClass::Employee]));
    assert!(!has_access(Role::Admin, &[AccessClass::Employee]));
}

#[test]
fn super_admin_class_is_exact() {
    assert!(has_access(Role::SuperAdmin, &[AccessClass::SuperAdmin]));
    assert!(!has_access(Role::Admin, &[AccessClass::SuperAdmin]));
    assert!(!has_access(Role::Hr, &[AccessClass::SuperAdmin]));
}

#[test]
fn empty_allowed_list_denies_everyone() {
    assert!(!has_access(Role::SuperAdmin, &[]));
}
