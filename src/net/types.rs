//! Wire DTOs for the REST backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON envelope and payload shapes.
//! Tenant deployments drift, so optional fields default instead of failing
//! deserialization; the one deliberately strict spot is the envelope
//! handling in `state::auth`, which rejects unknown auth payload shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Standard response envelope returned by every backend endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the backend treated the request as successful.
    #[serde(default)]
    pub success: bool,
    /// Operation payload; shape depends on the endpoint.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// Human-readable outcome message, when supplied.
    #[serde(default)]
    pub message: Option<String>,
    /// Structured field-validation failures, when supplied.
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
}

/// A single field-level validation failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending request field.
    #[serde(default)]
    pub field: String,
    /// Human-readable description of the failure.
    #[serde(default)]
    pub message: String,
}

/// Access/refresh token pair issued on registration and token refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer token attached to every authenticated call.
    #[serde(rename = "accessToken")]
    pub access_token: String,
    /// Long-lived token exchanged for fresh access tokens.
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// The `role` field in whichever of its two wire shapes the backend used.
///
/// Some endpoints send a bare string, others a role record carrying a
/// display name. `role_type` on [`User`] is the third encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleField {
    /// Role record carrying a human-readable name, e.g. `{"role_name": "Team Lead"}`.
    Named {
        /// Display name of the role.
        role_name: String,
    },
    /// Bare role string, e.g. `"admin"`.
    Plain(String),
}

/// An authenticated user merged with their organization snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Polymorphic role payload; `role_type` wins when both are present.
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: Option<RoleField>,
    /// Alternative snake_case role enumeration, e.g. `"team_lead"`.
    #[serde(default)]
    pub role_type: Option<String>,
    /// Organization the user belongs to, when denormalized into the payload.
    #[serde(default)]
    pub organization: Option<Organization>,
}

impl User {
    /// Display name for headers and lists.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Tenant organization snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique organization identifier.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Current subscription plan name, when exposed.
    #[serde(default)]
    pub subscription_plan: Option<String>,
    /// Subscription standing, e.g. `"active"` or `"trial"`.
    #[serde(default)]
    pub subscription_status: Option<String>,
}

/// An in-app notification row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    /// Whether the user has already seen this notification.
    #[serde(default)]
    pub read: bool,
    /// ISO 8601 creation timestamp, when supplied.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One attendance log row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLog {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub employee_name: String,
    /// ISO 8601 date of the working day.
    #[serde(default)]
    pub date: String,
    /// Clock-in time, absent while the day is open.
    #[serde(default)]
    pub check_in: Option<String>,
    /// Clock-out time, absent until the day is closed.
    #[serde(default)]
    pub check_out: Option<String>,
    /// Day classification, e.g. `"present"`, `"late"`, `"absent"`.
    #[serde(default)]
    pub status: String,
}

/// A leave request row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub leave_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// Approval state, e.g. `"pending"`, `"approved"`, `"rejected"`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// An uploaded document row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// Aggregate counters for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    #[serde(default)]
    pub employees: i64,
    #[serde(default)]
    pub present_today: i64,
    #[serde(default)]
    pub pending_leaves: i64,
    #[serde(default)]
    pub open_onboardings: i64,
}

/// Aggregate counters for the employee dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    #[serde(default)]
    pub present_days: i64,
    #[serde(default)]
    pub leave_balance: i64,
    #[serde(default)]
    pub pending_requests: i64,
}

/// Absorb any unrecognized `role` shape as absent instead of failing the
/// whole user payload.
fn deserialize_role<'de, D>(deserializer: D) -> Result<Option<RoleField>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value::<RoleField>(value).ok())
}
