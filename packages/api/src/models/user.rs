//! # User models
//!
//! ## [`UserInfo`]
//!
//! The identity returned by the session check and by a successful login. The
//! server owns it; the client keeps a transient copy in its session object.
//!
//! - `id`: the server's identifier (also accepted as `_id` or `userId`).
//! - `email`, `name`: profile fields.
//! - `role`: one of [`Role::Admin`], [`Role::Employee`], [`Role::TeamLead`].
//! - `is_active`: deactivated accounts are still returned but cannot act.
//!
//! The helper [`UserInfo::display_name`] returns the user's name or falls back
//! to their email address.
//!
//! ## [`Employee`]
//!
//! A row in the employee and team listings, with the team lead it reports to.
//!
//! ## [`UserRef`]
//!
//! The compact `{id, name, email}` reference embedded in other entities
//! (assignees, authors, senders).

use serde::{Deserialize, Serialize};

/// Roles the dashboard distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "employee")]
    Employee,
    #[serde(rename = "teamlead", alias = "team-lead", alias = "team_lead")]
    TeamLead,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::TeamLead, Role::Employee];

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::TeamLead => "teamlead",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
            Role::TeamLead => "Team Lead",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }

    /// The role a report is forwarded to when its author submits it upward.
    pub fn next_reviewer(&self) -> Option<Role> {
        match self {
            Role::Employee => Some(Role::TeamLead),
            Role::TeamLead => Some(Role::Admin),
            Role::Admin => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_true() -> bool {
    true
}

/// User information for the current session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(alias = "_id", alias = "userId")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Compact user reference embedded in other records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRef {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Employee row in user listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub team_lead: Option<UserRef>,
}

impl Employee {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Login form body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

/// Filter for employee listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub active_only: bool,
}

impl crate::QueryParams for UserFilter {
    fn query_params(&self) -> Vec<(String, String)> {
        crate::Params::new()
            .opt("role", self.role.map(|r| r.as_str()))
            .flag("active", self.active_only)
            .into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_accepts_mongo_id_and_role_aliases() {
        let user: UserInfo = serde_json::from_str(
            r#"{"_id": "u1", "email": "lead@corp.io", "role": "team-lead"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::TeamLead);
        assert!(user.is_active);
        assert_eq!(user.display_name(), "lead@corp.io");
    }

    #[test]
    fn test_role_round_trip_names() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("owner"), None);
    }

    #[test]
    fn test_next_reviewer_chain() {
        assert_eq!(Role::Employee.next_reviewer(), Some(Role::TeamLead));
        assert_eq!(Role::TeamLead.next_reviewer(), Some(Role::Admin));
        assert_eq!(Role::Admin.next_reviewer(), None);
    }

    #[test]
    fn test_user_filter_params() {
        let filter = UserFilter {
            role: Some(Role::Employee),
            active_only: true,
        };
        use crate::QueryParams;
        assert_eq!(
            filter.query_params(),
            vec![
                ("role".to_string(), "employee".to_string()),
                ("active".to_string(), "true".to_string()),
            ]
        );
    }
}
