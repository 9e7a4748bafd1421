//! In-app notifications: the inbox, read state, and sending.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{Role, UserRef};
use crate::query::{Params, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    General,
    Task,
    Project,
    Report,
    Asset,
    Alert,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    pub const SELECTABLE: [NotificationKind; 6] = [
        NotificationKind::General,
        NotificationKind::Task,
        NotificationKind::Project,
        NotificationKind::Report,
        NotificationKind::Asset,
        NotificationKind::Alert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::General => "General",
            NotificationKind::Task => "Task",
            NotificationKind::Project => "Project",
            NotificationKind::Report => "Report",
            NotificationKind::Asset => "Asset",
            NotificationKind::Alert => "Alert",
            NotificationKind::Other => "Other",
        }
    }
}

/// Who a notification is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientMode {
    /// Hand-picked users.
    #[default]
    Specific,
    /// Everyone holding a role.
    Role,
    /// Everyone.
    All,
}

impl RecipientMode {
    pub const ALL: [RecipientMode; 3] = [RecipientMode::Specific, RecipientMode::Role, RecipientMode::All];

    pub fn label(&self) -> &'static str {
        match self {
            RecipientMode::Specific => "Specific users",
            RecipientMode::Role => "Role group",
            RecipientMode::All => "Everyone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadState {
    Read,
    Unread,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub sender: Option<UserRef>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub unread: u64,
    #[serde(default)]
    pub read: u64,
}

/// A user the current session is allowed to notify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
}

impl Recipient {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub recipient_mode: RecipientMode,
    /// User ids, used when `recipient_mode` is `Specific`.
    pub receivers: Vec<String>,
    /// Target role, used when `recipient_mode` is `Role`.
    pub target_role: Option<Role>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReadDraft {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFilter {
    pub kind: Option<NotificationKind>,
    pub state: Option<ReadState>,
}

impl QueryParams for NotificationFilter {
    fn query_params(&self) -> Vec<(String, String)> {
        Params::new()
            .wire("type", self.kind.as_ref())
            .wire("status", self.state.as_ref())
            .flag("unread", self.state == Some(ReadState::Unread))
            .into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_field_is_named_type_on_wire() {
        let n: Notification =
            serde_json::from_str(r#"{"_id": "n1", "title": "Hi", "type": "asset", "isRead": true}"#)
                .unwrap();
        assert_eq!(n.kind, NotificationKind::Asset);
        assert!(n.is_read);

        let body = serde_json::to_value(NotificationDraft {
            title: "t".into(),
            kind: NotificationKind::Alert,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body["type"], "alert");
        assert_eq!(body["recipientMode"], "specific");
    }

    #[test]
    fn test_unread_filter_sets_both_flags() {
        let filter = NotificationFilter {
            kind: None,
            state: Some(ReadState::Unread),
        };
        assert_eq!(
            filter.query_params(),
            vec![
                ("status".to_string(), "unread".to_string()),
                ("unread".to_string(), "true".to_string()),
            ]
        );
    }
}
