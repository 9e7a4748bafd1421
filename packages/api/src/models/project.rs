//! Project records, their sub-resources, and the bodies used to change them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dates::option_date;
use super::user::UserRef;
use crate::query::{Params, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Pending,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub const SELECTABLE: [ProjectStatus; 5] = [
        ProjectStatus::Pending,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::OnHold => "On hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
            ProjectStatus::Unknown => "Unknown",
        }
    }
}

/// Project row as listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub client_status: Option<String>,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub team_lead: Option<UserRef>,
    #[serde(default)]
    pub team: Vec<UserRef>,
    #[serde(default)]
    pub group: Option<ProjectGroupRef>,
    #[serde(default, deserialize_with = "option_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "option_date")]
    pub deadline: Option<NaiveDate>,
}

impl Project {
    pub fn outstanding(&self) -> f64 {
        (self.budget - self.amount_paid).max(0.0)
    }
}

/// Compact project reference embedded in tasks and reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectGroupRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(alias = "_id")]
    pub id: String,
    pub amount: f64,
    #[serde(default, deserialize_with = "option_date")]
    pub paid_on: Option<NaiveDate>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "option_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserRef>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl TimeEntry {
    pub fn minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Full project payload for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}

impl ProjectDetail {
    pub fn total_minutes(&self) -> i64 {
        self.time_entries.iter().map(TimeEntry::minutes).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGroup {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project_count: u32,
}

/// Create/edit body for a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub client_name: String,
    pub budget: f64,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub group_id: Option<String>,
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            client_name: project.client_name.clone().unwrap_or_default(),
            budget: project.budget,
            status: project.status,
            start_date: project.start_date,
            deadline: project.deadline,
            group_id: project.group.as_ref().map(|g| g.id.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub amount: f64,
    pub paid_on: Option<NaiveDate>,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDraft {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub completed: bool,
}

impl From<&Milestone> for MilestoneDraft {
    fn from(milestone: &Milestone) -> Self {
        Self {
            title: milestone.title.clone(),
            due_date: milestone.due_date,
            amount: milestone.amount,
            completed: milestone.completed,
        }
    }
}

/// Time spent on a task or project, as entered in the time-logging modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLogDraft {
    pub task_id: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStatusDraft {
    pub client_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailsDraft {
    pub description: String,
    pub requirements: String,
    pub repository_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAssignmentDraft {
    pub member_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGroupDraft {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub group_id: Option<String>,
}

impl QueryParams for ProjectFilter {
    fn query_params(&self) -> Vec<(String, String)> {
        Params::new()
            .wire("status", self.status.as_ref())
            .opt("group", self.group_id.as_deref())
            .into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_detail_flattens_row() {
        let detail: ProjectDetail = serde_json::from_str(
            r#"{
                "_id": "p1",
                "name": "Website",
                "status": "in-progress",
                "budget": 1000,
                "amountPaid": 250,
                "deadline": "2024-06-30T00:00:00.000Z",
                "payments": [{"_id": "pay1", "amount": 250, "paidOn": "2024-01-10"}],
                "timeEntries": [{
                    "_id": "t1",
                    "startTime": "2024-01-10T09:00:00Z",
                    "endTime": "2024-01-10T10:30:00Z"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(detail.project.status, ProjectStatus::InProgress);
        assert_eq!(detail.project.outstanding(), 750.0);
        assert_eq!(detail.project.deadline, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(detail.payments.len(), 1);
        assert_eq!(detail.total_minutes(), 90);
    }

    #[test]
    fn test_unknown_status_tolerated() {
        let project: Project =
            serde_json::from_str(r#"{"id": "p", "name": "n", "status": "archived"}"#).unwrap();
        assert_eq!(project.status, ProjectStatus::Unknown);
    }

    #[test]
    fn test_draft_seeded_from_project() {
        let project: Project = serde_json::from_str(
            r#"{"id": "p", "name": "CRM", "clientName": "Acme", "budget": 500, "group": {"_id": "g1", "name": "Web"}}"#,
        )
        .unwrap();
        let draft = ProjectDraft::from(&project);
        assert_eq!(draft.name, "CRM");
        assert_eq!(draft.client_name, "Acme");
        assert_eq!(draft.group_id.as_deref(), Some("g1"));
    }

    #[test]
    fn test_filter_params() {
        let filter = ProjectFilter {
            status: Some(ProjectStatus::OnHold),
            group_id: None,
        };
        assert_eq!(
            filter.query_params(),
            vec![("status".to_string(), "on-hold".to_string())]
        );
    }
}
