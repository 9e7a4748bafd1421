//! Work reports, reviewer feedback, and the hierarchical submission chain.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::dates::option_date;
use super::project::ProjectRef;
use super::user::{Role, UserRef};
use crate::query::{Params, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Project,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::Daily,
        ReportType::Weekly,
        ReportType::Monthly,
        ReportType::Project,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Daily => "Daily",
            ReportType::Weekly => "Weekly",
            ReportType::Monthly => "Monthly",
            ReportType::Project => "Project",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Draft,
    Submitted,
    Reviewed,
    Approved,
    Rejected,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 5] = [
        ReportStatus::Draft,
        ReportStatus::Submitted,
        ReportStatus::Reviewed,
        ReportStatus::Approved,
        ReportStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "Draft",
            ReportStatus::Submitted => "Submitted",
            ReportStatus::Reviewed => "Reviewed",
            ReportStatus::Approved => "Approved",
            ReportStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    #[default]
    Pending,
    Partial,
    Completed,
}

impl CompletionStatus {
    pub const ALL: [CompletionStatus; 3] = [
        CompletionStatus::Pending,
        CompletionStatus::Partial,
        CompletionStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompletionStatus::Pending => "Pending",
            CompletionStatus::Partial => "Partially complete",
            CompletionStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub author: Option<UserRef>,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub report_type: ReportType,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default)]
    pub completion: CompletionStatus,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<UserRef>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default, deserialize_with = "option_date")]
    pub report_date: Option<NaiveDate>,
    #[serde(default)]
    pub feedback: Vec<Feedback>,
    /// Role currently reviewing the report, if it has been submitted upward.
    #[serde(default)]
    pub submitted_to: Option<Role>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Report {
    pub fn is_editable(&self) -> bool {
        matches!(self.status, ReportStatus::Draft | ReportStatus::Rejected)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub title: String,
    pub report_type: ReportType,
    pub content: String,
    pub project_id: Option<String>,
    pub report_date: Option<NaiveDate>,
}

impl From<&Report> for ReportDraft {
    fn from(report: &Report) -> Self {
        Self {
            title: report.title.clone(),
            report_type: report.report_type,
            content: report.content.clone(),
            project_id: report.project.as_ref().map(|p| p.id.clone()),
            report_date: report.report_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionDraft {
    pub completion: CompletionStatus,
}

/// Server-side answer to "may this user file a daily report today".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEligibility {
    pub can_submit_daily: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub report_type: Option<ReportType>,
    pub status: Option<ReportStatus>,
    pub completion: Option<CompletionStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl QueryParams for ReportFilter {
    fn query_params(&self) -> Vec<(String, String)> {
        Params::new()
            .wire("type", self.report_type.as_ref())
            .wire("status", self.status.as_ref())
            .wire("completion", self.completion.as_ref())
            .opt("from", self.from)
            .opt("to", self.to)
            .into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_decodes_with_feedback() {
        let report: Report = serde_json::from_str(
            r#"{
                "_id": "r1",
                "title": "Sprint 4",
                "reportType": "weekly",
                "status": "submitted",
                "submittedTo": "teamlead",
                "feedback": [{"_id": "f1", "message": "Add blockers"}]
            }"#,
        )
        .unwrap();
        assert_eq!(report.report_type, ReportType::Weekly);
        assert_eq!(report.submitted_to, Some(Role::TeamLead));
        assert_eq!(report.feedback.len(), 1);
        assert!(!report.is_editable());
    }

    #[test]
    fn test_filter_date_range_params() {
        let filter = ReportFilter {
            report_type: Some(ReportType::Daily),
            from: NaiveDate::from_ymd_opt(2024, 5, 1),
            to: NaiveDate::from_ymd_opt(2024, 5, 31),
            ..Default::default()
        };
        assert_eq!(
            filter.query_params(),
            vec![
                ("type".to_string(), "daily".to_string()),
                ("from".to_string(), "2024-05-01".to_string()),
                ("to".to_string(), "2024-05-31".to_string()),
            ]
        );
    }
}
