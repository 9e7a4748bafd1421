//! Report endpoints.
//!
//! Reports travel up the hierarchy: an employee submits to their team lead,
//! a team lead to an admin. Reviewers append feedback and set the completion
//! status. Whether a daily report may be filed today is decided by the server
//! ([`daily_report_eligibility`](ApiClient::daily_report_eligibility)); any
//! local guess from already-fetched reports is only a hint.

use crate::client::{ApiClient, HttpTransport, Method};
use crate::error::ApiResult;
use crate::models::{
    CompletionDraft, CompletionStatus, FeedbackDraft, Page, Report, ReportDraft,
    ReportEligibility, ReportFilter,
};
use crate::query::{ListQuery, QueryParams};

impl<T: HttpTransport> ApiClient<T> {
    /// Every report (admin).
    pub async fn list_reports(&self, query: &ListQuery<ReportFilter>) -> ApiResult<Page<Report>> {
        self.get_with("/reports", query.query_params()).await
    }

    /// Reports from the current team lead's members.
    pub async fn team_reports(&self, query: &ListQuery<ReportFilter>) -> ApiResult<Page<Report>> {
        self.get_with("/reports/team", query.query_params()).await
    }

    /// The current user's own reports.
    pub async fn my_reports(&self, query: &ListQuery<ReportFilter>) -> ApiResult<Page<Report>> {
        self.get_with("/reports/mine", query.query_params()).await
    }

    pub async fn report(&self, id: &str) -> ApiResult<Report> {
        self.get(&format!("/reports/{id}")).await
    }

    pub async fn create_report(&self, draft: &ReportDraft) -> ApiResult<()> {
        self.execute(Method::Post, "/reports", Some(draft)).await
    }

    pub async fn update_report(&self, id: &str, draft: &ReportDraft) -> ApiResult<()> {
        self.execute(Method::Put, &format!("/reports/{id}"), Some(draft)).await
    }

    pub async fn delete_report(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Delete, &format!("/reports/{id}"), None)
            .await
    }

    pub async fn add_report_feedback(&self, id: &str, draft: &FeedbackDraft) -> ApiResult<()> {
        self.execute(Method::Post, &format!("/reports/{id}/feedback"), Some(draft))
            .await
    }

    pub async fn set_report_completion(&self, id: &str, completion: CompletionStatus) -> ApiResult<()> {
        self.execute(
            Method::Patch,
            &format!("/reports/{id}/completion"),
            Some(&CompletionDraft { completion }),
        )
        .await
    }

    /// Forward the report to the next role in the chain.
    pub async fn submit_report(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Post, &format!("/reports/{id}/submit"), None)
            .await
    }

    pub async fn daily_report_eligibility(&self) -> ApiResult<ReportEligibility> {
        self.get("/reports/eligibility").await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::{CompletionStatus, ReportFilter, ReportType};
    use crate::{ApiClient, ListQuery, MemoryTransport, Method};

    #[tokio::test]
    async fn test_team_reports_query() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/reports/team", 200, json!({"data": []}));
        let client = ApiClient::new(transport.clone());

        let query = ListQuery::new(ReportFilter {
            report_type: Some(ReportType::Monthly),
            ..Default::default()
        });
        client.team_reports(&query).await.unwrap();
        assert!(transport.requests()[0]
            .query
            .contains(&("type".to_string(), "monthly".to_string())));
    }

    #[tokio::test]
    async fn test_completion_patch() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Patch, "/reports/r1/completion", 200, json!({}));
        let client = ApiClient::new(transport.clone());

        client
            .set_report_completion("r1", CompletionStatus::Partial)
            .await
            .unwrap();
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"completion": "partial"}))
        );
    }

    #[tokio::test]
    async fn test_eligibility_is_asked_of_server() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/reports/eligibility",
            200,
            json!({"canSubmitDaily": false, "reason": "Already submitted today"}),
        );
        let client = ApiClient::new(transport);

        let eligibility = client.daily_report_eligibility().await.unwrap();
        assert!(!eligibility.can_submit_daily);
        assert_eq!(eligibility.reason.as_deref(), Some("Already submitted today"));
    }
}
