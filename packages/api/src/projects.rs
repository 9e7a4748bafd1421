//! Project endpoints.
//!
//! | Scope | Call |
//! |-------|------|
//! | Admin | [`list_projects`](ApiClient::list_projects), create/update/delete, groups, recalculation |
//! | Team lead | [`available_projects`](ApiClient::available_projects), [`my_projects`](ApiClient::my_projects), pick/release, team assignment |
//! | Employee | [`assigned_projects`](ApiClient::assigned_projects) |
//!
//! Sub-resource mutations (payments, milestones, time entries, client status,
//! details) all answer with the updated project, which the client ignores: the
//! owning view re-fetches instead.

use crate::client::{ApiClient, HttpTransport, Method};
use crate::error::ApiResult;
use crate::models::{
    ClientStatusDraft, MilestoneDraft, Page, PaymentDraft, Project, ProjectDetail,
    ProjectDetailsDraft, ProjectDraft, ProjectFilter, ProjectGroup, ProjectGroupDraft,
    TeamAssignmentDraft, TimeLogDraft,
};
use crate::query::{ListQuery, QueryParams};

impl<T: HttpTransport> ApiClient<T> {
    /// Every project (admin).
    pub async fn list_projects(&self, query: &ListQuery<ProjectFilter>) -> ApiResult<Page<Project>> {
        self.get_with("/projects", query.query_params()).await
    }

    /// Unclaimed projects a team lead may pick.
    pub async fn available_projects(
        &self,
        query: &ListQuery<ProjectFilter>,
    ) -> ApiResult<Page<Project>> {
        self.get_with("/projects/available", query.query_params()).await
    }

    /// Projects the current team lead owns.
    pub async fn my_projects(&self, query: &ListQuery<ProjectFilter>) -> ApiResult<Page<Project>> {
        self.get_with("/projects/mine", query.query_params()).await
    }

    /// Projects the current employee is on.
    pub async fn assigned_projects(
        &self,
        query: &ListQuery<ProjectFilter>,
    ) -> ApiResult<Page<Project>> {
        self.get_with("/projects/assigned", query.query_params()).await
    }

    pub async fn project(&self, id: &str) -> ApiResult<ProjectDetail> {
        self.get(&format!("/projects/{id}")).await
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> ApiResult<()> {
        self.execute(Method::Post, "/projects", Some(draft)).await
    }

    pub async fn update_project(&self, id: &str, draft: &ProjectDraft) -> ApiResult<()> {
        self.execute(Method::Put, &format!("/projects/{id}"), Some(draft)).await
    }

    pub async fn delete_project(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Delete, &format!("/projects/{id}"), None)
            .await
    }

    /// Claim an available project for the current team lead.
    pub async fn pick_project(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Post, &format!("/projects/{id}/pick"), None)
            .await
    }

    /// Give a picked project back to the available pool.
    pub async fn release_project(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Post, &format!("/projects/{id}/release"), None)
            .await
    }

    pub async fn add_payment(&self, id: &str, draft: &PaymentDraft) -> ApiResult<()> {
        self.execute(Method::Post, &format!("/projects/{id}/payments"), Some(draft))
            .await
    }

    pub async fn add_milestone(&self, id: &str, draft: &MilestoneDraft) -> ApiResult<()> {
        self.execute(Method::Post, &format!("/projects/{id}/milestones"), Some(draft))
            .await
    }

    pub async fn update_milestone(
        &self,
        id: &str,
        milestone_id: &str,
        draft: &MilestoneDraft,
    ) -> ApiResult<()> {
        self.execute(
            Method::Put,
            &format!("/projects/{id}/milestones/{milestone_id}"),
            Some(draft),
        )
        .await
    }

    pub async fn add_time_entry(&self, id: &str, draft: &TimeLogDraft) -> ApiResult<()> {
        self.execute(Method::Post, &format!("/projects/{id}/time-entries"), Some(draft))
            .await
    }

    pub async fn update_client_status(&self, id: &str, draft: &ClientStatusDraft) -> ApiResult<()> {
        self.execute(Method::Patch, &format!("/projects/{id}/client-status"), Some(draft))
            .await
    }

    /// Replace the project's team with `draft.member_ids`.
    pub async fn assign_project_team(&self, id: &str, draft: &TeamAssignmentDraft) -> ApiResult<()> {
        self.execute(Method::Put, &format!("/projects/{id}/team"), Some(draft))
            .await
    }

    pub async fn update_project_details(
        &self,
        id: &str,
        draft: &ProjectDetailsDraft,
    ) -> ApiResult<()> {
        self.execute(Method::Patch, &format!("/projects/{id}/details"), Some(draft))
            .await
    }

    pub async fn project_groups(&self) -> ApiResult<Vec<ProjectGroup>> {
        let page: Page<ProjectGroup> = self.get("/project-groups").await?;
        Ok(page.items)
    }

    pub async fn create_project_group(&self, draft: &ProjectGroupDraft) -> ApiResult<()> {
        self.execute(Method::Post, "/project-groups", Some(draft)).await
    }

    /// Ask the server to recompute payment totals for a project.
    pub async fn recalculate_project(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Post, &format!("/projects/{id}/recalculate"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::{PaymentDraft, ProjectFilter, ProjectStatus};
    use crate::{ApiClient, ListQuery, MemoryTransport, Method};

    #[tokio::test]
    async fn test_list_sends_filter_page_and_search() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/projects",
            200,
            json!({
                "data": [{"_id": "p1", "name": "Portal", "status": "pending"}],
                "pagination": {"currentPage": 2, "totalPages": 3, "totalCount": 21, "pageSize": 10}
            }),
        );
        let client = ApiClient::new(transport.clone());

        let query = ListQuery::new(ProjectFilter {
            status: Some(ProjectStatus::Pending),
            group_id: None,
        })
        .with_page(2)
        .with_search("port");
        let page = client.list_projects(&query).await.unwrap();
        assert_eq!(page.items[0].name, "Portal");
        assert_eq!(page.pagination.total_pages, 3);

        let sent = &transport.requests()[0];
        assert_eq!(
            sent.query,
            vec![
                ("status".to_string(), "pending".to_string()),
                ("search".to_string(), "port".to_string()),
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_pick_and_release_paths() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Post, "/projects/p7/pick", 200, json!({"message": "ok"}));
        transport.respond(Method::Post, "/projects/p7/release", 200, json!({}));
        let client = ApiClient::new(transport.clone());

        client.pick_project("p7").await.unwrap();
        client.release_project("p7").await.unwrap();
        assert_eq!(transport.count(Method::Post, "/projects/p7/pick"), 1);
        assert_eq!(transport.count(Method::Post, "/projects/p7/release"), 1);
    }

    #[tokio::test]
    async fn test_payment_body_sent_wholesale() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Post, "/projects/p1/payments", 201, json!({}));
        let client = ApiClient::new(transport.clone());

        client
            .add_payment(
                "p1",
                &PaymentDraft {
                    amount: 120.5,
                    paid_on: None,
                    note: "Deposit".into(),
                },
            )
            .await
            .unwrap();
        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body, json!({"amount": 120.5, "paidOn": null, "note": "Deposit"}));
    }

    #[tokio::test]
    async fn test_groups_accept_bare_array() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/project-groups",
            200,
            json!([{"_id": "g1", "name": "Mobile", "projectCount": 4}]),
        );
        let client = ApiClient::new(transport);

        let groups = client.project_groups().await.unwrap();
        assert_eq!(groups[0].project_count, 4);
    }
}
