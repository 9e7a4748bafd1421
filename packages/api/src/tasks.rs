//! Task endpoints. Admins manage every task; employees work on their own
//! through status changes, responses and time logs.

use crate::client::{ApiClient, HttpTransport, Method};
use crate::error::ApiResult;
use crate::models::{
    Page, Task, TaskDetail, TaskDraft, TaskFilter, TaskResponseDraft, TaskStatus, TaskStatusDraft,
    TimeLogDraft,
};
use crate::query::{ListQuery, QueryParams};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn list_tasks(&self, query: &ListQuery<TaskFilter>) -> ApiResult<Page<Task>> {
        self.get_with("/tasks", query.query_params()).await
    }

    /// Tasks assigned to the current user.
    pub async fn my_tasks(&self, query: &ListQuery<TaskFilter>) -> ApiResult<Page<Task>> {
        self.get_with("/tasks/mine", query.query_params()).await
    }

    pub async fn task(&self, id: &str) -> ApiResult<TaskDetail> {
        self.get(&format!("/tasks/{id}")).await
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> ApiResult<()> {
        self.execute(Method::Post, "/tasks", Some(draft)).await
    }

    pub async fn update_task(&self, id: &str, draft: &TaskDraft) -> ApiResult<()> {
        self.execute(Method::Put, &format!("/tasks/{id}"), Some(draft)).await
    }

    pub async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Delete, &format!("/tasks/{id}"), None)
            .await
    }

    pub async fn update_task_status(&self, id: &str, status: TaskStatus) -> ApiResult<()> {
        self.execute(
            Method::Patch,
            &format!("/tasks/{id}/status"),
            Some(&TaskStatusDraft { status }),
        )
        .await
    }

    /// Append a response to the task's discussion thread.
    pub async fn add_task_response(&self, id: &str, draft: &TaskResponseDraft) -> ApiResult<()> {
        self.execute(Method::Post, &format!("/tasks/{id}/responses"), Some(draft))
            .await
    }

    /// Log time against the task named in `draft.task_id`.
    pub async fn log_task_time(&self, draft: &TimeLogDraft) -> ApiResult<()> {
        self.execute(
            Method::Post,
            &format!("/tasks/{}/time-logs", draft.task_id),
            Some(draft),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::{TaskFilter, TaskStatus, TimeLogDraft};
    use crate::{ApiClient, ListQuery, MemoryTransport, Method};

    #[tokio::test]
    async fn test_status_patch_body() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Patch, "/tasks/t1/status", 200, json!({}));
        let client = ApiClient::new(transport.clone());

        client
            .update_task_status("t1", TaskStatus::InProgress)
            .await
            .unwrap();
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"status": "in-progress"}))
        );
    }

    #[tokio::test]
    async fn test_time_log_goes_to_selected_task() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Post, "/tasks/t42/time-logs", 201, json!({}));
        let client = ApiClient::new(transport.clone());

        let draft = TimeLogDraft {
            task_id: "t42".into(),
            start_time: chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
                .and_then(|d| d.and_hms_opt(9, 0, 0)),
            end_time: chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
                .and_then(|d| d.and_hms_opt(10, 0, 0)),
            description: "Review".into(),
        };
        client.log_task_time(&draft).await.unwrap();
        assert_eq!(transport.count(Method::Post, "/tasks/t42/time-logs"), 1);
    }

    #[tokio::test]
    async fn test_my_tasks_path() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/tasks/mine", 200, json!([]));
        let client = ApiClient::new(transport.clone());

        let page = client
            .my_tasks(&ListQuery::new(TaskFilter::default()))
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
    }
}
