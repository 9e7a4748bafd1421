//! Notification endpoints. Notifications are polled on demand; there is no
//! push channel.

use crate::client::{ApiClient, HttpTransport, Method};
use crate::error::ApiResult;
use crate::models::{
    BulkReadDraft, Notification, NotificationDraft, NotificationFilter, NotificationStats, Page,
    Recipient,
};
use crate::query::{ListQuery, QueryParams};

impl<T: HttpTransport> ApiClient<T> {
    /// The current user's inbox.
    pub async fn my_notifications(
        &self,
        query: &ListQuery<NotificationFilter>,
    ) -> ApiResult<Page<Notification>> {
        self.get_with("/notifications", query.query_params()).await
    }

    pub async fn send_notification(&self, draft: &NotificationDraft) -> ApiResult<()> {
        self.execute(Method::Post, "/notifications/send", Some(draft))
            .await
    }

    pub async fn mark_read(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Patch, &format!("/notifications/{id}/read"), None)
            .await
    }

    pub async fn mark_unread(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Patch, &format!("/notifications/{id}/unread"), None)
            .await
    }

    pub async fn mark_many_read(&self, ids: Vec<String>) -> ApiResult<()> {
        self.execute(
            Method::Patch,
            "/notifications/read",
            Some(&BulkReadDraft { ids }),
        )
        .await
    }

    pub async fn mark_all_read(&self) -> ApiResult<()> {
        self.execute::<()>(Method::Patch, "/notifications/read-all", None)
            .await
    }

    pub async fn delete_notification(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Delete, &format!("/notifications/{id}"), None)
            .await
    }

    pub async fn notification_stats(&self) -> ApiResult<NotificationStats> {
        self.get("/notifications/stats").await
    }

    /// Users the current session may notify. The server scopes the list by
    /// role: admins see everyone, team leads their team.
    pub async fn notification_recipients(&self) -> ApiResult<Vec<Recipient>> {
        let page: Page<Recipient> = self.get("/notifications/recipients").await?;
        Ok(page.items)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::{NotificationFilter, ReadState};
    use crate::{ApiClient, ListQuery, MemoryTransport, Method};

    #[tokio::test]
    async fn test_unread_inbox_query() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/notifications",
            200,
            json!({"data": [{"_id": "n1", "title": "New task", "type": "task"}]}),
        );
        let client = ApiClient::new(transport.clone());

        let query = ListQuery::new(NotificationFilter {
            kind: None,
            state: Some(ReadState::Unread),
        });
        let page = client.my_notifications(&query).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(transport.requests()[0]
            .query
            .contains(&("unread".to_string(), "true".to_string())));
    }

    #[tokio::test]
    async fn test_bulk_read_body() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Patch, "/notifications/read", 200, json!({}));
        let client = ApiClient::new(transport.clone());

        client
            .mark_many_read(vec!["a".into(), "b".into()])
            .await
            .unwrap();
        assert_eq!(transport.requests()[0].body, Some(json!({"ids": ["a", "b"]})));
    }

    #[tokio::test]
    async fn test_recipients_wrapped_list() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/notifications/recipients",
            200,
            json!({"data": [{"_id": "u1", "email": "e@corp.io", "role": "employee"}]}),
        );
        let client = ApiClient::new(transport);

        let recipients = client.notification_recipients().await.unwrap();
        assert_eq!(recipients[0].display_name(), "e@corp.io");
    }
}
