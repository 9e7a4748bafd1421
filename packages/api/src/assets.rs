//! Asset endpoints: inventory, assignment lifecycle, and the return-request
//! workflow.

use crate::client::{ApiClient, HttpTransport, Method};
use crate::error::ApiResult;
use crate::models::{
    Asset, AssetDraft, AssetFilter, AssetHistoryEntry, AssetStats, AssignAssetDraft, Page,
    ResolveReturnDraft, ReturnRequest, ReturnRequestDraft,
};
use crate::query::{ListQuery, QueryParams};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn list_assets(&self, query: &ListQuery<AssetFilter>) -> ApiResult<Page<Asset>> {
        self.get_with("/assets", query.query_params()).await
    }

    /// Assets currently assigned to the current user.
    pub async fn my_assets(&self, query: &ListQuery<AssetFilter>) -> ApiResult<Page<Asset>> {
        self.get_with("/assets/mine", query.query_params()).await
    }

    pub async fn create_asset(&self, draft: &AssetDraft) -> ApiResult<()> {
        self.execute(Method::Post, "/assets", Some(draft)).await
    }

    pub async fn update_asset(&self, id: &str, draft: &AssetDraft) -> ApiResult<()> {
        self.execute(Method::Put, &format!("/assets/{id}"), Some(draft)).await
    }

    pub async fn delete_asset(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Delete, &format!("/assets/{id}"), None)
            .await
    }

    pub async fn assign_asset(&self, id: &str, draft: &AssignAssetDraft) -> ApiResult<()> {
        self.execute(Method::Post, &format!("/assets/{id}/assign"), Some(draft))
            .await
    }

    pub async fn return_asset(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Post, &format!("/assets/{id}/return"), None)
            .await
    }

    /// Return an asset without the holder's request.
    pub async fn force_return_asset(&self, id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Post, &format!("/assets/{id}/force-return"), None)
            .await
    }

    pub async fn asset_history(&self, id: &str) -> ApiResult<Vec<AssetHistoryEntry>> {
        let page: Page<AssetHistoryEntry> = self.get(&format!("/assets/{id}/history")).await?;
        Ok(page.items)
    }

    pub async fn asset_stats(&self) -> ApiResult<AssetStats> {
        self.get("/assets/stats").await
    }

    pub async fn overdue_assets(&self) -> ApiResult<Vec<Asset>> {
        let page: Page<Asset> = self.get("/assets/overdue").await?;
        Ok(page.items)
    }

    pub async fn returned_assets(&self) -> ApiResult<Vec<Asset>> {
        let page: Page<Asset> = self.get("/assets/returned").await?;
        Ok(page.items)
    }

    /// Ask for a held asset to be taken back.
    pub async fn request_asset_return(&self, id: &str, draft: &ReturnRequestDraft) -> ApiResult<()> {
        self.execute(Method::Post, &format!("/assets/{id}/return-requests"), Some(draft))
            .await
    }

    pub async fn return_requests(&self) -> ApiResult<Vec<ReturnRequest>> {
        let page: Page<ReturnRequest> = self.get("/assets/return-requests").await?;
        Ok(page.items)
    }

    pub async fn resolve_return_request(
        &self,
        request_id: &str,
        draft: &ResolveReturnDraft,
    ) -> ApiResult<()> {
        self.execute(
            Method::Patch,
            &format!("/assets/return-requests/{request_id}"),
            Some(draft),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::{AssetFilter, AssetStatus, ResolveReturnDraft};
    use crate::{ApiClient, ListQuery, MemoryTransport, Method};

    #[tokio::test]
    async fn test_list_with_status_filter() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/assets", 200, json!({"data": []}));
        let client = ApiClient::new(transport.clone());

        let query = ListQuery::new(AssetFilter {
            status: Some(AssetStatus::Maintenance),
            asset_type: None,
        });
        client.list_assets(&query).await.unwrap();
        assert_eq!(
            transport.requests()[0].query[0],
            ("status".to_string(), "maintenance".to_string())
        );
    }

    #[tokio::test]
    async fn test_history_and_stats() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/assets/a1/history",
            200,
            json!([{"_id": "h1", "action": "assigned", "note": "Onboarding"}]),
        );
        transport.respond(
            Method::Get,
            "/assets/stats",
            200,
            json!({"total": 10, "available": 6, "assigned": 3, "maintenance": 1}),
        );
        let client = ApiClient::new(transport);

        let history = client.asset_history("a1").await.unwrap();
        assert_eq!(history[0].action, "assigned");
        let stats = client.asset_stats().await.unwrap();
        assert_eq!(stats.available, 6);
        assert_eq!(stats.overdue, 0);
    }

    #[tokio::test]
    async fn test_resolve_return_request() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Patch, "/assets/return-requests/rr1", 200, json!({}));
        let client = ApiClient::new(transport.clone());

        client
            .resolve_return_request(
                "rr1",
                &ResolveReturnDraft {
                    approve: true,
                    note: String::new(),
                },
            )
            .await
            .unwrap();
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"approve": true, "note": ""}))
        );
    }
}
