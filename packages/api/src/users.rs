//! Employee listings and team membership.

use serde::Serialize;

use crate::client::{ApiClient, HttpTransport, Method};
use crate::error::ApiResult;
use crate::models::{Employee, Page, UserFilter};
use crate::query::{ListQuery, QueryParams};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberBody<'a> {
    user_id: &'a str,
}

impl<T: HttpTransport> ApiClient<T> {
    pub async fn list_employees(&self, query: &ListQuery<UserFilter>) -> ApiResult<Page<Employee>> {
        self.get_with("/users", query.query_params()).await
    }

    /// Members of the current team lead's team.
    pub async fn my_team(&self, query: &ListQuery<UserFilter>) -> ApiResult<Page<Employee>> {
        self.get_with("/users/my-team", query.query_params()).await
    }

    pub async fn assign_team_member(&self, user_id: &str) -> ApiResult<()> {
        self.execute(Method::Post, "/users/my-team", Some(&MemberBody { user_id }))
            .await
    }

    pub async fn remove_team_member(&self, user_id: &str) -> ApiResult<()> {
        self.execute::<()>(Method::Delete, &format!("/users/my-team/{user_id}"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::UserFilter;
    use crate::{ApiClient, ListQuery, MemoryTransport, Method};

    #[tokio::test]
    async fn test_assign_and_remove_member() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Post, "/users/my-team", 200, json!({}));
        transport.respond(Method::Delete, "/users/my-team/u5", 200, json!({}));
        let client = ApiClient::new(transport.clone());

        client.assign_team_member("u5").await.unwrap();
        client.remove_team_member("u5").await.unwrap();
        let requests = transport.requests();
        assert_eq!(requests[0].body, Some(json!({"userId": "u5"})));
        assert_eq!(requests[1].method, Method::Delete);
    }

    #[tokio::test]
    async fn test_employee_rows() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/users",
            200,
            json!({"data": [{"_id": "u1", "email": "e@corp.io", "role": "employee", "teamLead": {"_id": "l1", "name": "Lee"}}]}),
        );
        let client = ApiClient::new(transport);

        let page = client
            .list_employees(&ListQuery::new(UserFilter::default()))
            .await
            .unwrap();
        assert_eq!(page.items[0].team_lead.as_ref().map(|l| l.display_name()), Some("Lee"));
    }
}
