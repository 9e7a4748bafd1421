//! # Resource views: one paginated, filterable list per dashboard tab
//!
//! [`ResourceView`] is the headless state behind every list screen (projects,
//! tasks, reports, assets, notifications, employees). It owns the current
//! snapshot, the query that produced it, the selected detail, a pending delete
//! confirmation and the banner slot. All I/O happens outside: the caller takes
//! a [`FetchTicket`], runs the request, and hands the result back.
//!
//! ## Fetch sequencing
//!
//! | Step | Method | Effect |
//! |------|--------|--------|
//! | 1 | [`begin_fetch`](ResourceView::begin_fetch) | Bumps the sequence number and snapshots the query. |
//! | 2 | *(caller awaits the API)* | |
//! | 3 | [`finish_fetch`](ResourceView::finish_fetch) | Applies the result only if the ticket is still the latest. |
//!
//! A response that arrives after a newer request was issued is dropped, so
//! the table always reflects the most recent filter/page/search.
//!
//! ## Failure policy
//!
//! A failed fetch keeps the previous rows on screen and raises an error
//! banner. `401` raises nothing locally: the client has already sent the user
//! to the login route.
//!
//! ## Mutations
//!
//! [`finish_mutation`](ResourceView::finish_mutation) returns `true` on
//! success, meaning "re-fetch the list once". The server's response body is
//! never merged into local rows.

use api::{ApiError, ApiResult, ListQuery, Page, Pagination};

use crate::banner::{Banner, BannerSlot};
use crate::debounce::{Debounce, DebounceToken};

/// Snapshot of the query a fetch was issued for.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTicket<F> {
    pub seq: u64,
    pub query: ListQuery<F>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows and pagination replaced.
    Applied,
    /// A newer fetch was issued; the result was dropped.
    Stale,
    /// Previous rows kept.
    Failed,
    /// The requested page no longer exists (e.g. after deleting the last row
    /// of the last page). The page was moved to the new last page and the
    /// caller should fetch again.
    PageShrank,
}

/// A delete awaiting the user's confirmation.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingDelete {
    pub id: String,
    pub label: String,
}

/// List state for rows of `T`, filtered by `F`, with a selected detail `D`.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceView<F, T, D = T> {
    noun: &'static str,
    items: Vec<T>,
    pagination: Pagination,
    query: ListQuery<F>,
    issued: u64,
    loading: bool,
    loaded_once: bool,
    search_text: String,
    search: Debounce<String>,
    selected: Option<D>,
    pending_delete: Option<PendingDelete>,
    banner: BannerSlot,
}

impl<F: Default, T, D> Default for ResourceView<F, T, D> {
    fn default() -> Self {
        Self::new("items", F::default())
    }
}

impl<F, T, D> ResourceView<F, T, D> {
    /// `noun` names the rows in fallback messages ("Failed to fetch projects").
    pub fn new(noun: &'static str, filter: F) -> Self {
        Self {
            noun,
            items: Vec::new(),
            pagination: Pagination::default(),
            query: ListQuery::new(filter),
            issued: 0,
            loading: false,
            loaded_once: false,
            search_text: String::new(),
            search: Debounce::default(),
            selected: None,
            pending_delete: None,
            banner: BannerSlot::default(),
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.query.limit = limit.max(1);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn query(&self) -> &ListQuery<F> {
        &self.query
    }

    pub fn filter(&self) -> &F {
        &self.query.filter
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True until the first fetch settles, successfully or not.
    pub fn is_initial_load(&self) -> bool {
        !self.loaded_once
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.current()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected(&self) -> Option<&D> {
        self.selected.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    // -- fetching -------------------------------------------------------

    pub fn begin_fetch(&mut self) -> FetchTicket<F>
    where
        F: Clone,
    {
        self.issued += 1;
        self.loading = true;
        FetchTicket {
            seq: self.issued,
            query: self.query.clone(),
        }
    }

    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket<F>,
        result: ApiResult<Page<T>>,
    ) -> FetchOutcome {
        if ticket.seq != self.issued {
            tracing::debug!("Dropping stale {} response (seq {})", self.noun, ticket.seq);
            return FetchOutcome::Stale;
        }
        self.loading = false;
        self.loaded_once = true;
        match result {
            Ok(page) => {
                let last = page.pagination.last_page();
                if page.items.is_empty() && self.query.page > last {
                    self.query.page = last;
                    self.pagination = page.pagination;
                    return FetchOutcome::PageShrank;
                }
                self.items = page.items;
                self.pagination = page.pagination;
                FetchOutcome::Applied
            }
            Err(ApiError::Unauthorized) => FetchOutcome::Failed,
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", self.noun, e);
                self.banner
                    .error(e.user_message(&format!("Failed to fetch {}", self.noun)));
                FetchOutcome::Failed
            }
        }
    }

    // -- query changes --------------------------------------------------
    //
    // Each returns true when the query changed and a fetch is due.

    pub fn set_filter(&mut self, filter: F) -> bool
    where
        F: PartialEq,
    {
        if self.query.filter == filter {
            return false;
        }
        self.query.filter = filter;
        self.query.page = 1;
        true
    }

    pub fn update_filter(&mut self, edit: impl FnOnce(&mut F)) -> bool
    where
        F: Clone + PartialEq,
    {
        let mut filter = self.query.filter.clone();
        edit(&mut filter);
        self.set_filter(filter)
    }

    /// Out-of-range or current page requests are ignored.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page == self.query.page || !self.pagination.contains(page) {
            return false;
        }
        self.query.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.query.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.query.page.saturating_sub(1))
    }

    /// Record a keystroke. Sleep for the debounce window, then pass the
    /// token to [`search_settled`](Self::search_settled).
    pub fn search_input(&mut self, text: impl Into<String>) -> DebounceToken {
        let text = text.into();
        self.search_text = text.clone();
        self.search.input(text)
    }

    pub fn search_settled(&mut self, token: DebounceToken) -> bool {
        let Some(text) = self.search.settle(token) else {
            return false;
        };
        let text = text.trim();
        if text == self.query.search {
            return false;
        }
        self.query.search = text.to_string();
        self.query.page = 1;
        true
    }

    // -- selection ------------------------------------------------------

    pub fn select(&mut self, detail: D) {
        self.selected = Some(detail);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // -- delete confirmation ---------------------------------------------

    pub fn request_delete(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.pending_delete = Some(PendingDelete {
            id: id.into(),
            label: label.into(),
        });
    }

    /// The id to delete, consuming the confirmation.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take().map(|p| p.id)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // -- mutations and banners -------------------------------------------

    pub fn finish_mutation<R>(
        &mut self,
        result: ApiResult<R>,
        success: impl Into<String>,
        fallback: &str,
    ) -> bool {
        match result {
            Ok(_) => {
                self.selected = None;
                self.banner.success(success);
                true
            }
            Err(ApiError::Unauthorized) => false,
            Err(e) => {
                tracing::warn!("{}: {}", fallback, e);
                self.banner.error(e.user_message(fallback));
                false
            }
        }
    }

    pub fn notify_success(&mut self, message: impl Into<String>) -> Banner {
        self.banner.success(message)
    }

    pub fn notify_error(&mut self, message: impl Into<String>) -> Banner {
        self.banner.error(message)
    }

    pub fn dismiss_banner(&mut self, id: u64) -> bool {
        self.banner.dismiss(id)
    }
}

/// Page numbers to render in a pagination bar: at most `width` consecutive
/// pages around `current`, always within `1..=last`.
pub fn page_window(pagination: &Pagination, current: u32, width: u32) -> Vec<u32> {
    let last = pagination.last_page();
    let width = width.clamp(1, last);
    let current = current.clamp(1, last);
    let start = current
        .saturating_sub(width / 2)
        .max(1)
        .min(last - width + 1);
    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{
        ApiClient, MemoryTransport, Method, Project, ProjectFilter, ProjectStatus, QueryParams,
    };
    use serde_json::json;

    type Projects = ResourceView<ProjectFilter, Project>;

    fn project(id: &str, name: &str) -> Project {
        serde_json::from_value(json!({"_id": id, "name": name})).unwrap()
    }

    fn paged(items: Vec<Project>, current: u32, total: u32) -> Page<Project> {
        Page {
            pagination: Pagination {
                current_page: current,
                total_pages: total,
                total_count: items.len() as u64,
                page_size: 10,
            },
            items,
        }
    }

    fn view_on_page(page: u32, total: u32) -> Projects {
        let mut view = Projects::new("projects", ProjectFilter::default());
        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Ok(paged(vec![project("p1", "Atlas")], 1, total)));
        if page > 1 {
            assert!(view.go_to_page(page));
        }
        view
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut view = view_on_page(3, 5);
        assert_eq!(view.page(), 3);

        let changed = view.update_filter(|f| f.status = Some(ProjectStatus::Completed));
        assert!(changed);
        assert_eq!(view.page(), 1);

        let ticket = view.begin_fetch();
        assert_eq!(ticket.query.page, 1);
        assert_eq!(ticket.query.filter.status, Some(ProjectStatus::Completed));

        // Re-applying the same filter is not a change.
        assert!(!view.update_filter(|f| f.status = Some(ProjectStatus::Completed)));
    }

    #[test]
    fn test_go_to_page_bounds() {
        let mut view = view_on_page(1, 4);
        assert!(!view.go_to_page(0));
        assert!(!view.go_to_page(5));
        assert!(!view.go_to_page(1));
        assert!(view.go_to_page(4));
        assert!(!view.next_page());
        assert!(view.prev_page());
        assert_eq!(view.page(), 3);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut view = Projects::new("projects", ProjectFilter::default());
        let first = view.begin_fetch();
        view.update_filter(|f| f.status = Some(ProjectStatus::Pending));
        let second = view.begin_fetch();

        let newer = paged(vec![project("p2", "Pending one")], 1, 1);
        assert_eq!(view.finish_fetch(second, Ok(newer)), FetchOutcome::Applied);

        let older = paged(vec![project("p1", "Old")], 1, 1);
        assert_eq!(view.finish_fetch(first, Ok(older)), FetchOutcome::Stale);
        assert_eq!(view.items()[0].id, "p2");
        assert!(!view.is_loading());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_rows() {
        let mut view = view_on_page(1, 1);
        let ticket = view.begin_fetch();
        let outcome = view.finish_fetch(
            ticket,
            Err(ApiError::Server {
                status: 500,
                message: None,
            }),
        );
        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(view.items().len(), 1);
        let banner = view.banner().unwrap();
        assert!(banner.is_error());
        assert_eq!(banner.message, "Failed to fetch projects");
    }

    #[test]
    fn test_unauthorized_fetch_raises_no_banner() {
        let mut view = view_on_page(1, 1);
        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Err(ApiError::Unauthorized));
        assert!(view.banner().is_none());
        assert_eq!(view.items().len(), 1);
    }

    #[test]
    fn test_empty_page_past_end_moves_back() {
        let mut view = view_on_page(3, 3);
        let ticket = view.begin_fetch();
        let outcome = view.finish_fetch(ticket, Ok(paged(Vec::new(), 3, 2)));
        assert_eq!(outcome, FetchOutcome::PageShrank);
        assert_eq!(view.page(), 2);
        assert_eq!(view.items().len(), 1);
    }

    #[test]
    fn test_search_debounce_resets_page() {
        let mut view = view_on_page(2, 3);
        let t1 = view.search_input("at");
        let t2 = view.search_input("atlas ");
        assert_eq!(view.search_text(), "atlas ");
        assert!(!view.search_settled(t1));
        assert!(view.search_settled(t2));
        assert_eq!(view.query().search, "atlas");
        assert_eq!(view.page(), 1);

        // Whitespace-only edits do not refetch.
        let t3 = view.search_input("atlas");
        assert!(!view.search_settled(t3));
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut view = view_on_page(1, 1);
        view.request_delete("p1", "Atlas");
        assert_eq!(view.pending_delete().unwrap().label, "Atlas");
        view.cancel_delete();
        assert_eq!(view.confirm_delete(), None);

        view.request_delete("p1", "Atlas");
        assert_eq!(view.confirm_delete().as_deref(), Some("p1"));
        assert!(view.pending_delete().is_none());
    }

    #[test]
    fn test_page_window() {
        let pagination = Pagination {
            current_page: 1,
            total_pages: 10,
            total_count: 100,
            page_size: 10,
        };
        assert_eq!(page_window(&pagination, 1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(&pagination, 6, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(&pagination, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(&Pagination::single(0), 1, 5), vec![1]);
    }

    #[tokio::test]
    async fn test_mutation_triggers_exactly_one_refetch() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/projects",
            200,
            json!({"data": [{"_id": "p1", "name": "Atlas"}], "pagination": {"currentPage": 1, "totalPages": 1, "totalCount": 1}}),
        );
        transport.respond(Method::Delete, "/projects/p1", 200, json!({"deleted": true}));
        let client = ApiClient::new(transport.clone());

        let mut view = Projects::new("projects", ProjectFilter::default());
        let ticket = view.begin_fetch();
        let result = client.list_projects(&ticket.query).await;
        view.finish_fetch(ticket, result);

        view.request_delete("p1", "Atlas");
        let id = view.confirm_delete().unwrap();
        let result = client.delete_project(&id).await;
        if view.finish_mutation(result, "Project deleted", "Failed to delete project") {
            let ticket = view.begin_fetch();
            let result = client.list_projects(&ticket.query).await;
            view.finish_fetch(ticket, result);
        }

        assert_eq!(transport.count(Method::Get, "/projects"), 2);
        assert_eq!(view.banner().unwrap().message, "Project deleted");
    }

    #[tokio::test]
    async fn test_failed_mutation_surfaces_server_message() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Delete,
            "/projects/p1",
            409,
            json!({"message": "Project has open tasks"}),
        );
        let client = ApiClient::new(transport.clone());

        let mut view = view_on_page(1, 1);
        let result = client.delete_project("p1").await;
        assert!(!view.finish_mutation(result, "Project deleted", "Failed to delete project"));
        assert_eq!(view.banner().unwrap().message, "Project has open tasks");
        assert_eq!(transport.count(Method::Get, "/projects"), 0);
    }

    #[tokio::test]
    async fn test_query_params_follow_view_state() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/projects", 200, json!([]));
        let client = ApiClient::new(transport.clone());

        let mut view = Projects::new("projects", ProjectFilter::default()).with_limit(25);
        view.update_filter(|f| f.status = Some(ProjectStatus::InProgress));
        let token = view.search_input("web");
        view.search_settled(token);

        let ticket = view.begin_fetch();
        let expected = ticket.query.query_params();
        let result = client.list_projects(&ticket.query).await;
        assert_eq!(view.finish_fetch(ticket, result), FetchOutcome::Applied);
        assert!(view.is_empty());

        let sent = transport.requests();
        assert_eq!(sent[0].query, expected);
        assert!(expected.contains(&("limit".to_string(), "25".to_string())));
        assert!(expected.contains(&("search".to_string(), "web".to_string())));
    }

    #[tokio::test]
    async fn test_pick_refreshes_available_and_mine() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/projects/available",
            200,
            json!([{"_id": "p9", "name": "Orion"}]),
        );
        transport.respond(Method::Get, "/projects/mine", 200, json!([]));
        transport.respond(Method::Post, "/projects/p9/pick", 200, json!({"ok": true}));
        let client = ApiClient::new(transport.clone());

        let mut available = Projects::new("available projects", ProjectFilter::default());
        let mut mine = Projects::new("projects", ProjectFilter::default());
        let ticket = available.begin_fetch();
        let result = client.available_projects(&ticket.query).await;
        available.finish_fetch(ticket, result);

        let picked = available.items()[0].clone();
        let result = client.pick_project(&picked.id).await;
        let message = format!("Project {} picked", picked.name);
        assert!(available.finish_mutation(result, message, "Failed to pick project"));

        transport.respond(Method::Get, "/projects/available", 200, json!([]));
        transport.respond(
            Method::Get,
            "/projects/mine",
            200,
            json!([{"_id": "p9", "name": "Orion"}]),
        );
        let ticket = available.begin_fetch();
        let result = client.available_projects(&ticket.query).await;
        available.finish_fetch(ticket, result);
        let ticket = mine.begin_fetch();
        let result = client.my_projects(&ticket.query).await;
        mine.finish_fetch(ticket, result);

        assert!(available.is_empty());
        assert_eq!(mine.items()[0].id, "p9");
        assert_eq!(available.banner().unwrap().message, "Project Orion picked");
        assert_eq!(transport.count(Method::Get, "/projects/available"), 2);
        assert_eq!(transport.count(Method::Get, "/projects/mine"), 1);
    }
}
