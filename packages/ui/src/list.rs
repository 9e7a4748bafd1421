//! # List controllers: `ResourceView` wired to signals and the API client
//!
//! [`use_resource_view`] creates a `Signal<ResourceView>` plus a reload
//! callback that runs the screen's fetch function through the view's ticket
//! sequencing. The returned [`ListController`] is `Copy`, so event handlers
//! and child components can hold it freely.
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`reload`](ListController::reload) | Issue one fetch for the current query. |
//! | [`update_filter`](ListController::update_filter) | Edit the filter; fetch if it changed (page resets to 1). |
//! | [`go_to_page`](ListController::go_to_page) | Fetch another page; out-of-range pages do nothing. |
//! | [`search`](ListController::search) | Debounced search; only the last keystroke fetches. |
//! | [`run_mutation`](ListController::run_mutation) | Await a mutation, set the banner, re-fetch once on success. |
//! | [`confirm_delete`](ListController::confirm_delete) | Run the confirmed delete. |
//! | [`open_detail`](ListController::open_detail) | Fetch the detail payload into the selection. |
//!
//! Banners set by any of these are dismissed after their timeout. The dismiss
//! and search timers run in the scope that created the controller, so a child
//! that sets a banner and then unmounts does not take the timer with it.

use std::future::Future;

use api::{ApiError, ApiResult, ListQuery, Page};
use dioxus::prelude::*;
use store::{sleep, Banner, DebounceToken, FetchOutcome, ResourceView, SEARCH_DEBOUNCE};

use crate::session::{expire_session, use_api};

pub struct ListController<F: 'static, T: 'static, D: 'static = T> {
    pub view: Signal<ResourceView<F, T, D>>,
    reload: Callback<()>,
    dismiss: Callback<()>,
    settle: Callback<DebounceToken>,
}

impl<F: 'static, T: 'static, D: 'static> Clone for ListController<F, T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static, T: 'static, D: 'static> Copy for ListController<F, T, D> {}

impl<F: 'static, T: 'static, D: 'static> PartialEq for ListController<F, T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.view == other.view && self.reload == other.reload && self.dismiss == other.dismiss
    }
}

/// Create a list controller and issue the initial fetch.
///
/// `fetch` must not capture anything; it receives the client and the query
/// snapshot of the ticket being served.
pub fn use_resource_view<F, T, D, Fut>(
    noun: &'static str,
    filter: F,
    fetch: impl Fn(api::Client, ListQuery<F>) -> Fut + Copy + 'static,
) -> ListController<F, T, D>
where
    F: Clone + PartialEq + 'static,
    T: 'static,
    D: 'static,
    Fut: Future<Output = ApiResult<Page<T>>> + 'static,
{
    let client = use_api();
    let mut view = use_signal(move || ResourceView::new(noun, filter));

    // Schedules the dismissal of whatever banner is showing now.
    let dismiss = use_callback(move |()| {
        let Some(banner) = view.peek().banner().cloned() else {
            return;
        };
        spawn(async move {
            sleep(banner.dismiss_after()).await;
            view.write().dismiss_banner(banner.id);
        });
    });

    let reload = use_callback(move |()| {
        let client = client.clone();
        spawn(async move {
            loop {
                let ticket = view.write().begin_fetch();
                let result = fetch(client.clone(), ticket.query.clone()).await;
                if matches!(result, Err(ApiError::Unauthorized)) {
                    expire_session();
                }
                let outcome = view.write().finish_fetch(ticket, result);
                if outcome == FetchOutcome::Failed {
                    dismiss.call(());
                }
                if outcome != FetchOutcome::PageShrank {
                    break;
                }
            }
        });
    });

    let settle = use_callback(move |token: DebounceToken| {
        spawn(async move {
            sleep(SEARCH_DEBOUNCE).await;
            if view.write().search_settled(token) {
                reload.call(());
            }
        });
    });

    use_hook(move || reload.call(()));

    ListController {
        view,
        reload,
        dismiss,
        settle,
    }
}

impl<F: Clone + PartialEq + 'static, T: 'static, D: 'static> ListController<F, T, D> {
    pub fn reload(&self) {
        self.reload.call(());
    }

    pub fn update_filter(&self, edit: impl FnOnce(&mut F)) {
        let mut view = self.view;
        if view.write().update_filter(edit) {
            self.reload();
        }
    }

    pub fn go_to_page(&self, page: u32) {
        let mut view = self.view;
        if view.write().go_to_page(page) {
            self.reload();
        }
    }

    pub fn search(&self, text: String) {
        let mut view = self.view;
        let token = view.write().search_input(text);
        self.settle.call(token);
    }

    pub fn select(&self, detail: D) {
        let mut view = self.view;
        view.write().select(detail);
    }

    pub fn clear_selection(&self) {
        let mut view = self.view;
        view.write().clear_selection();
    }

    /// Fetch a detail payload and make it the selection. Failures go to the
    /// banner and leave the list alone.
    pub fn open_detail(&self, fetch: impl Future<Output = ApiResult<D>> + 'static, fallback: &'static str) {
        let this = *self;
        spawn(async move {
            match fetch.await {
                Ok(detail) => this.select(detail),
                Err(ApiError::Unauthorized) => expire_session(),
                Err(e) => {
                    tracing::warn!("{}: {}", fallback, e);
                    this.notify_error(e.user_message(fallback));
                }
            }
        });
    }

    pub fn request_delete(&self, id: impl Into<String>, label: impl Into<String>) {
        let mut view = self.view;
        view.write().request_delete(id, label);
    }

    pub fn cancel_delete(&self) {
        let mut view = self.view;
        view.write().cancel_delete();
    }

    /// Await `call`, set the banner, and re-fetch once on success. Returns
    /// whether the mutation succeeded.
    pub async fn run_mutation<R>(
        &self,
        call: impl Future<Output = ApiResult<R>>,
        success: impl Into<String>,
        fallback: &str,
    ) -> bool {
        let result = call.await;
        if matches!(result, Err(ApiError::Unauthorized)) {
            expire_session();
        }
        let mut view = self.view;
        let ok = view.write().finish_mutation(result, success, fallback);
        self.dismiss.call(());
        if ok {
            self.reload();
        }
        ok
    }

    /// Consume the pending confirmation and run `delete` with its id.
    /// Nothing is issued unless a delete was requested.
    pub fn confirm_delete<Fut>(
        &self,
        delete: impl FnOnce(String) -> Fut + 'static,
        success: &'static str,
        fallback: &'static str,
    ) where
        Fut: Future<Output = ApiResult<()>> + 'static,
    {
        let mut view = self.view;
        let Some(id) = view.write().confirm_delete() else {
            return;
        };
        let this = *self;
        spawn(async move {
            this.run_mutation(delete(id), success, fallback).await;
        });
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        let mut view = self.view;
        view.write().notify_success(message);
        self.dismiss.call(());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        let mut view = self.view;
        view.write().notify_error(message);
        self.dismiss.call(());
    }

    pub fn dismiss_banner(&self, id: u64) {
        let mut view = self.view;
        view.write().dismiss_banner(id);
    }

    pub fn banner(&self) -> Option<Banner> {
        self.view.read().banner().cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use api::{ApiClient, ClientConfig, ReqwestTransport};

    use super::*;

    type NameList = ListController<(), String>;

    thread_local! {
        static SEARCHES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn searches() -> Vec<String> {
        SEARCHES.with(|s| s.borrow().clone())
    }

    /// Banner message as of the last render of [`Screen`].
    #[derive(Clone, Default)]
    struct Seen(Rc<RefCell<Option<String>>>);

    impl PartialEq for Seen {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl Seen {
        fn message(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    #[component]
    fn Harness(seen: Seen, burst: bool) -> Element {
        use_context_provider(|| {
            ReqwestTransport::new(ClientConfig::default())
                .map(ApiClient::new)
                .unwrap()
        });
        rsx! {
            Screen { seen, burst }
        }
    }

    #[component]
    fn Screen(seen: Seen, burst: bool) -> Element {
        let list: NameList = use_resource_view("project", (), |_, query| async move {
            SEARCHES.with(|s| s.borrow_mut().push(query.search.clone()));
            Ok(Page::single(Vec::new()))
        });
        let mut child = use_signal(|| true);
        *seen.0.borrow_mut() = list.view.read().banner().map(|b| b.message.clone());

        rsx! {
            if child() {
                Editor { list, burst, on_done: move |_| child.set(false) }
            }
        }
    }

    /// Sets a banner (or types a search) and then asks to be unmounted.
    #[component]
    fn Editor(list: NameList, burst: bool, on_done: EventHandler<()>) -> Element {
        use_hook(move || {
            spawn(async move {
                if burst {
                    for text in ["r", "re", "rep"] {
                        list.search(text.to_string());
                        tokio::time::sleep(Duration::from_millis(100)).await;
                    }
                } else {
                    list.notify_success("Project saved");
                }
                on_done.call(());
            });
        });
        rsx! {}
    }

    async fn run_for(dom: &mut VirtualDom, span: Duration) {
        let deadline = tokio::time::Instant::now() + span;
        while tokio::time::Instant::now() < deadline {
            let _ = tokio::time::timeout_at(deadline, dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_dismissed_after_setter_unmounts() {
        let seen = Seen::default();
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                seen: seen.clone(),
                burst: false,
            },
        );
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_millis(50)).await;
        assert_eq!(seen.message().as_deref(), Some("Project saved"));

        run_for(&mut dom, Duration::from_secs(15)).await;
        assert_eq!(seen.message(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_burst_fetches_once_after_last_keystroke() {
        SEARCHES.with(|s| s.borrow_mut().clear());
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                seen: Seen::default(),
                burst: true,
            },
        );
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_millis(250)).await;
        assert_eq!(searches(), vec![String::new()]);

        run_for(&mut dom, Duration::from_secs(2)).await;
        assert_eq!(searches(), vec![String::new(), "rep".to_string()]);
    }
}
