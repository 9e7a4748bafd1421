//! Session context and hooks for the UI.
//!
//! The app root provides an [`api::Client`] as context; [`SessionProvider`]
//! provides a `Signal<Session>` and runs the one-shot `/auth/me` restore.

use api::{Role, UserInfo};
use dioxus::prelude::*;
use store::session::{end_session, restore};
use store::{home_route, Session};

/// The shared API client provided by the app root.
pub fn use_api() -> api::Client {
    use_context::<api::Client>()
}

/// The current session. Updates when the user logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Drop the signed-in user after a 401 seen by a view. On the web the client
/// hook also reloads onto the login route.
pub fn expire_session() {
    if let Some(mut session) = try_consume_context::<Signal<Session>>() {
        session.write().expire();
    }
}

/// Provider component that owns the session and restores it once on mount.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let client = use_api();
    let mut session = use_context_provider(|| Signal::new(Session::new()));

    use_hook(move || {
        if !session.write().begin_restore() {
            return;
        }
        spawn(async move {
            let result = restore(&client).await;
            session.write().finish_restore(result);
        });
    });

    rsx! {
        {children}
    }
}

/// Renders `children` only for a signed-in user holding one of `roles`.
///
/// While the session is being restored a placeholder is shown. Anonymous
/// users are sent to the login route; users of another role to their own
/// dashboard.
#[component]
pub fn RequireRole(
    roles: Vec<Role>,
    /// Called with the route to navigate to when access is denied.
    on_redirect: EventHandler<String>,
    children: Element,
) -> Element {
    let session = use_session();
    let allowed = roles.clone();

    use_effect(move || {
        let current = session.read();
        if current.is_checking() {
            return;
        }
        let target = match current.role() {
            None => api::ClientConfig::from_env().login_route,
            Some(role) if !allowed.contains(&role) => home_route(role).to_string(),
            Some(_) => return,
        };
        on_redirect.call(target);
    });

    let current = session.read();
    if current.is_checking() {
        return rsx! {
            div { class: "flex items-center justify-center min-h-screen text-neutral-500", "Loading..." }
        };
    }
    if !current.role().is_some_and(|r| roles.contains(&r)) {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button that ends the session on the server (best-effort) and locally.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logged_out: EventHandler<()>,
) -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let client = client.clone();
        async move {
            busy.set(true);
            end_session(&client).await;
            session.write().logout();
            busy.set(false);
            on_logged_out.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            "{label}"
        }
    }
}

/// Name and role badge for the signed-in user.
#[component]
pub fn UserBadge(user: UserInfo) -> Element {
    rsx! {
        div {
            class: "flex flex-col",
            span { class: "text-sm font-medium text-neutral-800", "{user.display_name()}" }
            span { class: "text-xs text-neutral-500", "{user.role.label()}" }
        }
    }
}

/// Hook for the API client's unauthorized callback: a hard redirect to the
/// login route, skipped when already there.
pub fn login_redirect(login_route: String) -> impl Fn() + Send + Sync + 'static {
    move || {
        tracing::warn!("Unauthorized response, redirecting to {}", login_route);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                if location.pathname().ok().as_deref() != Some(login_route.as_str()) {
                    let _ = location.set_href(&login_route);
                }
            }
        }
    }
}
