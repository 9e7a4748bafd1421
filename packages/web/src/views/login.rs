//! Login page view.

use dioxus::prelude::*;
use store::home_route;
use ui::{use_session, LoginForm};

/// Login page component. A user who is already signed in goes straight to
/// their dashboard.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if let Some(role) = session.read().role() {
            nav.replace(home_route(role));
        }
    });

    rsx! {
        LoginForm {
            on_success: move |role| {
                nav.replace(home_route(role));
            },
        }
    }
}
