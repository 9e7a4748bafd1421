use api::{ApiClient, ClientConfig, ReqwestTransport};
use dioxus::prelude::*;

use store::home_route;
use ui::{login_redirect, use_session, SessionProvider};
use views::{Admin, Employee, Login, TeamLead};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/admin")]
    Admin {},
    #[route("/teamlead")]
    TeamLead {},
    #[route("/employee")]
    Employee {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| {
        let config = ClientConfig::from_env();
        let login_route = config.login_route.clone();
        ReqwestTransport::new(config)
            .map(|transport| ApiClient::new(transport).on_unauthorized(login_redirect(login_route)))
            .map_err(|e| e.to_string())
    });

    let client = match client {
        Ok(client) => client,
        Err(message) => {
            tracing::error!("Failed to build the API client: {}", message);
            return rsx! {
                style { {ui::STYLES} }
                p { class: "empty-state", "Could not start the app: {message}" }
            };
        }
    };
    use_context_provider(|| client);

    rsx! {
        // Global app resources
        style { {ui::STYLES} }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the signed-in user's dashboard, or to the login page.
#[component]
fn Root() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        let current = session.read();
        if current.is_checking() {
            return;
        }
        match current.role() {
            Some(role) => nav.replace(home_route(role)),
            None => nav.replace(Route::Login {}),
        };
    });

    rsx! {}
}
