//! Role-gated dashboard routes.

use api::Role;
use dioxus::prelude::*;
use ui::{AdminDashboard, EmployeeDashboard, RequireRole, TeamLeadDashboard};

use crate::Route;

#[component]
pub fn Admin() -> Element {
    let nav = use_navigator();
    rsx! {
        RequireRole {
            roles: vec![Role::Admin],
            on_redirect: move |path: String| {
                nav.replace(path);
            },
            AdminDashboard {
                on_logged_out: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}

#[component]
pub fn TeamLead() -> Element {
    let nav = use_navigator();
    rsx! {
        RequireRole {
            roles: vec![Role::TeamLead],
            on_redirect: move |path: String| {
                nav.replace(path);
            },
            TeamLeadDashboard {
                on_logged_out: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}

#[component]
pub fn Employee() -> Element {
    let nav = use_navigator();
    rsx! {
        RequireRole {
            roles: vec![Role::Employee],
            on_redirect: move |path: String| {
                nav.replace(path);
            },
            EmployeeDashboard {
                on_logged_out: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}
