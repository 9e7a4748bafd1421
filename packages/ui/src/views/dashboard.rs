//! Role dashboards: a header, the role's tab bar, and the active tab.
//!
//! The shell holds only the active tab. Each tab mounts its own list
//! controllers, except the team lead's two project lists, which live at the
//! dashboard so a pick on one tab refreshes the other.

use api::Role;
use dioxus::prelude::*;
use store::{initial_tab, resolve_tab, tabs_for, Tab};

use crate::views::assets::{AssetsTab, MyAssetsTab, ReturnRequestsTab};
use crate::views::notifications::NotificationsTab;
use crate::views::projects::{use_project_list, ProjectScope, ProjectsPanel, ProjectsTab};
use crate::views::reports::{ReportScope, ReportsTab};
use crate::views::tasks::{MyTasksTab, TasksTab};
use crate::views::users::{EmployeesTab, TeamTab};
use crate::{use_session, LogoutButton, UserBadge};

#[component]
pub fn DashboardShell(
    title: String,
    active: Signal<Tab>,
    on_logged_out: EventHandler<()>,
    children: Element,
) -> Element {
    let session = use_session();
    let mut active = active;
    let Some(user) = session.read().user().cloned() else {
        return rsx! {};
    };
    let current = resolve_tab(user.role, active());

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                h1 { "{title}" }
                div {
                    class: "dashboard-user",
                    UserBadge { user: user.clone() }
                    LogoutButton { class: "btn btn-outline", on_logged_out }
                }
            }
            nav {
                class: "tab-bar",
                for tab in tabs_for(user.role).iter().copied() {
                    button {
                        key: "{tab.key()}",
                        class: if tab == current { "tab tab--active" } else { "tab" },
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            main { class: "dashboard-main", {children} }
        }
    }
}

#[component]
pub fn AdminDashboard(on_logged_out: EventHandler<()>) -> Element {
    let active = use_signal(|| initial_tab(Role::Admin));

    let body = match resolve_tab(Role::Admin, active()) {
        Tab::Tasks => rsx! { TasksTab {} },
        Tab::Reports => rsx! { ReportsTab { scope: ReportScope::All } },
        Tab::Assets => rsx! { AssetsTab {} },
        Tab::ReturnRequests => rsx! { ReturnRequestsTab {} },
        Tab::Employees => rsx! { EmployeesTab {} },
        Tab::Notifications => rsx! { NotificationsTab {} },
        _ => rsx! { ProjectsTab { scope: ProjectScope::All } },
    };

    rsx! {
        DashboardShell { title: "Admin Dashboard", active, on_logged_out, {body} }
    }
}

#[component]
pub fn TeamLeadDashboard(on_logged_out: EventHandler<()>) -> Element {
    let active = use_signal(|| initial_tab(Role::TeamLead));
    let available = use_project_list(ProjectScope::Available);
    let mine = use_project_list(ProjectScope::Mine);

    let body = match resolve_tab(Role::TeamLead, active()) {
        Tab::MyProjects => rsx! {
            ProjectsPanel { scope: ProjectScope::Mine, list: mine, linked: Some(available) }
        },
        Tab::Tasks => rsx! { TasksTab {} },
        Tab::TeamReports => rsx! { ReportsTab { scope: ReportScope::Team } },
        Tab::MyReports => rsx! { ReportsTab { scope: ReportScope::Mine } },
        Tab::Team => rsx! { TeamTab {} },
        Tab::MyAssets => rsx! { MyAssetsTab {} },
        Tab::Notifications => rsx! { NotificationsTab {} },
        _ => rsx! {
            ProjectsPanel { scope: ProjectScope::Available, list: available, linked: Some(mine) }
        },
    };

    rsx! {
        DashboardShell { title: "Team Lead Dashboard", active, on_logged_out, {body} }
    }
}

#[component]
pub fn EmployeeDashboard(on_logged_out: EventHandler<()>) -> Element {
    let active = use_signal(|| initial_tab(Role::Employee));

    let body = match resolve_tab(Role::Employee, active()) {
        Tab::MyTasks => rsx! { MyTasksTab {} },
        Tab::MyReports => rsx! { ReportsTab { scope: ReportScope::Mine } },
        Tab::MyAssets => rsx! { MyAssetsTab {} },
        Tab::Notifications => rsx! { NotificationsTab {} },
        _ => rsx! { ProjectsTab { scope: ProjectScope::Assigned } },
    };

    rsx! {
        DashboardShell { title: "Employee Dashboard", active, on_logged_out, {body} }
    }
}
