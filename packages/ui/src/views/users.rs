//! Employee directory (admin) and team membership (team lead).

use api::{Employee, ListQuery, Role, UserFilter};
use dioxus::prelude::*;

use crate::fields::{enum_options, parse_wire, wire_value, CheckboxField, SearchBox, SelectField};
use crate::list::{use_resource_view, ListController};
use crate::modal::{ConfirmDialog, ModalOverlay};
use crate::{use_api, BannerView, PaginationBar};

pub type PeopleList = ListController<UserFilter, Employee>;

/// Which people a picker offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeopleSource {
    Everyone,
    MyTeam,
}

/// Active people for select boxes and checklists, first 100 only.
pub fn use_people(source: PeopleSource) -> Resource<Vec<Employee>> {
    let client = use_api();
    use_resource(move || {
        let client = client.clone();
        async move {
            let query = ListQuery::new(UserFilter {
                role: None,
                active_only: true,
            })
            .with_limit(100);
            let result = match source {
                PeopleSource::Everyone => client.list_employees(&query).await,
                PeopleSource::MyTeam => client.my_team(&query).await,
            };
            match result {
                Ok(page) => page.items,
                Err(e) => {
                    tracing::warn!("Failed to load people: {}", e);
                    Vec::new()
                }
            }
        }
    })
}

pub fn people_options(people: &[Employee]) -> Vec<(String, String)> {
    people
        .iter()
        .map(|p| (p.id.clone(), p.display_name().to_string()))
        .collect()
}

#[component]
pub fn EmployeesTab() -> Element {
    let list: PeopleList = use_resource_view("employees", UserFilter::default(), |client, query| async move {
        client.list_employees(&query).await
    });
    let view = list.view.read();
    let filter = view.filter().clone();

    rsx! {
        section {
            class: "panel",
            header {
                class: "panel-header",
                h2 { "Employees" }
                div {
                    class: "panel-filters",
                    SearchBox {
                        value: view.search_text().to_string(),
                        oninput: move |text| list.search(text),
                    }
                    SelectField {
                        label: "Role",
                        value: wire_value(filter.role.as_ref()),
                        options: enum_options(&Role::ALL, |r| r.label()),
                        blank: "All roles".to_string(),
                        onchange: move |v: String| list.update_filter(|f| f.role = parse_wire(&v)),
                    }
                    CheckboxField {
                        label: "Active only",
                        checked: filter.active_only,
                        onchange: move |on| list.update_filter(|f| f.active_only = on),
                    }
                }
            }
            BannerView { banner: view.banner().cloned(), on_dismiss: move |id| list.dismiss_banner(id) }
            PeopleTable { people: view.items().to_vec(), loading: view.is_loading() }
            PaginationBar {
                pagination: *view.pagination(),
                page: view.page(),
                on_page: move |p| list.go_to_page(p),
            }
        }
    }
}

#[component]
fn PeopleTable(
    people: Vec<Employee>,
    loading: bool,
    #[props(default)] on_remove: Option<EventHandler<Employee>>,
) -> Element {
    if people.is_empty() {
        return rsx! {
            p { class: "empty-state", if loading { "Loading..." } else { "No people found." } }
        };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Email" }
                    th { "Role" }
                    th { "Designation" }
                    th { "Team lead" }
                    th { "Status" }
                    if on_remove.is_some() {
                        th {}
                    }
                }
            }
            tbody {
                for person in people {
                    tr {
                        key: "{person.id}",
                        td { "{person.display_name()}" }
                        td { "{person.email}" }
                        td { "{person.role.label()}" }
                        td { {person.designation.clone().unwrap_or_default()} }
                        td { {person.team_lead.as_ref().map(|t| t.display_name().to_string()).unwrap_or_default()} }
                        td {
                            if person.is_active {
                                span { class: "badge badge--green", "Active" }
                            } else {
                                span { class: "badge badge--gray", "Inactive" }
                            }
                        }
                        if let Some(on_remove) = on_remove {
                            td {
                                button {
                                    class: "btn btn-link btn-danger-text",
                                    onclick: {
                                        let person = person.clone();
                                        move |_| on_remove.call(person.clone())
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TeamTab() -> Element {
    let client = use_api();
    let list: PeopleList = use_resource_view("team members", UserFilter::default(), |client, query| async move {
        client.my_team(&query).await
    });
    let everyone = use_people(PeopleSource::Everyone);
    let mut adding = use_signal(|| false);
    let mut candidate = use_signal(String::new);

    let view = list.view.read();
    let members: Vec<String> = view.items().iter().map(|m| m.id.clone()).collect();
    let candidates: Vec<Employee> = everyone()
        .unwrap_or_default()
        .into_iter()
        .filter(|p| p.role == Role::Employee && !members.contains(&p.id))
        .collect();

    let add_client = client.clone();
    let add_member = move |_| {
        let user_id = candidate();
        if user_id.is_empty() {
            list.notify_error("Please select an employee");
            return;
        }
        let client = add_client.clone();
        spawn(async move {
            if list
                .run_mutation(client.assign_team_member(&user_id), "Team member added", "Failed to add team member")
                .await
            {
                adding.set(false);
                candidate.set(String::new());
            }
        });
    };

    let remove_client = client.clone();
    let confirm_remove = move |_| {
        let client = remove_client.clone();
        list.confirm_delete(
            move |id| async move { client.remove_team_member(&id).await },
            "Team member removed",
            "Failed to remove team member",
        );
    };

    rsx! {
        section {
            class: "panel",
            header {
                class: "panel-header",
                h2 { "My Team" }
                div {
                    class: "panel-filters",
                    SearchBox {
                        value: view.search_text().to_string(),
                        oninput: move |text| list.search(text),
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| adding.set(true),
                        "Add member"
                    }
                }
            }
            BannerView { banner: view.banner().cloned(), on_dismiss: move |id| list.dismiss_banner(id) }
            PeopleTable {
                people: view.items().to_vec(),
                loading: view.is_loading(),
                on_remove: move |person: Employee| {
                    let label = person.display_name().to_string();
                    list.request_delete(person.id, label);
                },
            }
            PaginationBar {
                pagination: *view.pagination(),
                page: view.page(),
                on_page: move |p| list.go_to_page(p),
            }
        }

        if adding() {
            ModalOverlay {
                on_close: move |_| adding.set(false),
                div {
                    class: "p-6",
                    h2 { class: "m-0 mb-5 text-lg font-semibold", "Add team member" }
                    SelectField {
                        label: "Employee",
                        value: candidate(),
                        options: people_options(&candidates),
                        blank: "Select an employee".to_string(),
                        onchange: move |v| candidate.set(v),
                    }
                    div {
                        class: "flex gap-2 mt-5",
                        button { class: "btn btn-primary", onclick: add_member, "Add" }
                        button { class: "btn btn-outline", onclick: move |_| adding.set(false), "Cancel" }
                    }
                }
            }
        }

        if let Some(pending) = view.pending_delete().cloned() {
            ConfirmDialog {
                title: "Remove team member",
                message: format!("Remove {} from your team?", pending.label),
                confirm_label: "Remove",
                on_confirm: confirm_remove,
                on_cancel: move |_| list.cancel_delete(),
            }
        }
    }
}
