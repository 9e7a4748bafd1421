//! Project screens for every role.
//!
//! One [`ProjectsPanel`] renders all four project listings; the
//! [`ProjectScope`] decides which endpoint feeds it and which row actions
//! appear. Opening a row fetches the full [`ProjectDetail`] into the list's
//! selection and shows [`ProjectDetailModal`], whose sub-forms refresh both
//! the list and the open detail after each change.

use std::future::Future;

use api::{
    ApiResult, ClientStatusDraft, MilestoneDraft, PaymentDraft, Project, ProjectDetail,
    ProjectDetailsDraft, ProjectDraft, ProjectFilter, ProjectGroup, ProjectGroupDraft,
    ProjectStatus, TaskFilter, TeamAssignmentDraft, TimeLogDraft,
};
use dioxus::prelude::*;
use store::inputs::{
    format_date, format_datetime, format_minutes, format_money, optional_text, parse_amount,
    parse_date, parse_datetime, parse_optional_amount,
};
use store::{FormModal, Validate};

use crate::fields::{enum_options, parse_wire, wire_value, CheckboxField, SearchBox, SelectField, TextAreaField, TextField};
use crate::form::{edit, show_date, show_instant, submit_form};
use crate::list::{use_resource_view, ListController};
use crate::modal::{ConfirmDialog, FormModalFrame, ModalOverlay};
use crate::views::users::{use_people, PeopleSource};
use crate::{use_api, use_session, BannerView, PaginationBar};

pub type ProjectList = ListController<ProjectFilter, Project, ProjectDetail>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectScope {
    /// Every project (admin).
    All,
    /// Unclaimed projects a team lead may pick.
    Available,
    /// Projects the team lead has picked.
    Mine,
    /// Projects the employee is on.
    Assigned,
}

impl ProjectScope {
    fn title(self) -> &'static str {
        match self {
            ProjectScope::All => "Projects",
            ProjectScope::Available => "Available Projects",
            ProjectScope::Mine | ProjectScope::Assigned => "My Projects",
        }
    }
}

pub fn use_project_list(scope: ProjectScope) -> ProjectList {
    use_resource_view("projects", ProjectFilter::default(), move |client, query| async move {
        match scope {
            ProjectScope::All => client.list_projects(&query).await,
            ProjectScope::Available => client.available_projects(&query).await,
            ProjectScope::Mine => client.my_projects(&query).await,
            ProjectScope::Assigned => client.assigned_projects(&query).await,
        }
    })
}

/// A project listing that owns its own controller.
#[component]
pub fn ProjectsTab(scope: ProjectScope) -> Element {
    let list = use_project_list(scope);
    rsx! {
        ProjectsPanel { scope, list, linked: None }
    }
}

/// Project listing. `linked` is the other side of pick/release: it is
/// re-fetched whenever a project moves between the two lists.
#[component]
pub fn ProjectsPanel(
    scope: ProjectScope,
    list: ProjectList,
    #[props(!optional)] linked: Option<ProjectList>,
) -> Element {
    let client = use_api();
    let session = use_session();
    let can_manage = scope == ProjectScope::All && session.read().can_manage_projects();
    let form = use_signal(FormModal::<ProjectDraft>::default);
    let mut group_form = use_signal(FormModal::<ProjectGroupDraft>::default);
    let mut groups = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                client.project_groups().await.unwrap_or_else(|e| {
                    tracing::warn!("Failed to load project groups: {}", e);
                    Vec::new()
                })
            }
        }
    });

    let view = list.view.read();
    let filter = view.filter().clone();
    let group_list = groups().unwrap_or_default();
    let group_options: Vec<(String, String)> =
        group_list.iter().map(|g| (g.id.clone(), g.name.clone())).collect();

    let delete_client = client.clone();
    let confirm_delete = move |_| {
        let client = delete_client.clone();
        list.confirm_delete(
            move |id| async move { client.delete_project(&id).await },
            "Project deleted",
            "Failed to delete project",
        );
    };

    let group_client = client.clone();
    let submit_group = move |_| {
        let client = group_client.clone();
        submit_form(
            group_form,
            move |s| async move { client.create_project_group(&s.draft).await },
            "Failed to create group",
            move || {
                list.notify_success("Project group created");
                groups.restart();
            },
        );
    };

    rsx! {
        section {
            class: "panel",
            header {
                class: "panel-header",
                h2 { "{scope.title()}" }
                div {
                    class: "panel-filters",
                    SearchBox {
                        value: view.search_text().to_string(),
                        placeholder: "Search projects...",
                        oninput: move |text| list.search(text),
                    }
                    SelectField {
                        label: "Status",
                        value: wire_value(filter.status.as_ref()),
                        options: enum_options(&ProjectStatus::SELECTABLE, |s| s.label()),
                        blank: "All statuses".to_string(),
                        onchange: move |v: String| list.update_filter(|f| f.status = parse_wire(&v)),
                    }
                    if scope == ProjectScope::All {
                        SelectField {
                            label: "Group",
                            value: filter.group_id.clone().unwrap_or_default(),
                            options: group_options.clone(),
                            blank: "All groups".to_string(),
                            onchange: move |v: String| list.update_filter(|f| f.group_id = optional_text(&v)),
                        }
                    }
                    if can_manage {
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| group_form.write().open_create(ProjectGroupDraft::default()),
                            "New group"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                let mut form = form;
                                form.write().open_create(ProjectDraft::default());
                            },
                            "New project"
                        }
                    }
                }
            }
            BannerView { banner: view.banner().cloned(), on_dismiss: move |id| list.dismiss_banner(id) }

            if view.is_empty() {
                p {
                    class: "empty-state",
                    if view.is_loading() { "Loading projects..." } else { "No projects found." }
                }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Client" }
                            th { "Status" }
                            th { "Team lead" }
                            th { "Budget" }
                            th { "Outstanding" }
                            th { "Deadline" }
                            th {}
                        }
                    }
                    tbody {
                        for project in view.items().iter().cloned() {
                            ProjectRow {
                                key: "{project.id}",
                                project: project.clone(),
                                scope,
                                list,
                                linked,
                                form,
                                can_manage,
                            }
                        }
                    }
                }
            }

            PaginationBar {
                pagination: *view.pagination(),
                page: view.page(),
                on_page: move |p| list.go_to_page(p),
            }
        }

        if form.read().is_open() {
            ProjectForm { list, form, groups: group_list.clone() }
        }

        if group_form.read().is_open() {
            FormModalFrame {
                title: "New project group",
                error: group_form.read().error().map(str::to_string),
                submitting: group_form.read().is_submitting(),
                submit_label: "Create",
                on_submit: submit_group,
                on_close: move |_| group_form.write().close(),
                TextField {
                    label: "Name",
                    value: group_form.read().draft().name.clone(),
                    required: true,
                    oninput: move |v| edit(group_form, |d| d.name = v),
                }
                TextAreaField {
                    label: "Description",
                    value: group_form.read().draft().description.clone(),
                    oninput: move |v| edit(group_form, |d| d.description = v),
                }
            }
        }

        if let Some(pending) = view.pending_delete().cloned() {
            ConfirmDialog {
                title: "Delete project",
                message: format!("Delete project {}? This cannot be undone.", pending.label),
                on_confirm: confirm_delete,
                on_cancel: move |_| list.cancel_delete(),
            }
        }

        if view.selected().is_some() {
            ProjectDetailModal { list, scope }
        }
    }
}

#[component]
fn ProjectRow(
    project: Project,
    scope: ProjectScope,
    list: ProjectList,
    #[props(!optional)] linked: Option<ProjectList>,
    form: Signal<FormModal<ProjectDraft>>,
    can_manage: bool,
) -> Element {
    let client = use_api();
    let mut form = form;

    let view_client = client.clone();
    let view_id = project.id.clone();
    let open = move |_| {
        let client = view_client.clone();
        let id = view_id.clone();
        list.open_detail(async move { client.project(&id).await }, "Failed to load project");
    };

    let pick_client = client.clone();
    let pick_target = (project.id.clone(), project.name.clone());
    let pick = move |_| {
        let client = pick_client.clone();
        let (id, name) = pick_target.clone();
        async move {
            let picked = list
                .run_mutation(
                    client.pick_project(&id),
                    format!("Project {name} picked"),
                    "Failed to pick project",
                )
                .await;
            if picked {
                if let Some(mine) = linked {
                    mine.reload();
                }
            }
        }
    };

    let release_client = client.clone();
    let release_target = (project.id.clone(), project.name.clone());
    let release = move |_| {
        let client = release_client.clone();
        let (id, name) = release_target.clone();
        async move {
            let released = list
                .run_mutation(
                    client.release_project(&id),
                    format!("Project {name} released"),
                    "Failed to release project",
                )
                .await;
            if released {
                if let Some(available) = linked {
                    available.reload();
                }
            }
        }
    };

    let edit_target = project.clone();
    let delete_target = (project.id.clone(), project.name.clone());

    rsx! {
        tr {
            td {
                div { class: "font-medium", "{project.name}" }
                if let Some(group) = &project.group {
                    div { class: "text-xs text-neutral-500", "{group.name}" }
                }
            }
            td { {project.client_name.clone().unwrap_or_default()} }
            td { StatusBadge { status: project.status } }
            td { {project.team_lead.as_ref().map(|u| u.display_name().to_string()).unwrap_or_else(|| "-".to_string())} }
            td { "{format_money(project.budget)}" }
            td { "{format_money(project.outstanding())}" }
            td { "{show_date(project.deadline)}" }
            td {
                class: "row-actions",
                button { class: "btn btn-link", onclick: open, "View" }
                if scope == ProjectScope::Available {
                    button { class: "btn btn-link", onclick: pick, "Pick" }
                }
                if scope == ProjectScope::Mine {
                    button { class: "btn btn-link", onclick: release, "Release" }
                }
                if can_manage {
                    button {
                        class: "btn btn-link",
                        onclick: move |_| {
                            form.write().open_edit(edit_target.id.clone(), ProjectDraft::from(&edit_target));
                        },
                        "Edit"
                    }
                    button {
                        class: "btn btn-link btn-danger-text",
                        onclick: move |_| list.request_delete(delete_target.0.clone(), delete_target.1.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn StatusBadge(status: ProjectStatus) -> Element {
    let tone = match status {
        ProjectStatus::Completed => "badge--green",
        ProjectStatus::InProgress => "badge--blue",
        ProjectStatus::OnHold => "badge--amber",
        ProjectStatus::Cancelled => "badge--red",
        ProjectStatus::Pending | ProjectStatus::Unknown => "badge--gray",
    };
    rsx! {
        span { class: "badge {tone}", "{status.label()}" }
    }
}

#[component]
fn ProjectForm(list: ProjectList, form: Signal<FormModal<ProjectDraft>>, groups: Vec<ProjectGroup>) -> Element {
    let client = use_api();
    let mut form = form;
    let state = form.read();
    let draft = state.draft().clone();
    let title = if state.is_edit() { "Edit project" } else { "New project" };

    let on_submit = move |_| {
        let client = client.clone();
        submit_form(
            form,
            move |s| async move {
                match s.id() {
                    Some(id) => client.update_project(id, &s.draft).await,
                    None => client.create_project(&s.draft).await,
                }
            },
            "Failed to save project",
            move || {
                list.notify_success("Project saved");
                list.reload();
            },
        );
    };

    rsx! {
        FormModalFrame {
            title: title.to_string(),
            error: state.error().map(str::to_string),
            submitting: state.is_submitting(),
            on_submit,
            on_close: move |_| form.write().close(),
            TextField {
                label: "Name",
                value: draft.name.clone(),
                required: true,
                oninput: move |v| edit(form, |d| d.name = v),
            }
            TextField {
                label: "Client",
                value: draft.client_name.clone(),
                oninput: move |v| edit(form, |d| d.client_name = v),
            }
            TextAreaField {
                label: "Description",
                value: draft.description.clone(),
                oninput: move |v| edit(form, |d| d.description = v),
            }
            div {
                class: "field-row",
                TextField {
                    label: "Budget",
                    kind: "number",
                    value: draft.budget.to_string(),
                    oninput: move |v: String| edit(form, |d| d.budget = parse_amount(&v)),
                }
                SelectField {
                    label: "Status",
                    value: wire_value(Some(&draft.status)),
                    options: enum_options(&ProjectStatus::SELECTABLE, |s| s.label()),
                    onchange: move |v: String| edit(form, |d| d.status = parse_wire(&v).unwrap_or_default()),
                }
            }
            div {
                class: "field-row",
                TextField {
                    label: "Start date",
                    kind: "date",
                    value: format_date(draft.start_date),
                    oninput: move |v: String| edit(form, |d| d.start_date = parse_date(&v)),
                }
                TextField {
                    label: "Deadline",
                    kind: "date",
                    value: format_date(draft.deadline),
                    oninput: move |v: String| edit(form, |d| d.deadline = parse_date(&v)),
                }
            }
            SelectField {
                label: "Group",
                value: draft.group_id.clone().unwrap_or_default(),
                options: groups.iter().map(|g| (g.id.clone(), g.name.clone())).collect::<Vec<_>>(),
                blank: "No group".to_string(),
                onchange: move |v: String| edit(form, |d| d.group_id = optional_text(&v)),
            }
        }
    }
}

/// Re-fetch the list and the open detail after a sub-resource change.
fn refresh(list: ProjectList, client: api::Client, id: String, message: &'static str) {
    list.notify_success(message);
    list.reload();
    list.open_detail(async move { client.project(&id).await }, "Failed to load project");
}

/// Submit one of the detail sub-forms against project `id`.
fn submit_detail<D, Fut>(
    list: ProjectList,
    client: api::Client,
    form: Signal<FormModal<D>>,
    id: String,
    send: impl FnOnce(api::Client, String, D) -> Fut + 'static,
    success: &'static str,
    fallback: &'static str,
) where
    D: Clone + Default + Validate + 'static,
    Fut: Future<Output = ApiResult<()>> + 'static,
{
    let send_client = client.clone();
    let send_id = id.clone();
    submit_form(
        form,
        move |s| send(send_client, send_id, s.draft),
        fallback,
        move || refresh(list, client, id, success),
    );
}

#[component]
fn ProjectDetailModal(list: ProjectList, scope: ProjectScope) -> Element {
    let client = use_api();
    let session = use_session();
    let Some(detail) = list.view.read().selected().cloned() else {
        return rsx! {};
    };
    let project = &detail.project;
    let is_admin = session.read().can_manage_projects();
    let leads_it = scope == ProjectScope::Mine;
    let logs_time = matches!(scope, ProjectScope::Mine | ProjectScope::Assigned);

    let recalc_client = client.clone();
    let recalc_id = project.id.clone();
    let recalculate = move |_| {
        let client = recalc_client.clone();
        let id = recalc_id.clone();
        async move {
            match client.recalculate_project(&id).await {
                Ok(()) => refresh(list, client, id, "Project totals recalculated"),
                Err(e) if e.is_unauthorized() => {}
                Err(e) => list.notify_error(e.user_message("Failed to recalculate project")),
            }
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| list.clear_selection(),
            width: "max-w-3xl",
            div {
                class: "p-6 detail",
                header {
                    class: "detail-header",
                    h2 { "{project.name}" }
                    StatusBadge { status: project.status }
                }
                BannerView { banner: list.banner(), on_dismiss: move |id| list.dismiss_banner(id) }

                dl {
                    class: "detail-grid",
                    dt { "Client" }
                    dd { {project.client_name.clone().unwrap_or_else(|| "-".to_string())} }
                    dt { "Client status" }
                    dd { {project.client_status.clone().unwrap_or_else(|| "-".to_string())} }
                    dt { "Budget" }
                    dd { "{format_money(project.budget)}" }
                    dt { "Paid" }
                    dd { "{format_money(project.amount_paid)}" }
                    dt { "Outstanding" }
                    dd { "{format_money(project.outstanding())}" }
                    dt { "Start" }
                    dd { "{show_date(project.start_date)}" }
                    dt { "Deadline" }
                    dd { "{show_date(project.deadline)}" }
                    dt { "Team lead" }
                    dd { {project.team_lead.as_ref().map(|u| u.display_name().to_string()).unwrap_or_else(|| "-".to_string())} }
                    dt { "Team" }
                    dd {
                        if project.team.is_empty() {
                            "-"
                        } else {
                            {project.team.iter().map(|u| u.display_name()).collect::<Vec<_>>().join(", ")}
                        }
                    }
                    dt { "Time logged" }
                    dd { "{format_minutes(detail.total_minutes())}" }
                }

                DetailsSection { list, detail: detail.clone(), editable: is_admin || leads_it }

                PaymentsSection { list, detail: detail.clone(), editable: is_admin }
                MilestonesSection { list, detail: detail.clone(), editable: is_admin || leads_it }
                TimeEntriesSection { list, detail: detail.clone(), editable: logs_time }

                if is_admin {
                    ClientStatusSection { list, detail: detail.clone() }
                }
                if leads_it {
                    TeamSection { list, detail: detail.clone() }
                }

                div {
                    class: "flex gap-2 mt-5",
                    if is_admin {
                        button { class: "btn btn-outline", onclick: recalculate, "Recalculate totals" }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| list.clear_selection(),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn DetailsSection(list: ProjectList, detail: ProjectDetail, editable: bool) -> Element {
    let client = use_api();
    let mut form = use_signal(FormModal::<ProjectDetailsDraft>::default);
    let id = detail.project.id.clone();
    let seed = ProjectDetailsDraft {
        description: detail.project.description.clone(),
        requirements: detail.requirements.clone(),
        repository_url: detail.repository_url.clone(),
    };

    let on_submit = move |_| {
        submit_detail(
            list,
            client.clone(),
            form,
            id.clone(),
            |c, id, d| async move { c.update_project_details(&id, &d).await },
            "Project details updated",
            "Failed to update project details",
        );
    };

    let state = form.read();
    rsx! {
        section {
            class: "detail-section",
            h3 { "Details" }
            p { class: "whitespace-pre-wrap", "{detail.project.description}" }
            if !detail.requirements.is_empty() {
                h4 { "Requirements" }
                p { class: "whitespace-pre-wrap", "{detail.requirements}" }
            }
            if let Some(url) = &detail.repository_url {
                p {
                    "Repository: "
                    a { href: "{url}", target: "_blank", rel: "noopener", "{url}" }
                }
            }
            if editable {
                button {
                    class: "btn btn-link",
                    onclick: move |_| form.write().open_create(seed.clone()),
                    "Edit details"
                }
            }
        }
        if state.is_open() {
            FormModalFrame {
                title: "Project details",
                error: state.error().map(str::to_string),
                submitting: state.is_submitting(),
                on_submit,
                on_close: move |_| form.write().close(),
                TextAreaField {
                    label: "Description",
                    value: state.draft().description.clone(),
                    oninput: move |v| edit(form, |d| d.description = v),
                }
                TextAreaField {
                    label: "Requirements",
                    value: state.draft().requirements.clone(),
                    rows: 6,
                    oninput: move |v| edit(form, |d| d.requirements = v),
                }
                TextField {
                    label: "Repository URL",
                    kind: "url",
                    value: state.draft().repository_url.clone().unwrap_or_default(),
                    oninput: move |v: String| edit(form, |d| d.repository_url = optional_text(&v)),
                }
            }
        }
    }
}

#[component]
fn PaymentsSection(list: ProjectList, detail: ProjectDetail, editable: bool) -> Element {
    let client = use_api();
    let mut form = use_signal(FormModal::<PaymentDraft>::default);
    let id = detail.project.id.clone();

    let on_submit = move |_| {
        submit_detail(
            list,
            client.clone(),
            form,
            id.clone(),
            |c, id, d| async move { c.add_payment(&id, &d).await },
            "Payment recorded",
            "Failed to record payment",
        );
    };

    let state = form.read();
    rsx! {
        section {
            class: "detail-section",
            h3 { "Payments" }
            if detail.payments.is_empty() {
                p { class: "empty-state", "No payments recorded." }
            }
            ul {
                for payment in detail.payments.iter() {
                    li {
                        key: "{payment.id}",
                        "{format_money(payment.amount)} on {show_date(payment.paid_on)}"
                        if !payment.note.is_empty() {
                            span { class: "text-neutral-500", " ({payment.note})" }
                        }
                    }
                }
            }
            if editable {
                button {
                    class: "btn btn-link",
                    onclick: move |_| form.write().open_create(PaymentDraft::default()),
                    "Add payment"
                }
            }
        }
        if state.is_open() {
            FormModalFrame {
                title: "Add payment",
                error: state.error().map(str::to_string),
                submitting: state.is_submitting(),
                submit_label: "Add",
                on_submit,
                on_close: move |_| form.write().close(),
                TextField {
                    label: "Amount",
                    kind: "number",
                    value: state.draft().amount.to_string(),
                    oninput: move |v: String| edit(form, |d| d.amount = parse_amount(&v)),
                }
                TextField {
                    label: "Paid on",
                    kind: "date",
                    value: format_date(state.draft().paid_on),
                    oninput: move |v: String| edit(form, |d| d.paid_on = parse_date(&v)),
                }
                TextField {
                    label: "Note",
                    value: state.draft().note.clone(),
                    oninput: move |v| edit(form, |d| d.note = v),
                }
            }
        }
    }
}

#[component]
fn MilestonesSection(list: ProjectList, detail: ProjectDetail, editable: bool) -> Element {
    let client = use_api();
    let mut form = use_signal(FormModal::<MilestoneDraft>::default);
    let id = detail.project.id.clone();

    let add_client = client.clone();
    let add_id = id.clone();
    let on_submit = move |_| {
        submit_detail(
            list,
            add_client.clone(),
            form,
            add_id.clone(),
            |c, id, d| async move { c.add_milestone(&id, &d).await },
            "Milestone added",
            "Failed to add milestone",
        );
    };

    let state = form.read();
    rsx! {
        section {
            class: "detail-section",
            h3 { "Milestones" }
            if detail.milestones.is_empty() {
                p { class: "empty-state", "No milestones yet." }
            }
            ul {
                for milestone in detail.milestones.iter().cloned() {
                    li {
                        key: "{milestone.id}",
                        if editable {
                            CheckboxField {
                                label: milestone.title.clone(),
                                checked: milestone.completed,
                                onchange: {
                                    let client = client.clone();
                                    let id = id.clone();
                                    let milestone = milestone.clone();
                                    move |done: bool| {
                                        let client = client.clone();
                                        let id = id.clone();
                                        let milestone_id = milestone.id.clone();
                                        let mut draft = MilestoneDraft::from(&milestone);
                                        draft.completed = done;
                                        spawn(async move {
                                            match client.update_milestone(&id, &milestone_id, &draft).await {
                                                Ok(()) => refresh(list, client, id, "Milestone updated"),
                                                Err(e) if e.is_unauthorized() => {}
                                                Err(e) => list.notify_error(e.user_message("Failed to update milestone")),
                                            }
                                        });
                                    }
                                },
                            }
                        } else {
                            span {
                                class: if milestone.completed { "line-through text-neutral-500" } else { "" },
                                "{milestone.title}"
                            }
                        }
                        span {
                            class: "text-xs text-neutral-500",
                            " due {show_date(milestone.due_date)}"
                            if let Some(amount) = milestone.amount {
                                " · {format_money(amount)}"
                            }
                        }
                    }
                }
            }
            if editable {
                button {
                    class: "btn btn-link",
                    onclick: move |_| form.write().open_create(MilestoneDraft::default()),
                    "Add milestone"
                }
            }
        }
        if state.is_open() {
            FormModalFrame {
                title: "Add milestone",
                error: state.error().map(str::to_string),
                submitting: state.is_submitting(),
                submit_label: "Add",
                on_submit,
                on_close: move |_| form.write().close(),
                TextField {
                    label: "Title",
                    value: state.draft().title.clone(),
                    required: true,
                    oninput: move |v| edit(form, |d| d.title = v),
                }
                TextField {
                    label: "Due date",
                    kind: "date",
                    value: format_date(state.draft().due_date),
                    oninput: move |v: String| edit(form, |d| d.due_date = parse_date(&v)),
                }
                TextField {
                    label: "Amount",
                    kind: "number",
                    value: state.draft().amount.map(|a| a.to_string()).unwrap_or_default(),
                    oninput: move |v: String| edit(form, |d| d.amount = parse_optional_amount(&v)),
                }
            }
        }
    }
}

#[component]
fn TimeEntriesSection(list: ProjectList, detail: ProjectDetail, editable: bool) -> Element {
    let client = use_api();
    let mut form = use_signal(FormModal::<TimeLogDraft>::default);
    let id = detail.project.id.clone();

    let tasks_id = id.clone();
    let tasks_client = client.clone();
    let tasks = use_resource(move || {
        let client = tasks_client.clone();
        let project_id = tasks_id.clone();
        async move {
            if !editable {
                return Vec::new();
            }
            let query = api::ListQuery::new(TaskFilter {
                project_id: Some(project_id),
                ..Default::default()
            })
            .with_limit(100);
            match client.my_tasks(&query).await {
                Ok(page) => page.items,
                Err(e) => {
                    tracing::warn!("Failed to load tasks: {}", e);
                    Vec::new()
                }
            }
        }
    });
    let task_options: Vec<(String, String)> = tasks()
        .unwrap_or_default()
        .into_iter()
        .map(|t| (t.id, t.title))
        .collect();

    let on_submit = move |_| {
        submit_detail(
            list,
            client.clone(),
            form,
            id.clone(),
            |c, id, d| async move { c.add_time_entry(&id, &d).await },
            "Time entry added",
            "Failed to add time entry",
        );
    };

    let state = form.read();
    rsx! {
        section {
            class: "detail-section",
            h3 { "Time entries" }
            if detail.time_entries.is_empty() {
                p { class: "empty-state", "No time logged." }
            }
            ul {
                for entry in detail.time_entries.iter() {
                    li {
                        key: "{entry.id}",
                        "{format_minutes(entry.minutes())}"
                        if let Some(user) = &entry.user {
                            " by {user.display_name()}"
                        }
                        span { class: "text-xs text-neutral-500", " {show_instant(entry.start_time)}" }
                        if !entry.description.is_empty() {
                            div { class: "text-sm", "{entry.description}" }
                        }
                    }
                }
            }
            if editable {
                button {
                    class: "btn btn-link",
                    onclick: move |_| form.write().open_create(TimeLogDraft::default()),
                    "Log time"
                }
            }
        }
        if state.is_open() {
            FormModalFrame {
                title: "Log time",
                error: state.error().map(str::to_string),
                submitting: state.is_submitting(),
                submit_label: "Log",
                on_submit,
                on_close: move |_| form.write().close(),
                SelectField {
                    label: "Task",
                    value: state.draft().task_id.clone(),
                    options: task_options,
                    blank: "Select a task".to_string(),
                    onchange: move |v| edit(form, |d| d.task_id = v),
                }
                div {
                    class: "field-row",
                    TextField {
                        label: "Start",
                        kind: "datetime-local",
                        value: format_datetime(state.draft().start_time),
                        oninput: move |v: String| edit(form, |d| d.start_time = parse_datetime(&v)),
                    }
                    TextField {
                        label: "End",
                        kind: "datetime-local",
                        value: format_datetime(state.draft().end_time),
                        oninput: move |v: String| edit(form, |d| d.end_time = parse_datetime(&v)),
                    }
                }
                TextAreaField {
                    label: "Description",
                    value: state.draft().description.clone(),
                    oninput: move |v| edit(form, |d| d.description = v),
                }
            }
        }
    }
}

#[component]
fn ClientStatusSection(list: ProjectList, detail: ProjectDetail) -> Element {
    let client = use_api();
    let mut form = use_signal(FormModal::<ClientStatusDraft>::default);
    let id = detail.project.id.clone();
    let current = detail.project.client_status.clone().unwrap_or_default();

    let on_submit = move |_| {
        submit_detail(
            list,
            client.clone(),
            form,
            id.clone(),
            |c, id, d| async move { c.update_client_status(&id, &d).await },
            "Client status updated",
            "Failed to update client status",
        );
    };

    let state = form.read();
    rsx! {
        section {
            class: "detail-section",
            h3 { "Client status" }
            button {
                class: "btn btn-link",
                onclick: move |_| form.write().open_create(ClientStatusDraft { client_status: current.clone() }),
                "Update client status"
            }
        }
        if state.is_open() {
            FormModalFrame {
                title: "Client status",
                error: state.error().map(str::to_string),
                submitting: state.is_submitting(),
                on_submit,
                on_close: move |_| form.write().close(),
                TextField {
                    label: "Client status",
                    value: state.draft().client_status.clone(),
                    required: true,
                    oninput: move |v| edit(form, |d| d.client_status = v),
                }
            }
        }
    }
}

#[component]
fn TeamSection(list: ProjectList, detail: ProjectDetail) -> Element {
    let client = use_api();
    let team = use_people(PeopleSource::MyTeam);
    let mut form = use_signal(FormModal::<TeamAssignmentDraft>::default);
    let id = detail.project.id.clone();
    let current: Vec<String> = detail.project.team.iter().map(|u| u.id.clone()).collect();

    let on_submit = move |_| {
        submit_detail(
            list,
            client.clone(),
            form,
            id.clone(),
            |c, id, d| async move { c.assign_project_team(&id, &d).await },
            "Project team updated",
            "Failed to update project team",
        );
    };

    let members = team().unwrap_or_default();
    let state = form.read();
    rsx! {
        section {
            class: "detail-section",
            h3 { "Project team" }
            button {
                class: "btn btn-link",
                onclick: move |_| form.write().open_create(TeamAssignmentDraft { member_ids: current.clone() }),
                "Assign team"
            }
        }
        if state.is_open() {
            FormModalFrame {
                title: "Assign team",
                error: state.error().map(str::to_string),
                submitting: state.is_submitting(),
                on_submit,
                on_close: move |_| form.write().close(),
                if members.is_empty() {
                    p { class: "empty-state", "Your team has no members yet." }
                }
                for member in members {
                    CheckboxField {
                        key: "{member.id}",
                        label: member.display_name().to_string(),
                        checked: state.draft().member_ids.contains(&member.id),
                        onchange: {
                            let member_id = member.id.clone();
                            move |on: bool| {
                                let member_id = member_id.clone();
                                edit(form, |d| {
                                    d.member_ids.retain(|m| *m != member_id);
                                    if on {
                                        d.member_ids.push(member_id);
                                    }
                                })
                            }
                        },
                    }
                }
            }
        }
    }
}
