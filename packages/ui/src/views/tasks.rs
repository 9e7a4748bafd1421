//! Task management (admin, team lead) and task self-service (employee).

use api::{
    ListQuery, ProjectFilter, Role, Task, TaskDetail, TaskDraft, TaskFilter, TaskPriority,
    TaskResponseDraft, TaskStatus, TimeLogDraft,
};
use dioxus::prelude::*;
use store::inputs::{format_date, format_datetime, format_minutes, optional_text, parse_date, parse_datetime};
use store::FormModal;

use crate::fields::{enum_options, parse_wire, wire_value, SearchBox, SelectField, TextAreaField, TextField};
use crate::form::{edit, show_date, show_instant, show_local, submit_form};
use crate::list::{use_resource_view, ListController};
use crate::modal::{ConfirmDialog, FormModalFrame, ModalOverlay};
use crate::views::users::{people_options, use_people, PeopleSource};
use crate::{use_api, use_session, BannerView, PaginationBar};

pub type TaskList = ListController<TaskFilter, Task, TaskDetail>;

/// `(id, name)` of the projects the current user may attach tasks to.
pub(crate) fn use_project_options() -> Resource<Vec<(String, String)>> {
    let client = use_api();
    let session = use_session();
    use_resource(move || {
        let client = client.clone();
        let role = session.read().role();
        async move {
            let query = ListQuery::new(ProjectFilter::default()).with_limit(100);
            let result = match role {
                Some(Role::Admin) => client.list_projects(&query).await,
                Some(Role::TeamLead) => client.my_projects(&query).await,
                _ => client.assigned_projects(&query).await,
            };
            match result {
                Ok(page) => page.items.into_iter().map(|p| (p.id, p.name)).collect(),
                Err(e) => {
                    tracing::warn!("Failed to load projects: {}", e);
                    Vec::new()
                }
            }
        }
    })
}

#[component]
fn TaskFilters(list: TaskList, projects: Vec<(String, String)>) -> Element {
    let view = list.view.read();
    let filter = view.filter().clone();
    rsx! {
        div {
            class: "panel-filters",
            SearchBox {
                value: view.search_text().to_string(),
                placeholder: "Search tasks...",
                oninput: move |text| list.search(text),
            }
            SelectField {
                label: "Status",
                value: wire_value(filter.status.as_ref()),
                options: enum_options(&TaskStatus::SELECTABLE, |s| s.label()),
                blank: "All statuses".to_string(),
                onchange: move |v: String| list.update_filter(|f| f.status = parse_wire(&v)),
            }
            SelectField {
                label: "Priority",
                value: wire_value(filter.priority.as_ref()),
                options: enum_options(&TaskPriority::ALL, |p| p.label()),
                blank: "All priorities".to_string(),
                onchange: move |v: String| list.update_filter(|f| f.priority = parse_wire(&v)),
            }
            SelectField {
                label: "Project",
                value: filter.project_id.clone().unwrap_or_default(),
                options: projects,
                blank: "All projects".to_string(),
                onchange: move |v: String| list.update_filter(|f| f.project_id = optional_text(&v)),
            }
        }
    }
}

#[component]
fn PriorityBadge(priority: TaskPriority) -> Element {
    let tone = match priority {
        TaskPriority::Low => "badge--gray",
        TaskPriority::Medium => "badge--blue",
        TaskPriority::High => "badge--amber",
        TaskPriority::Urgent => "badge--red",
    };
    rsx! {
        span { class: "badge {tone}", "{priority.label()}" }
    }
}

/// Task CRUD for admins and team leads.
#[component]
pub fn TasksTab() -> Element {
    let client = use_api();
    let session = use_session();
    let list: TaskList = use_resource_view("tasks", TaskFilter::default(), |client, query| async move {
        client.list_tasks(&query).await
    });
    let projects = use_project_options();
    let source = if session.read().has_role(Role::TeamLead) {
        PeopleSource::MyTeam
    } else {
        PeopleSource::Everyone
    };
    let people = use_people(source);
    let mut form = use_signal(FormModal::<TaskDraft>::default);

    let delete_client = client.clone();
    let confirm_delete = move |_| {
        let client = delete_client.clone();
        list.confirm_delete(
            move |id| async move { client.delete_task(&id).await },
            "Task deleted",
            "Failed to delete task",
        );
    };

    let save_client = client.clone();
    let on_submit = move |_| {
        let client = save_client.clone();
        submit_form(
            form,
            move |s| async move {
                match s.id() {
                    Some(id) => client.update_task(id, &s.draft).await,
                    None => client.create_task(&s.draft).await,
                }
            },
            "Failed to save task",
            move || {
                list.notify_success("Task saved");
                list.reload();
            },
        );
    };

    let view = list.view.read();
    let project_options = projects().unwrap_or_default();
    let assignee_options = people_options(&people().unwrap_or_default());
    let state = form.read();

    rsx! {
        section {
            class: "panel",
            header {
                class: "panel-header",
                h2 { "Tasks" }
                TaskFilters { list, projects: project_options.clone() }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| form.write().open_create(TaskDraft::default()),
                    "New task"
                }
            }
            BannerView { banner: view.banner().cloned(), on_dismiss: move |id| list.dismiss_banner(id) }

            if view.is_empty() {
                p {
                    class: "empty-state",
                    if view.is_loading() { "Loading tasks..." } else { "No tasks found." }
                }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Project" }
                            th { "Assignee" }
                            th { "Priority" }
                            th { "Status" }
                            th { "Due" }
                            th {}
                        }
                    }
                    tbody {
                        for task in view.items().iter().cloned() {
                            tr {
                                key: "{task.id}",
                                td { "{task.title}" }
                                td { {task.project.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| "-".to_string())} }
                                td { {task.assignee.as_ref().map(|u| u.display_name().to_string()).unwrap_or_else(|| "Unassigned".to_string())} }
                                td { PriorityBadge { priority: task.priority } }
                                td { "{task.status.label()}" }
                                td { "{show_date(task.due_date)}" }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "btn btn-link",
                                        onclick: {
                                            let client = client.clone();
                                            let id = task.id.clone();
                                            move |_| {
                                                let client = client.clone();
                                                let id = id.clone();
                                                list.open_detail(async move { client.task(&id).await }, "Failed to load task");
                                            }
                                        },
                                        "View"
                                    }
                                    button {
                                        class: "btn btn-link",
                                        onclick: {
                                            let task = task.clone();
                                            move |_| form.write().open_edit(task.id.clone(), TaskDraft::from(&task))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-link btn-danger-text",
                                        onclick: {
                                            let (id, title) = (task.id.clone(), task.title.clone());
                                            move |_| list.request_delete(id.clone(), title.clone())
                                        },
                                        "Delete"
                                    }
                                }
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

        if state.is_open() {
            FormModalFrame {
                title: if state.is_edit() { "Edit task".to_string() } else { "New task".to_string() },
                error: state.error().map(str::to_string),
                submitting: state.is_submitting(),
                on_submit,
                on_close: move |_| form.write().close(),
                TextField {
                    label: "Title",
                    value: state.draft().title.clone(),
                    required: true,
                    oninput: move |v| edit(form, |d| d.title = v),
                }
                TextAreaField {
                    label: "Description",
                    value: state.draft().description.clone(),
                    oninput: move |v| edit(form, |d| d.description = v),
                }
                SelectField {
                    label: "Project",
                    value: state.draft().project_id.clone().unwrap_or_default(),
                    options: project_options,
                    blank: "No project".to_string(),
                    onchange: move |v: String| edit(form, |d| d.project_id = optional_text(&v)),
                }
                SelectField {
                    label: "Assignee",
                    value: state.draft().assignee_id.clone().unwrap_or_default(),
                    options: assignee_options,
                    blank: "Unassigned".to_string(),
                    onchange: move |v: String| edit(form, |d| d.assignee_id = optional_text(&v)),
                }
                div {
                    class: "field-row",
                    SelectField {
                        label: "Priority",
                        value: wire_value(Some(&state.draft().priority)),
                        options: enum_options(&TaskPriority::ALL, |p| p.label()),
                        onchange: move |v: String| edit(form, |d| d.priority = parse_wire(&v).unwrap_or_default()),
                    }
                    TextField {
                        label: "Due date",
                        kind: "date",
                        value: format_date(state.draft().due_date),
                        oninput: move |v: String| edit(form, |d| d.due_date = parse_date(&v)),
                    }
                }
            }
        }

        if let Some(pending) = view.pending_delete().cloned() {
            ConfirmDialog {
                title: "Delete task",
                message: format!("Delete task {}?", pending.label),
                on_confirm: confirm_delete,
                on_cancel: move |_| list.cancel_delete(),
            }
        }

        if view.selected().is_some() {
            TaskDetailModal { list }
        }
    }
}

/// The signed-in user's own tasks.
#[component]
pub fn MyTasksTab() -> Element {
    let client = use_api();
    let list: TaskList = use_resource_view("tasks", TaskFilter::default(), |client, query| async move {
        client.my_tasks(&query).await
    });
    let projects = use_project_options();
    let mut respond = use_signal(FormModal::<TaskResponseDraft>::default);
    let mut log_time = use_signal(FormModal::<TimeLogDraft>::default);

    let respond_client = client.clone();
    let submit_response = move |_| {
        let client = respond_client.clone();
        submit_form(
            respond,
            move |s| async move {
                let id = s.id().unwrap_or_default().to_string();
                client.add_task_response(&id, &s.draft).await
            },
            "Failed to add response",
            move || {
                list.notify_success("Response added");
                list.reload();
            },
        );
    };

    let log_client = client.clone();
    let submit_time = move |_| {
        let client = log_client.clone();
        submit_form(
            log_time,
            move |s| async move { client.log_task_time(&s.draft).await },
            "Failed to log time",
            move || {
                list.notify_success("Time logged");
                list.reload();
            },
        );
    };

    let view = list.view.read();
    let task_options: Vec<(String, String)> =
        view.items().iter().map(|t| (t.id.clone(), t.title.clone())).collect();
    let respond_state = respond.read();
    let log_state = log_time.read();

    rsx! {
        section {
            class: "panel",
            header {
                class: "panel-header",
                h2 { "My Tasks" }
                TaskFilters { list, projects: projects().unwrap_or_default() }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| log_time.write().open_create(TimeLogDraft::default()),
                    "Log time"
                }
            }
            BannerView { banner: view.banner().cloned(), on_dismiss: move |id| list.dismiss_banner(id) }

            if view.is_empty() {
                p {
                    class: "empty-state",
                    if view.is_loading() { "Loading tasks..." } else { "No tasks assigned to you." }
                }
            }
            div {
                class: "card-grid",
                for task in view.items().iter().cloned() {
                    article {
                        key: "{task.id}",
                        class: "card",
                        header {
                            class: "card-header",
                            h3 { "{task.title}" }
                            PriorityBadge { priority: task.priority }
                        }
                        p { class: "text-sm text-neutral-600", "{task.description}" }
                        div {
                            class: "text-xs text-neutral-500",
                            {task.project.as_ref().map(|p| p.name.clone()).unwrap_or_default()}
                            " · due {show_date(task.due_date)} · {format_minutes((task.hours_logged * 60.0).round() as i64)} logged"
                        }
                        div {
                            class: "card-actions",
                            SelectField {
                                label: "Status",
                                value: wire_value(Some(&task.status)),
                                options: enum_options(&TaskStatus::SELECTABLE, |s| s.label()),
                                onchange: {
                                    let client = client.clone();
                                    let id = task.id.clone();
                                    move |v: String| {
                                        let Some(status) = parse_wire::<TaskStatus>(&v) else {
                                            return;
                                        };
                                        let client = client.clone();
                                        let id = id.clone();
                                        spawn(async move {
                                            list.run_mutation(
                                                client.update_task_status(&id, status),
                                                format!("Task marked {}", status.label().to_lowercase()),
                                                "Failed to update task status",
                                            )
                                            .await;
                                        });
                                    }
                                },
                            }
                            button {
                                class: "btn btn-link",
                                onclick: {
                                    let id = task.id.clone();
                                    move |_| respond.write().open_edit(id.clone(), TaskResponseDraft::default())
                                },
                                "Respond"
                            }
                            button {
                                class: "btn btn-link",
                                onclick: {
                                    let id = task.id.clone();
                                    move |_| {
                                        log_time.write().open_create(TimeLogDraft {
                                            task_id: id.clone(),
                                            ..Default::default()
                                        })
                                    }
                                },
                                "Log time"
                            }
                            button {
                                class: "btn btn-link",
                                onclick: {
                                    let client = client.clone();
                                    let id = task.id.clone();
                                    move |_| {
                                        let client = client.clone();
                                        let id = id.clone();
                                        list.open_detail(async move { client.task(&id).await }, "Failed to load task");
                                    }
                                },
                                "Details"
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

        if respond_state.is_open() {
            FormModalFrame {
                title: "Respond to task",
                error: respond_state.error().map(str::to_string),
                submitting: respond_state.is_submitting(),
                submit_label: "Send",
                on_submit: submit_response,
                on_close: move |_| respond.write().close(),
                TextAreaField {
                    label: "Response",
                    value: respond_state.draft().message.clone(),
                    oninput: move |v| edit(respond, |d| d.message = v),
                }
            }
        }

        if log_state.is_open() {
            FormModalFrame {
                title: "Log time",
                error: log_state.error().map(str::to_string),
                submitting: log_state.is_submitting(),
                submit_label: "Log",
                on_submit: submit_time,
                on_close: move |_| log_time.write().close(),
                SelectField {
                    label: "Task",
                    value: log_state.draft().task_id.clone(),
                    options: task_options,
                    blank: "Select a task".to_string(),
                    onchange: move |v| edit(log_time, |d| d.task_id = v),
                }
                div {
                    class: "field-row",
                    TextField {
                        label: "Start",
                        kind: "datetime-local",
                        value: format_datetime(log_state.draft().start_time),
                        oninput: move |v: String| edit(log_time, |d| d.start_time = parse_datetime(&v)),
                    }
                    TextField {
                        label: "End",
                        kind: "datetime-local",
                        value: format_datetime(log_state.draft().end_time),
                        oninput: move |v: String| edit(log_time, |d| d.end_time = parse_datetime(&v)),
                    }
                }
                TextAreaField {
                    label: "Description",
                    value: log_state.draft().description.clone(),
                    oninput: move |v| edit(log_time, |d| d.description = v),
                }
            }
        }

        if view.selected().is_some() {
            TaskDetailModal { list }
        }
    }
}

#[component]
fn TaskDetailModal(list: TaskList) -> Element {
    let Some(detail) = list.view.read().selected().cloned() else {
        return rsx! {};
    };
    let task = &detail.task;
    let total: i64 = detail.time_logs.iter().map(|l| l.minutes()).sum();

    rsx! {
        ModalOverlay {
            on_close: move |_| list.clear_selection(),
            width: "max-w-2xl",
            div {
                class: "p-6 detail",
                header {
                    class: "detail-header",
                    h2 { "{task.title}" }
                    PriorityBadge { priority: task.priority }
                }
                dl {
                    class: "detail-grid",
                    dt { "Status" }
                    dd { "{task.status.label()}" }
                    dt { "Project" }
                    dd { {task.project.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| "-".to_string())} }
                    dt { "Assignee" }
                    dd { {task.assignee.as_ref().map(|u| u.display_name().to_string()).unwrap_or_else(|| "Unassigned".to_string())} }
                    dt { "Due" }
                    dd { "{show_date(task.due_date)}" }
                    dt { "Time logged" }
                    dd { "{format_minutes(total)}" }
                }
                p { class: "whitespace-pre-wrap", "{task.description}" }

                section {
                    class: "detail-section",
                    h3 { "Responses" }
                    if detail.responses.is_empty() {
                        p { class: "empty-state", "No responses yet." }
                    }
                    for response in detail.responses.iter() {
                        div {
                            key: "{response.id}",
                            class: "comment",
                            div {
                                class: "text-xs text-neutral-500",
                                {response.author.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default()}
                                if let Some(at) = response.created_at {
                                    " · {show_instant(at)}"
                                }
                            }
                            p { "{response.message}" }
                        }
                    }
                }

                section {
                    class: "detail-section",
                    h3 { "Time logs" }
                    if detail.time_logs.is_empty() {
                        p { class: "empty-state", "No time logged." }
                    }
                    ul {
                        for log in detail.time_logs.iter() {
                            li {
                                key: "{log.id}",
                                "{show_local(log.start_time)} - {format_minutes(log.minutes())}"
                                if !log.description.is_empty() {
                                    span { class: "text-neutral-500", " {log.description}" }
                                }
                            }
                        }
                    }
                }

                button {
                    class: "btn btn-outline mt-5",
                    onclick: move |_| list.clear_selection(),
                    "Close"
                }
            }
        }
    }
}
