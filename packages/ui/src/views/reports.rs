//! Work reports: the author's own reports and the reviewers' views.
//!
//! Daily-report eligibility is asked of the server when the tab mounts and
//! after each save; the answer only decides which hint is shown.

use api::{CompletionStatus, FeedbackDraft, Report, ReportDraft, ReportFilter, ReportStatus, ReportType};
use dioxus::prelude::*;
use store::inputs::{format_date, optional_text, parse_date};
use store::FormModal;

use crate::fields::{enum_options, parse_wire, wire_value, SearchBox, SelectField, TextAreaField, TextField};
use crate::form::{edit, show_date, show_instant, submit_form};
use crate::list::{use_resource_view, ListController};
use crate::modal::{ConfirmDialog, FormModalFrame, ModalOverlay};
use crate::views::tasks::use_project_options;
use crate::{use_api, use_session, BannerView, PaginationBar};

pub type ReportList = ListController<ReportFilter, Report>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportScope {
    /// Every report (admin).
    All,
    /// Reports of the team lead's team.
    Team,
    /// The signed-in user's reports.
    Mine,
}

impl ReportScope {
    fn title(self) -> &'static str {
        match self {
            ReportScope::All => "Reports",
            ReportScope::Team => "Team Reports",
            ReportScope::Mine => "My Reports",
        }
    }
}

#[component]
fn ReportStatusBadge(status: ReportStatus) -> Element {
    let tone = match status {
        ReportStatus::Draft => "badge--gray",
        ReportStatus::Submitted => "badge--blue",
        ReportStatus::Reviewed => "badge--amber",
        ReportStatus::Approved => "badge--green",
        ReportStatus::Rejected => "badge--red",
    };
    rsx! {
        span { class: "badge {tone}", "{status.label()}" }
    }
}

#[component]
pub fn ReportsTab(scope: ReportScope) -> Element {
    let client = use_api();
    let session = use_session();
    let list: ReportList = use_resource_view("reports", ReportFilter::default(), move |client, query| async move {
        match scope {
            ReportScope::All => client.list_reports(&query).await,
            ReportScope::Team => client.team_reports(&query).await,
            ReportScope::Mine => client.my_reports(&query).await,
        }
    });
    let projects = use_project_options();
    let mut eligibility = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                if scope != ReportScope::Mine {
                    return None;
                }
                match client.daily_report_eligibility().await {
                    Ok(eligibility) => Some(eligibility),
                    Err(e) => {
                        tracing::warn!("Failed to check daily report eligibility: {}", e);
                        None
                    }
                }
            }
        }
    });
    let mut form = use_signal(FormModal::<ReportDraft>::default);

    let reviews = scope != ReportScope::Mine && session.read().can_give_feedback();
    let next_reviewer = session.read().role().and_then(|r| r.next_reviewer());

    let save_client = client.clone();
    let on_submit = move |_| {
        let client = save_client.clone();
        submit_form(
            form,
            move |s| async move {
                match s.id() {
                    Some(id) => client.update_report(id, &s.draft).await,
                    None => client.create_report(&s.draft).await,
                }
            },
            "Failed to save report",
            move || {
                list.notify_success("Report saved");
                list.reload();
                eligibility.restart();
            },
        );
    };

    let delete_client = client.clone();
    let confirm_delete = move |_| {
        let client = delete_client.clone();
        list.confirm_delete(
            move |id| async move { client.delete_report(&id).await },
            "Report deleted",
            "Failed to delete report",
        );
    };

    let view = list.view.read();
    let filter = view.filter().clone();
    let state = form.read();
    let daily_hint = eligibility()
        .flatten()
        .filter(|e| !e.can_submit_daily)
        .map(|e| e.reason.unwrap_or_else(|| "You have already submitted a daily report today.".to_string()));

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
                        placeholder: "Search reports...",
                        oninput: move |text| list.search(text),
                    }
                    SelectField {
                        label: "Type",
                        value: wire_value(filter.report_type.as_ref()),
                        options: enum_options(&ReportType::ALL, |t| t.label()),
                        blank: "All types".to_string(),
                        onchange: move |v: String| list.update_filter(|f| f.report_type = parse_wire(&v)),
                    }
                    SelectField {
                        label: "Status",
                        value: wire_value(filter.status.as_ref()),
                        options: enum_options(&ReportStatus::ALL, |s| s.label()),
                        blank: "All statuses".to_string(),
                        onchange: move |v: String| list.update_filter(|f| f.status = parse_wire(&v)),
                    }
                    SelectField {
                        label: "Completion",
                        value: wire_value(filter.completion.as_ref()),
                        options: enum_options(&CompletionStatus::ALL, |c| c.label()),
                        blank: "Any".to_string(),
                        onchange: move |v: String| list.update_filter(|f| f.completion = parse_wire(&v)),
                    }
                    TextField {
                        label: "From",
                        kind: "date",
                        value: format_date(filter.from),
                        oninput: move |v: String| list.update_filter(|f| f.from = parse_date(&v)),
                    }
                    TextField {
                        label: "To",
                        kind: "date",
                        value: format_date(filter.to),
                        oninput: move |v: String| list.update_filter(|f| f.to = parse_date(&v)),
                    }
                    if scope == ReportScope::Mine {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| form.write().open_create(ReportDraft::default()),
                            "New report"
                        }
                    }
                }
            }
            BannerView { banner: view.banner().cloned(), on_dismiss: move |id| list.dismiss_banner(id) }
            if let Some(hint) = daily_hint.clone() {
                p { class: "hint", "{hint}" }
            }

            if view.is_empty() {
                p {
                    class: "empty-state",
                    if view.is_loading() { "Loading reports..." } else { "No reports found." }
                }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Type" }
                            th { "Date" }
                            if scope != ReportScope::Mine {
                                th { "Author" }
                            }
                            th { "Status" }
                            th { "Completion" }
                            th {}
                        }
                    }
                    tbody {
                        for report in view.items().iter().cloned() {
                            ReportRow {
                                key: "{report.id}",
                                report: report.clone(),
                                scope,
                                list,
                                form,
                                reviews,
                                next_reviewer: next_reviewer.map(|r| r.label().to_string()),
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
                title: if state.is_edit() { "Edit report".to_string() } else { "New report".to_string() },
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
                div {
                    class: "field-row",
                    SelectField {
                        label: "Type",
                        value: wire_value(Some(&state.draft().report_type)),
                        options: enum_options(&ReportType::ALL, |t| t.label()),
                        onchange: move |v: String| edit(form, |d| d.report_type = parse_wire(&v).unwrap_or_default()),
                    }
                    TextField {
                        label: "Date",
                        kind: "date",
                        value: format_date(state.draft().report_date),
                        oninput: move |v: String| edit(form, |d| d.report_date = parse_date(&v)),
                    }
                }
                if state.draft().report_type == ReportType::Daily && !state.is_edit() {
                    if let Some(hint) = daily_hint {
                        p { class: "hint", "{hint}" }
                    }
                }
                SelectField {
                    label: "Project",
                    value: state.draft().project_id.clone().unwrap_or_default(),
                    options: projects().unwrap_or_default(),
                    blank: "No project".to_string(),
                    onchange: move |v: String| edit(form, |d| d.project_id = optional_text(&v)),
                }
                TextAreaField {
                    label: "Content",
                    value: state.draft().content.clone(),
                    rows: 8,
                    oninput: move |v| edit(form, |d| d.content = v),
                }
            }
        }

        if let Some(pending) = view.pending_delete().cloned() {
            ConfirmDialog {
                title: "Delete report",
                message: format!("Delete report {}?", pending.label),
                on_confirm: confirm_delete,
                on_cancel: move |_| list.cancel_delete(),
            }
        }

        if view.selected().is_some() {
            ReportDetailModal { list, reviews }
        }
    }
}

#[component]
fn ReportRow(
    report: Report,
    scope: ReportScope,
    list: ReportList,
    form: Signal<FormModal<ReportDraft>>,
    reviews: bool,
    #[props(!optional)] next_reviewer: Option<String>,
) -> Element {
    let client = use_api();
    let mut form = form;
    let owned = scope == ReportScope::Mine;
    let editable = owned && report.is_editable();
    let submittable = owned && report.status == ReportStatus::Draft;

    let view_client = client.clone();
    let view_id = report.id.clone();
    let open = move |_| {
        let client = view_client.clone();
        let id = view_id.clone();
        list.open_detail(async move { client.report(&id).await }, "Failed to load report");
    };

    let submit_client = client.clone();
    let submit_id = report.id.clone();
    let submit_message = match &next_reviewer {
        Some(role) => format!("Report submitted to {role}"),
        None => "Report submitted".to_string(),
    };
    let submit = move |_| {
        let client = submit_client.clone();
        let id = submit_id.clone();
        let message = submit_message.clone();
        async move {
            list.run_mutation(client.submit_report(&id), message, "Failed to submit report")
                .await;
        }
    };

    let completion_client = client.clone();
    let completion_id = report.id.clone();
    let set_completion = move |v: String| {
        let Some(completion) = parse_wire::<CompletionStatus>(&v) else {
            return;
        };
        let client = completion_client.clone();
        let id = completion_id.clone();
        spawn(async move {
            list.run_mutation(
                client.set_report_completion(&id, completion),
                "Completion status updated",
                "Failed to update completion status",
            )
            .await;
        });
    };

    let edit_target = report.clone();
    let delete_target = (report.id.clone(), report.title.clone());

    rsx! {
        tr {
            td { "{report.title}" }
            td { "{report.report_type.label()}" }
            td { "{show_date(report.report_date)}" }
            if scope != ReportScope::Mine {
                td { {report.author.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default()} }
            }
            td { ReportStatusBadge { status: report.status } }
            td {
                if reviews {
                    select {
                        class: "field-input",
                        value: wire_value(Some(&report.completion)),
                        onchange: move |evt: FormEvent| set_completion(evt.value()),
                        for (key, text) in enum_options(&CompletionStatus::ALL, |c| c.label()) {
                            option {
                                key: "{key}",
                                value: "{key}",
                                selected: key == wire_value(Some(&report.completion)),
                                "{text}"
                            }
                        }
                    }
                } else {
                    "{report.completion.label()}"
                }
            }
            td {
                class: "row-actions",
                button { class: "btn btn-link", onclick: open, "View" }
                if submittable {
                    button { class: "btn btn-link", onclick: submit, "Submit" }
                }
                if editable {
                    button {
                        class: "btn btn-link",
                        onclick: move |_| form.write().open_edit(edit_target.id.clone(), ReportDraft::from(&edit_target)),
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
fn ReportDetailModal(list: ReportList, reviews: bool) -> Element {
    let client = use_api();
    let mut feedback = use_signal(FormModal::<FeedbackDraft>::default);
    let Some(report) = list.view.read().selected().cloned() else {
        return rsx! {};
    };

    let report_id = report.id.clone();
    let on_feedback = move |_| {
        let client = client.clone();
        let refresh_client = client.clone();
        let id = report_id.clone();
        let refresh_id = report_id.clone();
        submit_form(
            feedback,
            move |s| async move { client.add_report_feedback(&id, &s.draft).await },
            "Failed to add feedback",
            move || {
                list.notify_success("Feedback added");
                list.reload();
                list.open_detail(async move { refresh_client.report(&refresh_id).await }, "Failed to load report");
            },
        );
    };

    let state = feedback.read();
    rsx! {
        ModalOverlay {
            on_close: move |_| list.clear_selection(),
            width: "max-w-2xl",
            div {
                class: "p-6 detail",
                header {
                    class: "detail-header",
                    h2 { "{report.title}" }
                    ReportStatusBadge { status: report.status }
                }
                dl {
                    class: "detail-grid",
                    dt { "Type" }
                    dd { "{report.report_type.label()}" }
                    dt { "Date" }
                    dd { "{show_date(report.report_date)}" }
                    dt { "Author" }
                    dd { {report.author.as_ref().map(|u| u.display_name().to_string()).unwrap_or_else(|| "-".to_string())} }
                    dt { "Project" }
                    dd { {report.project.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| "-".to_string())} }
                    dt { "Completion" }
                    dd { "{report.completion.label()}" }
                    if let Some(role) = report.submitted_to {
                        dt { "Submitted to" }
                        dd { "{role.label()}" }
                    }
                }
                p { class: "whitespace-pre-wrap", "{report.content}" }

                section {
                    class: "detail-section",
                    h3 { "Feedback" }
                    if report.feedback.is_empty() {
                        p { class: "empty-state", "No feedback yet." }
                    }
                    for item in report.feedback.iter() {
                        div {
                            key: "{item.id}",
                            class: "comment",
                            div {
                                class: "text-xs text-neutral-500",
                                {item.author.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default()}
                                if let Some(at) = item.created_at {
                                    " · {show_instant(at)}"
                                }
                            }
                            p { "{item.message}" }
                        }
                    }
                    if reviews {
                        button {
                            class: "btn btn-link",
                            onclick: move |_| feedback.write().open_create(FeedbackDraft::default()),
                            "Add feedback"
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

        if state.is_open() {
            FormModalFrame {
                title: "Add feedback",
                error: state.error().map(str::to_string),
                submitting: state.is_submitting(),
                submit_label: "Send",
                on_submit: on_feedback,
                on_close: move |_| feedback.write().close(),
                TextAreaField {
                    label: "Feedback",
                    value: state.draft().message.clone(),
                    oninput: move |v| edit(feedback, |d| d.message = v),
                }
            }
        }
    }
}
