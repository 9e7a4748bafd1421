//! Asset inventory (admin), held assets (everyone) and return requests.

use api::{
    Asset, AssetDraft, AssetFilter, AssetHistoryEntry, AssetStatus, AssignAssetDraft, Page,
    ResolveReturnDraft, ReturnRequest, ReturnRequestDraft, ReturnRequestStatus,
};
use dioxus::prelude::*;
use store::inputs::{format_date, optional_text, parse_date, parse_optional_amount};
use store::FormModal;

use crate::fields::{enum_options, parse_wire, wire_value, SearchBox, SelectField, TextAreaField, TextField};
use crate::form::{edit, show_date, show_instant, submit_form};
use crate::list::{use_resource_view, ListController};
use crate::modal::{ConfirmDialog, FormModalFrame, ModalOverlay};
use crate::views::users::{people_options, use_people, PeopleSource};
use crate::{use_api, BannerView, PaginationBar};

pub type AssetList = ListController<AssetFilter, Asset>;
pub type ReturnRequestList = ListController<(), ReturnRequest>;

/// A side listing opened from the inventory toolbar.
#[derive(Clone, Debug, PartialEq)]
enum AssetPopup {
    History { name: String, entries: Vec<AssetHistoryEntry> },
    Overdue(Vec<Asset>),
    Returned(Vec<Asset>),
}

#[component]
fn AssetStatusBadge(asset: Asset) -> Element {
    let tone = match asset.status {
        AssetStatus::Available => "badge--green",
        AssetStatus::Assigned => "badge--blue",
        AssetStatus::Maintenance => "badge--amber",
        AssetStatus::Retired | AssetStatus::Unknown => "badge--gray",
    };
    rsx! {
        span { class: "badge {tone}", "{asset.status.label()}" }
        if asset.return_requested {
            span { class: "badge badge--amber", "Return requested" }
        }
    }
}

#[component]
pub fn AssetsTab() -> Element {
    let client = use_api();
    let list: AssetList = use_resource_view("assets", AssetFilter::default(), |client, query| async move {
        client.list_assets(&query).await
    });
    let mut stats = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                client.asset_stats().await.map_err(|e| {
                    tracing::warn!("Failed to load asset stats: {}", e);
                })
            }
        }
    });
    let employees = use_people(PeopleSource::Everyone);
    let mut form = use_signal(FormModal::<AssetDraft>::default);
    let mut assign = use_signal(FormModal::<AssignAssetDraft>::default);
    let mut force_return = use_signal(|| None::<(String, String)>);
    let mut popup = use_signal(|| None::<AssetPopup>);

    let save_client = client.clone();
    let on_save = move |_| {
        let client = save_client.clone();
        submit_form(
            form,
            move |s| async move {
                match s.id() {
                    Some(id) => client.update_asset(id, &s.draft).await,
                    None => client.create_asset(&s.draft).await,
                }
            },
            "Failed to save asset",
            move || {
                list.notify_success("Asset saved");
                list.reload();
                stats.restart();
            },
        );
    };

    let assign_client = client.clone();
    let on_assign = move |_| {
        let client = assign_client.clone();
        submit_form(
            assign,
            move |s| async move {
                let id = s.id().unwrap_or_default().to_string();
                client.assign_asset(&id, &s.draft).await
            },
            "Failed to assign asset",
            move || {
                list.notify_success("Asset assigned");
                list.reload();
                stats.restart();
            },
        );
    };

    let delete_client = client.clone();
    let confirm_delete = move |_| {
        let client = delete_client.clone();
        list.confirm_delete(
            move |id| async move { client.delete_asset(&id).await },
            "Asset deleted",
            "Failed to delete asset",
        );
    };

    let force_client = client.clone();
    let confirm_force = move |_| {
        let Some((id, name)) = force_return.take() else {
            return;
        };
        let client = force_client.clone();
        spawn(async move {
            let ok = list
                .run_mutation(
                    client.force_return_asset(&id),
                    format!("{name} returned to inventory"),
                    "Failed to force return asset",
                )
                .await;
            if ok {
                stats.restart();
            }
        });
    };

    let overdue_client = client.clone();
    let show_overdue = move |_| {
        let client = overdue_client.clone();
        async move {
            match client.overdue_assets().await {
                Ok(assets) => popup.set(Some(AssetPopup::Overdue(assets))),
                Err(e) if e.is_unauthorized() => {}
                Err(e) => list.notify_error(e.user_message("Failed to load overdue assets")),
            }
        }
    };

    let returned_client = client.clone();
    let show_returned = move |_| {
        let client = returned_client.clone();
        async move {
            match client.returned_assets().await {
                Ok(assets) => popup.set(Some(AssetPopup::Returned(assets))),
                Err(e) if e.is_unauthorized() => {}
                Err(e) => list.notify_error(e.user_message("Failed to load returned assets")),
            }
        }
    };

    let view = list.view.read();
    let filter = view.filter().clone();
    let counts = stats().and_then(Result::ok).unwrap_or_default();
    let employee_options = people_options(&employees().unwrap_or_default());
    let form_state = form.read();
    let assign_state = assign.read();

    rsx! {
        section {
            class: "panel",
            header {
                class: "panel-header",
                h2 { "Assets" }
                div {
                    class: "stats-row",
                    span { class: "stat", "Total {counts.total}" }
                    span { class: "stat", "Available {counts.available}" }
                    span { class: "stat", "Assigned {counts.assigned}" }
                    span { class: "stat", "Maintenance {counts.maintenance}" }
                    span { class: "stat stat--accent", "Overdue {counts.overdue}" }
                }
                div {
                    class: "panel-filters",
                    SearchBox {
                        value: view.search_text().to_string(),
                        placeholder: "Search assets...",
                        oninput: move |text| list.search(text),
                    }
                    SelectField {
                        label: "Status",
                        value: wire_value(filter.status.as_ref()),
                        options: enum_options(&AssetStatus::SELECTABLE, |s| s.label()),
                        blank: "All statuses".to_string(),
                        onchange: move |v: String| list.update_filter(|f| f.status = parse_wire(&v)),
                    }
                    TextField {
                        label: "Type",
                        value: filter.asset_type.clone().unwrap_or_default(),
                        placeholder: "laptop, monitor...",
                        oninput: move |v: String| list.update_filter(|f| f.asset_type = optional_text(&v)),
                    }
                    button { class: "btn btn-outline", onclick: show_overdue, "Overdue" }
                    button { class: "btn btn-outline", onclick: show_returned, "Returned" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| form.write().open_create(AssetDraft::default()),
                        "New asset"
                    }
                }
            }
            BannerView { banner: view.banner().cloned(), on_dismiss: move |id| list.dismiss_banner(id) }

            if view.is_empty() {
                p {
                    class: "empty-state",
                    if view.is_loading() { "Loading assets..." } else { "No assets found." }
                }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Type" }
                            th { "Serial" }
                            th { "Status" }
                            th { "Holder" }
                            th { "Due back" }
                            th {}
                        }
                    }
                    tbody {
                        for asset in view.items().iter().cloned() {
                            tr {
                                key: "{asset.id}",
                                td { "{asset.name}" }
                                td { "{asset.asset_type}" }
                                td { "{asset.serial_number}" }
                                td { AssetStatusBadge { asset: asset.clone() } }
                                td { {asset.assigned_to.as_ref().map(|u| u.display_name().to_string()).unwrap_or_else(|| "-".to_string())} }
                                td { "{show_date(asset.due_back)}" }
                                td {
                                    class: "row-actions",
                                    if asset.status == AssetStatus::Available {
                                        button {
                                            class: "btn btn-link",
                                            onclick: {
                                                let id = asset.id.clone();
                                                move |_| assign.write().open_edit(id.clone(), AssignAssetDraft::default())
                                            },
                                            "Assign"
                                        }
                                    }
                                    if asset.status == AssetStatus::Assigned {
                                        button {
                                            class: "btn btn-link",
                                            onclick: {
                                                let client = client.clone();
                                                let (id, name) = (asset.id.clone(), asset.name.clone());
                                                move |_| {
                                                    let client = client.clone();
                                                    let (id, name) = (id.clone(), name.clone());
                                                    async move {
                                                        let ok = list
                                                            .run_mutation(
                                                                client.return_asset(&id),
                                                                format!("{name} returned"),
                                                                "Failed to return asset",
                                                            )
                                                            .await;
                                                        if ok {
                                                            stats.restart();
                                                        }
                                                    }
                                                }
                                            },
                                            "Return"
                                        }
                                        button {
                                            class: "btn btn-link btn-danger-text",
                                            onclick: {
                                                let target = (asset.id.clone(), asset.name.clone());
                                                move |_| force_return.set(Some(target.clone()))
                                            },
                                            "Force return"
                                        }
                                    }
                                    button {
                                        class: "btn btn-link",
                                        onclick: {
                                            let client = client.clone();
                                            let (id, name) = (asset.id.clone(), asset.name.clone());
                                            move |_| {
                                                let client = client.clone();
                                                let (id, name) = (id.clone(), name.clone());
                                                async move {
                                                    match client.asset_history(&id).await {
                                                        Ok(entries) => popup.set(Some(AssetPopup::History { name, entries })),
                                                        Err(e) if e.is_unauthorized() => {}
                                                        Err(e) => list.notify_error(e.user_message("Failed to load asset history")),
                                                    }
                                                }
                                            }
                                        },
                                        "History"
                                    }
                                    button {
                                        class: "btn btn-link",
                                        onclick: {
                                            let asset = asset.clone();
                                            move |_| form.write().open_edit(asset.id.clone(), AssetDraft::from(&asset))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-link btn-danger-text",
                                        onclick: {
                                            let (id, name) = (asset.id.clone(), asset.name.clone());
                                            move |_| list.request_delete(id.clone(), name.clone())
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

        if form_state.is_open() {
            FormModalFrame {
                title: if form_state.is_edit() { "Edit asset".to_string() } else { "New asset".to_string() },
                error: form_state.error().map(str::to_string),
                submitting: form_state.is_submitting(),
                on_submit: on_save,
                on_close: move |_| form.write().close(),
                TextField {
                    label: "Name",
                    value: form_state.draft().name.clone(),
                    required: true,
                    oninput: move |v| edit(form, |d| d.name = v),
                }
                div {
                    class: "field-row",
                    TextField {
                        label: "Type",
                        value: form_state.draft().asset_type.clone(),
                        required: true,
                        oninput: move |v| edit(form, |d| d.asset_type = v),
                    }
                    TextField {
                        label: "Serial number",
                        value: form_state.draft().serial_number.clone(),
                        required: true,
                        oninput: move |v| edit(form, |d| d.serial_number = v),
                    }
                }
                div {
                    class: "field-row",
                    TextField {
                        label: "Condition",
                        value: form_state.draft().condition.clone(),
                        oninput: move |v| edit(form, |d| d.condition = v),
                    }
                    TextField {
                        label: "Purchase cost",
                        kind: "number",
                        value: form_state.draft().purchase_cost.map(|c| c.to_string()).unwrap_or_default(),
                        oninput: move |v: String| edit(form, |d| d.purchase_cost = parse_optional_amount(&v)),
                    }
                }
            }
        }

        if assign_state.is_open() {
            FormModalFrame {
                title: "Assign asset",
                error: assign_state.error().map(str::to_string),
                submitting: assign_state.is_submitting(),
                submit_label: "Assign",
                on_submit: on_assign,
                on_close: move |_| assign.write().close(),
                SelectField {
                    label: "Employee",
                    value: assign_state.draft().user_id.clone(),
                    options: employee_options,
                    blank: "Select an employee".to_string(),
                    onchange: move |v| edit(assign, |d| d.user_id = v),
                }
                TextField {
                    label: "Due back",
                    kind: "date",
                    value: format_date(assign_state.draft().due_back),
                    oninput: move |v: String| edit(assign, |d| d.due_back = parse_date(&v)),
                }
                TextAreaField {
                    label: "Note",
                    value: assign_state.draft().note.clone(),
                    rows: 2,
                    oninput: move |v| edit(assign, |d| d.note = v),
                }
            }
        }

        if let Some(pending) = view.pending_delete().cloned() {
            ConfirmDialog {
                title: "Delete asset",
                message: format!("Delete asset {}?", pending.label),
                on_confirm: confirm_delete,
                on_cancel: move |_| list.cancel_delete(),
            }
        }

        if let Some((_, name)) = force_return() {
            ConfirmDialog {
                title: "Force return",
                message: format!("Return {name} to inventory without the holder's request?"),
                confirm_label: "Force return",
                on_confirm: confirm_force,
                on_cancel: move |_| force_return.set(None),
            }
        }

        if let Some(current) = popup() {
            AssetPopupView { popup: current, on_close: move |_| popup.set(None) }
        }
    }
}

#[component]
fn AssetPopupView(popup: AssetPopup, on_close: EventHandler<()>) -> Element {
    let title = match &popup {
        AssetPopup::History { name, .. } => format!("History of {name}"),
        AssetPopup::Overdue(_) => "Overdue assets".to_string(),
        AssetPopup::Returned(_) => "Returned assets".to_string(),
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            width: "max-w-2xl",
            div {
                class: "p-6",
                h2 { class: "m-0 mb-5 text-lg font-semibold", "{title}" }
                {match popup {
                    AssetPopup::History { entries, .. } => rsx! {
                        if entries.is_empty() {
                            p { class: "empty-state", "No history recorded." }
                        }
                        ul {
                            for entry in entries {
                                li {
                                    key: "{entry.id}",
                                    span { class: "font-medium", "{entry.action}" }
                                    if let Some(user) = &entry.user {
                                        " · {user.display_name()}"
                                    }
                                    if let Some(by) = &entry.performed_by {
                                        " by {by.display_name()}"
                                    }
                                    if let Some(at) = entry.at {
                                        span { class: "text-xs text-neutral-500", " {show_instant(at)}" }
                                    }
                                    if !entry.note.is_empty() {
                                        div { class: "text-sm", "{entry.note}" }
                                    }
                                }
                            }
                        }
                    },
                    AssetPopup::Overdue(assets) | AssetPopup::Returned(assets) => rsx! {
                        if assets.is_empty() {
                            p { class: "empty-state", "Nothing to show." }
                        }
                        ul {
                            for asset in assets {
                                li {
                                    key: "{asset.id}",
                                    "{asset.name} ({asset.serial_number})"
                                    if let Some(user) = &asset.assigned_to {
                                        " · {user.display_name()}"
                                    }
                                    if asset.due_back.is_some() {
                                        " · due {show_date(asset.due_back)}"
                                    }
                                }
                            }
                        }
                    },
                }}
                button {
                    class: "btn btn-outline mt-5",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

/// Assets held by the signed-in user.
#[component]
pub fn MyAssetsTab() -> Element {
    let client = use_api();
    let list: AssetList = use_resource_view("assets", AssetFilter::default(), |client, query| async move {
        client.my_assets(&query).await
    });
    let mut request = use_signal(FormModal::<ReturnRequestDraft>::default);

    let on_request = move |_| {
        let client = client.clone();
        submit_form(
            request,
            move |s| async move {
                let id = s.id().unwrap_or_default().to_string();
                client.request_asset_return(&id, &s.draft).await
            },
            "Failed to request return",
            move || {
                list.notify_success("Return requested");
                list.reload();
            },
        );
    };

    let view = list.view.read();
    let state = request.read();

    rsx! {
        section {
            class: "panel",
            header {
                class: "panel-header",
                h2 { "My Assets" }
                SearchBox {
                    value: view.search_text().to_string(),
                    placeholder: "Search assets...",
                    oninput: move |text| list.search(text),
                }
            }
            BannerView { banner: view.banner().cloned(), on_dismiss: move |id| list.dismiss_banner(id) }

            if view.is_empty() {
                p {
                    class: "empty-state",
                    if view.is_loading() { "Loading assets..." } else { "No assets assigned to you." }
                }
            }
            div {
                class: "card-grid",
                for asset in view.items().iter().cloned() {
                    article {
                        key: "{asset.id}",
                        class: "card",
                        header {
                            class: "card-header",
                            h3 { "{asset.name}" }
                            AssetStatusBadge { asset: asset.clone() }
                        }
                        dl {
                            class: "detail-grid",
                            dt { "Type" }
                            dd { "{asset.asset_type}" }
                            dt { "Serial" }
                            dd { "{asset.serial_number}" }
                            dt { "Assigned" }
                            dd { "{show_date(asset.assigned_on)}" }
                            dt { "Due back" }
                            dd { "{show_date(asset.due_back)}" }
                        }
                        if !asset.return_requested {
                            button {
                                class: "btn btn-link",
                                onclick: {
                                    let id = asset.id.clone();
                                    move |_| request.write().open_edit(id.clone(), ReturnRequestDraft::default())
                                },
                                "Request return"
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
                title: "Request return",
                error: state.error().map(str::to_string),
                submitting: state.is_submitting(),
                submit_label: "Request",
                on_submit: on_request,
                on_close: move |_| request.write().close(),
                TextAreaField {
                    label: "Reason",
                    value: state.draft().reason.clone(),
                    rows: 3,
                    oninput: move |v| edit(request, |d| d.reason = v),
                }
            }
        }
    }
}

fn request_status_label(status: ReturnRequestStatus) -> &'static str {
    match status {
        ReturnRequestStatus::Pending => "Pending",
        ReturnRequestStatus::Approved => "Approved",
        ReturnRequestStatus::Rejected => "Rejected",
    }
}

/// Pending and resolved asset return requests (admin).
#[component]
pub fn ReturnRequestsTab() -> Element {
    let client = use_api();
    let list: ReturnRequestList = use_resource_view("return requests", (), |client, _query| async move {
        client.return_requests().await.map(Page::single)
    });
    let mut resolve = use_signal(FormModal::<ResolveReturnDraft>::default);

    let on_resolve = move |_| {
        let client = client.clone();
        let approve = resolve.read().draft().approve;
        submit_form(
            resolve,
            move |s| async move {
                let id = s.id().unwrap_or_default().to_string();
                client.resolve_return_request(&id, &s.draft).await
            },
            "Failed to resolve return request",
            move || {
                list.notify_success(if approve { "Return request approved" } else { "Return request rejected" });
                list.reload();
            },
        );
    };

    let view = list.view.read();
    let state = resolve.read();

    rsx! {
        section {
            class: "panel",
            header {
                class: "panel-header",
                h2 { "Return Requests" }
                button { class: "btn btn-outline", onclick: move |_| list.reload(), "Refresh" }
            }
            BannerView { banner: view.banner().cloned(), on_dismiss: move |id| list.dismiss_banner(id) }

            if view.is_empty() {
                p {
                    class: "empty-state",
                    if view.is_loading() { "Loading requests..." } else { "No return requests." }
                }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Asset" }
                            th { "Requested by" }
                            th { "Reason" }
                            th { "Status" }
                            th { "Requested" }
                            th {}
                        }
                    }
                    tbody {
                        for req in view.items().iter().cloned() {
                            tr {
                                key: "{req.id}",
                                td { "{req.asset.name} ({req.asset.serial_number})" }
                                td { {req.requested_by.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default()} }
                                td { "{req.reason}" }
                                td { {request_status_label(req.status)} }
                                td { {req.created_at.map(show_instant).unwrap_or_default()} }
                                td {
                                    class: "row-actions",
                                    if req.status == ReturnRequestStatus::Pending {
                                        button {
                                            class: "btn btn-link",
                                            onclick: {
                                                let id = req.id.clone();
                                                move |_| resolve.write().open_edit(id.clone(), ResolveReturnDraft { approve: true, note: String::new() })
                                            },
                                            "Approve"
                                        }
                                        button {
                                            class: "btn btn-link btn-danger-text",
                                            onclick: {
                                                let id = req.id.clone();
                                                move |_| resolve.write().open_edit(id.clone(), ResolveReturnDraft { approve: false, note: String::new() })
                                            },
                                            "Reject"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if state.is_open() {
            FormModalFrame {
                title: if state.draft().approve { "Approve return".to_string() } else { "Reject return".to_string() },
                error: state.error().map(str::to_string),
                submitting: state.is_submitting(),
                submit_label: if state.draft().approve { "Approve".to_string() } else { "Reject".to_string() },
                on_submit: on_resolve,
                on_close: move |_| resolve.write().close(),
                TextAreaField {
                    label: "Note",
                    value: state.draft().note.clone(),
                    rows: 3,
                    oninput: move |v| edit(resolve, |d| d.note = v),
                }
            }
        }
    }
}
