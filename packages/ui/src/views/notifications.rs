//! Notification inbox and the send form.

use api::{
    Notification, NotificationDraft, NotificationFilter, NotificationKind, ReadState,
    RecipientMode, Role,
};
use dioxus::prelude::*;
use store::FormModal;

use crate::fields::{enum_options, parse_wire, wire_value, CheckboxField, SelectField, TextAreaField, TextField};
use crate::form::{edit, show_instant, submit_form};
use crate::list::{use_resource_view, ListController};
use crate::modal::{ConfirmDialog, FormModalFrame};
use crate::{use_api, use_session, BannerView, PaginationBar};

pub type NotificationList = ListController<NotificationFilter, Notification>;

fn read_state_options() -> Vec<(String, String)> {
    vec![
        ("unread".to_string(), "Unread".to_string()),
        ("read".to_string(), "Read".to_string()),
    ]
}

#[component]
pub fn NotificationsTab() -> Element {
    let client = use_api();
    let session = use_session();
    let list: NotificationList = use_resource_view(
        "notifications",
        NotificationFilter::default(),
        |client, query| async move { client.my_notifications(&query).await },
    );
    let mut stats = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                client.notification_stats().await.map_err(|e| {
                    tracing::warn!("Failed to load notification stats: {}", e);
                })
            }
        }
    });
    let mut checked = use_signal(Vec::<String>::new);
    let mut compose = use_signal(FormModal::<NotificationDraft>::default);
    let can_send = session.read().can_send_notifications();
    let is_admin = session.read().has_role(Role::Admin);

    let bulk_client = client.clone();
    let mark_selected = move |_| {
        let client = bulk_client.clone();
        let ids = checked();
        async move {
            if ids.is_empty() {
                list.notify_error("Select at least one notification");
                return;
            }
            let count = ids.len();
            let ok = list
                .run_mutation(
                    client.mark_many_read(ids),
                    format!("{count} notifications marked as read"),
                    "Failed to mark notifications as read",
                )
                .await;
            if ok {
                checked.write().clear();
                stats.restart();
            }
        }
    };

    let all_client = client.clone();
    let mark_all = move |_| {
        let client = all_client.clone();
        async move {
            let ok = list
                .run_mutation(
                    client.mark_all_read(),
                    "All notifications marked as read",
                    "Failed to mark all as read",
                )
                .await;
            if ok {
                checked.write().clear();
                stats.restart();
            }
        }
    };

    let delete_client = client.clone();
    let confirm_delete = move |_| {
        let client = delete_client.clone();
        list.confirm_delete(
            move |id| async move { client.delete_notification(&id).await },
            "Notification deleted",
            "Failed to delete notification",
        );
    };

    let view = list.view.read();
    let filter = view.filter().clone();
    let counts = stats().and_then(Result::ok).unwrap_or_default();
    let selected_ids = checked();

    rsx! {
        section {
            class: "panel",
            header {
                class: "panel-header",
                h2 { "Notifications" }
                div {
                    class: "stats-row",
                    span { class: "stat", "Total {counts.total}" }
                    span { class: "stat stat--accent", "Unread {counts.unread}" }
                    span { class: "stat", "Read {counts.read}" }
                }
                div {
                    class: "panel-filters",
                    SelectField {
                        label: "Type",
                        value: wire_value(filter.kind.as_ref()),
                        options: enum_options(&NotificationKind::SELECTABLE, |k| k.label()),
                        blank: "All types".to_string(),
                        onchange: move |v: String| list.update_filter(|f| f.kind = parse_wire(&v)),
                    }
                    SelectField {
                        label: "Status",
                        value: wire_value(filter.state.as_ref()),
                        options: read_state_options(),
                        blank: "All".to_string(),
                        onchange: move |v: String| list.update_filter(|f| f.state = parse_wire::<ReadState>(&v)),
                    }
                    button {
                        class: "btn btn-outline",
                        disabled: selected_ids.is_empty(),
                        onclick: mark_selected,
                        "Mark selected read"
                    }
                    button { class: "btn btn-outline", onclick: mark_all, "Mark all read" }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            list.reload();
                            stats.restart();
                        },
                        "Refresh"
                    }
                    if can_send {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| compose.write().open_create(NotificationDraft::default()),
                            "Send notification"
                        }
                    }
                }
            }
            BannerView { banner: view.banner().cloned(), on_dismiss: move |id| list.dismiss_banner(id) }

            if view.is_empty() {
                p {
                    class: "empty-state",
                    if view.is_loading() { "Loading notifications..." } else { "You're all caught up." }
                }
            }
            ul {
                class: "notification-list",
                for item in view.items().iter().cloned() {
                    NotificationItem {
                        key: "{item.id}",
                        checked: selected_ids.contains(&item.id),
                        item: item.clone(),
                        list,
                        on_check: move |(id, on): (String, bool)| {
                            let mut ids = checked.write();
                            ids.retain(|i| *i != id);
                            if on {
                                ids.push(id);
                            }
                        },
                        on_changed: move |_| stats.restart(),
                    }
                }
            }

            PaginationBar {
                pagination: *view.pagination(),
                page: view.page(),
                on_page: move |p| {
                    checked.write().clear();
                    list.go_to_page(p);
                },
            }
        }

        if compose.read().is_open() {
            ComposeForm { list, form: compose, is_admin }
        }

        if let Some(pending) = view.pending_delete().cloned() {
            ConfirmDialog {
                title: "Delete notification",
                message: format!("Delete notification \"{}\"?", pending.label),
                on_confirm: confirm_delete,
                on_cancel: move |_| list.cancel_delete(),
            }
        }
    }
}

#[component]
fn NotificationItem(
    item: Notification,
    checked: bool,
    list: NotificationList,
    on_check: EventHandler<(String, bool)>,
    on_changed: EventHandler<()>,
) -> Element {
    let client = use_api();
    let id = item.id.clone();
    let is_read = item.is_read;

    let toggle_client = client.clone();
    let toggle_id = id.clone();
    let toggle = move |_| {
        let client = toggle_client.clone();
        let id = toggle_id.clone();
        async move {
            let ok = if is_read {
                list.run_mutation(client.mark_unread(&id), "Marked as unread", "Failed to update notification")
                    .await
            } else {
                list.run_mutation(client.mark_read(&id), "Marked as read", "Failed to update notification")
                    .await
            };
            if ok {
                on_changed.call(());
            }
        }
    };

    let check_id = id.clone();
    let delete_target = (id.clone(), item.title.clone());

    rsx! {
        li {
            class: if is_read { "notification" } else { "notification notification--unread" },
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt: FormEvent| on_check.call((check_id.clone(), evt.checked())),
            }
            div {
                class: "notification-body",
                div {
                    class: "notification-title",
                    span { class: "badge badge--gray", "{item.kind.label()}" }
                    " {item.title}"
                }
                p { "{item.message}" }
                div {
                    class: "text-xs text-neutral-500",
                    {item.sender.as_ref().map(|u| format!("From {}", u.display_name())).unwrap_or_default()}
                    if let Some(at) = item.created_at {
                        " · {show_instant(at)}"
                    }
                }
            }
            div {
                class: "row-actions",
                button {
                    class: "btn btn-link",
                    onclick: toggle,
                    if is_read { "Mark unread" } else { "Mark read" }
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

#[component]
fn ComposeForm(list: NotificationList, form: Signal<FormModal<NotificationDraft>>, is_admin: bool) -> Element {
    let client = use_api();
    let mut form = form;
    let recipients = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                client.notification_recipients().await.unwrap_or_else(|e| {
                    tracing::warn!("Failed to load recipients: {}", e);
                    Vec::new()
                })
            }
        }
    });

    let on_submit = move |_| {
        let client = client.clone();
        submit_form(
            form,
            move |s| async move { client.send_notification(&s.draft).await },
            "Failed to send notification",
            move || list.notify_success("Notification sent"),
        );
    };

    let modes: &[RecipientMode] = if is_admin {
        &RecipientMode::ALL
    } else {
        &[RecipientMode::Specific]
    };
    let state = form.read();
    let draft = state.draft().clone();
    let people = recipients().unwrap_or_default();

    rsx! {
        FormModalFrame {
            title: "Send notification",
            error: state.error().map(str::to_string),
            submitting: state.is_submitting(),
            submit_label: "Send",
            on_submit,
            on_close: move |_| form.write().close(),
            TextField {
                label: "Title",
                value: draft.title.clone(),
                required: true,
                oninput: move |v| edit(form, |d| d.title = v),
            }
            TextAreaField {
                label: "Message",
                value: draft.message.clone(),
                oninput: move |v| edit(form, |d| d.message = v),
            }
            div {
                class: "field-row",
                SelectField {
                    label: "Type",
                    value: wire_value(Some(&draft.kind)),
                    options: enum_options(&NotificationKind::SELECTABLE, |k| k.label()),
                    onchange: move |v: String| edit(form, |d| d.kind = parse_wire(&v).unwrap_or_default()),
                }
                SelectField {
                    label: "Send to",
                    value: wire_value(Some(&draft.recipient_mode)),
                    options: enum_options(modes, |m| m.label()),
                    onchange: move |v: String| edit(form, |d| d.recipient_mode = parse_wire(&v).unwrap_or_default()),
                }
            }
            {match draft.recipient_mode {
                RecipientMode::Role => rsx! {
                    SelectField {
                        label: "Role",
                        value: draft.target_role.map(|r| r.as_str().to_string()).unwrap_or_default(),
                        options: Role::ALL.iter().map(|r| (r.as_str().to_string(), r.label().to_string())).collect::<Vec<_>>(),
                        blank: "Select a role".to_string(),
                        onchange: move |v: String| edit(form, |d| d.target_role = Role::parse(&v)),
                    }
                },
                RecipientMode::Specific => rsx! {
                    fieldset {
                        class: "recipient-list",
                        legend { "Recipients ({draft.receivers.len()} selected)" }
                        if people.is_empty() {
                            p { class: "empty-state", "No recipients available." }
                        }
                        for person in people {
                            CheckboxField {
                                key: "{person.id}",
                                label: format!("{} ({})", person.display_name(), person.role.label()),
                                checked: draft.receivers.contains(&person.id),
                                onchange: {
                                    let person_id = person.id.clone();
                                    move |on: bool| {
                                        let person_id = person_id.clone();
                                        edit(form, |d| {
                                            d.receivers.retain(|r| *r != person_id);
                                            if on {
                                                d.receivers.push(person_id);
                                            }
                                        })
                                    }
                                },
                            }
                        }
                    }
                },
                RecipientMode::All => rsx! {
                    p { class: "hint", "Every active user will receive this notification." }
                },
            }}
        }
    }
}
