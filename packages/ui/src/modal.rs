use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default = "max-w-lg".to_string())] width: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/30",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-lg {width} w-full mx-4 max-h-[90vh] overflow-y-auto",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Modal frame for a create/edit form: title, fields, inline error, and a
/// submit button that is disabled while the request is in flight.
#[component]
pub fn FormModalFrame(
    title: String,
    error: Option<String>,
    submitting: bool,
    #[props(default = "Save".to_string())] submit_label: String,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if !submitting {
                    on_close.call(())
                }
            },
            form {
                class: "p-6",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                h2 { class: "m-0 mb-5 text-lg font-semibold text-neutral-800", "{title}" }
                {children}
                if let Some(error) = error {
                    p { class: "form-error", role: "alert", "{error}" }
                }
                div {
                    class: "flex gap-2 mt-5",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Saving..." } else { "{submit_label}" }
                    }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        disabled: submitting,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// Explicit confirmation step before a destructive call.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            width: "max-w-md",
            div {
                class: "p-6",
                h2 { class: "m-0 mb-3 text-lg font-semibold text-neutral-800", "{title}" }
                p { class: "m-0 mb-5 text-sm text-neutral-600", "{message}" }
                div {
                    class: "flex gap-2",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
