use api::{LoginDraft, Role};
use dioxus::prelude::*;
use store::session::NOT_SIGNED_IN;
use store::Validate;

use crate::fields::TextField;
use crate::{use_api, use_session};

/// Email and password sign-in. Calls `on_success` with the signed-in role.
#[component]
pub fn LoginForm(on_success: EventHandler<Role>) -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut draft = use_signal(LoginDraft::default);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            if busy() {
                return;
            }
            let body = draft();
            if let Err(e) = body.validate() {
                error.set(Some(e.to_string()));
                return;
            }
            busy.set(true);
            error.set(None);
            match client.login(&body).await {
                Ok(user) => {
                    tracing::info!("Signed in as {} ({})", user.email, user.role);
                    let role = user.role;
                    session.write().login(user);
                    draft.set(LoginDraft::default());
                    on_success.call(role);
                }
                Err(e) => {
                    let mut current = session.write();
                    current.login_failed(&e);
                    error.set(current.error().map(str::to_string));
                }
            }
            busy.set(false);
        }
    };

    // A session that expired while the page was open leaves its message here.
    let notice = session
        .read()
        .error()
        .filter(|m| *m != NOT_SIGNED_IN)
        .map(str::to_string);

    rsx! {
        div {
            class: "login-container",
            form {
                class: "login-card",
                onsubmit,
                h1 { "Sign in" }
                p { class: "login-subtitle", "Use your work email and password." }
                if let Some(message) = error().or(notice) {
                    p { class: "form-error", role: "alert", "{message}" }
                }
                TextField {
                    label: "Email",
                    kind: "email",
                    value: draft.read().email.clone(),
                    required: true,
                    oninput: move |v| draft.write().email = v,
                }
                TextField {
                    label: "Password",
                    kind: "password",
                    value: draft.read().password.clone(),
                    required: true,
                    oninput: move |v| draft.write().password = v,
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
