use dioxus::prelude::*;
use secrecy::SecretString;
use ui::{
    SessionStore,
    components::{Alert, Button, Input, InputType},
    form::{Form, Rule},
    guard::post_login_target,
};

use crate::{Route, use_current_user};

fn login_form() -> Form {
    Form::new()
        .field("username", "", vec![Rule::Required])
        .field("password", "", vec![Rule::Required])
}

#[component]
pub fn Login(return_url: Option<String>) -> Element {
    let store = use_context::<SessionStore>();
    let current_user = use_current_user();
    let mut form = use_signal(login_form);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let target = post_login_target(return_url.as_deref()).to_string();

    if current_user.read().is_some() && !loading() {
        navigator().replace(Route::from_path(&target));
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        if !form.read().is_valid() {
            form.write().mark_all_touched();
            return;
        }

        let username = form.read().value("username").to_string();
        let password = SecretString::from(form.read().value("password").to_string());
        let store = store.clone();
        let target = target.clone();
        loading.set(true);

        spawn(async move {
            match store.login(&username, &password).await {
                Ok(_) => {
                    navigator().replace(Route::from_path(&target));
                }
                Err(e) => {
                    tracing::warn!(%e, "login failed");
                    let message = if e.message.is_empty() {
                        "Login failed".to_string()
                    } else {
                        e.message
                    };
                    error.set(Some(message));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Admin Dashboard" }
                    p { class: "login-subtitle", "Sign in to continue" }
                }
                if let Some(message) = error() {
                    Alert {
                        kind: ui::alert::AlertKind::Error,
                        message,
                        on_dismiss: move |_| error.set(None),
                    }
                }
                form { onsubmit,
                    Input {
                        id: "username",
                        label: "Username",
                        placeholder: "Enter your username",
                        required: true,
                        value: form.read().value("username").to_string(),
                        errors: form.read().errors("username"),
                        show_errors: form.read().show_errors("username"),
                        on_change: move |value: String| form.write().set("username", value),
                        on_blur: move |_| form.write().touch("username"),
                    }
                    Input {
                        id: "password",
                        label: "Password",
                        input_type: InputType::Password,
                        placeholder: "Enter your password",
                        required: true,
                        value: form.read().value("password").to_string(),
                        errors: form.read().errors("password"),
                        show_errors: form.read().show_errors("password"),
                        on_change: move |value: String| form.write().set("password", value),
                        on_blur: move |_| form.write().touch("password"),
                    }
                    Button {
                        submit: true,
                        full_width: true,
                        loading: loading(),
                        "Sign in"
                    }
                }
            }
        }
    }
}
