use api::{ApiClient, UserService};
use dioxus::prelude::*;
use jiff::Timestamp;
use serde_json::Value;
use types::{
    User,
    user::{ROLES, STATUSES},
};
use ui::{
    components::{Alert, Button, ButtonVariant, Input, InputType, Modal, RowAction, Table},
    screen::users,
    table::SortEvent,
};

use super::{
    screen::{record_id, rows_of, use_screen},
    select::SelectField,
};
use crate::config::AppConfig;

#[component]
pub fn Users() -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<ApiClient>();
    let screen = use_screen::<User, _>(move || UserService::new(client), config.alert_duration());
    let mut state = screen.state;
    let mut form = use_signal(users::create_form);

    let rows = rows_of(state.read().filtered());
    let notice = state.read().notice(Timestamp::now()).cloned();
    let search_term = state.read().search_term().to_string();
    let (loading, show_create, submitting) = {
        let state = state.read();
        (state.loading, state.show_create, state.submitting)
    };

    let creator = screen.clone();
    let deleter = screen.clone();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "User Management" }
                    p { class: "page-subtitle", "Search, sort and add user accounts." }
                }
                div { class: "page-header-actions",
                    Button {
                        onclick: move |_| {
                            form.write().reset();
                            state.write().open_create();
                        },
                        "Add User"
                    }
                }
            }

            if let Some(notice) = notice {
                Alert {
                    kind: notice.kind,
                    message: notice.message,
                    on_dismiss: move |_| state.write().dismiss_notice(),
                }
            }

            div { class: "card",
                div { class: "table-toolbar",
                    Input {
                        id: "user-search",
                        placeholder: "Search by name, email, role or status...",
                        value: search_term,
                        on_change: move |term: String| state.write().set_search(term),
                    }
                }
                Table {
                    columns: users::columns(),
                    rows,
                    loading,
                    paginate: true,
                    page_size: config.page_size,
                    page_size_options: config.page_size_options.clone(),
                    empty_message: "No users found",
                    actions: vec![RowAction {
                        id: "delete",
                        label: "Delete",
                        variant: ButtonVariant::Danger,
                    }],
                    on_sort: move |event: SortEvent| state.write().sort(event),
                    on_action: move |(action, row): (&'static str, Value)| {
                        if let ("delete", Some(id)) = (action, record_id(&row)) {
                            deleter.delete(id);
                        }
                    },
                }
            }

            Modal {
                open: show_create,
                title: "Add New User",
                confirm_label: "Create User",
                confirm_loading: submitting,
                on_close: move |_| state.write().close_create(),
                on_confirm: move |_| creator.create(form, users::draft),
                Input {
                    id: "user-name",
                    label: "Full Name",
                    placeholder: "Enter full name",
                    required: true,
                    value: form.read().value("name").to_string(),
                    errors: form.read().errors("name"),
                    show_errors: form.read().show_errors("name"),
                    on_change: move |value: String| form.write().set("name", value),
                    on_blur: move |_| form.write().touch("name"),
                }
                Input {
                    id: "user-email",
                    label: "Email",
                    input_type: InputType::Email,
                    placeholder: "name@example.com",
                    required: true,
                    value: form.read().value("email").to_string(),
                    errors: form.read().errors("email"),
                    show_errors: form.read().show_errors("email"),
                    on_change: move |value: String| form.write().set("email", value),
                    on_blur: move |_| form.write().touch("email"),
                }
                SelectField {
                    id: "user-role",
                    label: "Role",
                    value: form.read().value("role").to_string(),
                    choices: ROLES.to_vec(),
                    on_change: move |value: String| form.write().set("role", value),
                }
                SelectField {
                    id: "user-status",
                    label: "Status",
                    value: form.read().value("status").to_string(),
                    choices: STATUSES.to_vec(),
                    on_change: move |value: String| form.write().set("status", value),
                }
            }
        }
    }
}
