use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
            InputType::Tel => "tel",
            InputType::Url => "url",
        }
    }
}

pub(crate) fn control_class(base: &str, show_errors: bool) -> String {
    if show_errors {
        format!("{base} is-invalid")
    } else {
        base.to_string()
    }
}

/// Label, required marker, messages and help text shared by form controls.
#[component]
pub(crate) fn FieldFrame(
    id: String,
    #[props(!optional)] label: Option<String>,
    required: bool,
    errors: Vec<String>,
    show_errors: bool,
    #[props(!optional)] help_text: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "form-group",
            if let Some(text) = label {
                label { class: "form-label", r#for: "{id}",
                    "{text}"
                    if required {
                        span { class: "required-marker", " *" }
                    }
                }
            }
            {children}
            if show_errors {
                for (i, message) in errors.iter().enumerate() {
                    div { key: "{i}", class: "form-error", "{message}" }
                }
            } else if let Some(help) = help_text {
                small { class: "form-help", "{help}" }
            }
        }
    }
}

/// A controlled text input. The value only changes through `on_change`.
#[component]
pub fn Input(
    #[props(into)] id: String,
    #[props(into)] value: String,
    #[props(into)] label: Option<String>,
    #[props(default)] input_type: InputType,
    #[props(into, default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] readonly: bool,
    #[props(into)] help_text: Option<String>,
    #[props(default)] errors: Vec<String>,
    #[props(default)] show_errors: bool,
    on_change: EventHandler<String>,
    on_blur: Option<EventHandler<()>>,
) -> Element {
    let class = control_class("form-input", show_errors);

    rsx! {
        FieldFrame {
            id: id.clone(),
            label,
            required,
            errors,
            show_errors,
            help_text,
            input {
                id,
                class,
                r#type: input_type.as_str(),
                placeholder,
                value,
                required,
                disabled,
                readonly,
                oninput: move |e| on_change.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = on_blur {
                        handler.call(());
                    }
                },
            }
        }
    }
}
