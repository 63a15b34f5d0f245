use dioxus::prelude::*;

use super::input::{FieldFrame, control_class};

/// `"n / max"`, counting characters rather than bytes.
pub fn char_counter(value: &str, max_length: usize) -> String {
    format!("{} / {}", value.chars().count(), max_length)
}

#[component]
pub fn Textarea(
    #[props(into)] id: String,
    #[props(into)] value: String,
    #[props(into)] label: Option<String>,
    #[props(into, default)] placeholder: String,
    #[props(default = 4)] rows: u32,
    max_length: Option<usize>,
    #[props(default = true)] resizable: bool,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] readonly: bool,
    #[props(into)] help_text: Option<String>,
    #[props(default)] errors: Vec<String>,
    #[props(default)] show_errors: bool,
    on_change: EventHandler<String>,
    on_blur: Option<EventHandler<()>>,
) -> Element {
    let mut class = control_class("form-textarea", show_errors);
    if !resizable {
        class.push_str(" no-resize");
    }
    let counter = max_length.map(|max| char_counter(&value, max));

    rsx! {
        FieldFrame {
            id: id.clone(),
            label,
            required,
            errors,
            show_errors,
            help_text,
            textarea {
                id,
                class,
                rows: "{rows}",
                maxlength: max_length.map(|max| max.to_string()),
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
            if let Some(counter) = counter {
                small { class: "form-counter", "{counter}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_counts_chars() {
        assert_eq!(char_counter("héllo", 100), "5 / 100");
        assert_eq!(char_counter("", 20), "0 / 20");
    }
}
