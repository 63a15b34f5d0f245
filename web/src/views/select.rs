use dioxus::prelude::*;

/// A labelled `<select>` over a fixed list of choices.
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    value: String,
    choices: Vec<&'static str>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: id, "{label}" }
            select {
                id,
                class: "form-input",
                onchange: move |e| on_change.call(e.value()),
                for choice in choices {
                    option {
                        key: "{choice}",
                        value: choice,
                        selected: choice == value,
                        "{choice}"
                    }
                }
            }
        }
    }
}
