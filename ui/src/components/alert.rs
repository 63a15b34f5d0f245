use dioxus::prelude::*;

use crate::alert::AlertKind;

#[component]
pub fn Alert(
    #[props(default)] kind: AlertKind,
    #[props(into)] title: Option<String>,
    #[props(into)] message: String,
    #[props(default = true)] dismissible: bool,
    on_dismiss: Option<EventHandler<()>>,
) -> Element {
    let class = format!("alert {}", kind.class());
    let icon = kind.icon();

    rsx! {
        div { class, role: "alert",
            span { class: "alert-icon", "{icon}" }
            div { class: "alert-content",
                if let Some(title) = title {
                    strong { class: "alert-title", "{title}" }
                }
                p { class: "alert-message", "{message}" }
            }
            if dismissible {
                button {
                    class: "alert-close",
                    r#type: "button",
                    aria_label: "Dismiss",
                    onclick: move |_| {
                        if let Some(handler) = on_dismiss {
                            handler.call(());
                        }
                    },
                    "×"
                }
            }
        }
    }
}
