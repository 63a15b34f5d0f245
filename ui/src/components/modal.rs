use dioxus::prelude::*;

use super::{Button, ButtonVariant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
    Full,
}

impl ModalSize {
    pub fn class(&self) -> &'static str {
        match self {
            ModalSize::Small => "modal-sm",
            ModalSize::Medium => "modal-md",
            ModalSize::Large => "modal-lg",
            ModalSize::ExtraLarge => "modal-xl",
            ModalSize::Full => "modal-full",
        }
    }
}

/// A dialog over a backdrop. Renders nothing while closed.
///
/// The footer shows a cancel button that emits `on_close`, and a confirm button when
/// `on_confirm` is set. While `confirm_loading` nothing closes the dialog.
#[component]
pub fn Modal(
    open: bool,
    #[props(into, default)] title: String,
    #[props(default)] size: ModalSize,
    #[props(default = true)] show_close: bool,
    #[props(default = true)] show_header: bool,
    #[props(default = true)] show_footer: bool,
    #[props(default = true)] close_on_backdrop: bool,
    #[props(into, default = "Confirm".to_string())] confirm_label: String,
    #[props(into, default = "Cancel".to_string())] cancel_label: String,
    #[props(default)] confirm_variant: ButtonVariant,
    #[props(default)] confirm_loading: bool,
    on_close: EventHandler<()>,
    on_confirm: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    let class = format!("modal {}", size.class());
    let dismissable = !confirm_loading;

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if close_on_backdrop && dismissable {
                    on_close.call(());
                }
            },
            div {
                class,
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                if show_header {
                    div { class: "modal-header",
                        h2 { class: "modal-title", "{title}" }
                        if show_close && dismissable {
                            button {
                                class: "modal-close",
                                r#type: "button",
                                onclick: move |_| on_close.call(()),
                                "×"
                            }
                        }
                    }
                }
                div { class: "modal-body", {children} }
                if show_footer {
                    div { class: "modal-footer",
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: confirm_loading,
                            onclick: move |_| on_close.call(()),
                            "{cancel_label}"
                        }
                        if let Some(handler) = on_confirm {
                            Button {
                                variant: confirm_variant,
                                loading: confirm_loading,
                                onclick: move |_| handler.call(()),
                                "{confirm_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
