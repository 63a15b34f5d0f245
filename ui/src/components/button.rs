use dioxus::prelude::*;

use super::{Spinner, SpinnerColor, SpinnerSize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
    Link,
}

impl ButtonVariant {
    fn name(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Success => "success",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Info => "info",
            ButtonVariant::Light => "light",
            ButtonVariant::Dark => "dark",
            ButtonVariant::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub outline: bool,
    pub full_width: bool,
    pub rounded: bool,
    pub loading: bool,
}

impl ButtonStyle {
    pub fn class(&self) -> String {
        let mut class = if self.outline {
            format!("btn btn-outline-{}", self.variant.name())
        } else {
            format!("btn btn-{}", self.variant.name())
        };
        match self.size {
            ButtonSize::Small => class.push_str(" btn-sm"),
            ButtonSize::Medium => {}
            ButtonSize::Large => class.push_str(" btn-lg"),
        }
        if self.full_width {
            class.push_str(" btn-block");
        }
        if self.rounded {
            class.push_str(" btn-rounded");
        }
        if self.loading {
            class.push_str(" btn-loading");
        }
        class
    }
}

/// A button that swallows clicks while disabled or loading.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] submit: bool,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] outline: bool,
    #[props(default)] full_width: bool,
    #[props(default)] rounded: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = ButtonStyle {
        variant,
        size,
        outline,
        full_width,
        rounded,
        loading,
    }
    .class();
    let inert = disabled || loading;
    let kind = if submit { "submit" } else { "button" };

    rsx! {
        button {
            class,
            r#type: kind,
            disabled: inert,
            onclick: move |evt| {
                if inert {
                    return;
                }
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            if loading {
                Spinner { size: SpinnerSize::Small, color: SpinnerColor::Light }
            }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_reflects_style() {
        assert_eq!(ButtonStyle::default().class(), "btn btn-primary");
        assert_eq!(
            ButtonStyle {
                variant: ButtonVariant::Danger,
                size: ButtonSize::Small,
                outline: true,
                full_width: true,
                ..ButtonStyle::default()
            }
            .class(),
            "btn btn-outline-danger btn-sm btn-block"
        );
    }
}
