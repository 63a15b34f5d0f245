use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerColor {
    #[default]
    Primary,
    Secondary,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerStyle {
    #[default]
    Border,
    Dots,
    Pulse,
    Bars,
}

impl SpinnerStyle {
    /// Child elements the style animates.
    fn parts(&self) -> usize {
        match self {
            SpinnerStyle::Border | SpinnerStyle::Pulse => 0,
            SpinnerStyle::Dots => 3,
            SpinnerStyle::Bars => 4,
        }
    }
}

pub fn spinner_class(size: SpinnerSize, color: SpinnerColor, style: SpinnerStyle) -> String {
    let size = match size {
        SpinnerSize::Small => "sm",
        SpinnerSize::Medium => "md",
        SpinnerSize::Large => "lg",
    };
    let color = match color {
        SpinnerColor::Primary => "primary",
        SpinnerColor::Secondary => "secondary",
        SpinnerColor::Light => "light",
        SpinnerColor::Dark => "dark",
    };
    let style = match style {
        SpinnerStyle::Border => "border",
        SpinnerStyle::Dots => "dots",
        SpinnerStyle::Pulse => "pulse",
        SpinnerStyle::Bars => "bars",
    };
    format!("spinner spinner-{style} spinner-{size} spinner-{color}")
}

#[component]
pub fn Spinner(
    #[props(default)] size: SpinnerSize,
    #[props(default)] color: SpinnerColor,
    #[props(default)] style: SpinnerStyle,
    #[props(into)] text: Option<String>,
    #[props(default)] overlay: bool,
) -> Element {
    let class = spinner_class(size, color, style);

    let spinner = rsx! {
        div { class: "spinner-wrapper", role: "status",
            div { class,
                for i in 0..style.parts() {
                    span { key: "{i}" }
                }
            }
            if let Some(text) = text {
                span { class: "spinner-text", "{text}" }
            }
        }
    };

    if overlay {
        rsx! {
            div { class: "spinner-overlay", {spinner} }
        }
    } else {
        spinner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names() {
        assert_eq!(
            spinner_class(SpinnerSize::Large, SpinnerColor::Dark, SpinnerStyle::Dots),
            "spinner spinner-dots spinner-lg spinner-dark"
        );
    }
}
