use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardShadow {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardRadius {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

fn step(name: &str, level: u8) -> String {
    match level {
        0 => format!("{name}-none"),
        1 => format!("{name}-sm"),
        2 => format!("{name}-md"),
        _ => format!("{name}-lg"),
    }
}

pub fn card_class(
    shadow: CardShadow,
    padding: CardPadding,
    radius: CardRadius,
    hoverable: bool,
    clickable: bool,
) -> String {
    let mut class = format!(
        "card {} {} {}",
        step("shadow", shadow as u8),
        step("padding", padding as u8),
        step("radius", radius as u8),
    );
    if hoverable {
        class.push_str(" card-hoverable");
    }
    if clickable {
        class.push_str(" card-clickable");
    }
    class
}

/// A surface with an optional header. Clickable when `on_click` is set.
#[component]
pub fn Card(
    #[props(into)] title: Option<String>,
    #[props(into)] subtitle: Option<String>,
    #[props(default)] shadow: CardShadow,
    #[props(default)] padding: CardPadding,
    #[props(default)] radius: CardRadius,
    #[props(default)] hoverable: bool,
    on_click: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = card_class(shadow, padding, radius, hoverable, on_click.is_some());
    let has_header = title.is_some() || subtitle.is_some();

    rsx! {
        div {
            class,
            onclick: move |evt| {
                if let Some(handler) = on_click {
                    handler.call(evt);
                }
            },
            if has_header {
                div { class: "card-header",
                    if let Some(title) = title {
                        h2 { class: "card-title", "{title}" }
                    }
                    if let Some(subtitle) = subtitle {
                        p { class: "card-subtitle", "{subtitle}" }
                    }
                }
            }
            div { class: "card-body", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_composition() {
        assert_eq!(
            card_class(CardShadow::default(), CardPadding::default(), CardRadius::default(), false, false),
            "card shadow-md padding-md radius-md"
        );
        assert_eq!(
            card_class(CardShadow::None, CardPadding::Large, CardRadius::Small, true, true),
            "card shadow-none padding-lg radius-sm card-hoverable card-clickable"
        );
    }
}
