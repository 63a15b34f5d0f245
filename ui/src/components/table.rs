use dioxus::prelude::*;
use serde_json::Value;

use super::{Button, ButtonSize, ButtonVariant, Spinner};
use crate::table::{
    Column, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, PageEvent, Renderer, SortEvent,
    TableState, badge_class, cell_value, format_cell,
};

/// A per-row button. `id` comes back through `on_action`.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAction {
    pub id: &'static str,
    pub label: &'static str,
    pub variant: ButtonVariant,
}

pub fn table_class(striped: bool, bordered: bool, hoverable: bool) -> String {
    let mut class = String::from("table");
    if striped {
        class.push_str(" table-striped");
    }
    if bordered {
        class.push_str(" table-bordered");
    }
    if hoverable {
        class.push_str(" table-hover");
    }
    class
}

/// Renders rows as given. Sorting is reported through `on_sort` for the caller to apply.
#[component]
pub fn Table(
    columns: Vec<Column>,
    rows: Vec<Value>,
    #[props(default)] paginate: bool,
    #[props(default = DEFAULT_PAGE_SIZE)] page_size: usize,
    #[props(default = DEFAULT_PAGE_SIZE_OPTIONS.to_vec())] page_size_options: Vec<usize>,
    #[props(default = true)] striped: bool,
    #[props(default)] bordered: bool,
    #[props(default = true)] hoverable: bool,
    #[props(default = true)] responsive: bool,
    #[props(default)] loading: bool,
    #[props(into, default = "No data available".to_string())] empty_message: String,
    #[props(default)] actions: Vec<RowAction>,
    on_row_click: Option<EventHandler<Value>>,
    on_sort: Option<EventHandler<SortEvent>>,
    on_page: Option<EventHandler<PageEvent>>,
    on_action: Option<EventHandler<(&'static str, Value)>>,
) -> Element {
    let mut state = use_signal(move || {
        if paginate {
            TableState::with_pagination(page_size)
        } else {
            TableState::default()
        }
    });

    let length = rows.len();
    use_effect(use_reactive!(|(length,)| {
        if state.peek().page_index(length) != state.peek().current_page {
            state.write().clamp_page(length);
        }
    }));

    let page_rows = state.read().paginated_data(&rows).to_vec();
    let span = columns.len() + usize::from(!actions.is_empty());
    let class = table_class(striped, bordered, hoverable);

    let table = rsx! {
        table { class,
            thead {
                tr {
                    for column in columns.iter().cloned() {
                        {
                            let icon = state.read().sort_icon(&column);
                            let mut class = column.align.class().to_string();
                            if column.sortable {
                                class.push_str(" sortable");
                            }
                            let style = column.width.as_ref().map(|w| format!("width: {w}"));
                            let label = column.label.clone();
                            let key = column.key.clone();
                            let icon = icon.map(|icon| (format!("sort-icon {}", icon.class()), icon.glyph()));

                            rsx! {
                                th {
                                    key: "{key}",
                                    class,
                                    style,
                                    onclick: move |_| {
                                        let event = state.write().on_sort(&column);
                                        if let (Some(event), Some(handler)) = (event, on_sort) {
                                            handler.call(event);
                                        }
                                    },
                                    "{label}"
                                    if let Some((icon_class, glyph)) = icon {
                                        span { class: icon_class, "{glyph}" }
                                    }
                                }
                            }
                        }
                    }
                    if !actions.is_empty() {
                        th { class: "text-right", "Actions" }
                    }
                }
            }
            tbody {
                if loading {
                    tr {
                        td { colspan: "{span}", class: "table-loading",
                            Spinner { text: "Loading..." }
                        }
                    }
                } else if rows.is_empty() {
                    tr {
                        td { colspan: "{span}", class: "table-empty", "{empty_message}" }
                    }
                } else {
                    for (i, row) in page_rows.into_iter().enumerate() {
                        TableRow {
                            key: "{i}",
                            columns: columns.clone(),
                            row,
                            actions: actions.clone(),
                            on_row_click,
                            on_action,
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "table-wrapper",
            if responsive {
                div { class: "table-responsive", {table} }
            } else {
                {table}
            }
            if paginate && length > 0 {
                Pager {
                    state,
                    length,
                    page_size_options,
                    on_page,
                }
            }
        }
    }
}

#[component]
fn TableRow(
    columns: Vec<Column>,
    row: Value,
    actions: Vec<RowAction>,
    #[props(!optional)] on_row_click: Option<EventHandler<Value>>,
    #[props(!optional)] on_action: Option<EventHandler<(&'static str, Value)>>,
) -> Element {
    let clicked = row.clone();

    rsx! {
        tr {
            class: if on_row_click.is_some() { "clickable" },
            onclick: move |_| {
                if let Some(handler) = on_row_click {
                    handler.call(clicked.clone());
                }
            },
            for column in columns.iter() {
                {
                    let text = format_cell(cell_value(&row, &column.key), column.renderer);
                    let class = column.align.class();
                    let badge = (column.renderer == Renderer::Badge && !text.is_empty())
                        .then(|| format!("badge {}", badge_class(&text)));

                    rsx! {
                        td { key: "{column.key}", class,
                            if let Some(badge) = badge {
                                span { class: badge, "{text}" }
                            } else {
                                "{text}"
                            }
                        }
                    }
                }
            }
            if !actions.is_empty() {
                td { class: "text-right table-actions",
                    for action in actions.iter().cloned() {
                        {
                            let row = row.clone();
                            let RowAction { id, label, variant } = action;
                            rsx! {
                                span {
                                    key: "{id}",
                                    onclick: move |evt| evt.stop_propagation(),
                                    Button {
                                        variant,
                                        size: ButtonSize::Small,
                                        outline: true,
                                        onclick: move |_| {
                                            if let Some(handler) = on_action {
                                                handler.call((id, row.clone()));
                                            }
                                        },
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Pager(
    mut state: Signal<TableState>,
    length: usize,
    page_size_options: Vec<usize>,
    #[props(!optional)] on_page: Option<EventHandler<PageEvent>>,
) -> Element {
    let current = state.read().clone();
    let (first, last) = current.range_label(length);
    let total_pages = current.total_pages(length);
    let at_start = current.is_first_page();
    let at_end = current.is_last_page(length);
    let page = current.page_index(length);
    let page_size = current.page_size;

    let mut go_to = move |page: usize| {
        let event = state.write().on_page_change(page, length);
        if let Some(handler) = on_page {
            handler.call(event);
        }
    };

    rsx! {
        div { class: "table-pager",
            span { class: "pager-range", "Showing {first} to {last} of {length}" }
            div { class: "pager-buttons",
                button {
                    class: "pager-button",
                    disabled: at_start,
                    onclick: move |_| go_to(0),
                    "«"
                }
                button {
                    class: "pager-button",
                    disabled: at_start,
                    onclick: move |_| go_to(page.saturating_sub(1)),
                    "‹"
                }
                for number in current.page_numbers(length) {
                    button {
                        key: "{number}",
                        class: if number == page { "pager-button active" } else { "pager-button" },
                        onclick: move |_| go_to(number),
                        {(number + 1).to_string()}
                    }
                }
                button {
                    class: "pager-button",
                    disabled: at_end,
                    onclick: move |_| go_to(page + 1),
                    "›"
                }
                button {
                    class: "pager-button",
                    disabled: at_end,
                    onclick: move |_| go_to(total_pages.saturating_sub(1)),
                    "»"
                }
            }
            select {
                class: "pager-size",
                value: "{page_size}",
                onchange: move |e| {
                    let Ok(size) = e.value().parse::<usize>() else {
                        return;
                    };
                    let event = state.write().on_page_size_change(size, length);
                    if let Some(handler) = on_page {
                        handler.call(event);
                    }
                },
                for size in page_size_options {
                    option { key: "{size}", value: "{size}", "{size} per page" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_class_flags() {
        assert_eq!(table_class(true, false, true), "table table-striped table-hover");
        assert_eq!(table_class(false, true, false), "table table-bordered");
    }
}
