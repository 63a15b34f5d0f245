use api::{ApiClient, ProductService};
use dioxus::prelude::*;
use jiff::Timestamp;
use serde_json::Value;
use types::{Product, product::CATEGORIES};
use ui::{
    components::{Alert, Button, ButtonVariant, Card, Input, InputType, Modal, RowAction, Table},
    screen::products::{self, StockSummary},
    table::SortEvent,
};

use super::{
    screen::{record_id, rows_of, use_screen},
    select::SelectField,
};
use crate::config::AppConfig;

#[component]
pub fn Products() -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<ApiClient>();
    let screen =
        use_screen::<Product, _>(move || ProductService::new(client), config.alert_duration());
    let mut state = screen.state;
    let mut form = use_signal(products::create_form);

    let rows = rows_of(state.read().filtered());
    let summary = StockSummary::of(state.read().records());
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
                    h1 { class: "page-title", "Product Management" }
                    p { class: "page-subtitle", "Keep the catalogue and stock levels up to date." }
                }
                div { class: "page-header-actions",
                    Button {
                        onclick: move |_| {
                            form.write().reset();
                            state.write().open_create();
                        },
                        "Add Product"
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

            div { class: "stats-grid",
                Card { title: "In Stock",
                    p { class: "stat-value status-success", "{summary.in_stock}" }
                }
                Card { title: "Low Stock",
                    p { class: "stat-value status-warning", "{summary.low_stock}" }
                }
                Card { title: "Out of Stock",
                    p { class: "stat-value status-danger", "{summary.out_of_stock}" }
                }
            }

            div { class: "card",
                div { class: "table-toolbar",
                    Input {
                        id: "product-search",
                        placeholder: "Search by name, category, status or price...",
                        value: search_term,
                        on_change: move |term: String| state.write().set_search(term),
                    }
                }
                Table {
                    columns: products::columns(),
                    rows,
                    loading,
                    paginate: true,
                    page_size: config.page_size,
                    page_size_options: config.page_size_options.clone(),
                    empty_message: "No products found",
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
                title: "Add New Product",
                confirm_label: "Create Product",
                confirm_loading: submitting,
                on_close: move |_| state.write().close_create(),
                on_confirm: move |_| creator.create(form, products::draft),
                Input {
                    id: "product-name",
                    label: "Product Name",
                    placeholder: "Enter product name",
                    required: true,
                    value: form.read().value("name").to_string(),
                    errors: form.read().errors("name"),
                    show_errors: form.read().show_errors("name"),
                    on_change: move |value: String| form.write().set("name", value),
                    on_blur: move |_| form.write().touch("name"),
                }
                SelectField {
                    id: "product-category",
                    label: "Category",
                    value: form.read().value("category").to_string(),
                    choices: CATEGORIES.to_vec(),
                    on_change: move |value: String| form.write().set("category", value),
                }
                Input {
                    id: "product-price",
                    label: "Price",
                    input_type: InputType::Number,
                    placeholder: "0.00",
                    required: true,
                    value: form.read().value("price").to_string(),
                    errors: form.read().errors("price"),
                    show_errors: form.read().show_errors("price"),
                    on_change: move |value: String| form.write().set("price", value),
                    on_blur: move |_| form.write().touch("price"),
                }
                Input {
                    id: "product-stock",
                    label: "Stock",
                    input_type: InputType::Number,
                    placeholder: "0",
                    required: true,
                    help_text: "Stock below 10 is reported as low.",
                    value: form.read().value("stock").to_string(),
                    errors: form.read().errors("stock"),
                    show_errors: form.read().show_errors("stock"),
                    on_change: move |value: String| form.write().set("stock", value),
                    on_blur: move |_| form.write().touch("stock"),
                }
            }
        }
    }
}
