use dioxus::prelude::*;
use ui::components::Card;

use crate::{Route, use_current_user};

#[component]
pub fn Dashboard() -> Element {
    let current_user = use_current_user();
    let name = current_user
        .read()
        .as_ref()
        .map(|session| session.username.clone())
        .unwrap_or_default();

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Welcome back, {name}!" }
                p { class: "page-subtitle", "Manage your users and products from here." }
            }
            div { class: "dashboard-grid",
                Card {
                    title: "Users",
                    hoverable: true,
                    on_click: move |_| {
                        navigator().push(Route::Users {});
                    },
                    p { class: "dashboard-card-desc", "Browse, search and add user accounts." }
                }
                Card {
                    title: "Products",
                    hoverable: true,
                    on_click: move |_| {
                        navigator().push(Route::Products {});
                    },
                    p { class: "dashboard-card-desc", "Track the catalogue and stock levels." }
                }
            }
        }
    }
}
