use std::{rc::Rc, str::FromStr};

use api::ApiClient;
use dioxus::prelude::*;
use tracing::Level;
use types::Session;
use ui::{
    SessionStore,
    guard::{GuardDecision, guard, is_active},
};

mod config;
mod views;

use config::AppConfig;
use views::{Dashboard, Login, Products, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:return_url")]
    Login { return_url: Option<String> },
    #[redirect("/", || Route::Dashboard {})]
    #[layout(AuthenticatedLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/users")]
        Users {},
        #[route("/dashboard/products")]
        Products {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Parse an in-app path, falling back to the dashboard.
    pub fn from_path(path: &str) -> Self {
        Route::from_str(path).unwrap_or(Route::Dashboard {})
    }

    fn title(&self) -> &'static str {
        match self {
            Route::Users {} => "Users",
            Route::Products {} => "Products",
            _ => "Dashboard",
        }
    }
}

fn main() {
    let config = AppConfig::load();
    let level = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_level().ok())
        .unwrap_or(Level::INFO);

    if let Err(error) = dioxus::logger::init(level) {
        eprintln!("failed to initialize logging: {error}");
    }

    match config {
        Ok(config) => {
            tracing::info!(api = %config.api_base_url, "starting dashboard");
            dioxus::LaunchBuilder::new().with_context(config).launch(App);
        }
        Err(error) => tracing::error!("{error:#}"),
    }
}

/// The signed-in user as a signal, kept in step with the [`SessionStore`].
#[derive(Clone, Copy)]
pub struct CurrentUser(Signal<Option<Session>>);

pub fn use_current_user() -> Signal<Option<Session>> {
    use_context::<CurrentUser>().0
}

fn session_store(config: &AppConfig) -> SessionStore {
    #[cfg(target_arch = "wasm32")]
    let storage = ui::storage::LocalStorage;
    #[cfg(not(target_arch = "wasm32"))]
    let storage = ui::storage::FileStorage::new(std::env::temp_dir().join("dashboard"));

    SessionStore::with_key(storage, config.storage_key.as_str()).with_login_delay(config.login_delay())
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(|| ApiClient::new(config.api_base_url.clone()));
    let store = use_context_provider(|| session_store(&config));
    let CurrentUser(mut current_user) =
        use_context_provider(|| CurrentUser(Signal::new(store.current_session_value())));

    use_hook(move || {
        Rc::new(store.subscribe(move |session| {
            if *current_user.peek() != *session {
                current_user.set(session.clone());
            }
        }))
    });

    rsx! {
        document::Title { "Admin Dashboard" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route");
    navigator().replace(Route::Dashboard {});
    rsx! {}
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let active = is_active(&current_route.to_string(), &to.to_string());

    rsx! {
        Link {
            to,
            class: if active { "nav-link active" } else { "nav-link" },
            {children}
        }
    }
}

#[component]
fn AuthenticatedLayout() -> Element {
    let route: Route = use_route();
    let current_user = use_current_user();
    let mut sidebar_open = use_signal(|| true);

    let decision = guard(current_user.read().is_some(), &route.to_string());
    match decision {
        GuardDecision::Redirect { return_url } => {
            navigator().replace(Route::Login {
                return_url: Some(return_url),
            });
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        GuardDecision::Allow => rsx! {
            div { class: if sidebar_open() { "app-layout" } else { "app-layout sidebar-collapsed" },
                Sidebar { on_close: move |_| sidebar_open.set(false) }
                div { class: "main-area",
                    Header {
                        title: route.title(),
                        on_menu_toggle: move |_| sidebar_open.set(!sidebar_open()),
                    }
                    main { class: "main-content", Outlet::<Route> {} }
                }
            }
        },
    }
}

#[component]
fn Sidebar(on_close: EventHandler<()>) -> Element {
    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                span { class: "sidebar-logo", "Admin Panel" }
                button {
                    class: "sidebar-close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            nav { class: "sidebar-nav",
                NavLink { to: Route::Dashboard {}, "Dashboard" }
                NavLink { to: Route::Users {}, "Users" }
                NavLink { to: Route::Products {}, "Products" }
            }
        }
    }
}

#[component]
fn Header(title: &'static str, on_menu_toggle: EventHandler<()>) -> Element {
    let store = use_context::<SessionStore>();
    let current_user = use_current_user();
    let (username, initial) = current_user
        .read()
        .as_ref()
        .map(|session| (session.username.clone(), session.initial()))
        .unwrap_or_default();

    rsx! {
        header { class: "header",
            button {
                class: "header-menu",
                r#type: "button",
                onclick: move |_| on_menu_toggle.call(()),
                "☰"
            }
            h1 { class: "header-title", "{title}" }
            div { class: "header-user",
                div { class: "header-avatar", "{initial}" }
                span { class: "header-username", "{username}" }
                button {
                    class: "btn btn-outline-secondary btn-sm",
                    r#type: "button",
                    onclick: move |_| {
                        store.logout();
                        navigator().push(Route::Login { return_url: None });
                    },
                    "Logout"
                }
            }
        }
    }
}
