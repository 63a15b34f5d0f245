//! Headless dashboard state and the Dioxus components that render it.

pub mod alert;
pub mod components;
pub mod form;
pub mod guard;
pub mod observable;
pub mod screen;
pub mod search;
pub mod session;
pub mod storage;
pub mod table;
pub mod time;

pub use session::SessionStore;
