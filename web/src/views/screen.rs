//! Glue between a [`ScreenState`] and the component tree: spawns the shared flows and
//! keeps the notice's auto-dismiss timer.

use std::time::Duration;

use api::Crud;
use dioxus::prelude::*;
use serde_json::Value;
use types::{RecordId, Resource};
use ui::{
    form::Form,
    screen::{self, ScreenState},
    search::Searchable,
    time::Deferred,
};

pub struct Screen<R: 'static, S: 'static> {
    pub state: Signal<ScreenState<R>>,
    service: S,
}

impl<R: 'static, S: Clone + 'static> Clone for Screen<R, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            service: self.service.clone(),
        }
    }
}

/// Screen state plus `service`, with the first load started on mount.
pub fn use_screen<R, S>(service: impl FnOnce() -> S, alert_duration: Duration) -> Screen<R, S>
where
    R: Resource + Searchable + 'static,
    S: Crud<R> + Clone + 'static,
{
    let state = use_signal(|| ScreenState::new().with_alert_duration(alert_duration));
    let service = use_hook(service);
    use_notice_timer(state);

    let screen = Screen { state, service };
    let on_mount = screen.clone();
    use_effect(move || on_mount.reload());

    screen
}

/// Re-arms the dismiss timer whenever a new notice goes up. Replacing the handle drops,
/// and so cancels, the previous timer.
fn use_notice_timer<R: Resource + Searchable + 'static>(mut state: Signal<ScreenState<R>>) {
    let mut timer = use_signal(|| None::<Deferred>);
    let deadline = use_memo(move || state.read().notice_deadline());

    use_effect(move || {
        if deadline().is_none() {
            timer.set(None);
            return;
        }

        let delay = state.peek().alert_duration();
        let (handle, task) = Deferred::new(delay, move || state.write().dismiss_notice());
        timer.set(Some(handle));
        spawn(task);
    });
}

impl<R, S> Screen<R, S>
where
    R: Resource + Searchable + 'static,
    S: Crud<R> + Clone + 'static,
{
    pub fn reload(&self) {
        let this = self.clone();
        spawn(async move {
            screen::reload(&this.state, &this.service).await;
        });
    }

    /// Submit the create form. Nothing is sent while the form is invalid.
    pub fn create(&self, form: Signal<Form>, draft: impl FnOnce(&Form) -> R::Draft + 'static) {
        let this = self.clone();
        spawn(async move {
            screen::create(&this.state, &form, &this.service, draft).await;
        });
    }

    pub fn delete(&self, id: RecordId) {
        let this = self.clone();
        spawn(async move {
            screen::delete(&this.state, &this.service, id).await;
        });
    }
}

/// Rows in the JSON shape the table reads.
pub fn rows_of<R: Resource>(records: &[R]) -> Vec<Value> {
    records
        .iter()
        .filter_map(|record| serde_json::to_value(record).ok())
        .collect()
}

pub fn record_id(row: &Value) -> Option<RecordId> {
    row.get("id")
        .and_then(|id| serde_json::from_value(id.clone()).ok())
}
