//! State behind a list screen: load, search, sort, create and delete.
//!
//! Transitions are synchronous. The async flows at the bottom ([`reload`], [`create`],
//! [`delete`]) order them around the service calls and reach the state through
//! [`Shared`], so the same flow runs against a Dioxus signal or a plain `RefCell`.

pub mod products;
pub mod users;

use std::{cell::RefCell, time::Duration};

use api::Crud;
use dioxus::prelude::*;
use jiff::Timestamp;
use types::{RecordId, Resource, Result};

use crate::{
    alert::{AlertKind, DEFAULT_ALERT_DURATION, Notice},
    form::Form,
    search::{Searchable, filter},
    table::{SortEvent, sort_rows},
};

/// Identifies one list load. Only the most recently issued ticket may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState<R> {
    records: Vec<R>,
    filtered: Vec<R>,
    search_term: String,
    sort: Option<SortEvent>,
    notice: Option<Notice>,
    generation: u64,
    alert_duration: Duration,
    pub loading: bool,
    pub show_create: bool,
    pub submitting: bool,
}

impl<R: Resource + Searchable> Default for ScreenState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource + Searchable> ScreenState<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            sort: None,
            notice: None,
            generation: 0,
            alert_duration: DEFAULT_ALERT_DURATION,
            loading: false,
            show_create: false,
            submitting: false,
        }
    }

    pub fn with_alert_duration(mut self, duration: Duration) -> Self {
        self.alert_duration = duration;
        self
    }

    pub fn alert_duration(&self) -> Duration {
        self.alert_duration
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Records after search and sort; what the table shows.
    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_sort(&self) -> Option<&SortEvent> {
        self.sort.as_ref()
    }

    /// Start a load. Any load issued earlier is superseded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Apply a load result. Returns `false` when the ticket was superseded and the
    /// result was dropped.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<R>>, now: Timestamp) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "dropping superseded load"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.refresh();
            }
            Err(error) => {
                tracing::error!(%error, path = R::PATH, "failed to load records");
                self.show_notice(AlertKind::Error, error.message, now);
            }
        }
        true
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refresh();
    }

    /// Remember the sort and apply it to the visible records.
    pub fn sort(&mut self, event: SortEvent) {
        sort_rows(&mut self.filtered, &event);
        self.sort = Some(event);
    }

    fn refresh(&mut self) {
        self.filtered = filter(&self.records, &self.search_term);
        if let Some(event) = &self.sort {
            sort_rows(&mut self.filtered, event);
        }
    }

    pub fn open_create(&mut self) {
        self.show_create = true;
        self.submitting = false;
    }

    /// Ignored while a create is in flight. A failed create must find the modal open.
    pub fn close_create(&mut self) {
        if self.submitting {
            tracing::debug!(path = R::PATH, "ignoring close while submitting");
            return;
        }
        self.show_create = false;
        self.submitting = false;
    }

    /// Gate a create submission on the form. An invalid form marks every field touched
    /// so its messages render, and nothing is sent.
    pub fn begin_submit(&mut self, form: &mut Form) -> bool {
        if !form.is_valid() {
            form.mark_all_touched();
            return false;
        }
        self.submitting = true;
        true
    }

    /// Returns `true` when the list should be reloaded.
    pub fn finish_create(&mut self, result: Result<R>, now: Timestamp) -> bool {
        self.submitting = false;
        match result {
            Ok(record) => {
                self.show_create = false;
                self.show_notice(
                    AlertKind::Success,
                    format!("{} \"{}\" has been added successfully!", R::NOUN, record.label()),
                    now,
                );
                true
            }
            Err(error) => {
                // The modal stays open so the user can retry.
                tracing::error!(%error, path = R::PATH, "failed to create record");
                self.show_notice(AlertKind::Error, error.message, now);
                false
            }
        }
    }

    /// Returns `true` when the list should be reloaded.
    pub fn finish_delete(&mut self, label: &str, result: Result<()>, now: Timestamp) -> bool {
        match result {
            Ok(()) => {
                self.show_notice(
                    AlertKind::Success,
                    format!("{} \"{label}\" has been deleted.", R::NOUN),
                    now,
                );
                true
            }
            Err(error) => {
                tracing::error!(%error, path = R::PATH, "failed to delete record");
                self.show_notice(AlertKind::Error, error.message, now);
                false
            }
        }
    }

    pub fn show_notice(&mut self, kind: AlertKind, message: impl Into<String>, now: Timestamp) {
        self.notice = Some(Notice::new(kind, message, now, self.alert_duration));
    }

    /// When the current notice is due to hide, expired or not.
    pub fn notice_deadline(&self) -> Option<Timestamp> {
        self.notice.as_ref().map(|n| n.visible_until)
    }

    /// The notice, if it has not expired yet.
    pub fn notice(&self, now: Timestamp) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible(now))
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Mutable access to state that is shared with a running flow.
///
/// Borrows last only for the closure, so nothing stays borrowed across an await.
pub trait Shared<T> {
    fn update<O>(&self, f: impl FnOnce(&mut T) -> O) -> O;
}

impl<T> Shared<T> for RefCell<T> {
    fn update<O>(&self, f: impl FnOnce(&mut T) -> O) -> O {
        f(&mut self.borrow_mut())
    }
}

impl<T: 'static> Shared<T> for Signal<T> {
    fn update<O>(&self, f: impl FnOnce(&mut T) -> O) -> O {
        let mut signal = *self;
        let mut value = signal.write();
        f(&mut *value)
    }
}

/// Fetch the list. Returns `false` when a newer load superseded this one.
pub async fn reload<R, S>(state: &impl Shared<ScreenState<R>>, service: &S) -> bool
where
    R: Resource + Searchable,
    S: Crud<R>,
{
    let ticket = state.update(|state| state.begin_load());
    let result = service.list().await;
    state.update(|state| state.finish_load(ticket, result, Timestamp::now()))
}

/// Validate, submit, then reset the form and reload on success. Nothing is sent while
/// the form is invalid. Returns whether the record was created.
pub async fn create<R, S>(
    state: &impl Shared<ScreenState<R>>,
    form: &impl Shared<Form>,
    service: &S,
    draft: impl FnOnce(&Form) -> R::Draft,
) -> bool
where
    R: Resource + Searchable,
    S: Crud<R>,
{
    let draft = form.update(|form| {
        state
            .update(|state| state.begin_submit(form))
            .then(|| draft(&*form))
    });
    let Some(draft) = draft else {
        return false;
    };

    let result = service.create(&draft).await;
    let created = state.update(|state| state.finish_create(result, Timestamp::now()));
    if created {
        form.update(|form| form.reset());
        reload(state, service).await;
    }
    created
}

/// Remove one record and reload on success.
pub async fn delete<R, S>(state: &impl Shared<ScreenState<R>>, service: &S, id: RecordId) -> bool
where
    R: Resource + Searchable,
    S: Crud<R>,
{
    let label = state.update(|state| {
        state
            .records
            .iter()
            .find(|r| r.id() == id)
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| id.to_string())
    });

    let result = service.remove(id).await;
    let deleted = state.update(|state| state.finish_delete(&label, result, Timestamp::now()));
    if deleted {
        reload(state, service).await;
    }
    deleted
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use types::{Error, NewUser, User};

    use super::*;
    use crate::table::SortDirection;

    fn user(id: u64, name: &str, role: &str) -> User {
        User {
            id: RecordId(id),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: role.into(),
            status: "Active".into(),
            created_at: None,
        }
    }

    /// In-memory stand-in for the users endpoint.
    #[derive(Default)]
    struct FakeUsers {
        rows: RefCell<Vec<User>>,
        fail_create: bool,
        creates: Cell<usize>,
        lists: Cell<usize>,
    }

    impl Crud<User> for FakeUsers {
        async fn list(&self) -> Result<Vec<User>> {
            self.lists.set(self.lists.get() + 1);
            Ok(self.rows.borrow().clone())
        }

        async fn get(&self, id: RecordId) -> Result<User> {
            self.rows
                .borrow()
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or_else(|| Error::server(404, "Not Found"))
        }

        async fn create(&self, draft: &NewUser) -> Result<User> {
            self.creates.set(self.creates.get() + 1);
            if self.fail_create {
                return Err(Error::server(500, "Internal Server Error"));
            }
            let mut rows = self.rows.borrow_mut();
            let created = User {
                id: RecordId(rows.len() as u64 + 1),
                name: draft.name.clone(),
                email: draft.email.clone(),
                role: draft.role.clone(),
                status: draft.status.clone(),
                created_at: None,
            };
            rows.push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: RecordId, _draft: &NewUser) -> Result<User> {
            self.get(id).await
        }

        async fn remove(&self, id: RecordId) -> Result<()> {
            self.rows.borrow_mut().retain(|u| u.id != id);
            Ok(())
        }
    }

    fn filled_form() -> RefCell<Form> {
        let mut form = users::create_form();
        form.set("name", "Jane Smith");
        form.set("email", "jane@example.com");
        RefCell::new(form)
    }

    fn now() -> Timestamp {
        Timestamp::from_second(1_700_000_000).unwrap()
    }

    #[tokio::test]
    async fn failing_create_keeps_modal_open() {
        let service = FakeUsers {
            fail_create: true,
            ..FakeUsers::default()
        };
        let state = RefCell::new(ScreenState::<User>::new());
        state.borrow_mut().open_create();
        let form = filled_form();

        let created = create(&state, &form, &service, users::draft).await;

        assert!(!created);
        let state = state.into_inner();
        assert!(state.show_create);
        assert!(!state.submitting);
        let notice = state.notice(Timestamp::now()).unwrap();
        assert_eq!(notice.kind, AlertKind::Error);
        assert!(notice.message.starts_with("Error Code: 500"));
        assert_eq!(form.borrow().value("name"), "Jane Smith");
        assert_eq!(service.lists.get(), 0);
    }

    #[tokio::test]
    async fn successful_create_closes_modal_and_reloads() {
        let service = FakeUsers::default();
        let state = RefCell::new(ScreenState::<User>::new());
        reload(&state, &service).await;
        state.borrow_mut().open_create();
        let form = filled_form();

        let created = create(&state, &form, &service, users::draft).await;

        assert!(created);
        let state = state.into_inner();
        assert!(!state.show_create);
        assert_eq!(service.lists.get(), 2);
        assert_eq!(state.records().len(), 1);
        assert_eq!(
            state.notice(Timestamp::now()).map(|n| n.message.as_str()),
            Some("User \"Jane Smith\" has been added successfully!")
        );
        assert_eq!(form.borrow().value("name"), "");
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_service() {
        let service = FakeUsers::default();
        let state = RefCell::new(ScreenState::<User>::new());
        state.borrow_mut().open_create();
        let form = RefCell::new(users::create_form());
        form.borrow_mut().set("name", "Al");

        assert!(!create(&state, &form, &service, users::draft).await);

        assert_eq!(service.creates.get(), 0);
        assert!(state.borrow().show_create);
        assert!(!state.borrow().submitting);
        assert!(form.borrow().show_errors("name"));
        assert!(form.borrow().show_errors("email"));
    }

    #[tokio::test]
    async fn delete_reloads_the_list() {
        let service = FakeUsers::default();
        service.rows.borrow_mut().extend([user(1, "John", "Admin"), user(2, "Bob", "User")]);
        let state = RefCell::new(ScreenState::<User>::new());
        reload(&state, &service).await;

        assert!(delete(&state, &service, RecordId(1)).await);

        let state = state.into_inner();
        assert_eq!(state.records().len(), 1);
        assert_eq!(
            state.notice(Timestamp::now()).map(|n| n.message.as_str()),
            Some("User \"John\" has been deleted.")
        );
    }

    #[test]
    fn close_is_ignored_while_submitting() {
        let mut state = ScreenState::<User>::new();
        state.open_create();
        let mut form = filled_form().into_inner();
        assert!(state.begin_submit(&mut form));

        state.close_create();
        assert!(state.show_create);

        state.finish_create(Err(Error::server(500, "Internal Server Error")), now());
        assert!(state.show_create);

        state.close_create();
        assert!(!state.show_create);
    }

    #[test]
    fn notice_deadline_tracks_each_notice() {
        let mut state = ScreenState::<User>::new().with_alert_duration(Duration::from_secs(5));
        assert_eq!(state.notice_deadline(), None);

        state.show_notice(AlertKind::Info, "first", now());
        let first = state.notice_deadline();
        state.show_notice(AlertKind::Info, "first", now() + jiff::SignedDuration::from_secs(1));

        assert!(state.notice_deadline() > first);
        state.dismiss_notice();
        assert_eq!(state.notice_deadline(), None);
    }

    #[test]
    fn superseded_load_is_dropped() {
        let mut state = ScreenState::<User>::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load(second, Ok(vec![user(2, "New", "User")]), now()));
        assert!(!state.finish_load(first, Ok(vec![user(1, "Old", "User")]), now()));

        assert_eq!(state.records()[0].name, "New");
        assert!(!state.loading);
    }

    #[test]
    fn stale_result_does_not_clear_loading() {
        let mut state = ScreenState::<User>::new();
        let first = state.begin_load();
        let _second = state.begin_load();

        state.finish_load(first, Ok(Vec::new()), now());
        assert!(state.loading);
    }

    #[test]
    fn failed_load_raises_error_notice() {
        let mut state = ScreenState::<User>::new();
        let ticket = state.begin_load();

        state.finish_load(ticket, Err(Error::transport("offline")), now());

        assert!(!state.loading);
        assert_eq!(state.notice(now()).unwrap().message, "Error: offline");
    }

    #[test]
    fn search_keeps_the_active_sort() {
        let mut state = ScreenState::<User>::new();
        let ticket = state.begin_load();
        state.finish_load(
            ticket,
            Ok(vec![
                user(1, "John Doe", "Admin"),
                user(2, "Jane Smith", "User"),
                user(3, "Bob Johnson", "User"),
                user(4, "Alice Brown", "Moderator"),
            ]),
            now(),
        );

        state.sort(SortEvent {
            column: "name".into(),
            direction: SortDirection::Desc,
        });
        state.set_search("user");
        let names: Vec<_> = state.filtered().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Smith", "Bob Johnson"]);

        state.set_search("");
        assert_eq!(state.filtered().len(), 4);
        assert_eq!(state.filtered()[0].name, "John Doe");
    }

    #[test]
    fn notice_expires_and_can_be_dismissed() {
        let mut state = ScreenState::<User>::new().with_alert_duration(Duration::from_millis(5000));
        state.show_notice(AlertKind::Success, "done", now());

        let later = now() + jiff::SignedDuration::from_secs(5);
        assert!(state.notice(now()).is_some());
        assert!(state.notice(later).is_none());

        state.dismiss_notice();
        assert!(state.notice(now()).is_none());
    }
}
