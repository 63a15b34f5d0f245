use std::{rc::Rc, time::Duration};

use secrecy::{ExposeSecret, SecretString};
use types::{Error, Result, SESSION_STORAGE_KEY, Session, decode_session, encode_session};

use crate::{
    observable::{Observable, Subscription},
    storage::SessionStorage,
    time::sleep,
};

/// How long the simulated login round-trip takes.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// Current-user state, mirrored into persistent storage.
///
/// Cloning is cheap and every clone observes the same session.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn SessionStorage>,
    key: String,
    login_delay: Duration,
    current: Observable<Option<Session>>,
}

impl SessionStore {
    /// Restore whatever session the storage holds. Unreadable or corrupt records count
    /// as "logged out".
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self::with_key(storage, SESSION_STORAGE_KEY)
    }

    pub fn with_key(storage: impl SessionStorage + 'static, key: impl Into<String>) -> Self {
        let key = key.into();
        let restored = restore(&storage, &key);

        Self {
            storage: Rc::new(storage),
            key,
            login_delay: DEFAULT_LOGIN_DELAY,
            current: Observable::new(restored),
        }
    }

    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Simulated authentication: any non-empty (after trimming) pair succeeds.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<Session> {
        let username = username.trim();
        if username.is_empty() || password.expose_secret().trim().is_empty() {
            return Err(Error::invalid_credentials());
        }

        sleep(self.login_delay).await;

        let session = Session::simulated(username);
        self.storage.set(&self.key, &encode_session(&session)?)?;
        tracing::info!(username = %session.username, "logged in");

        self.current.publish(Some(session.clone()));
        Ok(session)
    }

    /// Clears the session immediately. Storage failures are logged, not returned: the
    /// in-memory state is logged out regardless.
    pub fn logout(&self) {
        if let Err(error) = self.storage.remove(&self.key) {
            tracing::warn!(%error, "failed to clear persisted session");
        }
        tracing::info!("logged out");

        self.current.publish(None);
    }

    pub fn current_session(&self) -> &Observable<Option<Session>> {
        &self.current
    }

    pub fn current_session_value(&self) -> Option<Session> {
        self.current.get()
    }

    pub fn subscribe(&self, listener: impl FnMut(&Option<Session>) + 'static) -> Subscription {
        self.current.subscribe(listener)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session_value().is_some()
    }
}

fn restore(storage: &dyn SessionStorage, key: &str) -> Option<Session> {
    let stored = match storage.get(key) {
        Ok(stored) => stored?,
        Err(error) => {
            tracing::warn!(%error, "failed to read persisted session");
            return None;
        }
    };

    match decode_session(&stored) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!(%error, "ignoring corrupt persisted session");
            None
        }
    }
}
