use std::time::Duration;

use jiff::{SignedDuration, Timestamp};

/// How long a notice stays up unless dismissed.
pub const DEFAULT_ALERT_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl AlertKind {
    pub fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Error => "alert-error",
            AlertKind::Warning => "alert-warning",
            AlertKind::Info => "alert-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Success => "✓",
            AlertKind::Error => "✕",
            AlertKind::Warning => "!",
            AlertKind::Info => "i",
        }
    }
}

/// A timed notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: AlertKind,
    pub message: String,
    pub visible_until: Timestamp,
}

impl Notice {
    pub fn new(kind: AlertKind, message: impl Into<String>, now: Timestamp, ttl: Duration) -> Self {
        let ttl = SignedDuration::try_from(ttl).unwrap_or(SignedDuration::MAX);

        Self {
            kind,
            message: message.into(),
            visible_until: now.checked_add(ttl).unwrap_or(Timestamp::MAX),
        }
    }

    pub fn is_visible(&self, now: Timestamp) -> bool {
        now < self.visible_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let notice = Notice::new(AlertKind::Success, "saved", now, DEFAULT_ALERT_DURATION);

        assert!(notice.is_visible(now));
        assert!(notice.is_visible(now + SignedDuration::from_millis(4999)));
        assert!(!notice.is_visible(now + SignedDuration::from_millis(5000)));
    }
}
