use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Where a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The request never got a usable response (network, decode).
    Transport,
    /// The server answered with a non-2xx status.
    Server { status: u16 },
    /// Form-level validation; never reaches the network.
    Validation,
    /// Empty username or password at login.
    InvalidCredentials,
    /// Browser or file storage could not be read or written.
    Storage,
    Internal,
}

/// A serializable error for client rendering.
///
/// The message is what gets shown to the user, so it is already formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A client-side failure, e.g. the API host is unreachable.
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::Transport, format!("Error: {detail}"))
    }

    /// A failure reported by the server through its status line.
    pub fn server(status: u16, status_text: &str) -> Self {
        Self::new(
            ErrorKind::Server { status },
            format!("Error Code: {status}\nMessage: {status_text}"),
        )
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid credentials")
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn storage(detail: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::Storage, format!("Storage error: {detail}"))
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Server { status } => Some(status),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        // Debug output carries the context chain.
        Self::new(ErrorKind::Internal, format!("{error:?}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorKind::Internal, error.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Self::new(ErrorKind::Internal, format!("invalid url: {error}"))
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::new(ErrorKind::Internal, s)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::new(ErrorKind::Internal, s)
    }
}

/// Build an internal [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_anyhow_dont_use!($($arg)*))
    };
}
