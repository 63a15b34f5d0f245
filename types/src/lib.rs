mod error;
pub mod product;
pub mod record;
pub mod session;
pub mod user;

pub use error::{Error, ErrorKind, Result};
pub use product::{NewProduct, Product, StockStatus};
pub use record::{RecordId, Resource};
pub use session::{SESSION_STORAGE_KEY, Session, decode_session, encode_session};
pub use user::{NewUser, User};

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
