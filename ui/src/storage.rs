//! Key/value persistence for the session record.
//!
//! The browser build uses `window.localStorage`; native builds and tests use
//! [`FileStorage`] or [`MemoryStorage`].

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use types::Result;

/// A string key/value store that survives process restarts (except [`MemoryStorage`]).
///
/// Methods take `&self`: implementations use interior mutability so one storage can be
/// shared by several owners.
pub trait SessionStorage {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Succeeds even if nothing was stored.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage. Clones share the same map, which is how tests model a restart:
/// a fresh store built over a clone sees what the previous one wrote.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::{
        io::ErrorKind,
        path::{Path, PathBuf},
    };

    use types::{Error, Result};

    use super::SessionStorage;

    /// One `<key>.json` file per key inside a directory.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: PathBuf,
    }

    impl FileStorage {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{key}.json"))
        }
    }

    impl SessionStorage for FileStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            match std::fs::read_to_string(self.path(key)) {
                Ok(contents) => Ok(Some(contents)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(Error::storage(e)),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            std::fs::create_dir_all(&self.dir).map_err(Error::storage)?;
            std::fs::write(self.path(key), value).map_err(Error::storage)
        }

        fn remove(&self, key: &str) -> Result<()> {
            match std::fs::remove_file(self.path(key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(Error::storage(e)),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod local {
    use types::{Error, Result};

    use super::SessionStorage;

    /// `window.localStorage`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Result<web_sys::Storage> {
            web_sys::window()
                .ok_or_else(|| Error::storage("no window"))?
                .local_storage()
                .map_err(|e| Error::storage(format!("{e:?}")))?
                .ok_or_else(|| Error::storage("localStorage unavailable"))
        }
    }

    impl SessionStorage for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Self::storage()?
                .get_item(key)
                .map_err(|e| Error::storage(format!("{e:?}")))
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| Error::storage(format!("{e:?}")))
        }

        fn remove(&self, key: &str) -> Result<()> {
            Self::storage()?
                .remove_item(key)
                .map_err(|e| Error::storage(format!("{e:?}")))
        }
    }
}
