use log::debug;
use web_sys::{window, Storage};

/// Where the language preference is cached between visits.
///
/// Implementations never fail loudly: an unreadable backend reads as "no
/// preference" and a failed write is dropped.
pub trait PreferenceStorage {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
}

/// Browser localStorage under a single key.
#[derive(Clone, PartialEq)]
pub struct LocalStorage {
    key: &'static str,
}

impl LocalStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    // Some browsers expose localStorage but throw on every access (private
    // mode, disabled cookies), so probe with a write before trusting it.
    fn usable() -> Option<Storage> {
        let storage = window()?.local_storage().ok().flatten()?;
        let probe = "__storage_test__";
        storage.set_item(probe, probe).ok()?;
        let _ = storage.remove_item(probe);
        Some(storage)
    }
}

impl PreferenceStorage for LocalStorage {
    fn read(&self) -> Option<String> {
        let Some(storage) = Self::usable() else {
            debug!("localStorage unavailable, no cached language");
            return None;
        };
        match storage.get_item(self.key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(_) => {
                debug!("Failed to read {} from localStorage", self.key);
                None
            }
        }
    }

    fn write(&self, value: &str) {
        let Some(storage) = Self::usable() else {
            debug!("localStorage unavailable, language preference not cached");
            return;
        };
        if storage.set_item(self.key, value).is_err() {
            debug!("Failed to cache language preference");
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::PreferenceStorage;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct MemoryStorage {
        pub value: RefCell<Option<String>>,
    }

    impl MemoryStorage {
        pub fn with(value: &str) -> Self {
            Self {
                value: RefCell::new(Some(value.to_string())),
            }
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn read(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn write(&self, value: &str) {
            *self.value.borrow_mut() = Some(value.to_string());
        }
    }

    /// Behaves like a browser with storage switched off.
    pub struct DisabledStorage;

    impl PreferenceStorage for DisabledStorage {
        fn read(&self) -> Option<String> {
            None
        }

        fn write(&self, _value: &str) {}
    }
}
