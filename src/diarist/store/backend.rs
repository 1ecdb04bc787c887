use crate::error::Result;

/// Abstract string key-value storage.
///
/// This is the whole contract the journal needs from its persistence medium:
/// whole values read and written under a fixed key. Implementations decide where
/// the strings live (files, memory).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic from the caller's point of view.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for std::rc::Rc<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
