//! The `ItemStore` trait seam and an in-memory implementation.
//!
//! [`ItemStore`] is the boundary between the state container and whatever
//! transport actually holds the collection. The HTTP client implements it
//! over reqwest; [`MemoryStore`] implements it over a `Vec` for tests and
//! offline use, with optional failure injection.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::item::{Item, ItemId};

/// Async access to a collection of to-do items.
///
/// All four operations map one-to-one onto the collection resource's
/// list/create/update/delete calls. Implementations do not retry; a failed
/// call surfaces as an [`Error`] and the caller decides what to report.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch the full list of items.
    async fn list(&self) -> Result<Vec<Item>>;

    /// Create a new item. The caller allocates the id.
    async fn create(&self, item: &Item) -> Result<()>;

    /// Set the checked flag of an existing item.
    async fn set_checked(&self, id: ItemId, checked: bool) -> Result<()>;

    /// Delete an item by id.
    async fn delete(&self, id: ItemId) -> Result<()>;
}

/// In-memory [`ItemStore`] with failure injection.
///
/// Used as the test double for the state container and as a scratch backend.
/// When a failure is armed via [`MemoryStore::fail_with`], every operation
/// returns that error until the failure is cleared.
#[derive(Default)]
pub struct MemoryStore {
    items: std::sync::Mutex<Vec<Item>>,
    failure: std::sync::Mutex<Option<String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given items.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: std::sync::Mutex::new(items),
            failure: std::sync::Mutex::new(None),
        }
    }

    /// Arm failure injection: every subsequent operation fails with an
    /// HTTP error carrying this message.
    pub fn fail_with<S: Into<String>>(&self, message: S) {
        *lock(&self.failure) = Some(message.into());
    }

    /// Disarm failure injection.
    pub fn clear_failure(&self) {
        *lock(&self.failure) = None;
    }

    /// Returns a snapshot of the stored items.
    pub fn snapshot(&self) -> Vec<Item> {
        lock(&self.items).clone()
    }

    fn check_failure(&self) -> Result<()> {
        match lock(&self.failure).as_deref() {
            Some(message) => Err(Error::http(message)),
            None => Ok(()),
        }
    }
}

/// Lock a mutex, recovering the inner value if a writer panicked.
fn lock<T>(mutex: &std::sync::Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Item>> {
        self.check_failure()?;
        Ok(lock(&self.items).clone())
    }

    async fn create(&self, item: &Item) -> Result<()> {
        self.check_failure()?;
        lock(&self.items).push(item.clone());
        Ok(())
    }

    async fn set_checked(&self, id: ItemId, checked: bool) -> Result<()> {
        self.check_failure()?;
        let mut items = lock(&self.items);
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(Error::ItemNotFound { id: id.get() })?;
        item.checked = checked;
        Ok(())
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        self.check_failure()?;
        let mut items = lock(&self.items);
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(Error::ItemNotFound { id: id.get() });
        }
        Ok(())
    }
}
