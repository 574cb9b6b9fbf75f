//! The `ListState` container and its synchronization rules.

use listra_core::{filter, Error, Item, ItemId, ItemStore};

/// Local to-do list state synchronized against a remote collection.
///
/// All operations are sequential request/await exchanges; there is no
/// concurrency coordination, retry, or batching. The rules are:
///
/// - a mutation is applied locally only after the remote call succeeds;
/// - a failed call records the error's string form in `last_error` and
///   leaves the local list untouched (nothing to revert);
/// - only a successful [`refresh`](ListState::refresh) clears `last_error`.
pub struct ListState<S> {
    store: S,
    items: Vec<Item>,
    draft: String,
    search: String,
    is_loading: bool,
    last_error: Option<String>,
}

impl<S: ItemStore> ListState<S> {
    /// Creates a state container over the given store.
    ///
    /// The container starts empty and loading; call
    /// [`refresh`](ListState::refresh) to populate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: Vec::new(),
            draft: String::new(),
            search: String::new(),
            is_loading: true,
            last_error: None,
        }
    }

    /// Fetch the list from the remote resource.
    ///
    /// On success the local list is replaced and any recorded error is
    /// cleared. On failure the error is recorded and the local list is left
    /// as it was. The loading flag is cleared in both outcomes.
    pub async fn refresh(&mut self) {
        match self.store.list().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "fetched item list");
                self.items = items;
                self.last_error = None;
            }
            Err(e) => self.record_error(&e),
        }
        self.is_loading = false;
    }

    /// Submit the current draft as a new item.
    ///
    /// A draft that is empty after trimming is a no-op: no request is made
    /// and no error is recorded. On success the new item is appended
    /// locally and the draft is cleared.
    pub async fn submit(&mut self) {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return;
        }
        if self.add(&text).await {
            self.draft.clear();
        }
    }

    /// Create a new item with the given text.
    ///
    /// The id is allocated as the last item's id plus one, or 1 for an
    /// empty list. Returns whether the item was created.
    pub async fn add(&mut self, text: &str) -> bool {
        let id = self.next_id();
        let item = Item::new(id, text);
        match self.store.create(&item).await {
            Ok(()) => {
                self.items.push(item);
                true
            }
            Err(e) => {
                self.record_error(&e);
                false
            }
        }
    }

    /// Flip the checked flag of the item with the given id.
    ///
    /// An id not present in the local list records an error without making
    /// a request.
    pub async fn toggle(&mut self, id: ItemId) {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            self.record_error(&Error::ItemNotFound { id: id.get() });
            return;
        };
        let checked = !self.items[index].checked;
        match self.store.set_checked(id, checked).await {
            Ok(()) => self.items[index].checked = checked,
            Err(e) => self.record_error(&e),
        }
    }

    /// Delete the item with the given id.
    pub async fn remove(&mut self, id: ItemId) {
        match self.store.delete(id).await {
            Ok(()) => self.items.retain(|item| item.id != id),
            Err(e) => self.record_error(&e),
        }
    }

    /// Items whose text matches the current search, in list order.
    ///
    /// This is a view over the local list; it never mutates it.
    pub fn visible_items(&self) -> Vec<&Item> {
        filter::filter_items(&self.items, &self.search)
    }

    /// The full local list, unfiltered.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Total item count, ignoring the search filter.
    ///
    /// The footer count always reflects the whole list, even while a
    /// search is active.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the local list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the initial fetch has not yet completed.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last recorded error string, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The current draft text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft text.
    pub fn set_draft<T: Into<String>>(&mut self, draft: T) {
        self.draft = draft.into();
    }

    /// The current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text.
    pub fn set_search<T: Into<String>>(&mut self, search: T) {
        self.search = search.into();
    }

    /// The id the next created item will get.
    fn next_id(&self) -> ItemId {
        self.items
            .last()
            .map(|item| item.id.next())
            .unwrap_or_else(|| ItemId::new(1))
    }

    fn record_error(&mut self, error: &Error) {
        tracing::warn!(%error, "operation failed");
        self.last_error = Some(error.to_string());
    }
}
