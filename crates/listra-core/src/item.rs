//! The `Item` wire record and its id newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a to-do item.
///
/// The collection resource uses plain integer ids. Ids are allocated
/// client-side as `last id + 1` (or 1 for an empty list), so they are dense
/// while the tail of the list is intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates an item id from a raw integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use listra_core::ItemId;
    ///
    /// let id = ItemId::new(1);
    /// assert_eq!(id.get(), 1);
    /// ```
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer id.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ItemId> for u64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A single to-do entry as exchanged with the collection resource.
///
/// The wire form is `{ "id": n, "item": "...", "checked": b }` — note that
/// the text field is named `item` on the wire, a quirk of the resource this
/// client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id of the item.
    pub id: ItemId,
    /// The to-do text.
    #[serde(rename = "item")]
    pub text: String,
    /// Whether the item has been checked off.
    pub checked: bool,
}

impl Item {
    /// Creates a new unchecked item.
    pub fn new<S: Into<String>>(id: ItemId, text: S) -> Self {
        Self {
            id,
            text: text.into(),
            checked: false,
        }
    }
}
