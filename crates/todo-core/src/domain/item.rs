//! Item Entity
//!
//! A single to-do entry: an identifier plus its text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TodoError;

/// Identifier of an item within a list
///
/// `0` is never assigned; it marks an item whose id has not been set yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    /// Placeholder id carried by `Item::default()`
    pub const UNASSIGNED: ItemId = ItemId(0);
    /// Id given to the first item of an empty list
    pub const FIRST: ItemId = ItemId(1);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn is_assigned(self) -> bool {
        self.0 != 0
    }

    /// The id following this one, `None` past `u32::MAX`
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u32> for ItemId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses the textual form of an id, as found in DOM attributes or older stored data.
impl FromStr for ItemId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ItemId)
            .map_err(|_| TodoError::InvalidId(s.to_string()))
    }
}

/// A to-do entry
///
/// Accessors do no validation. Callers make sure the id is assigned and the
/// text is non-empty before the item goes into a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    text: String,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Trim raw form input; `None` when nothing is left.
pub fn normalize_entry(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
