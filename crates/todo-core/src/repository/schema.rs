//! Persisted Schema
//!
//! Versioned JSON form of the list:
//!
//! ```json
//! {"version":1,"items":[{"id":1,"text":"Buy milk"}]}
//! ```
//!
//! Older data is a bare array of `{"_id": .., "_item": ..}` objects where the
//! id may be a number or its string form. It is still read, never written.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Item, ItemId, TodoError, TodoList, TodoResult};

pub const SCHEMA_VERSION: u32 = 1;

// ========================
// Stored Shapes
// ========================

#[derive(Serialize)]
struct StoredListRef<'a> {
    version: u32,
    items: Vec<StoredItemRef<'a>>,
}

#[derive(Serialize)]
struct StoredItemRef<'a> {
    id: ItemId,
    text: &'a str,
}

#[derive(Deserialize)]
struct StoredList {
    version: u32,
    items: Vec<StoredItem>,
}

#[derive(Deserialize)]
struct StoredItem {
    id: ItemId,
    text: String,
}

#[derive(Deserialize)]
struct LegacyItem {
    #[serde(rename = "_id", default)]
    id: Option<Value>,
    #[serde(rename = "_item", default)]
    item: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Versioned(StoredList),
    Legacy(Vec<LegacyItem>),
}

// ========================
// Encode / Decode
// ========================

/// Serialize the whole list
pub fn encode_list(list: &TodoList) -> TodoResult<String> {
    let doc = StoredListRef {
        version: SCHEMA_VERSION,
        items: list
            .iter()
            .map(|item| StoredItemRef { id: item.id(), text: item.text() })
            .collect(),
    };
    Ok(serde_json::to_string(&doc)?)
}

/// Parse a stored value, keeping stored order
pub fn decode_list(raw: &str) -> TodoResult<TodoList> {
    match serde_json::from_str::<StoredDocument>(raw)? {
        StoredDocument::Versioned(doc) => {
            if doc.version != SCHEMA_VERSION {
                return Err(TodoError::UnsupportedVersion(doc.version));
            }
            Ok(TodoList::from_items(
                doc.items.into_iter().map(|s| Item::new(s.id, s.text)).collect(),
            ))
        }
        StoredDocument::Legacy(entries) => {
            let items = entries
                .into_iter()
                .enumerate()
                .filter_map(|(index, entry)| match legacy_item(entry) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        log::warn!("skipping stored entry {}: {}", index, e);
                        None
                    }
                })
                .collect();
            Ok(TodoList::from_items(items))
        }
    }
}

fn legacy_item(entry: LegacyItem) -> TodoResult<Item> {
    let id = match entry.id {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|raw| u32::try_from(raw).ok())
            .map(ItemId::new)
            .ok_or_else(|| TodoError::InvalidId(n.to_string()))?,
        Some(Value::String(s)) => s.parse::<ItemId>()?,
        other => {
            return Err(TodoError::InvalidId(
                other.map_or_else(|| "missing".to_string(), |v| v.to_string()),
            ))
        }
    };
    if !id.is_assigned() {
        return Err(TodoError::InvalidId(id.to_string()));
    }
    let text = entry
        .item
        .ok_or_else(|| TodoError::InvalidEntry(format!("item {} has no text", id)))?;
    Ok(Item::new(id, text))
}
