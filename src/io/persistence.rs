use crate::io::store::{KeyValueStore, StoreError};
use crate::model::item::ItemList;

/// Read the whole collection from `key`. An absent or blank slot is an
/// empty collection; anything else must parse.
pub fn load_items(store: &impl KeyValueStore, key: &str) -> Result<ItemList, StoreError> {
    let content = match store.get(key)? {
        Some(content) if !content.trim().is_empty() => content,
        _ => return Ok(ItemList::new()),
    };
    serde_json::from_str(&content).map_err(|e| StoreError::Malformed {
        key: key.to_string(),
        source: e,
    })
}

/// Overwrite `key` with the whole collection
pub fn save_items(
    store: &mut impl KeyValueStore,
    key: &str,
    items: &ItemList,
) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(items)?;
    store.set(key, &content)?;
    tracing::debug!(key, count = items.len(), "list saved");
    Ok(())
}
