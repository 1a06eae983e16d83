use crate::model::item::{Item, ItemList};

/// Error type for item operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("item not found: {0}")]
    NotFound(String),
    #[error("item text is empty")]
    EmptyValue,
    #[error("nothing to change")]
    Unchanged,
}

// Every operation takes the current collection and returns the next one.
// The caller swaps it in; the input is never touched.

/// Append a new item with the trimmed `text`. Returns the new collection and
/// the id of the created item.
pub fn add_item(items: &ItemList, text: &str) -> Result<(ItemList, String), ItemError> {
    let value = text.trim();
    if value.is_empty() {
        return Err(ItemError::EmptyValue);
    }
    let item = Item::new(value);
    let id = item.id.clone();
    let mut next = items.clone();
    next.push(item);
    Ok((next, id))
}

/// Invert the completion flag of one item
pub fn toggle_item(items: &ItemList, id: &str) -> Result<ItemList, ItemError> {
    let mut next = items.clone();
    let item = next
        .get_mut(id)
        .ok_or_else(|| ItemError::NotFound(id.to_string()))?;
    item.completed = !item.completed;
    Ok(next)
}

/// Drop one item
pub fn remove_item(items: &ItemList, id: &str) -> Result<ItemList, ItemError> {
    let mut next = items.clone();
    next.remove(id)
        .ok_or_else(|| ItemError::NotFound(id.to_string()))?;
    Ok(next)
}

/// Replace the text of one item. The new text is stored as given; only
/// creation rejects empty text.
pub fn edit_item(items: &ItemList, id: &str, value: &str) -> Result<ItemList, ItemError> {
    let mut next = items.clone();
    let item = next
        .get_mut(id)
        .ok_or_else(|| ItemError::NotFound(id.to_string()))?;
    if item.value == value {
        return Err(ItemError::Unchanged);
    }
    item.value = value.to_string();
    Ok(next)
}

/// Mark every item completed, or every item active when all are already
/// completed.
pub fn toggle_all(items: &ItemList) -> Result<ItemList, ItemError> {
    if items.is_empty() {
        return Err(ItemError::Unchanged);
    }
    let target = items.remaining() > 0;
    let mut next = items.clone();
    for item in next.iter_mut() {
        item.completed = target;
    }
    Ok(next)
}

/// Drop every completed item
pub fn clear_completed(items: &ItemList) -> Result<ItemList, ItemError> {
    if items.completed_count() == 0 {
        return Err(ItemError::Unchanged);
    }
    let mut next = items.clone();
    next.retain(|item| !item.completed);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ItemList {
        vec![
            Item {
                id: "a".into(),
                value: "A".into(),
                completed: false,
            },
            Item {
                id: "b".into(),
                value: "B".into(),
                completed: true,
            },
            Item {
                id: "c".into(),
                value: "C".into(),
                completed: false,
            },
        ]
        .into()
    }

    fn ids(items: &ItemList) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn add_appends_trimmed_active_item() {
        let items = sample();
        let (next, id) = add_item(&items, "  buy milk \n").unwrap();
        assert_eq!(next.len(), 4);
        let added = next.iter().last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.value, "buy milk");
        assert!(!added.completed);
        // input untouched
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn add_rejects_blank_text() {
        let items = sample();
        assert_eq!(add_item(&items, ""), Err(ItemError::EmptyValue));
        assert_eq!(add_item(&items, "   \t\n"), Err(ItemError::EmptyValue));
    }

    #[test]
    fn toggle_twice_restores_item() {
        let items = sample();
        let once = toggle_item(&items, "a").unwrap();
        assert!(once.get("a").unwrap().completed);
        assert_eq!(ids(&once), vec!["a", "b", "c"]);
        let twice = toggle_item(&once, "a").unwrap();
        assert_eq!(twice, items);
    }

    #[test]
    fn toggle_unknown_id_is_not_found() {
        assert_eq!(
            toggle_item(&sample(), "zzz"),
            Err(ItemError::NotFound("zzz".into()))
        );
    }

    #[test]
    fn remove_drops_only_the_match() {
        let next = remove_item(&sample(), "b").unwrap();
        assert_eq!(ids(&next), vec!["a", "c"]);
        assert_eq!(
            remove_item(&sample(), "nope"),
            Err(ItemError::NotFound("nope".into()))
        );
    }

    #[test]
    fn edit_replaces_value_only() {
        let next = edit_item(&sample(), "b", "new text").unwrap();
        let b = next.get("b").unwrap();
        assert_eq!(b.value, "new text");
        assert!(b.completed);
        assert_eq!(ids(&next), vec!["a", "b", "c"]);
        assert_eq!(next.get("a"), sample().get("a"));
    }

    #[test]
    fn edit_does_not_revalidate_text() {
        let next = edit_item(&sample(), "a", "").unwrap();
        assert_eq!(next.get("a").unwrap().value, "");
    }

    #[test]
    fn edit_with_same_text_is_unchanged() {
        assert_eq!(edit_item(&sample(), "a", "A"), Err(ItemError::Unchanged));
    }

    #[test]
    fn toggle_all_completes_then_reactivates() {
        let all_done = toggle_all(&sample()).unwrap();
        assert!(all_done.iter().all(|i| i.completed));
        let all_active = toggle_all(&all_done).unwrap();
        assert!(all_active.iter().all(|i| !i.completed));
        assert_eq!(toggle_all(&ItemList::new()), Err(ItemError::Unchanged));
    }

    #[test]
    fn clear_completed_keeps_active_order() {
        let next = clear_completed(&sample()).unwrap();
        assert_eq!(ids(&next), vec!["a", "c"]);
        assert_eq!(clear_completed(&next), Err(ItemError::Unchanged));
    }
}
