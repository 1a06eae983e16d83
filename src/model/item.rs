use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique identifier, assigned once at creation
    pub id: String,
    /// User-entered text
    pub value: String,
    /// Completion flag
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item with a freshly generated id
    pub fn new(value: impl Into<String>) -> Self {
        Item {
            id: uuid::Uuid::new_v4().to_string(),
            value: value.into(),
            completed: false,
        }
    }
}

/// Ordered, id-keyed item collection.
///
/// Insertion order is display order. Keyed by `id`, so two entries can never
/// share an id. Serialized as a plain array of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Item>", into = "Vec<Item>")]
pub struct ItemList {
    items: IndexMap<String, Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of items not yet completed
    pub fn remaining(&self) -> usize {
        self.iter().filter(|item| !item.completed).count()
    }

    /// Number of completed items
    pub fn completed_count(&self) -> usize {
        self.len() - self.remaining()
    }

    /// Append an item. An item whose id is already present replaces the
    /// existing entry in place.
    pub fn push(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.get_mut(id)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.items.values_mut()
    }

    /// Remove by id, keeping the order of the remaining entries
    pub(crate) fn remove(&mut self, id: &str) -> Option<Item> {
        self.items.shift_remove(id)
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Item) -> bool) {
        self.items.retain(|_, item| keep(item));
    }
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        let mut list = ItemList::new();
        for item in items {
            list.push(item);
        }
        list
    }
}

impl From<ItemList> for Vec<Item> {
    fn from(list: ItemList) -> Self {
        list.items.into_values().collect()
    }
}

impl FromIterator<Item> for ItemList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        ItemList::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = indexmap::map::Values<'a, String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, value: &str, completed: bool) -> Item {
        Item {
            id: id.into(),
            value: value.into(),
            completed,
        }
    }

    #[test]
    fn new_item_is_active_with_unique_id() {
        let a = Item::new("buy milk");
        let b = Item::new("buy milk");
        assert!(!a.completed);
        assert_eq!(a.value, "buy milk");
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn serializes_as_ordered_array() {
        let list: ItemList = vec![item("b", "second", true), item("a", "first", false)].into();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"b","value":"second","completed":true},{"id":"a","value":"first","completed":false}]"#
        );
    }

    #[test]
    fn duplicate_ids_collapse_in_first_position() {
        let list: ItemList = serde_json::from_str(
            r#"[{"id":"a","value":"old","completed":false},
                {"id":"b","value":"other","completed":false},
                {"id":"a","value":"new","completed":true}]"#,
        )
        .unwrap();
        let ids: Vec<&str> = list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(list.get("a").unwrap().value, "new");
        assert!(list.get("a").unwrap().completed);
    }

    #[test]
    fn remove_keeps_order() {
        let mut list: ItemList = vec![
            item("a", "A", false),
            item("b", "B", false),
            item("c", "C", false),
        ]
        .into();
        list.remove("b");
        let ids: Vec<&str> = list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn remaining_counts_active_items() {
        let list: ItemList = vec![
            item("a", "A", false),
            item("b", "B", true),
            item("c", "C", false),
        ]
        .into();
        assert_eq!(list.remaining(), 2);
        assert_eq!(list.completed_count(), 1);
    }
}
