use serde::Serialize;

use crate::model::Item;
use crate::view::{ViewModel, render_item};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub id: String,
    pub value: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ListJson {
    pub filter: String,
    pub remaining: usize,
    pub completed: usize,
    pub total: usize,
    pub items: Vec<ItemJson>,
}

#[derive(Serialize)]
pub struct ChangeJson {
    /// Whether the stored list was rewritten
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemJson>,
    pub remaining: usize,
}

pub fn item_to_json(item: &Item) -> ItemJson {
    ItemJson {
        id: item.id.clone(),
        value: item.value.clone(),
        completed: item.completed,
    }
}

pub fn list_to_json(model: &ViewModel) -> ListJson {
    ListJson {
        filter: crate::model::Filter::from_name(&model.filter_name).to_string(),
        remaining: model.remaining,
        completed: model.completed,
        total: model.total,
        items: model.visible.iter().map(item_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Characters of the id shown in text output
pub const SHORT_ID_LEN: usize = 8;

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((i, _)) => &id[..i],
        None => id,
    }
}

/// One line per item: `[x] 1a2b3c4d  text`
pub fn format_item_line(item: &Item) -> String {
    format!(
        "{} {}  {}",
        render_item(item).toggle.symbol(),
        short_id(&item.id),
        item.value.replace('\n', "\u{21B5}")
    )
}
