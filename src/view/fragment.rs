use serde::Serialize;

use crate::model::item::Item;

/// Icon state of a row's toggle affordance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleIcon {
    Unchecked,
    Checked,
}

impl ToggleIcon {
    pub fn symbol(self) -> &'static str {
        match self {
            ToggleIcon::Unchecked => "[ ]",
            ToggleIcon::Checked => "[x]",
        }
    }
}

/// Display fragment for one item: a row tagged with the item id holding a
/// toggle, an editable label and a remove affordance. The remove affordance
/// has no state of its own; the container shows it on the hovered or
/// focused row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFragment {
    pub id: String,
    pub completed: bool,
    pub toggle: ToggleIcon,
    /// Initial text of the editable label
    pub label: String,
    /// Label is drawn struck through
    pub struck: bool,
}

/// Build the display fragment for one item
pub fn render_item(item: &Item) -> ItemFragment {
    ItemFragment {
        id: item.id.clone(),
        completed: item.completed,
        toggle: if item.completed {
            ToggleIcon::Checked
        } else {
            ToggleIcon::Unchecked
        },
        label: item.value.clone(),
        struck: item.completed,
    }
}
