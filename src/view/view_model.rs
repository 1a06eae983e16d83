use serde::Serialize;

use crate::model::filter::Filter;
use crate::model::item::{Item, ItemList};

/// One filter selector in the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorState {
    pub filter: Filter,
    pub selected: bool,
}

/// Everything the list view displays, computed from the collection and the
/// current filter name alone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    /// Filter name as read from the route
    pub filter_name: String,
    /// Items passing the filter, in collection order
    pub visible: Vec<Item>,
    /// Active items across the whole collection, regardless of filter
    pub remaining: usize,
    pub completed: usize,
    pub total: usize,
    pub selectors: Vec<SelectorState>,
}

impl ViewModel {
    /// Counter display text
    pub fn count_text(&self) -> String {
        count_text(self.remaining)
    }
}

pub fn count_text(remaining: usize) -> String {
    format!("{} items left", remaining)
}

/// Compute the view model for `items` under the filter named `filter_name`
pub fn view_model(items: &ItemList, filter_name: &str) -> ViewModel {
    let filter = Filter::from_name(filter_name);
    let visible = items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();
    // Selection compares the raw name, so an unrecognized name selects none
    let selectors = Filter::ALL
        .iter()
        .map(|&f| SelectorState {
            filter: f,
            selected: f.value() == filter_name,
        })
        .collect();

    ViewModel {
        filter_name: filter_name.to_string(),
        visible,
        remaining: items.remaining(),
        completed: items.completed_count(),
        total: items.len(),
        selectors,
    }
}
