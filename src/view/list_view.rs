use crate::model::item::ItemList;

use super::dom::ListContainer;
use super::fragment::render_item;
use super::view_model::{SelectorState, ViewModel, view_model};

/// The displayed list: container rows, the counter and the filter
/// selectors, all replaced on every render
#[derive(Debug, Clone)]
pub struct ListView {
    container: ListContainer,
    model: ViewModel,
    renders: u64,
}

impl Default for ListView {
    fn default() -> Self {
        ListView {
            container: ListContainer::new(),
            model: view_model(&ItemList::new(), ""),
            renders: 0,
        }
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `items` under the filter named `filter_name`
    pub fn render(&mut self, items: &ItemList, filter_name: &str) {
        let model = view_model(items, filter_name);
        self.container
            .replace_children(model.visible.iter().map(render_item));
        self.model = model;
        self.renders += 1;
        tracing::trace!(
            filter = filter_name,
            visible = self.model.visible.len(),
            remaining = self.model.remaining,
            "list rendered"
        );
    }

    pub fn container(&self) -> &ListContainer {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut ListContainer {
        &mut self.container
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.model
    }

    /// Counter display text
    pub fn count_text(&self) -> String {
        self.model.count_text()
    }

    pub fn selectors(&self) -> &[SelectorState] {
        &self.model.selectors
    }

    /// How many times `render` has run
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}
