use crossterm::event::{KeyCode, KeyModifiers};

use crate::io::persistence::{load_items, save_items};
use crate::io::store::{KeyValueStore, StoreError};
use crate::model::item::ItemList;
use crate::ops::item_ops::{self, ItemError};
use crate::view::delegate::{Delegate, EventType, UiEvent};
use crate::view::dom::ElementKind;
use crate::view::list_view::ListView;

use super::route::Route;

/// A requested state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Toggle(String),
    Remove(String),
    EditCommit { id: String, text: String },
    ToggleAll,
    ClearCompleted,
}

/// What a transition did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new item was appended; carries its id
    Added(String),
    /// The collection was replaced
    Changed,
    /// Nothing happened, for the given reason
    Unchanged(ItemError),
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, Outcome::Unchanged(_))
    }
}

/// Owns the item collection. Every successful transition replaces the
/// collection, writes it to the store and re-renders the list view, in that
/// order. Route changes re-render only.
pub struct Controller<S: KeyValueStore> {
    items: ItemList,
    store: S,
    key: String,
    route: Route,
    view: ListView,
    delegate: Delegate<Intent>,
}

impl<S: KeyValueStore> Controller<S> {
    /// Load the collection stored under `key` and render it once
    pub fn start(store: S, key: impl Into<String>, route: Route) -> Result<Self, StoreError> {
        let key = key.into();
        let items = load_items(&store, &key)?;
        tracing::info!(key = %key, count = items.len(), route = route.fragment(), "list loaded");
        let mut controller = Controller {
            items,
            store,
            key,
            route,
            view: ListView::new(),
            delegate: item_listeners(),
        };
        controller.render();
        Ok(controller)
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ListView {
        &mut self.view
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn add(&mut self, text: &str) -> Result<Outcome, StoreError> {
        self.apply(Intent::Add(text.to_string()))
    }

    pub fn toggle(&mut self, id: &str) -> Result<Outcome, StoreError> {
        self.apply(Intent::Toggle(id.to_string()))
    }

    pub fn remove(&mut self, id: &str) -> Result<Outcome, StoreError> {
        self.apply(Intent::Remove(id.to_string()))
    }

    pub fn edit(&mut self, id: &str, text: &str) -> Result<Outcome, StoreError> {
        self.apply(Intent::EditCommit {
            id: id.to_string(),
            text: text.to_string(),
        })
    }

    pub fn toggle_all(&mut self) -> Result<Outcome, StoreError> {
        self.apply(Intent::ToggleAll)
    }

    pub fn clear_completed(&mut self) -> Result<Outcome, StoreError> {
        self.apply(Intent::ClearCompleted)
    }

    /// Run one transition
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome, StoreError> {
        let result = match &intent {
            Intent::Add(text) => {
                item_ops::add_item(&self.items, text).map(|(next, id)| (next, Outcome::Added(id)))
            }
            Intent::Toggle(id) => {
                item_ops::toggle_item(&self.items, id).map(|next| (next, Outcome::Changed))
            }
            Intent::Remove(id) => {
                item_ops::remove_item(&self.items, id).map(|next| (next, Outcome::Changed))
            }
            Intent::EditCommit { id, text } => {
                item_ops::edit_item(&self.items, id, text).map(|next| (next, Outcome::Changed))
            }
            Intent::ToggleAll => item_ops::toggle_all(&self.items).map(|next| (next, Outcome::Changed)),
            Intent::ClearCompleted => {
                item_ops::clear_completed(&self.items).map(|next| (next, Outcome::Changed))
            }
        };

        match result {
            Ok((next, outcome)) => {
                tracing::debug!(?intent, "transition applied");
                self.changed(next)?;
                Ok(outcome)
            }
            Err(reason) => {
                tracing::debug!(?intent, %reason, "transition skipped");
                Ok(Outcome::Unchanged(reason))
            }
        }
    }

    /// Route the event through the delegated listeners and apply whatever
    /// they ask for
    pub fn dispatch(&mut self, event: &UiEvent) -> Result<Vec<Outcome>, StoreError> {
        let intents = self.delegate.dispatch(self.view.container(), event);
        intents.into_iter().map(|intent| self.apply(intent)).collect()
    }

    /// Follow a navigation change: re-render, no persistence
    pub fn navigate(&mut self, fragment: &str) {
        if self.route.set(fragment) {
            tracing::debug!(fragment, "route changed");
        }
        self.render();
    }

    /// Post-mutation hook: swap in the new collection, persist, re-render.
    /// The render happens even when the write fails so the screen matches
    /// the in-memory collection.
    fn changed(&mut self, next: ItemList) -> Result<(), StoreError> {
        self.items = next;
        let saved = save_items(&mut self.store, &self.key, &self.items);
        if let Err(e) = &saved {
            tracing::error!(error = %e, "could not persist list");
        }
        self.render();
        saved
    }

    fn render(&mut self) {
        let filter = self.route.current_filter();
        self.view.render(&self.items, &filter);
    }
}

/// The per-row listeners, registered once at the container
fn item_listeners() -> Delegate<Intent> {
    let mut delegate = Delegate::new();

    delegate.delegate(ElementKind::Toggle, EventType::Click, |event, container| {
        container
            .closest_row(event.target)
            .map(|row| Intent::Toggle(row.id().to_string()))
    });

    delegate.delegate(ElementKind::Remove, EventType::Click, |event, container| {
        container
            .closest_row(event.target)
            .map(|row| Intent::Remove(row.id().to_string()))
    });

    // Enter commits the label text; Shift+Enter keeps the default newline
    delegate.delegate(ElementKind::Label, EventType::KeyDown, |event, container| {
        let key = event.key?;
        if key.code != KeyCode::Enter || key.modifiers.contains(KeyModifiers::SHIFT) {
            return None;
        }
        event.prevent_default();
        let row = container.closest_row(event.target)?;
        Some(Intent::EditCommit {
            id: row.id().to_string(),
            text: row.text.clone(),
        })
    });

    delegate
}
