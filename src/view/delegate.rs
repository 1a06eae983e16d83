use std::cell::Cell;

use crossterm::event::KeyEvent;

use super::dom::{ElementKind, ElementRef, ListContainer};

/// Event types a listener can be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Click,
    KeyDown,
}

/// An interaction aimed at one element of the list container
#[derive(Debug)]
pub struct UiEvent {
    pub event_type: EventType,
    /// The element the event originated on
    pub target: ElementRef,
    pub key: Option<KeyEvent>,
    default_prevented: Cell<bool>,
}

impl UiEvent {
    pub fn click(target: ElementRef) -> Self {
        UiEvent {
            event_type: EventType::Click,
            target,
            key: None,
            default_prevented: Cell::new(false),
        }
    }

    pub fn key_down(target: ElementRef, key: KeyEvent) -> Self {
        UiEvent {
            event_type: EventType::KeyDown,
            target,
            key: Some(key),
            default_prevented: Cell::new(false),
        }
    }

    /// Suppress the default action (e.g. newline insertion for Enter)
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

type Handler<M> = Box<dyn Fn(&UiEvent, &ListContainer) -> Option<M>>;

struct Listener<M> {
    selector: ElementKind,
    event_type: EventType,
    handler: Handler<M>,
}

/// Listeners attached at the list container level.
///
/// Handlers are looked up by the kind of the event's target at dispatch
/// time, so they apply to rows mounted after registration. Handlers return
/// a message for the owner to act on instead of mutating anything.
pub struct Delegate<M> {
    listeners: Vec<Listener<M>>,
}

impl<M> Default for Delegate<M> {
    fn default() -> Self {
        Delegate {
            listeners: Vec::new(),
        }
    }
}

impl<M> Delegate<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach one listener for `event_type` that fires when the target
    /// matches `selector`
    pub fn delegate(
        &mut self,
        selector: ElementKind,
        event_type: EventType,
        handler: impl Fn(&UiEvent, &ListContainer) -> Option<M> + 'static,
    ) {
        self.listeners.push(Listener {
            selector,
            event_type,
            handler: Box::new(handler),
        });
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Run every listener of the event's type whose selector matches the
    /// target. Non-matching targets are ignored.
    pub fn dispatch(&self, container: &ListContainer, event: &UiEvent) -> Vec<M> {
        self.listeners
            .iter()
            .filter(|l| l.event_type == event.event_type)
            .filter(|l| container.matches(event.target, l.selector))
            .filter_map(|l| (l.handler)(event, container))
            .collect()
    }
}
