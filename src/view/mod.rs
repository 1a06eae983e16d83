//! Everything between the item collection and the screen: the pure view
//! model, item fragments, the list container and delegated events.

pub mod delegate;
pub mod dom;
pub mod fragment;
pub mod list_view;
pub mod view_model;

pub use delegate::{Delegate, EventType, UiEvent};
pub use dom::{ElementKind, ElementRef, ListContainer, RowNode};
pub use fragment::{ItemFragment, render_item};
pub use list_view::ListView;
pub use view_model::{ViewModel, view_model};
