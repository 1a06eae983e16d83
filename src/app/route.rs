use crate::model::filter::{Filter, current_filter};

/// The navigation signal: a fragment like `#/active` that selects the
/// filter. Changed from outside the controller; read on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    fragment: String,
}

impl Route {
    pub fn new(fragment: impl Into<String>) -> Self {
        Route {
            fragment: fragment.into(),
        }
    }

    pub fn for_filter(filter: Filter) -> Self {
        Route::new(filter.route())
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Filter name carried by the fragment
    pub fn current_filter(&self) -> String {
        current_filter(&self.fragment)
    }

    /// Replace the fragment. Returns whether it changed.
    pub fn set(&mut self, fragment: impl Into<String>) -> bool {
        let fragment = fragment.into();
        if fragment == self.fragment {
            return false;
        }
        self.fragment = fragment;
        true
    }
}
