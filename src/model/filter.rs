use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::item::Item;

/// Leading route marker `#/`
static ROUTE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#/").unwrap());

/// Strip the route marker from a navigation fragment, returning the filter
/// name verbatim. `"#/active"` -> `"active"`, `"#/"` and `""` -> `""`.
/// A fragment without the marker comes back unchanged.
pub fn current_filter(fragment: &str) -> String {
    ROUTE_MARKER.replace(fragment, "").into_owned()
}

/// Which subset of the collection is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Interpret a filter name. Anything unrecognized shows everything.
    pub fn from_name(name: &str) -> Filter {
        match name {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// The filter value a selector for this filter is associated with
    pub fn value(self) -> &'static str {
        match self {
            Filter::All => "",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Route fragment that selects this filter
    pub fn route(self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Active => write!(f, "active"),
            Filter::Completed => write!(f, "completed"),
        }
    }
}
