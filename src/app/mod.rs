pub mod controller;
pub mod route;

pub use controller::{Controller, Intent, Outcome};
pub use route::Route;
