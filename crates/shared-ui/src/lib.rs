pub mod attrs;
pub mod components;

pub use attrs::merge_attributes;
pub use components::*;
