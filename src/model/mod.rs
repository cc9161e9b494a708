//! Editable story document model, deserialized from editor JSON.

pub mod element;
pub mod fill;
pub mod story;
