//! Markup tree and CSS helpers shared by the serializers.

pub mod node;
pub mod style;
