//! Общие типы и ошибки, не привязанные к конкретной символике.

pub mod error;
pub mod types;

pub use error::BarcodeError;
pub use types::{default_style, Encoded, Geometry, LabelPlacement, Run, Style, BAR, GUARD, SPACE};
