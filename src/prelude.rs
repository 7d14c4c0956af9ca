//! `use ultrabar::prelude::*;` — всё, что нужно для типичного вызова.

pub use crate::api::{get_barcode, Barcode, Params};
pub use crate::core::{BarcodeError, Encoded, LabelPlacement, Run};
pub use crate::one_d::Symbology;
pub use crate::svg::{Element, Host, SvgDocument};
