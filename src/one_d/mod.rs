//! Линейные символики: реестр имён и диспетчеризация кодирования/стилей.
//!
//! Каждая символика — вариант [`Symbology`] с одной операцией
//! `encode(text) → Encoded | BarcodeError` и своим селектором стиля.

pub mod addon;
pub mod code128;
pub mod code25i;
pub mod code39;
pub mod code93;
pub mod ean;
pub mod ean13;
pub mod ean8;
pub mod full_ascii;
pub mod rm4scc;
pub mod upce;

use std::fmt;
use std::str::FromStr;

use crate::core::{default_style, BarcodeError, Encoded, Geometry, LabelPlacement, Style};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbology {
    Code39,
    Code39Ext,
    Code93,
    Code25i,
    Code128,
    Ean2,
    Ean5,
    Ean8,
    Ean13,
    Upca,
    Upce,
    Rm4scc,
}

impl Symbology {
    pub const ALL: [Symbology; 12] = [
        Symbology::Code39,
        Symbology::Code39Ext,
        Symbology::Code93,
        Symbology::Code25i,
        Symbology::Code128,
        Symbology::Ean2,
        Symbology::Ean5,
        Symbology::Ean8,
        Symbology::Ean13,
        Symbology::Upca,
        Symbology::Upce,
        Symbology::Rm4scc,
    ];

    /// Каноническое имя в реестре.
    pub fn name(self) -> &'static str {
        match self {
            Symbology::Code39 => "Code39",
            Symbology::Code39Ext => "Code39Ext",
            Symbology::Code93 => "Code93",
            Symbology::Code25i => "Code25i",
            Symbology::Code128 => "Code128",
            Symbology::Ean2 => "Ean2",
            Symbology::Ean5 => "Ean5",
            Symbology::Ean8 => "Ean8",
            Symbology::Ean13 => "Ean13",
            Symbology::Upca => "Upca",
            Symbology::Upce => "Upce",
            Symbology::Rm4scc => "Rm4scc",
        }
    }

    /// Поиск по имени: регистр и дефисы не важны (`"EAN-13"`, `"ean13"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name.trim().chars().filter(|&c| c != '-').collect();
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(&key))
    }

    pub fn encode(self, text: &str) -> Result<Encoded, BarcodeError> {
        match self {
            Symbology::Code39 => code39::encode(text),
            Symbology::Code39Ext => code39::encode_extended(text),
            Symbology::Code93 => code93::encode(text),
            Symbology::Code25i => code25i::encode(text),
            Symbology::Code128 => code128::encode(text),
            Symbology::Ean2 => addon::encode_ean2(text),
            Symbology::Ean5 => addon::encode_ean5(text),
            Symbology::Ean8 => ean8::encode(text),
            Symbology::Ean13 => ean13::encode_ean13(text),
            Symbology::Upca => ean13::encode_upca(text),
            Symbology::Upce => upce::encode(text),
            Symbology::Rm4scc => rm4scc::encode(text),
        }
    }

    /// Селектор стиля для вида бара.
    pub fn style(self, kind: u8, g: &Geometry) -> Style {
        match self {
            Symbology::Ean8 | Symbology::Ean13 | Symbology::Upca | Symbology::Upce => {
                ean::style(kind, g)
            }
            Symbology::Ean2 | Symbology::Ean5 => addon::style(kind, g),
            Symbology::Rm4scc => rm4scc::style(kind, g),
            _ => default_style(kind, g),
        }
    }

    pub fn label_placement(self) -> LabelPlacement {
        match self {
            Symbology::Ean2 | Symbology::Ean5 => LabelPlacement::Above,
            _ => LabelPlacement::Below,
        }
    }

    /// Сдвиг начала баров от `x`, в модулях (до умножения на scale).
    pub fn origin_offset(self) -> f64 {
        match self {
            Symbology::Ean2 | Symbology::Ean5 => addon::OFFSET_MODULES,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(BarcodeError::MissingSymbology);
        }
        Self::from_name(s).ok_or_else(|| BarcodeError::UnknownSymbology(s.to_owned()))
    }
}
