//! Ошибки кодирования и рендера.
//!
//! Восстановимые ошибки (плохой payload) генератор пишет одной строкой
//! в диагностический sink хоста и возвращает `Ok(None)`. Остальные —
//! ошибки вызывающего кода, они всплывают наверх.

use thiserror::Error;

use crate::one_d::Symbology;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    /// Имя символики не найдено в реестре.
    #[error("Invalid type of barcode: {0}")]
    UnknownSymbology(String),

    /// Имя символики не задано.
    #[error("No barcode type given")]
    MissingSymbology,

    #[error("{symbology}: no text to encode")]
    EmptyPayload { symbology: Symbology },

    /// Символы вне алфавита символики.
    #[error("{symbology}: invalid payload {text:?}: {reason}")]
    InvalidPayload {
        symbology: Symbology,
        text: String,
        reason: &'static str,
    },

    #[error(
        "{symbology}: wrong size {found} for {text:?}, must be {} digits",
        join_lengths(.expected)
    )]
    LengthMismatch {
        symbology: Symbology,
        text: String,
        found: usize,
        expected: &'static [usize],
    },

    #[error("{symbology}: checksum failed for {text:?}, omit it for a new sum")]
    ChecksumMismatch { symbology: Symbology, text: String },

    #[error("UPC-A {0:?} cannot be compressed into UPC-E")]
    UnconvertibleUpc(String),

    #[error("No document defined to add barcode to")]
    HostMissing,

    #[error("Invalid parameter {key}: {reason}")]
    InvalidParameter { key: String, reason: String },

    #[error("SVG error: {0}")]
    Svg(String),
}

impl BarcodeError {
    /// Ошибки payload: диагностируются и дают пустой результат.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BarcodeError::EmptyPayload { .. }
                | BarcodeError::InvalidPayload { .. }
                | BarcodeError::LengthMismatch { .. }
                | BarcodeError::ChecksumMismatch { .. }
                | BarcodeError::UnconvertibleUpc(_)
        )
    }

    pub(crate) fn invalid(symbology: Symbology, text: &str, reason: &'static str) -> Self {
        BarcodeError::InvalidPayload {
            symbology,
            text: text.to_owned(),
            reason,
        }
    }
}

fn join_lengths(lengths: &[usize]) -> String {
    lengths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
