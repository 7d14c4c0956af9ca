//! Дополнения EAN-5 и EAN-2 (цена, номер выпуска).
//!
//! Раскладка: старт 01011, цифры L/G по маске чётности, между цифрами
//! разделитель 01. Дополнение рисуется правее основного кода, подпись —
//! над барами.

use super::ean::{self, Parity};
use super::Symbology;
use crate::core::{BarcodeError, Encoded, Geometry, Style, GUARD, SPACE};
use crate::runs::push_modules;

const START: &str = "01011";
const SEPARATOR: &str = "01";

/// Маски EAN-5 по сумме `Σ d·(3,9,3,9,3) mod 10`. '1' = G.
const EAN5_FAMILIES: [&str; 10] = [
    "11000", "10100", "10010", "10001", "01100", "00110", "00011", "01010", "01001", "00101",
];

/// Маски EAN-2 по значению mod 4.
const EAN2_FAMILIES: [&str; 4] = ["00", "01", "10", "11"];

/// Сдвиг дополнения вправо от начала основного кода, в модулях.
pub const OFFSET_MODULES: f64 = 110.0;
/// Полоса под подпись над барами.
pub const LABEL_BAND: f64 = 10.0;
/// Базовая линия подписи внутри полосы.
pub const LABEL_BASELINE: f64 = 8.0;

/// Значение чётности EAN-5.
pub fn ean5_parity(d: &[u8]) -> u8 {
    let sum: u32 = d
        .iter()
        .zip([3u32, 9, 3, 9, 3])
        .map(|(&x, w)| u32::from(x) * w)
        .sum();
    (sum % 10) as u8
}

fn fixed(
    symbology: Symbology,
    text: &str,
    len: usize,
    expected: &'static [usize],
) -> Result<Vec<u8>, BarcodeError> {
    let d = ean::digits(symbology, text)?;
    if d.len() != len {
        return Err(BarcodeError::LengthMismatch {
            symbology,
            text: text.to_owned(),
            found: d.len(),
            expected,
        });
    }
    Ok(d)
}

// У дополнения нет стоп-паттерна: все его бары рисуются как охранные,
// последний бар остаётся сентинелом.
fn bars(d: &[u8], mask: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(5 + d.len() * 9);
    push_modules(&mut out, START, GUARD);
    for (i, (&x, bit)) in d.iter().zip(mask.bytes()).enumerate() {
        if i > 0 {
            push_modules(&mut out, SEPARATOR, GUARD);
        }
        ean::push_left(&mut out, x, Parity::from_mask(bit), GUARD);
    }
    out
}

fn spaced(d: &[u8]) -> String {
    d.iter()
        .map(|&x| char::from(b'0' + x).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn encode_ean5(text: &str) -> Result<Encoded, BarcodeError> {
    let d = fixed(Symbology::Ean5, text, 5, &[5])?;
    let mask = EAN5_FAMILIES[ean5_parity(&d) as usize];
    Ok(Encoded::new(bars(&d, mask), spaced(&d)))
}

pub fn encode_ean2(text: &str) -> Result<Encoded, BarcodeError> {
    let d = fixed(Symbology::Ean2, text, 2, &[2])?;
    let value = d[0] * 10 + d[1];
    let mask = EAN2_FAMILIES[(value % 4) as usize];
    Ok(Encoded::new(bars(&d, mask), spaced(&d)))
}

/// Бары начинаются под полосой подписи и заканчиваются вровень
/// с охранными барами EAN-13.
pub fn style(kind: u8, g: &Geometry) -> Style {
    match kind {
        SPACE => Style::blank(1.0, g),
        _ => Style::solid(
            1.0,
            g.y + LABEL_BAND,
            (g.height + ean::GUARD_OVERHANG - LABEL_BAND).max(1.0),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ean5_54321() {
        let d = [5, 4, 3, 2, 1];
        assert_eq!(ean5_parity(&d), 1);

        let e = encode_ean5("54321").unwrap();
        assert_eq!(e.label, "5 4 3 2 1");
        // 5 + 5×7 + 4×2
        assert_eq!(e.bars.len(), 48);

        let mut expected = Vec::new();
        push_modules(&mut expected, START, GUARD);
        for (i, (x, p)) in [
            (5, Parity::G),
            (4, Parity::L),
            (3, Parity::G),
            (2, Parity::L),
            (1, Parity::L),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                push_modules(&mut expected, SEPARATOR, GUARD);
            }
            ean::push_left(&mut expected, x, p, GUARD);
        }
        assert_eq!(e.bars, expected);
    }

    #[test]
    fn ean5_needs_exactly_five_digits() {
        assert!(matches!(
            encode_ean5("1234"),
            Err(BarcodeError::LengthMismatch { found: 4, .. })
        ));
        assert!(matches!(
            encode_ean5("12a45"),
            Err(BarcodeError::InvalidPayload { .. })
        ));
    }

    #[test]
    fn ean2_parity_by_value() {
        // 34 mod 4 = 2 → GL
        let e = encode_ean2("34").unwrap();
        let mut expected = Vec::new();
        push_modules(&mut expected, START, GUARD);
        ean::push_left(&mut expected, 3, Parity::G, GUARD);
        push_modules(&mut expected, SEPARATOR, GUARD);
        ean::push_left(&mut expected, 4, Parity::L, GUARD);
        assert_eq!(e.bars, expected);
        assert_eq!(e.label, "3 4");
    }

    #[test]
    fn bars_hang_below_label_band() {
        let g = Geometry { y: 0.0, height: 30.0 };
        let s = style(GUARD, &g);
        assert_eq!(s.top, LABEL_BAND);
        assert_eq!(s.top + s.height, 35.0);
    }
}
