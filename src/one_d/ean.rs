//! Общая часть EAN/UPC: таблицы L/G/R, охранные паттерны, контрольная
//! цифра, проверка длины и раскладка подписи.
//!
//! Таблицы хранятся ширинами run'ов (space/bar/space/bar), как в сканере:
//! - L — левые «A»-паттерны, начинаются с пробела;
//! - G — реверс L (зеркало по run'ам);
//! - R — ширины L, но начинаются с бара (т.е. побитовая инверсия L).

use super::Symbology;
use crate::core::{BarcodeError, Geometry, Style, GUARD, SPACE};
use crate::runs::{push_modules, push_widths};

const L_WIDTHS: [[u8; 4]; 10] = [
    [3, 2, 1, 1],
    [2, 2, 2, 1],
    [2, 1, 2, 2],
    [1, 4, 1, 1],
    [1, 1, 3, 2],
    [1, 2, 3, 1],
    [1, 1, 1, 4],
    [1, 3, 1, 2],
    [1, 2, 1, 3],
    [3, 1, 1, 2],
];

const G_WIDTHS: [[u8; 4]; 10] = [
    [1, 1, 2, 3],
    [1, 2, 2, 2],
    [2, 2, 1, 2],
    [1, 1, 4, 1],
    [2, 3, 1, 1],
    [1, 3, 2, 1],
    [4, 1, 1, 1],
    [2, 1, 3, 1],
    [3, 1, 2, 1],
    [2, 1, 1, 3],
];

/// Маски L/G для EAN-13 по первой цифре. '1' = G.
pub(crate) const FAMILIES: [&str; 10] = [
    "000000", "001011", "001101", "001110", "010011", "011001", "011100", "010101", "010110",
    "011010",
];

/// Крайний охранный паттерн.
pub(crate) const GUARD_BAR: &str = "101";
/// Центральный охранный паттерн EAN-13/EAN-8/UPC-A.
pub(crate) const CENTER_BAR: &str = "01010";

/// Свес охранных баров ниже обычных.
pub(crate) const GUARD_OVERHANG: f64 = 5.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Parity {
    L,
    G,
}

impl Parity {
    #[inline]
    pub(crate) fn from_mask(bit: u8) -> Self {
        if bit == b'1' {
            Parity::G
        } else {
            Parity::L
        }
    }
}

/// Левая цифра в семействе L или G.
pub fn push_left(out: &mut Vec<u8>, digit: u8, parity: Parity, kind: u8) {
    let widths = match parity {
        Parity::L => &L_WIDTHS[digit as usize],
        Parity::G => &G_WIDTHS[digit as usize],
    };
    push_widths(out, widths, false, kind);
}

/// Правая цифра (R).
pub fn push_right(out: &mut Vec<u8>, digit: u8, kind: u8) {
    push_widths(out, &L_WIDTHS[digit as usize], true, kind);
}

/// Левая половина по маске семейств (`'0'` = L, `'1'` = G).
pub fn push_interleaved(out: &mut Vec<u8>, digits: &[u8], mask: &str, kind: u8) {
    for (&d, bit) in digits.iter().zip(mask.bytes()) {
        push_left(out, d, Parity::from_mask(bit), kind);
    }
}

#[inline]
pub fn push_guard(out: &mut Vec<u8>, pattern: &str) {
    push_modules(out, pattern, GUARD);
}

/// Классическое обрамление: guard, левая половина, центр, правая, guard.
pub fn enclose(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(left.len() + right.len() + 11);
    push_guard(&mut out, GUARD_BAR);
    out.extend_from_slice(left);
    push_guard(&mut out, CENTER_BAR);
    out.extend_from_slice(right);
    push_guard(&mut out, GUARD_BAR);
    out
}

/// Контрольная цифра UPC/EAN: веса 3,1,3,… справа налево.
pub fn checksum(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Текст → цифры; пустой или нецифровой текст — ошибка.
pub fn digits(symbology: Symbology, text: &str) -> Result<Vec<u8>, BarcodeError> {
    if text.is_empty() {
        return Err(BarcodeError::EmptyPayload { symbology });
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BarcodeError::invalid(
            symbology,
            text,
            "Not a Number, must be digits 0-9 only",
        ));
    }
    Ok(text.bytes().map(|b| b - b'0').collect())
}

/// Принять `payload` цифр (дописать контрольную) или `payload + 1`
/// (проверить её). Остальные длины — `LengthMismatch`.
pub fn complete(
    symbology: Symbology,
    text: &str,
    payload: usize,
    expected: &'static [usize],
) -> Result<Vec<u8>, BarcodeError> {
    let mut ds = digits(symbology, text)?;
    if ds.len() == payload {
        ds.push(checksum(&ds));
        Ok(ds)
    } else if ds.len() == payload + 1 {
        if checksum(&ds[..payload]) == ds[payload] {
            Ok(ds)
        } else {
            Err(BarcodeError::ChecksumMismatch {
                symbology,
                text: text.to_owned(),
            })
        }
    } else {
        Err(BarcodeError::LengthMismatch {
            symbology,
            text: text.to_owned(),
            found: ds.len(),
            expected,
        })
    }
}

/// Элемент раскладки подписи.
#[derive(Copy, Clone, Debug)]
pub enum Seg {
    Digits(usize),
    Gap(usize),
}

/// Разложить цифры по сегментам. Лишние цифры не выводятся.
pub fn layout(digits: &[u8], segs: &[Seg]) -> String {
    let mut out = String::new();
    let mut it = digits.iter();
    for seg in segs {
        match *seg {
            Seg::Digits(n) => out.extend(it.by_ref().take(n).map(|&d| char::from(b'0' + d))),
            Seg::Gap(n) => out.extend(std::iter::repeat(' ').take(n)),
        }
    }
    out
}

/// Стиль EAN/UPC: охранные бары свисают ниже подписи.
pub fn style(kind: u8, g: &Geometry) -> Style {
    match kind {
        SPACE => Style::blank(1.0, g),
        GUARD => Style::solid(1.0, g.y, g.height + GUARD_OVERHANG),
        _ => Style::solid(1.0, g.y, g.height),
    }
}
