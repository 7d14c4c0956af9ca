//! Code 93: 47 кодовых значений по 9 модулей + старт/стоп.
//!
//! Раскладка: старт, данные (full ASCII через сдвиги), контрольные
//! символы C и K, стоп, завершающий бар.
//!
//! Контроль: веса убывают от `len mod M` (M, если остаток 0) и после 1
//! снова становятся M; C — M=20 по данным, K — M=15 по данным + C;
//! значение = сумма mod 47.

use super::full_ascii::{self, Shift};
use super::Symbology;
use crate::core::{BarcodeError, Encoded, BAR, GUARD};
use crate::runs::push_modules;

/// Символы со значениями 0..=42.
const CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Модульные паттерны значений 0..=47 (47 — старт/стоп).
const PATTERNS: [&str; 48] = [
    "100010100", "101001000", "101000100", "101000010", "100101000", "100100100", "100100010",
    "101010000", "100010010", "100001010", "110101000", "110100100", "110100010", "110010100",
    "110010010", "110001010", "101101000", "101100100", "101100010", "100110100", "100011010",
    "101011000", "101001100", "101000110", "100101100", "100010110", "110110100", "110110010",
    "110101100", "110100110", "110010110", "110011010", "101101100", "101100110", "100110110",
    "100111010", "100101110", "111010100", "111010010", "111001010", "101101110", "101110110",
    "110101110", "100100110", "111011010", "111010110", "100110010", "101011110",
];

const START_STOP: usize = 47;

#[inline]
fn shift_value(s: Shift) -> u8 {
    match s {
        Shift::Dollar => 43,
        Shift::Percent => 44,
        Shift::Slash => 45,
        Shift::Plus => 46,
    }
}

#[inline]
fn value(c: char) -> Option<u8> {
    CHARS.find(c).map(|i| i as u8)
}

/// Кодовые значения данных (без контрольных символов).
pub fn values(text: &str) -> Result<Vec<u8>, BarcodeError> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        if let Some(v) = value(c) {
            out.push(v);
            continue;
        }
        match full_ascii::escape(c) {
            Some((shift, base)) => {
                out.push(shift_value(shift));
                // базовый символ пары всегда A..Z
                out.push(value(base).unwrap_or(0));
            }
            None => {
                return Err(BarcodeError::invalid(
                    Symbology::Code93,
                    text,
                    "only ASCII characters can be encoded",
                ))
            }
        }
    }
    Ok(out)
}

/// Контрольное значение с максимальным весом `max_weight`.
pub fn check(values: &[u8], max_weight: usize) -> u8 {
    let n = values.len();
    let sum: usize = values
        .iter()
        .enumerate()
        .map(|(i, &v)| v as usize * ((n - 1 - i) % max_weight + 1))
        .sum();
    (sum % 47) as u8
}

pub fn encode(text: &str) -> Result<Encoded, BarcodeError> {
    if text.is_empty() {
        return Err(BarcodeError::EmptyPayload {
            symbology: Symbology::Code93,
        });
    }
    let mut vals = values(text)?;
    let c = check(&vals, 20);
    vals.push(c);
    let k = check(&vals, 15);
    vals.push(k);

    let mut bars = Vec::with_capacity((vals.len() + 2) * 9 + 1);
    push_modules(&mut bars, PATTERNS[START_STOP], GUARD);
    for &v in &vals {
        push_modules(&mut bars, PATTERNS[v as usize], BAR);
    }
    push_modules(&mut bars, PATTERNS[START_STOP], GUARD);
    // завершающий бар
    bars.push(GUARD);

    Ok(Encoded::new(bars, text))
}
