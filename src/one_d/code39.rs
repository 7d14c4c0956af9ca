//! Code 39 и Code 39 Extended (full ASCII).
//!
//! Каждый символ — 9 элементов (bar/space попеременно, начиная с бара),
//! из них 3 широких. Широкий элемент = 2 модуля, узкий = 1. Между
//! символами — один узкий пробел. Сообщение обрамляется `*`.
//!
//! Неизвестные символы заменяются на `-`, замена пишется в лог
//! предупреждением.

use super::full_ascii;
use super::Symbology;
use crate::core::{BarcodeError, Encoded, BAR, GUARD, SPACE};

/// Базовый алфавит в порядке таблицы [`PATTERNS`].
const CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%*";

/// 1 — широкий элемент, 0 — узкий.
const PATTERNS: [&str; 44] = [
    "000110100", "100100001", "001100001", "101100000", "000110001", "100110000", "001110000",
    "000100101", "100100100", "001100100", "100001001", "001001001", "101001000", "000011001",
    "100011000", "001011000", "000001101", "100001100", "001001100", "000011100", "100000011",
    "001000011", "101000010", "000010011", "100010010", "001010010", "000000111", "100000110",
    "001000110", "000010110", "110000001", "011000001", "111000000", "010010001", "110010000",
    "011010000", "010000101", "110000100", "011000100", "010101000", "010100010", "010001010",
    "000101010", "010010100",
];

const START_STOP: char = '*';

fn pattern(c: char) -> Option<&'static str> {
    CHARS.find(c).map(|i| PATTERNS[i])
}

/// Code 39: текст приводится к верхнему регистру.
pub fn encode(text: &str) -> Result<Encoded, BarcodeError> {
    if text.is_empty() {
        return Err(BarcodeError::EmptyPayload {
            symbology: Symbology::Code39,
        });
    }
    let upper = text.to_uppercase();
    let message: String = upper
        .chars()
        .map(|c| {
            if c != START_STOP && pattern(c).is_some() {
                c
            } else {
                log::warn!("Code39: {c:?} is not encodable, replaced with '-'");
                '-'
            }
        })
        .collect();
    Ok(Encoded::new(frame(&message), upper))
}

/// Code 39 Extended: всё ASCII через пары сдвигов, подпись — исходный текст.
pub fn encode_extended(text: &str) -> Result<Encoded, BarcodeError> {
    if text.is_empty() {
        return Err(BarcodeError::EmptyPayload {
            symbology: Symbology::Code39Ext,
        });
    }
    let mut message = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if c.is_ascii_digit() || c.is_ascii_uppercase() || matches!(c, ' ' | '-' | '.') {
            message.push(c);
        } else if let Some((shift, base)) = full_ascii::escape(c) {
            message.push(shift.as_char());
            message.push(base);
        } else {
            return Err(BarcodeError::invalid(
                Symbology::Code39Ext,
                text,
                "only ASCII characters can be encoded",
            ));
        }
    }
    Ok(Encoded::new(frame(&message), text))
}

/// Собрать bar string для уже проверенного сообщения (без `*`).
fn frame(message: &str) -> Vec<u8> {
    let mut bars = Vec::with_capacity((message.len() + 2) * 13);
    push_char(&mut bars, START_STOP, GUARD);
    for c in message.chars() {
        bars.push(SPACE);
        push_char(&mut bars, c, BAR);
    }
    bars.push(SPACE);
    push_char(&mut bars, START_STOP, GUARD);
    bars
}

fn push_char(out: &mut Vec<u8>, c: char, kind: u8) {
    let pat = pattern(c).unwrap_or(PATTERNS[36]);
    let mut black = true;
    for wide in pat.bytes() {
        let v = if black { kind } else { SPACE };
        out.push(v);
        if wide == b'1' {
            out.push(v);
        }
        black = !black;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // `*` = 010010100 → n W n n W n W n n
    const STAR: [u8; 12] = [2, 0, 0, 2, 0, 2, 2, 0, 2, 2, 0, 2];

    #[test]
    fn table_is_consistent() {
        assert_eq!(CHARS.len(), PATTERNS.len());
        for p in PATTERNS {
            assert_eq!(p.len(), 9);
            assert_eq!(p.bytes().filter(|&b| b == b'1').count(), 3, "{p}");
        }
    }

    #[test]
    fn ab_is_framed_by_stars() {
        let e = encode("AB").unwrap();
        assert_eq!(e.label, "AB");
        assert_eq!(&e.bars[..12], &STAR);
        assert_eq!(&e.bars[e.bars.len() - 12..], &STAR);
        // 4 символа по 12 модулей + 3 разделителя
        assert_eq!(e.bars.len(), 4 * 12 + 3);
    }

    #[test]
    fn lowercase_is_uppercased() {
        let lower = encode("ab").unwrap();
        assert_eq!(lower, encode("AB").unwrap());
    }

    #[test]
    fn unknown_characters_become_dash() {
        assert_eq!(encode("A#").unwrap().bars, encode("A-").unwrap().bars);
        assert_eq!(encode("A*").unwrap().bars, encode("A-").unwrap().bars);
    }

    #[test]
    fn empty_is_an_error() {
        assert!(matches!(encode(""), Err(BarcodeError::EmptyPayload { .. })));
    }

    #[test]
    fn extended_escapes_lowercase() {
        let e = encode_extended("a").unwrap();
        assert_eq!(e.label, "a");
        assert_eq!(e.bars, encode("+A").unwrap().bars);
        // сам `+` — тоже через сдвиг
        assert_eq!(encode_extended("+").unwrap().bars, encode("/K").unwrap().bars);
    }

    #[test]
    fn extended_rejects_non_ascii() {
        assert!(matches!(
            encode_extended("ü"),
            Err(BarcodeError::InvalidPayload { .. })
        ));
    }
}
