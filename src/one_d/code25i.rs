//! Code 2 of 5 Interleaved: пары цифр, первая — барами, вторая — пробелами.

use super::Symbology;
use crate::core::{BarcodeError, Encoded, BAR, GUARD, SPACE};

/// 1 — толстый элемент (2 модуля), 0 — тонкий (1 модуль).
const DIGITS: [&str; 10] = [
    "00110", "10001", "01001", "11000", "00101", "10100", "01100", "00011", "10010", "01010",
];

// Старт/стоп уже в модулях: 1 — бар, 0 — пробел.
const START: &str = "1010";
const STOP: &str = "1101";

pub fn encode(text: &str) -> Result<Encoded, BarcodeError> {
    if text.is_empty() {
        return Err(BarcodeError::EmptyPayload {
            symbology: Symbology::Code25i,
        });
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BarcodeError::invalid(
            Symbology::Code25i,
            text,
            "CODE25 can only encode numbers",
        ));
    }

    // нечётную длину дополняем нулём слева
    let number = if text.len() % 2 == 1 {
        format!("0{text}")
    } else {
        text.to_owned()
    };

    let mut bars = Vec::with_capacity(number.len() * 7 + 8);
    crate::runs::push_modules(&mut bars, START, GUARD);
    for pair in number.as_bytes().chunks_exact(2) {
        let black = DIGITS[(pair[0] - b'0') as usize].as_bytes();
        let white = DIGITS[(pair[1] - b'0') as usize].as_bytes();
        for (&b, &w) in black.iter().zip(white) {
            bars.push(BAR);
            if b == b'1' {
                bars.push(BAR);
            }
            bars.push(SPACE);
            if w == b'1' {
                bars.push(SPACE);
            }
        }
    }
    crate::runs::push_modules(&mut bars, STOP, GUARD);

    Ok(Encoded::new(bars, number))
}
