//! RM4SCC (Royal Mail 4-State Customer Code).
//!
//! Четыре состояния бара: трекер, верхний (ascender), нижний (descender),
//! полный. Символ — 4 бара; его строка в таблице 6×6 задаёт верхние
//! половинки, столбец — нижние (в каждой половине ровно два «включённых»
//! бара, веса 4,2,1,0). Старт `(` — верхний бар, стоп `)` — полный.

use super::Symbology;
use crate::core::{BarcodeError, Encoded, Geometry, Style, SPACE};

pub const TRACKER: u8 = 1;
pub const ASCENDER: u8 = 2;
pub const DESCENDER: u8 = 3;
pub const FULL: u8 = 4;

/// Таблица 6×6: строка = верхнее значение 1..6, столбец = нижнее 1..6.
const CHARS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Какие из 4 баров «включены» для значения 1..6 (индекс = значение − 1).
const HALVES: [[bool; 4]; 6] = [
    [false, false, true, true],
    [false, true, false, true],
    [false, true, true, false],
    [true, false, false, true],
    [true, false, true, false],
    [true, true, false, false],
];

const BAR_WIDTH: f64 = 2.0;

/// (строка, столбец) символа, оба 0..6.
#[inline]
fn position(c: u8) -> Option<(usize, usize)> {
    CHARS.iter().position(|&x| x == c).map(|i| (i / 6, i % 6))
}

/// Контрольный символ по суммам строк и столбцов.
pub fn check_char(text: &[u8]) -> Option<u8> {
    let mut top = 0usize;
    let mut bottom = 0usize;
    for &c in text {
        let (r, col) = position(c)?;
        top += r + 1;
        bottom += col + 1;
    }
    // остаток 0 соответствует значению 6
    let r = (top % 6 + 5) % 6;
    let col = (bottom % 6 + 5) % 6;
    Some(CHARS[r * 6 + col])
}

fn push_char(out: &mut Vec<u8>, c: u8) {
    let Some((r, col)) = position(c) else { return };
    for j in 0..4 {
        let kind = match (HALVES[r][j], HALVES[col][j]) {
            (true, true) => FULL,
            (true, false) => ASCENDER,
            (false, true) => DESCENDER,
            (false, false) => TRACKER,
        };
        out.push(SPACE);
        out.push(kind);
    }
}

pub fn encode(text: &str) -> Result<Encoded, BarcodeError> {
    let cleaned: String = text
        .to_uppercase()
        .chars()
        .filter(|c| !matches!(c, '(' | ')') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Err(BarcodeError::EmptyPayload {
            symbology: Symbology::Rm4scc,
        });
    }
    let bytes = cleaned.as_bytes();
    let check = check_char(bytes).ok_or_else(|| {
        BarcodeError::invalid(Symbology::Rm4scc, text, "only 0-9 and A-Z can be encoded")
    })?;

    let mut bars = Vec::with_capacity((bytes.len() + 1) * 8 + 3);
    bars.push(ASCENDER);
    for &c in bytes {
        push_char(&mut bars, c);
    }
    push_char(&mut bars, check);
    bars.push(SPACE);
    bars.push(FULL);

    let mut label = cleaned;
    label.push(char::from(check));
    Ok(Encoded::new(bars, label))
}

/// Геометрия фиксирована и не зависит от заданной высоты.
pub fn style(kind: u8, g: &Geometry) -> Style {
    match kind {
        TRACKER => Style::solid(BAR_WIDTH, g.y + 6.0, 5.0),
        DESCENDER => Style::solid(BAR_WIDTH, g.y + 6.0, 11.0),
        ASCENDER => Style::solid(BAR_WIDTH, g.y, 11.0),
        FULL => Style::solid(BAR_WIDTH, g.y, 17.0),
        _ => Style::blank(BAR_WIDTH, g),
    }
}
