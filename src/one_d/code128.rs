//! Code 128: кодировщик с автоматическим выбором наборов A/B/C.
//!
//! Поддержка:
//! - старт-коды A/B/C (103/104/105), CODE A/B/C (101/100/99) и SHIFT (98);
//! - серии из 4+ цифр (или payload из чётного числа цифр) — набор C;
//! - checksum: (старт + Σ значение·позиция) mod 103;
//! - STOP-паттерн (7 run'ов, сумма 13).

use super::Symbology;
use crate::core::{BarcodeError, Encoded, BAR, GUARD};
use crate::runs::push_widths;

/// Паттерны 0..=105: по 6 чисел (bars/spaces), сумма 11.
const CODE128_PATTERNS_STR: [&str; 106] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212",
    "221213", "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221",
    "223211", "221132", "221231", "213212", "223112", "312131", "311222", "321122", "321221",
    "312212", "322112", "322211", "212123", "212321", "232121", "111323", "131123", "131321",
    "112313", "132113", "132311", "211313", "231113", "231311", "112133", "112331", "132131",
    "113123", "113321", "133121", "313121", "211331", "231131", "213113", "213311", "213131",
    "311123", "311321", "331121", "312113", "312311", "332111", "314111", "221411", "431111",
    "111224", "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114",
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", "111242",
    "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311",
    "113141", "114131", "311141", "411131", "211412", "211214",
    "211232", // 103..105 = Start A/B/C
];

/// STOP-паттерн (7 чисел, сумма 13).
const CODE128_STOP: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];

const SHIFT: u16 = 98;
const CODE_C: u16 = 99;
const CODE_B: u16 = 100;
const CODE_A: u16 = 101;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    #[inline]
    fn start(self) -> u16 {
        match self {
            CodeSet::A => 103,
            CodeSet::B => 104,
            CodeSet::C => 105,
        }
    }

    /// Переключение на этот набор изнутри другого.
    #[inline]
    fn latch(self) -> u16 {
        match self {
            CodeSet::A => CODE_A,
            CodeSet::B => CODE_B,
            CodeSet::C => CODE_C,
        }
    }

    #[inline]
    fn contains(self, c: u8) -> bool {
        match self {
            CodeSet::A => c < 96,
            CodeSet::B => (32..128).contains(&c),
            CodeSet::C => false,
        }
    }

    #[inline]
    fn value(self, c: u8) -> u16 {
        match self {
            CodeSet::A if c < 32 => u16::from(c) + 64,
            _ => u16::from(c) - 32,
        }
    }
}

/// Набор по символу: управляющие — только в A, остальное — B.
#[inline]
fn natural_set(c: u8) -> CodeSet {
    if c < 32 {
        CodeSet::A
    } else {
        CodeSet::B
    }
}

#[inline]
fn digit_run(s: &[u8], from: usize) -> usize {
    s[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Кодовые значения: старт, данные, checksum (без STOP).
pub fn values(text: &str) -> Result<Vec<u16>, BarcodeError> {
    if text.is_empty() {
        return Err(BarcodeError::EmptyPayload {
            symbology: Symbology::Code128,
        });
    }
    if !text.is_ascii() {
        return Err(BarcodeError::invalid(
            Symbology::Code128,
            text,
            "only ASCII characters can be encoded",
        ));
    }
    let s = text.as_bytes();

    let mut out: Vec<u16> = Vec::with_capacity(s.len() + 4);
    let mut set: Option<CodeSet> = None;
    let mut i = 0usize;

    while i < s.len() {
        let run = digit_run(s, i);
        let whole_even = i == 0 && run == s.len() && run % 2 == 0;
        if run >= 4 || whole_even {
            // чётное число цифр — в C, нечётный хвост уйдёт в A/B
            let take = run - run % 2;
            switch(&mut out, &mut set, CodeSet::C);
            for pair in s[i..i + take].chunks_exact(2) {
                out.push(u16::from(pair[0] - b'0') * 10 + u16::from(pair[1] - b'0'));
            }
            i += take;
            continue;
        }

        let c = s[i];
        match set {
            Some(cur) if cur.contains(c) => out.push(cur.value(c)),
            Some(cur @ (CodeSet::A | CodeSet::B))
                if s.get(i + 1).is_some_and(|&n| cur.contains(n) && !n.is_ascii_digit()) =>
            {
                // одиночный символ из соседнего набора — через SHIFT
                let other = natural_set(c);
                out.push(SHIFT);
                out.push(other.value(c));
            }
            _ => {
                let target = natural_set(c);
                switch(&mut out, &mut set, target);
                out.push(target.value(c));
            }
        }
        i += 1;
    }

    out.push(checksum(&out));
    Ok(out)
}

fn switch(out: &mut Vec<u16>, set: &mut Option<CodeSet>, target: CodeSet) {
    match *set {
        None => out.push(target.start()),
        Some(cur) if cur == target => {}
        Some(_) => out.push(target.latch()),
    }
    *set = Some(target);
}

/// (старт + Σ значение·позиция) mod 103.
pub fn checksum(values: &[u16]) -> u16 {
    let sum: u32 = values
        .iter()
        .enumerate()
        .map(|(i, &v)| u32::from(v) * (i as u32).max(1))
        .sum();
    (sum % 103) as u16
}

fn pattern(v: u16) -> [u8; 6] {
    let b = CODE128_PATTERNS_STR[v as usize].as_bytes();
    [
        b[0] - b'0',
        b[1] - b'0',
        b[2] - b'0',
        b[3] - b'0',
        b[4] - b'0',
        b[5] - b'0',
    ]
}

pub fn encode(text: &str) -> Result<Encoded, BarcodeError> {
    let vals = values(text)?;
    let mut bars = Vec::with_capacity(vals.len() * 11 + 13);
    for (i, &v) in vals.iter().enumerate() {
        let kind = if i == 0 { GUARD } else { BAR };
        push_widths(&mut bars, &pattern(v), true, kind);
    }
    push_widths(&mut bars, &CODE128_STOP, true, GUARD);
    Ok(Encoded::new(bars, text))
}
