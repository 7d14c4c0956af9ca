//! UPC-E: сжатая запись UPC-A с системой нумерации 0.
//!
//! Вход — 6 цифр (UPC-E), 7 (UPC-E + контрольная), 11 (UPC-A без
//! контрольной) или 12 (UPC-A с контрольной). Контрольная цифра всегда
//! считается по развёрнутому UPC-A. Маску L/G для шести цифр выбирает
//! контрольная цифра; центрального охранного паттерна нет, закрывающий — 010101.

use super::ean::{self, Seg};
use super::Symbology;
use crate::core::{BarcodeError, Encoded, BAR};

/// Маски по контрольной цифре, '1' = G. Для системы 0.
const FAMILIES: [&str; 10] = [
    "111000", "110100", "110010", "110001", "101100", "100110", "100011", "101010", "101001",
    "100101",
];

const END_GUARD: &str = "010101";

const LABEL: [Seg; 5] = [
    Seg::Digits(1),
    Seg::Gap(2),
    Seg::Digits(6),
    Seg::Gap(2),
    Seg::Digits(1),
];

const LENGTHS: &[usize] = &[6, 7, 11, 12];

/// Сжать 11-значный UPC-A (без контрольной цифры) в 6 цифр UPC-E.
/// `None`, если номер не подходит ни под одно правило.
pub fn upca_to_upce(number: &str) -> Option<String> {
    let b = number.as_bytes();
    if b.len() != 11 || b[0] != b'0' || !b.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mfg = &number[1..6];
    let prod = &number[6..11];

    if matches!(&mfg[2..], "000" | "100" | "200") {
        prod.starts_with("00")
            .then(|| format!("{}{}{}", &mfg[..2], &prod[2..], &mfg[2..3]))
    } else if &mfg[3..] == "00" {
        prod.starts_with("000")
            .then(|| format!("{}{}3", &mfg[..3], &prod[3..]))
    } else if &mfg[4..] == "0" {
        prod.starts_with("0000")
            .then(|| format!("{}{}4", &mfg[..4], &prod[4..]))
    } else if prod.starts_with("0000") && prod.as_bytes()[4] >= b'5' {
        Some(format!("{mfg}{}", &prod[4..]))
    } else {
        None
    }
}

/// Развернуть 6 цифр UPC-E в 11-значный UPC-A (без контрольной цифры).
pub fn upce_to_upca(number: &str) -> Option<String> {
    let b = number.as_bytes();
    if b.len() != 6 || !b.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let n = number;
    Some(match b[5] {
        b'0' | b'1' | b'2' => format!("0{}{}0000{}", &n[..2], &n[5..6], &n[2..5]),
        b'3' => format!("0{}00000{}", &n[..3], &n[3..5]),
        b'4' => format!("0{}00000{}", &n[..4], &n[4..5]),
        _ => format!("0{}0000{}", &n[..5], &n[5..6]),
    })
}

fn to_digits(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

/// Нормализовать вход в (6 цифр UPC-E, контрольная цифра).
fn normalize(text: &str) -> Result<(Vec<u8>, u8), BarcodeError> {
    let d = ean::digits(Symbology::Upce, text)?;
    let mismatch = || BarcodeError::ChecksumMismatch {
        symbology: Symbology::Upce,
        text: text.to_owned(),
    };

    match d.len() {
        6 | 7 => {
            let upca = upce_to_upca(&text[..6])
                .ok_or_else(|| BarcodeError::UnconvertibleUpc(text.to_owned()))?;
            let check = ean::checksum(&to_digits(&upca));
            if d.len() == 7 && d[6] != check {
                return Err(mismatch());
            }
            Ok((d[..6].to_vec(), check))
        }
        11 | 12 => {
            let check = ean::checksum(&d[..11]);
            if d.len() == 12 && d[11] != check {
                return Err(mismatch());
            }
            let upce = upca_to_upce(&text[..11])
                .ok_or_else(|| BarcodeError::UnconvertibleUpc(text[..11].to_owned()))?;
            Ok((to_digits(&upce), check))
        }
        n => Err(BarcodeError::LengthMismatch {
            symbology: Symbology::Upce,
            text: text.to_owned(),
            found: n,
            expected: LENGTHS,
        }),
    }
}

pub fn encode(text: &str) -> Result<Encoded, BarcodeError> {
    let (e, check) = normalize(text)?;

    let mut bars = Vec::with_capacity(51);
    ean::push_guard(&mut bars, ean::GUARD_BAR);
    ean::push_interleaved(&mut bars, &e, FAMILIES[check as usize], BAR);
    ean::push_guard(&mut bars, END_GUARD);

    let mut shown = Vec::with_capacity(8);
    shown.push(0);
    shown.extend_from_slice(&e);
    shown.push(check);
    Ok(Encoded::new(bars, ean::layout(&shown, &LABEL)))
}
