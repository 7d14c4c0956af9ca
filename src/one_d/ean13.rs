//! EAN-13 и UPC-A (UPC-A = EAN-13 с неявным ведущим нулём).
//!
//! Алгоритм:
//! 1) Проверяем цифры и длину, дописываем/проверяем контрольную цифру.
//! 2) Первая цифра выбирает маску L/G для шести левых цифр.
//! 3) Правая половина — R. Обрамление: 101 | лево | 01010 | право | 101.

use super::ean::{self, Seg};
use super::Symbology;
use crate::core::{BarcodeError, Encoded, BAR};

const EAN13_LABEL: [Seg; 5] = [
    Seg::Digits(1),
    Seg::Gap(4),
    Seg::Digits(6),
    Seg::Gap(4),
    Seg::Digits(6),
];

const UPCA_LABEL: [Seg; 7] = [
    Seg::Digits(1),
    Seg::Gap(3),
    Seg::Digits(5),
    Seg::Gap(4),
    Seg::Digits(5),
    Seg::Gap(3),
    Seg::Digits(1),
];

/// Bar string для 13 цифр (включая контрольную).
pub fn bars13(d: &[u8]) -> Vec<u8> {
    debug_assert_eq!(d.len(), 13);
    let mut left = Vec::with_capacity(42);
    ean::push_interleaved(&mut left, &d[1..7], ean::FAMILIES[d[0] as usize], BAR);
    let mut right = Vec::with_capacity(42);
    for &x in &d[7..13] {
        ean::push_right(&mut right, x, BAR);
    }
    ean::enclose(&left, &right)
}

pub fn encode_ean13(text: &str) -> Result<Encoded, BarcodeError> {
    let d = ean::complete(Symbology::Ean13, text, 12, &[12, 13])?;
    Ok(Encoded::new(bars13(&d), ean::layout(&d, &EAN13_LABEL)))
}

pub fn encode_upca(text: &str) -> Result<Encoded, BarcodeError> {
    let d = ean::complete(Symbology::Upca, text, 11, &[11, 12])?;
    let mut d13 = Vec::with_capacity(13);
    d13.push(0);
    d13.extend_from_slice(&d);
    Ok(Encoded::new(bars13(&d13), ean::layout(&d, &UPCA_LABEL)))
}
