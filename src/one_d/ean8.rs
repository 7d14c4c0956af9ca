//! EAN-8: четыре L-цифры, центр, четыре R-цифры.

use super::ean::{self, Parity, Seg};
use super::Symbology;
use crate::core::{BarcodeError, Encoded, BAR};

const LABEL: [Seg; 3] = [Seg::Digits(4), Seg::Gap(3), Seg::Digits(4)];

pub fn encode(text: &str) -> Result<Encoded, BarcodeError> {
    let d = ean::complete(Symbology::Ean8, text, 7, &[7, 8])?;

    let mut left = Vec::with_capacity(28);
    for &x in &d[..4] {
        ean::push_left(&mut left, x, Parity::L, BAR);
    }
    let mut right = Vec::with_capacity(28);
    for &x in &d[4..] {
        ean::push_right(&mut right, x, BAR);
    }

    Ok(Encoded::new(ean::enclose(&left, &right), ean::layout(&d, &LABEL)))
}
