//! Сборка SVG-фрагмента из run'ов: `<g>` с `<rect>` и подписью `<text>`.
//!
//! Ширина считается только суммой по run'ам: `count × style.width × scale`.

use super::document::Host;
use super::element::Element;
use crate::core::{Geometry, LabelPlacement, Run, Style};
use crate::one_d::addon::LABEL_BASELINE;

/// Отступ базовой линии подписи от низа баров.
pub const FONT_OFFSET: f64 = 10.0;

const GROUP_STYLE: &str = "fill: black;";
const TEXT_STYLE: &str = "font-size:9px;text-align:center;text-anchor:middle;";

/// Всё, что нужно рендеру кроме самих run'ов.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub scale: f64,
    /// Сдвиг начала баров от `x`, в модулях.
    pub offset: f64,
    pub placement: LabelPlacement,
}

impl Frame {
    #[inline]
    pub fn geometry(&self) -> Geometry {
        Geometry {
            y: self.y,
            height: self.height,
        }
    }
}

/// Число без хвоста `.0`.
pub fn num(v: f64) -> String {
    if v == 0.0 {
        // -0 тоже
        "0".to_owned()
    } else {
        v.to_string()
    }
}

/// Первый свободный id из `base`, `base0`, `base1`, …
pub fn unique_id(host: &dyn Host, base: &str) -> String {
    if !host.contains_id(base) {
        return base.to_owned();
    }
    (0usize..)
        .map(|i| format!("{base}{i}"))
        .find(|id| !host.contains_id(id))
        .unwrap_or_else(|| base.to_owned())
}

/// Полная ширина run'ов.
pub fn width<F>(runs: &[Run], style: F, frame: &Frame) -> f64
where
    F: Fn(u8, &Geometry) -> Style,
{
    let g = frame.geometry();
    runs.iter()
        .map(|r| r.count as f64 * style(r.kind, &g).width * frame.scale)
        .sum()
}

/// Построить фрагмент. Пробельные стили только двигают курсор.
pub fn render<F>(id: &str, runs: &[Run], style: F, frame: &Frame, label: &str) -> Element
where
    F: Fn(u8, &Geometry) -> Style,
{
    let g = frame.geometry();
    let start = frame.x + frame.offset * frame.scale;
    let mut cursor = start;
    let mut n = 0usize;

    let mut group = Element::new("g")
        .with_attr("id", id)
        .with_attr("style", GROUP_STYLE);

    for r in runs {
        let s = style(r.kind, &g);
        let w = r.count as f64 * s.width * frame.scale;
        if s.write {
            n += 1;
            group.push(
                Element::new("rect")
                    .with_attr("id", format!("{id}_bar{n}"))
                    .with_attr("x", num(cursor))
                    .with_attr("y", num(s.top))
                    .with_attr("width", num(w))
                    .with_attr("height", num(s.height)),
            );
        }
        cursor += w;
    }

    let (suffix, baseline) = match frame.placement {
        LabelPlacement::Below => ("bottomtext", frame.y + frame.height + FONT_OFFSET),
        LabelPlacement::Above => ("toptext", frame.y + LABEL_BASELINE),
    };
    group.push(
        Element::new("text")
            .with_attr("id", format!("{id}_{suffix}"))
            .with_attr("x", num((start + cursor) / 2.0))
            .with_attr("y", num(baseline))
            .with_attr("style", TEXT_STYLE)
            .with_attr("xml:space", "preserve")
            .with_text(label),
    );
    group
}
