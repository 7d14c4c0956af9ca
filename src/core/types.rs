// src/core/types.rs
//
// Общие типы, независимые от конкретных символик: виды баров, run'ы,
// стиль прямоугольника и результат кодирования.

/// Белый промежуток (прямоугольник не рисуется).
pub const SPACE: u8 = 0;
/// Обычный чёрный бар на всю высоту.
pub const BAR: u8 = 1;
/// Охранный (guard) бар: старт/стоп/центр. Может иметь «свес» вниз.
pub const GUARD: u8 = 2;

/// Результат кодирования текста одной символикой.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    /// Bar string: по элементу на единицу ширины (модуль), значение — вид бара.
    pub bars: Vec<u8>,
    /// Человекочитаемая подпись (с контрольной цифрой, если она есть).
    pub label: String,
}

impl Encoded {
    #[inline]
    pub fn new(bars: Vec<u8>, label: impl Into<String>) -> Self {
        Self {
            bars,
            label: label.into(),
        }
    }
}

/// Максимальная серия одинаковых видов баров.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub kind: u8,
    pub count: usize,
}

/// Вертикальная геометрия, от которой считаются стили.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    pub y: f64,
    pub height: f64,
}

/// Как рисовать один вид бара.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    /// Множитель ширины одного модуля (до умножения на scale).
    pub width: f64,
    pub top: f64,
    pub height: f64,
    /// false — только сдвигаем курсор.
    pub write: bool,
}

impl Style {
    #[inline]
    pub fn blank(width: f64, g: &Geometry) -> Self {
        Self {
            width,
            top: g.y,
            height: 0.0,
            write: false,
        }
    }

    #[inline]
    pub fn solid(width: f64, top: f64, height: f64) -> Self {
        Self {
            width,
            top,
            height,
            write: true,
        }
    }
}

/// Стиль по умолчанию: 0 — пусто, 1 и 2 — полный бар без свеса.
pub fn default_style(kind: u8, g: &Geometry) -> Style {
    match kind {
        SPACE => Style::blank(1.0, g),
        _ => Style::solid(1.0, g.y, g.height),
    }
}

/// Где подпись относительно баров.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LabelPlacement {
    Below,
    Above,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_hides_spaces_only() {
        let g = Geometry { y: 5.0, height: 30.0 };
        assert!(!default_style(SPACE, &g).write);
        assert_eq!(default_style(BAR, &g), Style::solid(1.0, 5.0, 30.0));
        assert_eq!(default_style(GUARD, &g), default_style(BAR, &g));
    }
}
