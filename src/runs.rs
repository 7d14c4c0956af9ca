//! Run-length кодирование bar string и помощники для сборки bar string
//! из таблиц (модульные паттерны "0101…" и таблицы ширин).
//!
//! Весь рендер идёт только через [`runs`]: ширина баркода — это сумма
//! `count × style(kind).width × scale` по run'ам, никакой отдельной арифметики.

use crate::core::{Run, SPACE};

/// Превратить bar string в последовательность максимальных run'ов.
/// Пустой вход → пустой список, run'ов нулевой длины не бывает.
pub fn runs(bars: &[u8]) -> Vec<Run> {
    let Some((&first, rest)) = bars.split_first() else {
        return Vec::new();
    };
    let mut v = Vec::new();
    let mut cur = first;
    let mut len = 1usize;
    for &b in rest {
        if b == cur {
            len += 1;
        } else {
            v.push(Run { kind: cur, count: len });
            cur = b;
            len = 1;
        }
    }
    v.push(Run { kind: cur, count: len });
    v
}

/// Обратное преобразование: развернуть run'ы в bar string.
pub fn expand(runs: &[Run]) -> Vec<u8> {
    let mut out = Vec::with_capacity(runs.iter().map(|r| r.count).sum());
    for r in runs {
        out.extend(std::iter::repeat(r.kind).take(r.count));
    }
    out
}

/// Дописать модульный паттерн: '1' → `kind`, всё остальное → пробел.
pub fn push_modules(out: &mut Vec<u8>, pattern: &str, kind: u8) {
    out.extend(pattern.bytes().map(|b| if b == b'1' { kind } else { SPACE }));
}

/// Дописать паттерн, заданный ширинами элементов (bar/space чередуются).
/// `bar_first` — первый элемент чёрный.
pub fn push_widths(out: &mut Vec<u8>, widths: &[u8], bar_first: bool, kind: u8) {
    let mut black = bar_first;
    for &w in widths {
        let v = if black { kind } else { SPACE };
        out.extend(std::iter::repeat(v).take(w as usize));
        black = !black;
    }
}
