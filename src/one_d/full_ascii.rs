//! Full ASCII для Code39Ext и Code93: символ вне базового алфавита
//! кодируется парой «сдвиг + базовый символ».

/// Четыре символа сдвига. В Code39 это обычные `$ % / +`,
/// в Code93 — отдельные кодовые значения 43..=46.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shift {
    Dollar,
    Percent,
    Slash,
    Plus,
}

impl Shift {
    /// Литеральный символ сдвига в Code39.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Shift::Dollar => '$',
            Shift::Percent => '%',
            Shift::Slash => '/',
            Shift::Plus => '+',
        }
    }
}

/// Пара для ASCII-символа `c` (0..=127). Для остальных — `None`.
///
/// Таблица одна на обе символики; какие символы «родные» и не требуют
/// сдвига, решает вызывающий.
pub fn escape(c: char) -> Option<(Shift, char)> {
    if !c.is_ascii() {
        return None;
    }
    let b = c as u8;
    let pair = match b {
        0 => (Shift::Percent, b'U'),
        1..=26 => (Shift::Dollar, b'A' + (b - 1)),
        27..=31 => (Shift::Percent, b'A' + (b - 27)),
        33..=58 => (Shift::Slash, b'A' + (b - 33)),
        59..=63 => (Shift::Percent, b'F' + (b - 59)),
        64 => (Shift::Percent, b'V'),
        91..=95 => (Shift::Percent, b'K' + (b - 91)),
        96 => (Shift::Percent, b'W'),
        97..=122 => (Shift::Plus, b'A' + (b - 97)),
        123..=127 => (Shift::Percent, b'P' + (b - 123)),
        // пробел, цифры и A..Z всегда родные
        _ => return None,
    };
    Some((pair.0, pair.1 as char))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_goes_through_plus() {
        assert_eq!(escape('a'), Some((Shift::Plus, 'A')));
        assert_eq!(escape('z'), Some((Shift::Plus, 'Z')));
    }

    #[test]
    fn controls_and_punctuation() {
        assert_eq!(escape('\0'), Some((Shift::Percent, 'U')));
        assert_eq!(escape('\u{1a}'), Some((Shift::Dollar, 'Z')));
        assert_eq!(escape('\u{1b}'), Some((Shift::Percent, 'A')));
        assert_eq!(escape('!'), Some((Shift::Slash, 'A')));
        assert_eq!(escape(':'), Some((Shift::Slash, 'Z')));
        assert_eq!(escape('@'), Some((Shift::Percent, 'V')));
        assert_eq!(escape('`'), Some((Shift::Percent, 'W')));
        assert_eq!(escape('\u{7f}'), Some((Shift::Percent, 'T')));
    }

    #[test]
    fn native_and_foreign() {
        assert_eq!(escape('A'), None);
        assert_eq!(escape(' '), None);
        assert_eq!(escape('é'), None);
    }
}
