//! Compiled text patterns shared by the extraction rules

use regex::Regex;
use std::sync::LazyLock;

/// `Autor:` / `Autora:` followed by a non-blank rest of line.
pub(crate) static RE_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)autora?:[ \t]*([^\n\r]*\S[^\n\r]*)").expect("author pattern is valid")
});

/// `<digits> dias úteis`, whitespace between number and phrase optional.
pub(crate) static RE_DEADLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*dias úteis").expect("deadline pattern is valid")
});

/// `R$` amount with grouping dots and decimal comma.
pub(crate) static RE_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"R\$ ?([0-9.,]+)").expect("amount pattern is valid")
});

/// Escaped currency marker as it appears in markdown-exported petitions.
pub(crate) const ESCAPED_CURRENCY: &str = r"\$";

pub(crate) const BAGGAGE_LOSS_PHRASE: &str = "extravio de bagagens";
pub(crate) const FLIGHT_WORD: &str = "voo";
pub(crate) const DELAY_WORD: &str = "atraso";
pub(crate) const MORAL_DAMAGES_PHRASE: &str = "danos morais";

/// Universal line boundaries: `\n`, `\r`, `\x0b`, `\x0c`, `\x1c`-`\x1e`,
/// NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR.
pub(crate) fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
