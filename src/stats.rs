//! Counters behind `-n`, `-d`, `-dd` and `-c`.

use crate::source::TextSource;

pub fn count_lines(source: &TextSource) -> usize {
    source.line_count()
}

/// Number of ASCII digit characters over all lines.
pub fn count_digits(source: &TextSource) -> usize {
    source
        .lines()
        .iter()
        .map(|line| line.chars().filter(|c| c.is_ascii_digit()).count())
        .sum()
}

/// Number of words made up entirely of ASCII digits.
pub fn count_numeric_tokens(source: &TextSource) -> usize {
    source
        .words()
        .into_iter()
        .filter(|word| is_number(word))
        .count()
}

/// Characters per line plus one for its terminator, including the last line.
pub fn count_chars(source: &TextSource) -> usize {
    source
        .lines()
        .iter()
        .map(|line| line.chars().count() + 1)
        .sum()
}

fn is_number(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}
