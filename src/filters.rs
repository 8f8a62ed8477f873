//! Word filters behind `-a`, `-p`, `-s` and `-rs`.
//!
//! Comparisons are exact: case-sensitive, no normalization.

use std::collections::HashSet;

/// True if `word` reads the same backwards. The empty word is a palindrome.
pub fn is_palindrome(word: &str) -> bool {
    word.chars().eq(word.chars().rev())
}

/// The palindromes among `candidates`, as a membership set.
pub fn palindromes_in<I, S>(candidates: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .filter(|word| is_palindrome(word.as_ref()))
        .map(|word| word.as_ref().to_owned())
        .collect()
}

/// Words of `words` that are members of `set`, in order, duplicates kept.
pub fn members_of<'w>(words: &[&'w str], set: &HashSet<String>) -> Vec<&'w str> {
    words
        .iter()
        .copied()
        .filter(|word| set.contains(*word))
        .collect()
}

/// The characters of `word` in sorted order. Two words are anagrams of each
/// other exactly when their signatures are equal.
pub fn signature(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

pub fn is_anagram_of(word: &str, signature_of_key: &str) -> bool {
    signature(word) == signature_of_key
}

/// For every word (in order) one entry per key whose signature it matches.
///
/// Each word is signed once, so the cost is one sort per word and per key
/// plus a string comparison per (word, key) pair.
pub fn anagrams_in<'w, S: AsRef<str>>(words: &[&'w str], keys: &[S]) -> Vec<&'w str> {
    let key_signatures: Vec<String> = keys.iter().map(|key| signature(key.as_ref())).collect();
    let mut found = Vec::new();
    for word in words {
        let word_signature = signature(word);
        for key_signature in &key_signatures {
            if word_signature == *key_signature {
                found.push(*word);
            }
        }
    }
    found
}

pub fn sort_ascending<T: Ord>(mut words: Vec<T>) -> Vec<T> {
    words.sort();
    words
}

pub fn sort_descending<T: Ord>(mut words: Vec<T>) -> Vec<T> {
    words.sort_by(|a, b| b.cmp(a));
    words
}
