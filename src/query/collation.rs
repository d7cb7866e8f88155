//! Spanish-locale string collation
//!
//! Sorting compares names the way an `es` collator does:
//!
//! 1. Primary level: letters compared without case or accents, with `ñ`
//!    a letter of its own between `n` and `o`.
//! 2. Secondary level: unaccented before accented (`a` < `á`).
//! 3. Tertiary level: lowercase before uppercase (`a` < `A`).
//!
//! Combining diacritics (U+0300 to U+036F) are dropped at the primary
//! level, so decomposed text sorts with its precomposed form. `n` followed
//! by a combining tilde is `ñ`.
//!
//! Only strings that are identical compare equal.

use std::cmp::Ordering;

/// Sorts after every other character so `ñ` lands after any `n` + letter
const ENYE_MARKER: char = '\u{10FFFF}';

/// Compare two strings with Spanish collation rules
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
}

const COMBINING_TILDE: char = '\u{0303}';

fn primary_key(s: &str) -> Vec<char> {
    let mut key = Vec::with_capacity(s.len());
    let mut chars = s.chars().flat_map(char::to_lowercase).peekable();
    while let Some(c) = chars.next() {
        match c {
            'ñ' => {
                key.push('n');
                key.push(ENYE_MARKER);
            }
            'n' if chars.peek() == Some(&COMBINING_TILDE) => {
                chars.next();
                key.push('n');
                key.push(ENYE_MARKER);
            }
            c if is_combining_mark(c) => {}
            other => key.push(base_letter(other)),
        }
    }
    key
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn secondary_key(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(s: &str) -> Vec<bool> {
    s.chars().map(char::is_uppercase).collect()
}

fn base_letter(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
