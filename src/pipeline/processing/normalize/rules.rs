//! Individual substitution rules of the corpus normalizer.
//!
//! Each rule takes the output of the previous one. They are order-sensitive:
//! possessives are removed before stray apostrophes, apostrophes are handled
//! before generic punctuation, and whitespace is collapsed last.

use once_cell::sync::Lazy;
use regex::Regex;

/// A right single quotation mark (U+2019) whose UTF-8 bytes were decoded as
/// Windows-1252 upstream.
pub const MOJIBAKE_APOSTROPHE: &str = "\u{e2}\u{20ac}\u{2122}";

/// Characters treated as whitespace by the stripping and collapsing rules:
/// the ASCII controls TAB..CR, space, the Unicode space separators, the line
/// and paragraph separators, and U+FEFF. U+0085 is not included.
const WHITESPACE_CLASS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static NON_CORPUS_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[^a-z0-9'{}]+", WHITESPACE_CLASS))
        .expect("non-corpus character class is a valid regex")
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{}]+", WHITESPACE_CLASS)).expect("whitespace class is a valid regex")
});

/// ASCII word character, as used for word boundaries.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Rule 1: lowercase every cased character.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Rule 2: repair the mis-decoded curly apostrophe. Literal replacement only.
pub fn repair_mojibake_apostrophe(text: &str) -> String {
    text.replace(MOJIBAKE_APOSTROPHE, "'")
}

/// Rule 3: drop a trailing `'s` from a lowercase word.
///
/// The letter run must start at a word boundary and the `s` must end the
/// word, so `dog's` becomes `dog` while `dogs'`, `it'sy` and `1dog's` are
/// left alone.
pub fn strip_possessives(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let at_boundary = i == 0 || !is_word_char(chars[i - 1]);
        if !(is_lower(chars[i]) && at_boundary) {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let mut end = i;
        while end < chars.len() && is_lower(chars[end]) {
            end += 1;
        }
        out.extend(&chars[i..end]);

        let suffix = chars.get(end) == Some(&'\'') && chars.get(end + 1) == Some(&'s');
        let ends_word = chars.get(end + 2).map_or(true, |&c| !is_word_char(c));
        i = if suffix && ends_word { end + 2 } else { end };
    }

    out
}

/// Rule 4: turn stray apostrophes into spaces.
///
/// Scanning left to right, an apostrophe at the start of the text becomes a
/// space; a non-letter followed by an apostrophe is replaced, both
/// characters together, by one space; an apostrophe not followed by a
/// lowercase letter becomes a space. Apostrophes between two letters survive.
pub fn strip_stray_apostrophes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if i == 0 && c == '\'' {
            out.push(' ');
            i += 1;
        } else if !is_lower(c) && next == Some('\'') {
            out.push(' ');
            i += 2;
        } else if c == '\'' && !next.is_some_and(is_lower) {
            out.push(' ');
            i += 1;
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

/// Rule 5: replace each run of characters outside `[a-z0-9']` and whitespace
/// with a single space.
pub fn strip_non_corpus_chars(text: &str) -> String {
    NON_CORPUS_RUN.replace_all(text, " ").into_owned()
}

/// Rule 6: collapse whitespace runs to one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN
        .replace_all(text, " ")
        .trim_matches(' ')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_case_is_unicode_aware() {
        assert_eq!(fold_case("ALICE Ünd Bob"), "alice ünd bob");
    }

    #[test]
    fn test_mojibake_repair_is_literal() {
        assert_eq!(repair_mojibake_apostrophe("don\u{e2}\u{20ac}\u{2122}t"), "don't");
        // Partial sequences are left for the punctuation rule
        assert_eq!(repair_mojibake_apostrophe("\u{e2}\u{20ac}"), "\u{e2}\u{20ac}");
        assert_eq!(repair_mojibake_apostrophe("plain"), "plain");
    }

    #[test]
    fn test_possessive_suffix_removed() {
        assert_eq!(strip_possessives("the dog's bone"), "the dog bone");
        assert_eq!(strip_possessives("alice's"), "alice");
        assert_eq!(strip_possessives("cat's, dog's."), "cat, dog.");
    }

    #[test]
    fn test_possessive_requires_word_end() {
        assert_eq!(strip_possessives("it'sy"), "it'sy");
        assert_eq!(strip_possessives("dog's1"), "dog's1");
        assert_eq!(strip_possessives("dog's_"), "dog's_");
    }

    #[test]
    fn test_possessive_requires_word_start() {
        // The letter run must not continue a digit or underscore word
        assert_eq!(strip_possessives("1dog's"), "1dog's");
        assert_eq!(strip_possessives("_dog's"), "_dog's");
        // A non-ASCII letter does not count as a word character
        assert_eq!(strip_possessives("éx's"), "éx");
    }

    #[test]
    fn test_plural_possessive_falls_through() {
        assert_eq!(strip_possessives("the dogs' bones"), "the dogs' bones");
        assert_eq!(strip_stray_apostrophes("the dogs' bones"), "the dogs  bones");
    }

    #[test]
    fn test_possessive_matches_do_not_overlap() {
        assert_eq!(strip_possessives("a's's"), "a's");
    }

    #[test]
    fn test_contractions_survive_stray_apostrophe_rule() {
        assert_eq!(strip_stray_apostrophes("don't won't"), "don't won't");
    }

    #[test]
    fn test_leading_and_trailing_apostrophes() {
        assert_eq!(strip_stray_apostrophes("'tis"), " tis");
        assert_eq!(strip_stray_apostrophes("runnin'"), "runnin ");
        assert_eq!(strip_stray_apostrophes("'"), " ");
    }

    #[test]
    fn test_stray_apostrophe_consumes_preceding_non_letter() {
        assert_eq!(strip_stray_apostrophes(" 'quoted'"), " quoted ");
        assert_eq!(strip_stray_apostrophes("80's"), "8 s");
        assert_eq!(strip_stray_apostrophes("x''y"), "x y");
        assert_eq!(strip_stray_apostrophes("''"), "  ");
    }

    #[test]
    fn test_apostrophe_before_uppercase_or_digit_is_stray() {
        assert_eq!(strip_stray_apostrophes("a'B"), "a B");
        assert_eq!(strip_stray_apostrophes("a'1"), "a 1");
    }

    #[test]
    fn test_non_corpus_runs_become_single_space() {
        assert_eq!(strip_non_corpus_chars("well-known"), "well known");
        assert_eq!(strip_non_corpus_chars("stop\u{2014}now!!!"), "stop now ");
        assert_eq!(strip_non_corpus_chars("caf\u{e9}"), "caf ");
        assert_eq!(strip_non_corpus_chars("a\tb\nc"), "a\tb\nc");
        assert_eq!(strip_non_corpus_chars("1,234"), "1 234");
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert_eq!(strip_non_corpus_chars("a\u{85}b"), "a b");
        assert_eq!(strip_non_corpus_chars("a\u{feff}b"), "a\u{feff}b");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  multiple   spaces\there  "), "multiple spaces here");
        assert_eq!(collapse_whitespace("a\u{a0}\u{3000}b"), "a b");
        assert_eq!(collapse_whitespace("\n\n"), "");
        assert_eq!(collapse_whitespace(""), "");
    }
}
