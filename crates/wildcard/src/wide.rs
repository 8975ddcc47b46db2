//! Matching over wide character strings.
//!
//! Any Unicode numeric character is numeric. Both `char` sequences and UTF-16 code unit
//! sequences are supported.

use crate::classify::UnicodeNumeric;

/// Tests whether the whole `text` matches the whole `pattern`.
///
/// # Examples
///
/// ```
/// use wildcard::wide;
///
/// let pattern: Vec<char> = "ch. #".chars().collect();
/// let text: Vec<char> = "ch. Ⅳ".chars().collect();
/// assert!(wide::matches(&pattern, &text));
/// ```
#[inline]
pub fn matches(pattern: &[char], text: &[char]) -> bool {
    crate::matches(pattern, text, &UnicodeNumeric)
}

/// Tests whether the whole `text` matches the whole `pattern`, decoding both into characters first.
///
/// # Examples
///
/// ```
/// use wildcard::wide;
///
/// assert!(wide::matches_str("??", "🦀🎉"));
/// assert!(wide::matches_str("#%", "٩٩%"));
/// ```
pub fn matches_str(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    matches(&pattern, &text)
}

/// Tests whether the whole `text` matches the whole `pattern`, both given as UTF-16 code units.
///
/// Each code unit is a separate symbol, so characters outside of the basic multilingual plane
/// take two `?` tokens.
#[inline]
pub fn matches_utf16(pattern: &[u16], text: &[u16]) -> bool {
    crate::matches(pattern, text, &UnicodeNumeric)
}
