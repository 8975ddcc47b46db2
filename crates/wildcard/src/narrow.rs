//! Matching over byte strings.
//!
//! Only ASCII `0`-`9` are numeric. Multi-byte UTF-8 characters are seen as several symbols,
//! so `?` matches a single byte.

use crate::classify::AsciiDigit;

/// Tests whether the whole `text` matches the whole `pattern`.
///
/// # Examples
///
/// ```
/// use wildcard::narrow;
///
/// assert!(narrow::matches(b"img-#.png", b"img-0042.png"));
/// assert!(!narrow::matches(b"img-#.png", b"img-.png"));
/// ```
#[inline]
pub fn matches(pattern: &[u8], text: &[u8]) -> bool {
    crate::matches(pattern, text, &AsciiDigit)
}

/// Tests whether the whole NUL-terminated `text` matches the whole NUL-terminated `pattern`.
///
/// Everything after the first NUL byte of either argument is ignored.
///
/// # Examples
///
/// ```
/// use wildcard::narrow;
///
/// assert!(narrow::matches_nul(b"a*\0junk", b"abc\0"));
/// ```
#[inline]
pub fn matches_nul(pattern: &[u8], text: &[u8]) -> bool {
    matches(crate::until_nul(pattern), crate::until_nul(text))
}
