/// A pattern and text element.
///
/// Each symbol type defines which of its values act as wildcard tokens in a pattern.
/// The same values are ordinary literals when they appear in a text.
pub trait Symbol: Copy + Eq {
    /// Matches exactly one symbol.
    const ANY_ONE: Self;
    /// Matches zero or more symbols.
    const ANY_MANY: Self;
    /// Matches one or more consecutive numeric symbols.
    const NUMERIC_RUN: Self;
    /// Terminator of NUL-terminated sequences.
    const NUL: Self;

    /// Returns the index of the first occurrence of `needle` in `haystack`.
    #[inline]
    fn position(haystack: &[Self], needle: Self) -> Option<usize> {
        haystack.iter().position(|&s| s == needle)
    }
}

impl Symbol for u8 {
    const ANY_ONE: Self = b'?';
    const ANY_MANY: Self = b'*';
    const NUMERIC_RUN: Self = b'#';
    const NUL: Self = 0;

    #[inline]
    fn position(haystack: &[Self], needle: Self) -> Option<usize> {
        memchr::memchr(needle, haystack)
    }
}

impl Symbol for u16 {
    const ANY_ONE: Self = b'?' as u16;
    const ANY_MANY: Self = b'*' as u16;
    const NUMERIC_RUN: Self = b'#' as u16;
    const NUL: Self = 0;
}

impl Symbol for char {
    const ANY_ONE: Self = '?';
    const ANY_MANY: Self = '*';
    const NUMERIC_RUN: Self = '#';
    const NUL: Self = '\0';
}

/// Cuts a NUL-terminated sequence at its first terminator.
///
/// Sequences without a terminator are returned unchanged.
///
/// # Examples
///
/// ```
/// assert_eq!(wildcard::until_nul(b"abc\0def"), b"abc");
/// assert_eq!(wildcard::until_nul(b"abc"), b"abc");
/// ```
#[inline]
pub fn until_nul<S: Symbol>(s: &[S]) -> &[S] {
    match S::position(s, S::NUL) {
        Some(end) => &s[..end],
        None => s,
    }
}
