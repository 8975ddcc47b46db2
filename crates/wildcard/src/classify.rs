/// Character classification used by the numeric-run token.
///
/// Any `Fn(S) -> bool` closure is a classifier as well.
pub trait Classify<S> {
    /// Returns `true` if the symbol belongs to a numeric run.
    fn is_numeric(&self, symbol: S) -> bool;
}

impl<S, F> Classify<S> for F
where
    F: Fn(S) -> bool,
{
    #[inline]
    fn is_numeric(&self, symbol: S) -> bool {
        self(symbol)
    }
}

// ---

/// Classifies only `0` to `9` as numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiDigit;

impl Classify<u8> for AsciiDigit {
    #[inline]
    fn is_numeric(&self, symbol: u8) -> bool {
        symbol.is_ascii_digit()
    }
}

impl Classify<u16> for AsciiDigit {
    #[inline]
    fn is_numeric(&self, symbol: u16) -> bool {
        u8::try_from(symbol).is_ok_and(|b| b.is_ascii_digit())
    }
}

impl Classify<char> for AsciiDigit {
    #[inline]
    fn is_numeric(&self, symbol: char) -> bool {
        symbol.is_ascii_digit()
    }
}

// ---

/// Classifies characters of the Unicode `Nd`, `Nl` and `No` general categories as numeric.
///
/// For UTF-16 code units, unpaired surrogates are never numeric, and numeric characters
/// outside of the basic multilingual plane are not recognized since they span two units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeNumeric;

impl Classify<char> for UnicodeNumeric {
    #[inline]
    fn is_numeric(&self, symbol: char) -> bool {
        symbol.is_numeric()
    }
}

impl Classify<u16> for UnicodeNumeric {
    #[inline]
    fn is_numeric(&self, symbol: u16) -> bool {
        char::from_u32(symbol.into()).is_some_and(char::is_numeric)
    }
}
