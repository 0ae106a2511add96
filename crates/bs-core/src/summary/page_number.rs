use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Page up to which a book is summarized.
///
/// Always within `[PageNumber::MIN, PageNumber::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub struct PageNumber(u32);

impl PageNumber {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 5000;
    /// Initial value of the page input.
    pub const DEFAULT: u32 = 20;

    /// Clamp any integer into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    /// Read free-form user input.
    ///
    /// Leading whitespace and an optional sign are accepted, then the leading
    /// run of digits; anything after it is ignored. Input without digits, or
    /// reading as zero, falls back to page 1. Out-of-range values clamp.
    pub fn parse_lenient(input: &str) -> Self {
        match leading_integer(input) {
            Some(0) | None => Self(Self::MIN),
            Some(value) => Self::clamped(value),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PageNumber {
    fn from(value: u32) -> Self {
        Self::clamped(value as i64)
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self {
        page.0
    }
}

fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    // Digit runs too long for i64 saturate; the value is clamped afterwards.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
