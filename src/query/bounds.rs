use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::table::MAX_CODEPOINT;
use crate::Error;

/// Inclusive range of codepoints that are eligible for matching.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AllowedBounds {
    low: u32,
    high: u32,
}

impl AllowedBounds {
    pub const FULL: Self = Self {
        low: 0,
        high: MAX_CODEPOINT,
    };

    pub fn new(low: u32, high: u32) -> Option<Self> {
        if low > high || high > MAX_CODEPOINT {
            return None;
        }
        Some(Self { low, high })
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        (self.low..=self.high).contains(&codepoint)
    }

    /// Returns `true` if some codepoints are outside of the bounds.
    pub fn restricts(&self) -> bool {
        *self != Self::FULL
    }
}

impl Default for AllowedBounds {
    fn default() -> Self {
        Self::FULL
    }
}

impl Display for AllowedBounds {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:#x}-{:#x}", self.low, self.high)
    }
}

/// Parses `LOW-HIGH` where each side is either decimal or has `0x`, `0o`, `0b` prefix.
impl FromStr for AllowedBounds {
    type Err = Error;
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut iter = value.split('-');
        let (Some(low), Some(high), None) = (iter.next(), iter.next(), iter.next()) else {
            return Err(Error::MalformedBounds(value.into()));
        };
        let (Some(low), Some(high)) = (parse_number(low), parse_number(high)) else {
            return Err(Error::MalformedBounds(value.into()));
        };
        Self::new(low, high).ok_or_else(|| Error::MalformedBounds(value.into()))
    }
}

fn parse_number(s: &str) -> Option<u32> {
    let (digits, radix) = if let Some(digits) = s.strip_prefix("0x").or(s.strip_prefix("0X")) {
        (digits, 16)
    } else if let Some(digits) = s.strip_prefix("0o").or(s.strip_prefix("0O")) {
        (digits, 8)
    } else if let Some(digits) = s.strip_prefix("0b").or(s.strip_prefix("0B")) {
        (digits, 2)
    } else {
        (s, 10)
    };
    // `from_str_radix` accepts leading `+`.
    if !digits.chars().all(|ch| ch.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}
