use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::table::MAX_CODEPOINT;
use crate::CodepointRecord;
use crate::Error;

/// Single query term compiled into a predicate over codepoint records.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Matcher {
    /// `cat=L`
    MajorCategory(u8),
    /// `cat=Lu`
    MajorMinorCategory(u8, u8),
    /// `ch=a`
    Char(char),
    /// `ch=a-z`
    CharRange(char, char),
    /// `cp=41`
    Codepoint(u32),
    /// `cp=41-5a`
    CodepointRange(u32, u32),
}

impl Matcher {
    pub fn matches(&self, record: &CodepointRecord) -> bool {
        use Matcher::*;
        let category = &record.category;
        match *self {
            MajorCategory(major) => category.major() == Some(major),
            MajorMinorCategory(major, minor) => {
                category.major() == Some(major) && category.minor() == Some(minor)
            }
            Char(ch) => record.codepoint == ch as u32,
            CharRange(low, high) => (low as u32..=high as u32).contains(&record.codepoint),
            Codepoint(codepoint) => record.codepoint == codepoint,
            CodepointRange(low, high) => (low..=high).contains(&record.codepoint),
        }
    }
}

impl Display for Matcher {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        use Matcher::*;
        match *self {
            MajorCategory(major) => write!(f, "cat={}", major as char),
            MajorMinorCategory(major, minor) => {
                write!(f, "cat={}{}", major as char, minor as char)
            }
            Char(ch) => write!(f, "ch={}", ch),
            CharRange(low, high) => write!(f, "ch={}-{}", low, high),
            Codepoint(codepoint) => write!(f, "cp={:x}", codepoint),
            CodepointRange(low, high) => write!(f, "cp={:x}-{:x}", low, high),
        }
    }
}

impl FromStr for Matcher {
    type Err = Error;
    fn from_str(term: &str) -> Result<Self, Self::Err> {
        let mut iter = term.split('=');
        let (Some(key), Some(value), None) = (iter.next(), iter.next(), iter.next()) else {
            return Err(Error::MalformedTerm(term.into()));
        };
        match key {
            "cat" => parse_category(value),
            "ch" => parse_chars(value),
            "cp" => parse_codepoints(value),
            _ => Err(Error::UnknownTerm(term.into())),
        }
    }
}

fn parse_category(value: &str) -> Result<Matcher, Error> {
    match value.as_bytes() {
        [major] if major.is_ascii_uppercase() => Ok(Matcher::MajorCategory(*major)),
        [major, minor] if major.is_ascii_uppercase() && minor.is_ascii_lowercase() => {
            Ok(Matcher::MajorMinorCategory(*major, *minor))
        }
        _ => Err(Error::InvalidCategory(value.into())),
    }
}

fn parse_chars(value: &str) -> Result<Matcher, Error> {
    let mut chars = value.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(ch), None, None, None) => Ok(Matcher::Char(ch)),
        (Some(low), Some('-'), Some(high), None) => {
            if low > high {
                return Err(Error::ReversedRange(value.into()));
            }
            Ok(Matcher::CharRange(low, high))
        }
        _ => Err(Error::InvalidChar(value.into())),
    }
}

fn parse_codepoints(value: &str) -> Result<Matcher, Error> {
    match value.split_once('-') {
        None => Ok(Matcher::Codepoint(parse_hex(value)?)),
        Some((low, high)) => {
            let low = parse_hex(low)?;
            let high = parse_hex(high)?;
            if low > high {
                return Err(Error::ReversedRange(value.into()));
            }
            Ok(Matcher::CodepointRange(low, high))
        }
    }
}

fn parse_hex(value: &str) -> Result<u32, Error> {
    if !value.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(Error::InvalidCodepoint(value.into()));
    }
    match u32::from_str_radix(value, 16) {
        Ok(codepoint) if codepoint <= MAX_CODEPOINT => Ok(codepoint),
        _ => Err(Error::InvalidCodepoint(value.into())),
    }
}
