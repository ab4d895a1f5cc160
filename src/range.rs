use std::fmt::Display;
use std::fmt::Formatter;

/// Closed interval of codepoints, `begin <= end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Range {
    pub begin: u32,
    pub end: u32,
}

impl Range {
    pub fn new(begin: u32, end: u32) -> Self {
        debug_assert!(begin <= end);
        Self { begin, end }
    }

    pub fn single(codepoint: u32) -> Self {
        Self::new(codepoint, codepoint)
    }
}

/// Formats the range in BNF notation: `#x41` or `[#x41-#x5A]`.
impl Display for Range {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.begin == self.end {
            write!(f, "#x{:X}", self.begin)
        } else {
            write!(f, "[#x{:X}-#x{:X}]", self.begin, self.end)
        }
    }
}

/// Formats the ranges as alternatives: `#x41 | [#x61-#x7A]`.
pub struct Ranges<'a>(pub &'a [Range]);

impl Display for Ranges<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut iter = self.0.iter();
        if let Some(range) = iter.next() {
            write!(f, "{}", range)?;
        }
        for range in iter {
            write!(f, " | {}", range)?;
        }
        Ok(())
    }
}
