mod bounds;
mod matcher;

pub use self::bounds::*;
pub use self::matcher::*;

use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Deref;
use std::str::FromStr;

use crate::CodepointRecord;
use crate::Error;

/// A set of matchers combined with logical OR.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Query(Vec<Matcher>);

impl Query {
    pub fn new(matchers: Vec<Matcher>) -> Result<Self, Error> {
        if matchers.is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(Self(matchers))
    }

    pub fn matches(&self, record: &CodepointRecord) -> bool {
        self.0.iter().any(|matcher| matcher.matches(record))
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut iter = self.0.iter();
        if let Some(matcher) = iter.next() {
            write!(f, "{}", matcher)?;
        }
        for matcher in iter {
            write!(f, " {}", matcher)?;
        }
        Ok(())
    }
}

/// Parses space-separated terms.
///
/// Empty terms are skipped, the first malformed term fails the whole query.
impl FromStr for Query {
    type Err = Error;
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let matchers = value
            .split(' ')
            .filter(|term| !term.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Matcher>, _>>()?;
        Self::new(matchers)
    }
}

impl Deref for Query {
    type Target = [Matcher];

    fn deref(&self) -> &Self::Target {
        &self.0[..]
    }
}
