mod read;
mod record;
mod write;

pub use self::record::*;

use crate::Error;
use crate::GeneralCategory;

/// The highest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10_ffff;

// Asset layout (inside a gzip stream): magic, version, no. of records (u32 LE), then for each
// record the scalar value (u32 LE), the major and the minor category letter (zero if unset).
const MAGIC: [u8; 4] = *b"UCRT";
const VERSION: u8 = 1;
const HEADER_LEN: usize = MAGIC.len() + 1 + 4;
const RECORD_LEN: usize = 4 + 2;

/// Dense, strictly ascending sequence of codepoint records.
///
/// The records cover `[first, last]` without gaps. Every record carries its own scalar value, so a
/// table that does not start at zero is still scanned correctly.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CodepointTable {
    records: Vec<CodepointRecord>,
}

impl CodepointTable {
    pub fn new(records: Vec<CodepointRecord>) -> Result<Self, Error> {
        if let Some(last) = records.last() {
            if last.codepoint > MAX_CODEPOINT {
                return Err(Error::Table(format!(
                    "codepoint {:#x} is out of range",
                    last.codepoint
                )));
            }
        }
        for pair in records.windows(2) {
            let (previous, current) = (pair[0].codepoint, pair[1].codepoint);
            if previous.checked_add(1) != Some(current) {
                return Err(Error::Table(format!(
                    "codepoint {:#x} follows {:#x}",
                    current, previous
                )));
            }
        }
        Ok(Self { records })
    }

    /// Creates a table where each codepoint in `[low, high]` has unset category.
    pub fn unassigned(low: u32, high: u32) -> Self {
        let high = high.min(MAX_CODEPOINT);
        let records = (low..=high)
            .map(|codepoint| CodepointRecord::new(codepoint, GeneralCategory::UNASSIGNED))
            .collect();
        Self { records }
    }

    pub fn get(&self, codepoint: u32) -> Option<&CodepointRecord> {
        let i = self.index_of(codepoint)?;
        self.records.get(i)
    }

    /// Sets the category of every codepoint in `[first, last]` that is present in the table.
    pub fn assign(&mut self, first: u32, last: u32, category: GeneralCategory) {
        let (Some(table_first), Some(table_last)) = (self.first(), self.last()) else {
            return;
        };
        let first = first.max(table_first);
        let last = last.min(table_last);
        if first > last {
            return;
        }
        let start = (first - table_first) as usize;
        let end = (last - table_first) as usize;
        for record in self.records[start..=end].iter_mut() {
            record.category = category;
        }
    }

    /// Keeps only the records within `[low, high]`.
    pub fn restrict(mut self, low: u32, high: u32) -> Self {
        self.records
            .retain(|record| (low..=high).contains(&record.codepoint));
        self
    }

    pub fn records(&self) -> &[CodepointRecord] {
        &self.records[..]
    }

    pub fn first(&self) -> Option<u32> {
        self.records.first().map(|record| record.codepoint)
    }

    pub fn last(&self) -> Option<u32> {
        self.records.last().map(|record| record.codepoint)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn index_of(&self, codepoint: u32) -> Option<usize> {
        let first = self.first()?;
        codepoint.checked_sub(first).map(|i| i as usize)
    }
}
