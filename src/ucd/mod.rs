use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use fs_err::File;

use crate::AllowedBounds;
use crate::CodepointTable;
use crate::Error;
use crate::GeneralCategory;
use crate::MAX_CODEPOINT;

pub mod xml {
    use serde::Deserialize;

    /// https://www.unicode.org/reports/tr42/
    #[derive(Deserialize, Debug)]
    #[serde(rename = "ucd")]
    pub struct Ucd {
        #[serde(rename = "repertoire", default)]
        pub repertoire: Repertoire,
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(rename = "repertoire")]
    pub struct Repertoire {
        #[serde(rename = "$value", default)]
        pub entries: Vec<Entry>,
    }

    #[derive(Deserialize, Debug)]
    pub enum Entry {
        #[serde(rename = "char")]
        Char(Codepoints),
        #[serde(rename = "reserved")]
        Reserved(Codepoints),
        #[serde(rename = "noncharacter")]
        Noncharacter(Codepoints),
        #[serde(rename = "surrogate")]
        Surrogate(Codepoints),
    }

    impl Entry {
        pub fn codepoints(&self) -> &Codepoints {
            use Entry::*;
            match self {
                Char(x) | Reserved(x) | Noncharacter(x) | Surrogate(x) => x,
            }
        }
    }

    /// Either a single codepoint or an inclusive range of codepoints.
    #[derive(Deserialize, Debug)]
    pub struct Codepoints {
        #[serde(rename = "@cp")]
        pub cp: Option<String>,
        #[serde(rename = "@first-cp")]
        pub first_cp: Option<String>,
        #[serde(rename = "@last-cp")]
        pub last_cp: Option<String>,
        /// General category.
        #[serde(rename = "@gc", default)]
        pub gc: String,
    }
}

/// General category of an inclusive range of codepoints.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Assignment {
    pub first: u32,
    pub last: u32,
    pub category: GeneralCategory,
}

impl TryFrom<&xml::Entry> for Assignment {
    type Error = Error;

    fn try_from(entry: &xml::Entry) -> Result<Self, Self::Error> {
        let codepoints = entry.codepoints();
        let (first, last) = match (
            codepoints.cp.as_deref(),
            codepoints.first_cp.as_deref(),
            codepoints.last_cp.as_deref(),
        ) {
            (Some(cp), _, _) => {
                let cp = parse_hex(cp)?;
                (cp, cp)
            }
            (None, Some(first), Some(last)) => (parse_hex(first)?, parse_hex(last)?),
            _ => return Err(Error::Ucd(format!("no codepoints in {:?}", entry))),
        };
        if first > last {
            return Err(Error::Ucd(format!(
                "range {:X}..{:X} ends before it begins",
                first, last
            )));
        }
        Ok(Self {
            first,
            last,
            category: codepoints.gc.as_str().into(),
        })
    }
}

/// Codepoint assignments from Unicode Character Database XML (`ucd.all.flat.xml`).
#[derive(Debug)]
pub struct Database {
    assignments: Vec<Assignment>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path.as_ref())?;
        let database = Self::read(BufReader::new(file))?;
        log::debug!(
            "Read {} entries from {}",
            database.assignments.len(),
            path.as_ref().display()
        );
        Ok(database)
    }

    pub fn read<R: BufRead>(reader: R) -> Result<Self, Error> {
        let ucd: xml::Ucd = quick_xml::de::from_reader(reader)?;
        let mut assignments = ucd
            .repertoire
            .entries
            .iter()
            .map(Assignment::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        // Stable sort, i.e. later entries override earlier ones.
        assignments.sort_by_key(|assignment| assignment.first);
        Ok(Self { assignments })
    }

    /// Assignments sorted by the first codepoint.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments[..]
    }

    /// Builds dense table covering the bounds.
    ///
    /// Codepoints that are not present in the database have unset category.
    pub fn to_table<F: FnMut()>(&self, bounds: AllowedBounds, mut on_progress: F) -> CodepointTable {
        let mut table = CodepointTable::unassigned(bounds.low(), bounds.high());
        for assignment in self.assignments.iter() {
            table.assign(assignment.first, assignment.last, assignment.category);
            on_progress();
        }
        table
    }
}

fn parse_hex(s: &str) -> Result<u32, Error> {
    if !s.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(Error::Ucd(format!("invalid codepoint {:?}", s)));
    }
    match u32::from_str_radix(s, 16) {
        Ok(codepoint) if codepoint <= MAX_CODEPOINT => Ok(codepoint),
        _ => Err(Error::Ucd(format!("invalid codepoint {:?}", s))),
    }
}
