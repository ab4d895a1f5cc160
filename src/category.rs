use std::fmt::Display;
use std::fmt::Formatter;

/// Unicode General_Category split into its major (uppercase) and minor (lowercase) letters.
///
/// `None` means the letter is unset, e.g. for codepoints missing from the database.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct GeneralCategory {
    major: Option<u8>,
    minor: Option<u8>,
}

impl GeneralCategory {
    pub const UNASSIGNED: Self = Self {
        major: None,
        minor: None,
    };

    /// Creates new category from raw letters.
    ///
    /// Anything but `A..=Z` for the major letter and `a..=z` for the minor letter is treated as
    /// unset.
    pub fn new(major: u8, minor: u8) -> Self {
        Self {
            major: major.is_ascii_uppercase().then_some(major),
            minor: minor.is_ascii_lowercase().then_some(minor),
        }
    }

    pub fn major(&self) -> Option<u8> {
        self.major
    }

    pub fn minor(&self) -> Option<u8> {
        self.minor
    }

    pub fn is_unassigned(&self) -> bool {
        self.major.is_none() && self.minor.is_none()
    }

    /// Binary representation where unset letters are zeroes.
    pub fn to_bytes(self) -> [u8; 2] {
        [self.major.unwrap_or(0), self.minor.unwrap_or(0)]
    }

    pub fn from_bytes([major, minor]: [u8; 2]) -> Self {
        Self::new(major, minor)
    }
}

/// Parses `gc` attribute value, e.g. `Lu`.
impl From<&str> for GeneralCategory {
    fn from(gc: &str) -> Self {
        let bytes = gc.as_bytes();
        Self::new(
            bytes.first().copied().unwrap_or(0),
            bytes.get(1).copied().unwrap_or(0),
        )
    }
}

impl Display for GeneralCategory {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        use std::fmt::Write;
        if let Some(major) = self.major {
            f.write_char(major as char)?;
        }
        if let Some(minor) = self.minor {
            f.write_char(minor as char)?;
        }
        Ok(())
    }
}

pub const CATEGORY_NAMES: [(&str, &str); 30] = [
    ("Cc", "Control"),
    ("Cf", "Format"),
    ("Cn", "Not Assigned"),
    ("Co", "Private Use"),
    ("Cs", "Surrogate"),
    ("Ll", "Lowercase Letter"),
    ("Lm", "Modifier Letter"),
    ("Lo", "Other Letter"),
    ("Lt", "Titlecase Letter"),
    ("Lu", "Uppercase Letter"),
    ("Mc", "Spacing Mark"),
    ("Me", "Enclosing Mark"),
    ("Mn", "Nonspacing Mark"),
    ("Nd", "Decimal Number"),
    ("Nl", "Letter Number"),
    ("No", "Other Number"),
    ("Pc", "Connector Punctuation"),
    ("Pd", "Dash Punctuation"),
    ("Pe", "Close Punctuation"),
    ("Pf", "Final Punctuation"),
    ("Pi", "Initial Punctuation"),
    ("Po", "Other Punctuation"),
    ("Ps", "Open Punctuation"),
    ("Sc", "Currency Symbol"),
    ("Sk", "Modifier Symbol"),
    ("Sm", "Math Symbol"),
    ("So", "Other Symbol"),
    ("Zl", "Line Separator"),
    ("Zp", "Paragraph Separator"),
    ("Zs", "Space Separator"),
];
