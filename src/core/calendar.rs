//! Fiscal calendar primitives.
//!
//! The fiscal year starts on April 1 and is labeled by its starting calendar
//! year: FY `2025` spans `2025-04-01` through `2026-03-31`. Quarters follow a
//! fixed taxonomy (`Q1 (Apr-Jun)` .. `Q4 (Jan-Mar)`); `Q4` always rolls into
//! the calendar year after the fiscal-year label.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::types::DateRange;
use crate::error::{FiscalError, FiscalResult};

/// Full English month names, calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Zero-based calendar month index for a full English month name.
///
/// Matching is ASCII-case-insensitive and year-independent.
#[must_use]
pub fn month_index(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|index| index as u32)
}

/// Full English month name for a zero-based calendar month index.
#[must_use]
pub fn month_name(index: u32) -> Option<&'static str> {
    MONTH_NAMES.get(index as usize).copied()
}

/// 3-letter display abbreviation of a full English month name.
#[must_use]
pub fn month_abbrev(name: &'static str) -> &'static str {
    &name[..3]
}

/// Fiscal-year identity, labeled by the calendar year containing April 1.
///
/// On the wire a fiscal year travels as a 4-digit numeric string; the label
/// is parsed once at the boundary and carried as this tagged value
/// internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FiscalYear(i32);

impl FiscalYear {
    pub fn new(year: i32) -> FiscalResult<Self> {
        if !(1000..=9999).contains(&year) {
            return Err(FiscalError::InvalidFiscalYear {
                label: year.to_string(),
            });
        }
        Ok(Self(year))
    }

    /// Parses the 4-digit wire label.
    pub fn parse(label: &str) -> FiscalResult<Self> {
        let year: i32 = label
            .trim()
            .parse()
            .map_err(|_| FiscalError::InvalidFiscalYear {
                label: label.to_owned(),
            })?;
        Self::new(year).map_err(|_| FiscalError::InvalidFiscalYear {
            label: label.to_owned(),
        })
    }

    /// Fiscal year containing a calendar date: April or later maps to the
    /// date's own year, January through March to the year before.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= 4 {
            Self(date.year())
        } else {
            Self(date.year() - 1)
        }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0
    }

    /// April 1 of the labeled calendar year.
    #[must_use]
    pub fn start(self) -> NaiveDate {
        ymd(self.0, 4, 1)
    }

    /// Full fiscal-year span: April 1 through March 31 of the next
    /// calendar year.
    #[must_use]
    pub fn date_range(self) -> DateRange {
        DateRange {
            start: self.start(),
            end: ymd(self.0 + 1, 4, 1) - Duration::days(1),
        }
    }
}

impl std::fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl std::str::FromStr for FiscalYear {
    type Err = FiscalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FiscalYear {
    type Error = FiscalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FiscalYear> for String {
    fn from(value: FiscalYear) -> Self {
        value.to_string()
    }
}

/// Fiscal quarter identity behind the stringly `"Qn (Mon-Mon)"` tokens.
///
/// External tokens are parsed once via [`Quarter::from_token`]; display
/// strings are produced only at the output boundary via [`Quarter::token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Fiscal order: Q1 opens the year in April, Q4 closes it in March.
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Full display token, also used as the quarterly bucket matching key.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1 (Apr-Jun)",
            Quarter::Q2 => "Q2 (Jul-Sep)",
            Quarter::Q3 => "Q3 (Oct-Dec)",
            Quarter::Q4 => "Q4 (Jan-Mar)",
        }
    }

    #[must_use]
    pub fn short(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }

    /// Canonical month names of the quarter, calendar order.
    #[must_use]
    pub fn months(self) -> [&'static str; 3] {
        match self {
            Quarter::Q1 => ["April", "May", "June"],
            Quarter::Q2 => ["July", "August", "September"],
            Quarter::Q3 => ["October", "November", "December"],
            Quarter::Q4 => ["January", "February", "March"],
        }
    }

    /// Extracts the `Q[1-4]` marker from anywhere in a quarter token.
    pub fn from_token(token: &str) -> FiscalResult<Self> {
        let bytes = token.as_bytes();
        for window in bytes.windows(2) {
            if window[0] == b'Q' {
                match window[1] {
                    b'1' => return Ok(Quarter::Q1),
                    b'2' => return Ok(Quarter::Q2),
                    b'3' => return Ok(Quarter::Q3),
                    b'4' => return Ok(Quarter::Q4),
                    _ => {}
                }
            }
        }
        Err(FiscalError::InvalidQuarterToken {
            token: token.to_owned(),
        })
    }

    /// Quarter owning a full English month name under the fixed
    /// Apr-Jun / Jul-Sep / Oct-Dec / Jan-Mar groupings.
    #[must_use]
    pub fn for_month_name(name: &str) -> Option<Self> {
        let index = month_index(name)?;
        Some(Self::for_month_index(index))
    }

    #[must_use]
    fn for_month_index(index: u32) -> Self {
        match index {
            3..=5 => Quarter::Q1,
            6..=8 => Quarter::Q2,
            9..=11 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// Fiscal quarter containing a calendar date.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self::for_month_index(date.month0())
    }

    /// Concrete calendar span of this quarter within a fiscal year.
    ///
    /// Q1..Q3 lie inside the labeled calendar year; Q4 is January 1 through
    /// March 31 of the year after the label.
    #[must_use]
    pub fn date_range(self, fiscal_year: FiscalYear) -> DateRange {
        let year = fiscal_year.year();
        match self {
            Quarter::Q1 => DateRange {
                start: ymd(year, 4, 1),
                end: ymd(year, 6, 30),
            },
            Quarter::Q2 => DateRange {
                start: ymd(year, 7, 1),
                end: ymd(year, 9, 30),
            },
            Quarter::Q3 => DateRange {
                start: ymd(year, 10, 1),
                end: ymd(year, 12, 31),
            },
            Quarter::Q4 => DateRange {
                start: ymd(year + 1, 1, 1),
                end: ymd(year + 1, 3, 31),
            },
        }
    }
}

/// Sunday that opens the week containing `date`.
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Last day of the calendar month containing `date`.
#[must_use]
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        ymd(year + 1, 1, 1)
    } else {
        ymd(year, month + 1, 1)
    };
    first_of_next - Duration::days(1)
}

/// Calendar span of a zero-based month index within a calendar year.
#[must_use]
pub fn month_range(year: i32, month_index: u32) -> DateRange {
    let start = ymd(year, month_index + 1, 1);
    DateRange {
        start,
        end: end_of_month(start),
    }
}

// All call sites pass range-checked fiscal years or components derived from
// an existing NaiveDate, so construction cannot fail.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("in-range calendar components")
}
