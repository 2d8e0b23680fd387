use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{InvalidMonthKey, InvalidPeriodError, ProgressError};
use crate::types::Frequency;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

// Only consulted by `Ytd`, which `validate` never spans.
const VALIDATION_ANCHOR: Anchor = Anchor { year: 2000, month: 1 };

/// Calendar month, rendered as zero-padded `"YYYY-MM"`.
///
/// Ordering is chronological and matches the lexicographic order of the
/// rendered keys, which is what the validity window comparison relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidPeriodError> {
        check_year(year)?;
        check_index("month", month, 12)?;
        Ok(Self { year, month })
    }

    // Caller has already validated year and month.
    fn unchecked(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = InvalidMonthKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InvalidMonthKey(s.to_string());
        let (y, m) = s.trim().split_once('-').ok_or_else(bad)?;
        if y.len() != 4 || m.len() != 2 || !all_digits(y) || !all_digits(m) {
            return Err(bad());
        }
        let year: i32 = y.parse().map_err(|_| bad())?;
        let month: u32 = m.parse().map_err(|_| bad())?;
        MonthKey::new(year, month).map_err(|_| bad())
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// The "current month" that YTD periods are resolved against.
///
/// Always passed explicitly; only [`Anchor::now`] reads the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    year: i32,
    month: u32,
}

impl Anchor {
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidPeriodError> {
        let key = MonthKey::new(year, month)?;
        Ok(Self::from(key))
    }

    pub fn now() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn from_date(date: NaiveDate) -> Result<Self, InvalidPeriodError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn month_key(self) -> MonthKey {
        MonthKey::unchecked(self.year, self.month)
    }
}

impl From<MonthKey> for Anchor {
    fn from(key: MonthKey) -> Self {
        Self {
            year: key.year,
            month: key.month,
        }
    }
}

impl FromStr for Anchor {
    type Err = InvalidMonthKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<MonthKey>().map(Anchor::from)
    }
}

/// Reporting period selected in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Period {
    Ytd,
    Yearly { year: i32 },
    Quarterly { quarter: u32, year: i32 },
    Semesterly { semester: u32, year: i32 },
    Bimonthly { bimonth: u32, year: i32 },
    Monthly { month: u32, year: i32 },
}

impl Period {
    /// (year, first month, number of months)
    fn span(&self, anchor: &Anchor) -> Result<(i32, u32, u32), InvalidPeriodError> {
        match *self {
            Period::Ytd => Ok((anchor.year, 1, anchor.month)),
            Period::Yearly { year } => {
                check_year(year)?;
                Ok((year, 1, 12))
            }
            Period::Quarterly { quarter, year } => {
                check_year(year)?;
                check_index("quarter", quarter, 4)?;
                Ok((year, (quarter - 1) * 3 + 1, 3))
            }
            Period::Semesterly { semester, year } => {
                check_year(year)?;
                check_index("semester", semester, 2)?;
                Ok((year, (semester - 1) * 6 + 1, 6))
            }
            Period::Bimonthly { bimonth, year } => {
                check_year(year)?;
                check_index("bimonth", bimonth, 6)?;
                Ok((year, (bimonth - 1) * 2 + 1, 2))
            }
            Period::Monthly { month, year } => {
                check_year(year)?;
                check_index("month", month, 12)?;
                Ok((year, month, 1))
            }
        }
    }

    /// Checks the period's own fields. `Ytd` is always well-formed; its
    /// range comes from the anchor.
    pub fn validate(&self) -> Result<(), InvalidPeriodError> {
        match self {
            Period::Ytd => Ok(()),
            other => other.span(&VALIDATION_ANCHOR).map(|_| ()),
        }
    }

    /// First and last month of the period, inclusive.
    pub fn bounds(&self, anchor: &Anchor) -> Result<(MonthKey, MonthKey), InvalidPeriodError> {
        let (year, first, len) = self.span(anchor)?;
        Ok((
            MonthKey::unchecked(year, first),
            MonthKey::unchecked(year, first + len - 1),
        ))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Ytd => write!(f, "YTD"),
            Period::Yearly { year } => write!(f, "{year}"),
            Period::Quarterly { quarter, year } => write!(f, "Q{quarter} {year}"),
            Period::Semesterly { semester, year } => write!(f, "S{semester} {year}"),
            Period::Bimonthly { bimonth, year } => write!(f, "B{bimonth} {year}"),
            Period::Monthly { month, year } => write!(f, "{year:04}-{month:02}"),
        }
    }
}

/// Compact selectors: `ytd`, `2026`, `2026-Q2`, `2026-S1`, `2026-B3`, `2026-04`.
impl FromStr for Period {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let unknown = || ProgressError::UnknownPeriodSelector(s.to_string());

        if raw.eq_ignore_ascii_case("ytd") {
            return Ok(Period::Ytd);
        }

        let period = if raw.len() == 4 && all_digits(raw) {
            Period::Yearly {
                year: raw.parse().map_err(|_| unknown())?,
            }
        } else {
            let (y, rest) = raw.split_once('-').ok_or_else(unknown)?;
            if y.len() != 4 || !all_digits(y) {
                return Err(unknown());
            }
            let year: i32 = y.parse().map_err(|_| unknown())?;

            let mut chars = rest.chars();
            match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some(tag @ ('Q' | 'S' | 'B')) => {
                    let digits = chars.as_str();
                    if digits.is_empty() || !all_digits(digits) {
                        return Err(unknown());
                    }
                    let idx: u32 = digits.parse().map_err(|_| unknown())?;
                    match tag {
                        'Q' => Period::Quarterly { quarter: idx, year },
                        'S' => Period::Semesterly { semester: idx, year },
                        _ => Period::Bimonthly { bimonth: idx, year },
                    }
                }
                Some(_) if rest.len() == 2 && all_digits(rest) => Period::Monthly {
                    month: rest.parse().map_err(|_| unknown())?,
                    year,
                },
                _ => return Err(unknown()),
            }
        };

        period.validate()?;
        Ok(period)
    }
}

impl Frequency {
    /// The period of this cadence that contains `key`, e.g. a quarterly KR
    /// starting in February sits in Q1.
    pub fn period_containing(self, key: MonthKey) -> Period {
        let (year, m) = (key.year, key.month);
        match self {
            Frequency::Monthly => Period::Monthly { month: m, year },
            Frequency::Bimonthly => Period::Bimonthly { bimonth: (m - 1) / 2 + 1, year },
            Frequency::Quarterly => Period::Quarterly { quarter: (m - 1) / 3 + 1, year },
            Frequency::Semesterly => Period::Semesterly { semester: (m - 1) / 6 + 1, year },
            Frequency::Yearly => Period::Yearly { year },
        }
    }
}

/// Ordered month keys covered by `period`. Keys are ascending and unique.
pub fn resolve_month_keys(period: &Period, anchor: &Anchor) -> Result<Vec<MonthKey>, InvalidPeriodError> {
    let (year, first, len) = period.span(anchor)?;
    let keys: Vec<MonthKey> = (first..first + len)
        .map(|m| MonthKey::unchecked(year, m))
        .collect();
    log::debug!("resolved {period} to {len} month(s) from {year:04}-{first:02}");
    Ok(keys)
}

fn check_year(year: i32) -> Result<(), InvalidPeriodError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(InvalidPeriodError::out_of_range("year", year.into(), "expected 1..=9999"))
    }
}

fn check_index(field: &'static str, value: u32, max: u32) -> Result<(), InvalidPeriodError> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        let reason = match field {
            "quarter" => "expected 1..=4",
            "semester" => "expected 1..=2",
            "bimonth" => "expected 1..=6",
            _ => "expected 1..=12",
        };
        Err(InvalidPeriodError::out_of_range(field, value.into(), reason))
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
