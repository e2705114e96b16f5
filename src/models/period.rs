//! Budget period representation
//!
//! A period is a calendar year-month. It is written as zero-padded
//! `YYYY-MM`, but parsed numerically so that `2024-6` and `2024-06` name
//! the same month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
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

/// A calendar month used to scope budgets and transaction filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Years that keep the `YYYY-MM` form four digits wide
    pub const YEARS: RangeInclusive<i32> = 0..=9999;

    /// Create a period, validating the month and year
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        if !Self::YEARS.contains(&year) {
            return Err(PeriodParseError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// The period a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next = self.next();
        NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .and_then(|first| first.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Number of days in the month
    pub fn days_in_month(&self) -> u32 {
        self.end_date().day()
    }

    /// Check if a date falls within this period
    ///
    /// Compares the year and month components, not date ranges.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the next period
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous period
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Short label for chart axes, e.g. "Jun 2024"
    pub fn label(&self) -> String {
        let name = MONTH_NAMES[(self.month - 1) as usize];
        format!("{} {}", &name[..3], self.year)
    }

    /// Long label for pickers, e.g. "June 2024"
    pub fn long_label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Periods from `before` months back to `after` months ahead, in order
    pub fn window(&self, before: u32, after: u32) -> Vec<Period> {
        let mut start = *self;
        for _ in 0..before {
            start = start.prev();
        }

        let mut periods = Vec::with_capacity((before + after + 1) as usize);
        let mut current = start;
        for _ in 0..=(before + after) {
            periods.push(current);
            current = current.next();
        }
        periods
    }

    /// Parse a period string such as "2025-01" or "2025-1"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidYear(i32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            PeriodParseError::InvalidYear(y) => write!(f, "Year out of range (0-9999): {}", y),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(year: i32, month: u32) -> Period {
        Period::new(year, month).unwrap()
    }

    #[test]
    fn test_monthly_bounds() {
        let jan = period(2025, 1);
        assert_eq!(jan.start_date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(jan.end_date(), NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        assert_eq!(period(2024, 2).days_in_month(), 29);
        assert_eq!(period(2023, 2).days_in_month(), 28);
        assert_eq!(period(2024, 12).days_in_month(), 31);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(period(2025, 1).next(), period(2025, 2));
        assert_eq!(period(2024, 12).next(), period(2025, 1));
        assert_eq!(period(2025, 1).prev(), period(2024, 12));
    }

    #[test]
    fn test_contains() {
        let jan = period(2025, 1);
        assert!(jan.contains(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    }

    #[test]
    fn test_parse_is_numeric() {
        assert_eq!(Period::parse("2024-06").unwrap(), period(2024, 6));
        assert_eq!(Period::parse("2024-6").unwrap(), period(2024, 6));
        assert_eq!(Period::parse(" 2024-11 ").unwrap(), period(2024, 11));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Period::parse("2024-13"), Err(PeriodParseError::InvalidMonth(13)));
        assert_eq!(Period::parse("2024-0"), Err(PeriodParseError::InvalidMonth(0)));
        assert!(Period::parse("2024").is_err());
        assert!(Period::parse("June 2024").is_err());
        assert!(Period::parse("2024-06-01").is_err());
        assert_eq!(Period::parse("10000-01"), Err(PeriodParseError::InvalidYear(10000)));
        assert_eq!(
            Period::parse("262142-12"),
            Err(PeriodParseError::InvalidYear(262142))
        );
    }

    #[test]
    fn test_bounds_of_the_year_range() {
        let last = period(9999, 12);
        assert_eq!(last.end_date(), NaiveDate::from_ymd_opt(9999, 12, 31).unwrap());
        assert_eq!(last.days_in_month(), 31);
        assert_eq!(period(0, 1).start_date(), NaiveDate::from_ymd_opt(0, 1, 1).unwrap());

        assert!(last.to_string() > period(9999, 11).to_string());
        assert!(period(1000, 1).to_string() > period(999, 12).to_string());
    }

    #[test]
    fn test_end_date_of_unrepresentable_month_does_not_panic() {
        let far = Period::from_date(NaiveDate::MAX);
        assert_eq!(far.end_date(), NaiveDate::MAX);
        assert_eq!(far.days_in_month(), NaiveDate::MAX.day());
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(period(2025, 1).to_string(), "2025-01");
        assert_eq!(period(2025, 11).to_string(), "2025-11");
    }

    #[test]
    fn test_lexicographic_order_matches_calendar_order() {
        let mut periods = vec![period(2024, 10), period(2023, 12), period(2024, 2), period(2024, 1)];
        let mut keys: Vec<String> = periods.iter().map(|p| p.to_string()).collect();

        periods.sort();
        keys.sort();

        let calendar: Vec<String> = periods.iter().map(|p| p.to_string()).collect();
        assert_eq!(keys, calendar);
    }

    #[test]
    fn test_labels() {
        assert_eq!(period(2024, 6).label(), "Jun 2024");
        assert_eq!(period(2024, 6).long_label(), "June 2024");
    }

    #[test]
    fn test_window() {
        let window = period(2025, 2).window(6, 3);
        assert_eq!(window.len(), 10);
        assert_eq!(window[0], period(2024, 8));
        assert_eq!(window[6], period(2025, 2));
        assert_eq!(window[9], period(2025, 5));
    }

    #[test]
    fn test_serialization_as_string() {
        let json = serde_json::to_string(&period(2025, 3)).unwrap();
        assert_eq!(json, "\"2025-03\"");

        let parsed: Period = serde_json::from_str("\"2025-3\"").unwrap();
        assert_eq!(parsed, period(2025, 3));
        assert!(serde_json::from_str::<Period>("\"2025-13\"").is_err());
    }
}
