//! Budget month representation
//!
//! The API operates over a single time window: the calendar month of the
//! client's local date. Months format and parse as `YYYY-MM`, which is the
//! wire representation for budget creation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month (e.g., "2026-08")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BudgetMonth {
    year: i32,
    month: u32,
}

impl BudgetMonth {
    /// Create a month from its parts
    ///
    /// Returns None if the month number is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing the client's current local date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Get the year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Get the month number (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Get the first day of this month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// Get the last day of this month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month.unwrap() - chrono::Duration::days(1)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for BudgetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BudgetMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month format: {}", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid month format: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month format: {}", s))?;
        Self::new(year, month).ok_or_else(|| format!("Month out of range: {}", s))
    }
}

impl TryFrom<String> for BudgetMonth {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BudgetMonth> for String {
    fn from(m: BudgetMonth) -> Self {
        m.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let m = BudgetMonth::new(2026, 8).unwrap();
        assert_eq!(m.to_string(), "2026-08");
    }

    #[test]
    fn test_parse() {
        let m: BudgetMonth = "2024-03".parse().unwrap();
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 3);

        assert!("2024-13".parse::<BudgetMonth>().is_err());
        assert!("2024".parse::<BudgetMonth>().is_err());
        assert!("abcd-ef".parse::<BudgetMonth>().is_err());
    }

    #[test]
    fn test_contains() {
        let m = BudgetMonth::new(2024, 2).unwrap();
        assert!(m.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(m.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2023, 2, 15).unwrap()));
    }

    #[test]
    fn test_end_date() {
        let m = BudgetMonth::new(2024, 2).unwrap();
        assert_eq!(m.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let m = BudgetMonth::new(2025, 12).unwrap();
        assert_eq!(m.end_date(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_serde_as_string() {
        let m = BudgetMonth::new(2024, 3).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"2024-03\"");

        let back: BudgetMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_current_is_valid() {
        let m = BudgetMonth::current();
        assert!((1..=12).contains(&m.month()));
    }
}
