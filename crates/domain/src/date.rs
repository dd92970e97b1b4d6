// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar date value type.
//!
//! This module defines the authoritative date representation for the
//! rental system, including validation, comparison, and year arithmetic.
//!
//! ## Invariants
//!
//! - A constructed `Date` always holds a calendrically valid
//!   (day, month, year) triple. There is no representable invalid state
//!   after construction.
//! - Mutators revalidate the whole resulting triple and leave the date
//!   unchanged on rejection.
//! - All comparisons and differences are derived from a single ordinal
//!   projection (days since a fixed epoch), never from per-field checks.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Checks if a year is a leap year.
///
/// A leap year is divisible by 4, except centuries not divisible by 400.
#[must_use]
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// A calendar date bounded to four-digit years.
///
/// Construction through [`Date::new`] is total: invalid input normalizes
/// to the fixed fallback date 01/01/2000 rather than failing. Use
/// [`Date::try_new`] when rejection should be observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDate")]
pub struct Date {
    /// The day in the month (1-31, depending on month and year).
    day: u8,
    /// The month in the year (1-12).
    month: u8,
    /// The four-digit year (1000-9999).
    year: u16,
}

impl Date {
    /// The earliest supported year.
    pub const MIN_YEAR: u16 = 1000;
    /// The latest supported year.
    pub const MAX_YEAR: u16 = 9999;
    /// The value substituted when constructor input fails validation.
    pub const FALLBACK: Self = Self {
        day: 1,
        month: 1,
        year: 2000,
    };

    const FEBRUARY: u8 = 2;
    const DECEMBER: u8 = 12;
    const LAST_FEB_LEAP: u8 = 29;
    const LAST_FEB_COMMON: u8 = 28;

    /// Creates a new `Date`, validating the triple.
    ///
    /// # Arguments
    ///
    /// * `day` - The day in the month
    /// * `month` - The month in the year
    /// * `year` - The four-digit year
    ///
    /// # Returns
    ///
    /// * `Ok(Date)` if the triple is calendrically valid
    /// * `Err(DomainError)` naming the first field that failed
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside 1000-9999, the month is
    /// outside 1-12, or the day does not exist in that month and year.
    pub const fn try_new(day: u8, month: u8, year: u16) -> Result<Self, DomainError> {
        if year < Self::MIN_YEAR || year > Self::MAX_YEAR {
            return Err(DomainError::InvalidYear(year));
        }
        if month < 1 || month > Self::DECEMBER {
            return Err(DomainError::InvalidMonth(month));
        }
        if day < 1 || day > Self::days_in_month(month, year) {
            return Err(DomainError::InvalidDay { day, month, year });
        }
        Ok(Self { day, month, year })
    }

    /// Creates a new `Date`, substituting the fallback on invalid input.
    ///
    /// This constructor never fails observably: if the triple is not a
    /// valid calendar date, the result is [`Date::FALLBACK`] (01/01/2000),
    /// which itself satisfies the type invariant.
    #[must_use]
    pub const fn new(day: u8, month: u8, year: u16) -> Self {
        match Self::try_new(day, month, year) {
            Ok(date) => date,
            Err(_) => Self::FALLBACK,
        }
    }

    /// Returns the day in the month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month in the year.
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Sets the day, keeping the current month and year.
    ///
    /// The resulting whole triple is revalidated; on rejection the date
    /// is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDay` if the day does not exist in the
    /// current month and year.
    pub fn set_day(&mut self, day: u8) -> Result<(), DomainError> {
        *self = Self::try_new(day, self.month, self.year)?;
        Ok(())
    }

    /// Sets the month, keeping the current day and year.
    ///
    /// The resulting whole triple is revalidated; on rejection the date
    /// is left unchanged. Setting month to April while the day is 31 is
    /// rejected, for example.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is out of range or the current day
    /// does not exist in the new month.
    pub fn set_month(&mut self, month: u8) -> Result<(), DomainError> {
        *self = Self::try_new(self.day, month, self.year)?;
        Ok(())
    }

    /// Sets the year, keeping the current day and month.
    ///
    /// The resulting whole triple is revalidated; on rejection the date
    /// is left unchanged. Moving 29 February to a common year is
    /// rejected, not truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is out of range or the current day
    /// and month do not exist in the new year.
    pub fn set_year(&mut self, year: u16) -> Result<(), DomainError> {
        *self = Self::try_new(self.day, self.month, year)?;
        Ok(())
    }

    /// Checks if this date comes strictly before another date.
    #[must_use]
    pub fn before(&self, other: &Self) -> bool {
        self.day_number() < other.day_number()
    }

    /// Checks if this date comes strictly after another date.
    #[must_use]
    pub fn after(&self, other: &Self) -> bool {
        other.before(self)
    }

    /// Returns the number of days between two dates.
    ///
    /// The result is the absolute ordinal delta: non-negative, symmetric,
    /// and zero exactly when the dates are equal.
    #[must_use]
    pub fn difference(&self, other: &Self) -> i64 {
        (self.day_number() - other.day_number()).abs()
    }

    /// Returns a new date with the year advanced by `years`.
    ///
    /// Day and month pass through unchanged, except at the February
    /// boundary: 28 February of a common year snaps forward to 29
    /// February when the target year is a leap year, and 29 February
    /// snaps back to 28 February when the target year is common. Both
    /// corrections keep the result on the last day of February.
    ///
    /// A target year beyond [`Date::MAX_YEAR`] normalizes to
    /// [`Date::FALLBACK`] through the total constructor. Callers gate the
    /// sign and magnitude of `years`; the method itself does not.
    #[must_use]
    pub const fn add_years(&self, years: u16) -> Self {
        let target_year = self.year.saturating_add(years);
        if self.month == Self::FEBRUARY {
            if self.day == Self::LAST_FEB_COMMON
                && !is_leap_year(self.year)
                && is_leap_year(target_year)
            {
                return Self::new(Self::LAST_FEB_LEAP, self.month, target_year);
            }
            if self.day == Self::LAST_FEB_LEAP
                && is_leap_year(self.year)
                && !is_leap_year(target_year)
            {
                return Self::new(Self::LAST_FEB_COMMON, self.month, target_year);
            }
        }
        Self::new(self.day, self.month, target_year)
    }

    /// Returns the last valid day of a month in a given year.
    const fn days_in_month(month: u8, year: u16) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            Self::FEBRUARY => {
                if is_leap_year(year) {
                    Self::LAST_FEB_LEAP
                } else {
                    Self::LAST_FEB_COMMON
                }
            }
            _ => 0,
        }
    }

    /// Projects the date onto a monotonic day count since a fixed epoch.
    ///
    /// Standard civil-calendar projection: January and February are
    /// counted as months 13 and 14 of the previous year, then
    /// `365*y + y/4 - y/100 + y/400 + ((m+1)*306)/10 + (d - 62)` with
    /// truncating division. All comparisons and differences derive from
    /// this single projection.
    fn day_number(&self) -> i64 {
        let mut year: i64 = i64::from(self.year);
        let mut month: i64 = i64::from(self.month);
        if month < 3 {
            year -= 1;
            month += 12;
        }
        365 * year + year / 4 - year / 100 + year / 400 + ((month + 1) * 306) / 10
            + (i64::from(self.day) - 62)
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.day_number().cmp(&other.day_number())
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Date {
    /// Formats the date as zero-padded `DD/MM/YYYY`, e.g. `02/03/1998`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Unvalidated mirror used as the deserialization boundary.
#[derive(Deserialize)]
struct RawDate {
    day: u8,
    month: u8,
    year: u16,
}

impl TryFrom<RawDate> for Date {
    type Error = DomainError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::try_new(raw.day, raw.month, raw.year)
    }
}
