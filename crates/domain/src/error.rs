// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during calendar date validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Year is outside the supported four-digit range.
    InvalidYear(u16),
    /// Month is outside the range 1-12.
    InvalidMonth(u8),
    /// Day does not exist in the given month and year.
    InvalidDay {
        /// The rejected day value.
        day: u8,
        /// The month the day was checked against.
        month: u8,
        /// The year the day was checked against.
        year: u16,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear(year) => {
                write!(
                    f,
                    "Year {year} is out of range: must be between 1000 and 9999"
                )
            }
            Self::InvalidMonth(month) => {
                write!(f, "Month {month} is out of range: must be between 1 and 12")
            }
            Self::InvalidDay { day, month, year } => {
                write!(f, "Day {day} does not exist in month {month} of year {year}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
