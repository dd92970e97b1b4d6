// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use flatlet_domain::Date;

/// Errors that can occur when mutating rental entities.
///
/// Every rejected operation leaves the entity unchanged; the error only
/// reports why the change was not committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoreError {
    /// Person name must not be empty.
    EmptyName,
    /// Person ID must be exactly 9 characters.
    InvalidIdLength {
        /// The rejected length.
        length: usize,
    },
    /// Room count must be strictly positive.
    InvalidRoomCount {
        /// The rejected room count.
        rooms: u32,
    },
    /// Area must be strictly positive.
    InvalidArea {
        /// The rejected area.
        area: f64,
    },
    /// Price must be strictly positive.
    InvalidPrice {
        /// The rejected price.
        price: f64,
    },
    /// Rental start date must be before the current end date.
    StartNotBeforeEnd {
        /// The rejected start date.
        start: Date,
        /// The current end date it was checked against.
        end: Date,
    },
    /// Rental end date must be after the current start date.
    EndNotAfterStart {
        /// The rejected end date.
        end: Date,
        /// The current start date it was checked against.
        start: Date,
    },
    /// Lease extension must be at least one year.
    InvalidExtension {
        /// The rejected extension length.
        years: u16,
    },
    /// Replacement tenant must be strictly younger than the current one.
    TenantNotYounger,
    /// Replacement price must be at least the current price.
    PriceBelowCurrent {
        /// The offered price.
        offered: f64,
        /// The current price.
        current: f64,
    },
    /// Replacement start date must be before the current end date.
    StartBeyondLeaseEnd {
        /// The rejected start date.
        start: Date,
        /// The current end date.
        end: Date,
    },
    /// Replacement start date is more than 90 days before the lease end.
    ChangeoverTooEarly {
        /// Days between the proposed start and the current end date.
        days_left: i64,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidIdLength { length } => {
                write!(f, "ID must be exactly 9 characters, got {length}")
            }
            Self::InvalidRoomCount { rooms } => {
                write!(f, "Room count must be greater than 0, got {rooms}")
            }
            Self::InvalidArea { area } => {
                write!(f, "Area must be greater than 0, got {area}")
            }
            Self::InvalidPrice { price } => {
                write!(f, "Price must be greater than 0, got {price}")
            }
            Self::StartNotBeforeEnd { start, end } => {
                write!(
                    f,
                    "Rental start date {start} must be before the current end date {end}"
                )
            }
            Self::EndNotAfterStart { end, start } => {
                write!(
                    f,
                    "Rental end date {end} must be after the current start date {start}"
                )
            }
            Self::InvalidExtension { years } => {
                write!(f, "Lease extension must be at least 1 year, got {years}")
            }
            Self::TenantNotYounger => {
                write!(f, "Replacement tenant must be younger than the current tenant")
            }
            Self::PriceBelowCurrent { offered, current } => {
                write!(
                    f,
                    "Offered price {offered} is below the current price {current}"
                )
            }
            Self::StartBeyondLeaseEnd { start, end } => {
                write!(
                    f,
                    "New rental start date {start} must be before the current end date {end}"
                )
            }
            Self::ChangeoverTooEarly { days_left } => {
                write!(
                    f,
                    "Tenant change is allowed only within 90 days of the lease end, {days_left} days left"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}
