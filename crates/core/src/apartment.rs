// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Apartment rental record.
//!
//! An apartment composes a tenant and a rental period and enforces the
//! cross-field rules of the rental system purely through the [`Date`]
//! comparison and arithmetic contract.
//!
//! ## Invariants
//!
//! - Numeric attributes are strictly positive; invalid constructor input
//!   normalizes to the fixed defaults.
//! - The rental end date is kept after the start date at construction by
//!   forcing the end date's year to one past the start year.
//! - Start/end date setters each validate only against the *other*
//!   field's current value, never both jointly. Sequencing two setter
//!   calls is therefore observable behavior (see the tests).

use crate::error::CoreError;
use crate::person::Person;
use flatlet_domain::Date;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An apartment rental record: size, price, tenant, and rental period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawApartment")]
pub struct Apartment {
    /// Number of rooms (strictly positive).
    rooms: u32,
    /// Area in square meters (strictly positive).
    area: f64,
    /// Monthly rental price (strictly positive).
    price: f64,
    /// The tenant renting the apartment.
    tenant: Person,
    /// First day of the rental period.
    rental_start: Date,
    /// Last day of the rental period.
    rental_end: Date,
}

impl Apartment {
    /// Room count substituted when the supplied count is zero.
    pub const DEFAULT_ROOMS: u32 = 3;
    /// Area substituted when the supplied area is not positive.
    pub const DEFAULT_AREA: f64 = 80.0;
    /// Price substituted when the supplied price is not positive.
    pub const DEFAULT_PRICE: f64 = 5000.0;
    /// Maximum days between a replacement start date and the lease end.
    pub const MAX_CHANGEOVER_DAYS: i64 = 90;

    /// Creates a new `Apartment`.
    ///
    /// Construction is total. Non-positive numeric input normalizes to
    /// the fixed defaults. If the supplied end date is not after the
    /// start date, the end date's year is forced to `start.year() + 1`
    /// with its own day and month kept; if that forced triple is itself
    /// invalid (29 February landing in a common year) the change is
    /// dropped and the supplied end date stands.
    #[must_use]
    pub fn new(
        rooms: u32,
        area: f64,
        price: f64,
        tenant: Person,
        rental_start: Date,
        rental_end: Date,
    ) -> Self {
        let rooms: u32 = if rooms == 0 { Self::DEFAULT_ROOMS } else { rooms };
        let area: f64 = if area > 0.0 { area } else { Self::DEFAULT_AREA };
        let price: f64 = if price > 0.0 { price } else { Self::DEFAULT_PRICE };

        let mut rental_end: Date = rental_end;
        if !rental_end.after(&rental_start) {
            rental_end = Date::try_new(
                rental_end.day(),
                rental_end.month(),
                rental_start.year() + 1,
            )
            .unwrap_or(rental_end);
        }

        Self {
            rooms,
            area,
            price,
            tenant,
            rental_start,
            rental_end,
        }
    }

    /// Returns the number of rooms.
    #[must_use]
    pub const fn rooms(&self) -> u32 {
        self.rooms
    }

    /// Returns the area in square meters.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Returns the monthly rental price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Returns an independent copy of the tenant.
    #[must_use]
    pub fn tenant(&self) -> Person {
        self.tenant.clone()
    }

    /// Returns the rental start date.
    #[must_use]
    pub const fn rental_start(&self) -> Date {
        self.rental_start
    }

    /// Returns the rental end date.
    #[must_use]
    pub const fn rental_end(&self) -> Date {
        self.rental_end
    }

    /// Sets the number of rooms.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRoomCount` if the count is zero; the
    /// apartment is left unchanged.
    pub const fn set_rooms(&mut self, rooms: u32) -> Result<(), CoreError> {
        if rooms == 0 {
            return Err(CoreError::InvalidRoomCount { rooms });
        }
        self.rooms = rooms;
        Ok(())
    }

    /// Sets the area.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArea` if the area is not strictly
    /// positive; the apartment is left unchanged.
    pub fn set_area(&mut self, area: f64) -> Result<(), CoreError> {
        if area > 0.0 {
            self.area = area;
            Ok(())
        } else {
            Err(CoreError::InvalidArea { area })
        }
    }

    /// Sets the monthly price.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPrice` if the price is not strictly
    /// positive; the apartment is left unchanged.
    pub fn set_price(&mut self, price: f64) -> Result<(), CoreError> {
        if price > 0.0 {
            self.price = price;
            Ok(())
        } else {
            Err(CoreError::InvalidPrice { price })
        }
    }

    /// Sets the tenant. Always succeeds.
    pub fn set_tenant(&mut self, tenant: Person) {
        self.tenant = tenant;
    }

    /// Sets the rental start date.
    ///
    /// The date is validated against the current end date only.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::StartNotBeforeEnd` if the date is not
    /// strictly before the current end date; the apartment is left
    /// unchanged.
    pub fn set_rental_start(&mut self, date: Date) -> Result<(), CoreError> {
        if date.before(&self.rental_end) {
            self.rental_start = date;
            Ok(())
        } else {
            Err(CoreError::StartNotBeforeEnd {
                start: date,
                end: self.rental_end,
            })
        }
    }

    /// Sets the rental end date.
    ///
    /// The date is validated against the current start date only.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EndNotAfterStart` if the date is not strictly
    /// after the current start date; the apartment is left unchanged.
    pub fn set_rental_end(&mut self, date: Date) -> Result<(), CoreError> {
        if date.after(&self.rental_start) {
            self.rental_end = date;
            Ok(())
        } else {
            Err(CoreError::EndNotAfterStart {
                end: date,
                start: self.rental_start,
            })
        }
    }

    /// Extends the rental period by a number of years.
    ///
    /// February leap boundary handling is inherited from
    /// [`Date::add_years`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidExtension` if `years` is zero; the
    /// apartment is left unchanged.
    pub fn extend_rental_period(&mut self, years: u16) -> Result<(), CoreError> {
        if years == 0 {
            return Err(CoreError::InvalidExtension { years });
        }
        self.rental_end = self.rental_end.add_years(years);
        Ok(())
    }

    /// Returns the number of days from `date` to the rental end date.
    ///
    /// Returns `-1` exactly when `date` is strictly after the end date;
    /// otherwise the non-negative day count.
    #[must_use]
    pub fn days_left(&self, date: &Date) -> i64 {
        if date.after(&self.rental_end) {
            return -1;
        }
        date.difference(&self.rental_end)
    }

    /// Replaces the tenant if the changeover is eligible.
    ///
    /// All conditions must hold, checked in order:
    ///
    /// 1. `tenant` is strictly younger than the current tenant;
    /// 2. `price` is at least the current price;
    /// 3. `start` is strictly before the current end date;
    /// 4. `start` is within [`Apartment::MAX_CHANGEOVER_DAYS`] days of
    ///    the current end date.
    ///
    /// On success the price, tenant, and start date are replaced and the
    /// end date is recomputed as a fresh one-year lease from `start`,
    /// discarding the old end date.
    ///
    /// # Errors
    ///
    /// Returns the first failed condition; every field is left
    /// unchanged on rejection.
    pub fn change_tenant(
        &mut self,
        start: Date,
        tenant: Person,
        price: f64,
    ) -> Result<(), CoreError> {
        if tenant.compare_age(&self.tenant) != Ordering::Less {
            return Err(CoreError::TenantNotYounger);
        }
        if price < self.price {
            return Err(CoreError::PriceBelowCurrent {
                offered: price,
                current: self.price,
            });
        }
        if !start.before(&self.rental_end) {
            return Err(CoreError::StartBeyondLeaseEnd {
                start,
                end: self.rental_end,
            });
        }
        let days_left: i64 = start.difference(&self.rental_end);
        if days_left > Self::MAX_CHANGEOVER_DAYS {
            return Err(CoreError::ChangeoverTooEarly { days_left });
        }

        self.price = price;
        self.tenant = tenant;
        self.rental_start = start;
        self.rental_end = start.add_years(1);
        Ok(())
    }
}

impl std::fmt::Display for Apartment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Number of rooms: {}\nArea: {}\nPrice: {} NIS\nTenant name: {}\nRental start date: {}\nRental end date: {}",
            self.rooms,
            self.area,
            self.price,
            self.tenant.name(),
            self.rental_start,
            self.rental_end
        )
    }
}

/// Unnormalized mirror used as the deserialization boundary.
///
/// Deserializing an apartment applies the same defaulting and end date
/// forcing as [`Apartment::new`].
#[derive(Deserialize)]
struct RawApartment {
    rooms: u32,
    area: f64,
    price: f64,
    tenant: Person,
    rental_start: Date,
    rental_end: Date,
}

impl From<RawApartment> for Apartment {
    fn from(raw: RawApartment) -> Self {
        Self::new(
            raw.rooms,
            raw.area,
            raw.price,
            raw.tenant,
            raw.rental_start,
            raw.rental_end,
        )
    }
}
