// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use flatlet_domain::Date;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A person identified by name, ID, and date of birth.
///
/// Construction is total: an empty name and an ID that is not exactly
/// 9 characters are replaced with fixed placeholders rather than
/// rejected. Setters reject invalid input and leave the person
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPerson")]
pub struct Person {
    /// The person's name (never empty).
    name: String,
    /// The person's ID (always exactly 9 characters).
    id: String,
    /// The person's date of birth.
    date_of_birth: Date,
}

impl Person {
    /// The name substituted when an empty name is supplied.
    pub const DEFAULT_NAME: &'static str = "Someone";
    /// The ID substituted when the supplied ID is not 9 characters.
    pub const DEFAULT_ID: &'static str = "000000000";
    /// The required ID length.
    pub const ID_LENGTH: usize = 9;

    /// Creates a new `Person`.
    ///
    /// An empty name defaults to [`Person::DEFAULT_NAME`]; an ID that is
    /// not exactly 9 characters defaults to [`Person::DEFAULT_ID`]. The
    /// date of birth is already valid by construction of [`Date`].
    ///
    /// # Arguments
    ///
    /// * `name` - The person's name
    /// * `date_of_birth` - The person's date of birth
    /// * `id` - The person's ID
    #[must_use]
    pub fn new(name: &str, date_of_birth: Date, id: &str) -> Self {
        let name: String = if name.is_empty() {
            String::from(Self::DEFAULT_NAME)
        } else {
            String::from(name)
        };
        let id: String = if id.chars().count() == Self::ID_LENGTH {
            String::from(id)
        } else {
            String::from(Self::DEFAULT_ID)
        };
        Self {
            name,
            id,
            date_of_birth,
        }
    }

    /// Returns the person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person's ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the person's date of birth.
    #[must_use]
    pub const fn date_of_birth(&self) -> Date {
        self.date_of_birth
    }

    /// Sets the person's name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptyName` if the name is empty; the person
    /// is left unchanged.
    pub fn set_name(&mut self, name: &str) -> Result<(), CoreError> {
        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        self.name = String::from(name);
        Ok(())
    }

    /// Sets the person's ID.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIdLength` if the ID is not exactly
    /// 9 characters; the person is left unchanged.
    pub fn set_id(&mut self, id: &str) -> Result<(), CoreError> {
        let length: usize = id.chars().count();
        if length != Self::ID_LENGTH {
            return Err(CoreError::InvalidIdLength { length });
        }
        self.id = String::from(id);
        Ok(())
    }

    /// Sets the person's date of birth.
    ///
    /// Always succeeds: any `Date` is valid by construction.
    pub const fn set_date_of_birth(&mut self, date_of_birth: Date) {
        self.date_of_birth = date_of_birth;
    }

    /// Compares two people by age.
    ///
    /// Returns `Ordering::Greater` when this person is older (born
    /// strictly before the other), `Ordering::Less` when younger, and
    /// `Ordering::Equal` when both share a birth date.
    #[must_use]
    pub fn compare_age(&self, other: &Self) -> Ordering {
        if self.date_of_birth.before(&other.date_of_birth) {
            Ordering::Greater
        } else if self.date_of_birth.after(&other.date_of_birth) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}\nID: {}\nDate of birth: {}",
            self.name, self.id, self.date_of_birth
        )
    }
}

/// Unnormalized mirror used as the deserialization boundary.
///
/// Deserializing a person applies the same placeholder defaulting as
/// [`Person::new`].
#[derive(Deserialize)]
struct RawPerson {
    name: String,
    id: String,
    date_of_birth: Date,
}

impl From<RawPerson> for Person {
    fn from(raw: RawPerson) -> Self {
        Self::new(&raw.name, raw.date_of_birth, &raw.id)
    }
}
