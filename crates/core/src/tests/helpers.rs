// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Apartment, Person};
use flatlet_domain::Date;

pub fn tenant_born(year: u16) -> Person {
    Person::new("Test Tenant", Date::new(15, 6, year), "123456789")
}

pub fn standard_apartment() -> Apartment {
    Apartment::new(
        3,
        80.0,
        5000.0,
        tenant_born(1980),
        Date::new(1, 1, 2023),
        Date::new(1, 1, 2024),
    )
}
