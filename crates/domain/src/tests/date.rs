// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Date, DomainError, is_leap_year};

#[test]
fn test_new_valid_date_reproduces_fields() {
    let date: Date = Date::new(31, 12, 2023);
    assert_eq!(date.day(), 31);
    assert_eq!(date.month(), 12);
    assert_eq!(date.year(), 2023);
}

#[test]
fn test_new_accepts_table_boundaries() {
    let boundaries: [(u8, u8, u16); 6] = [
        (1, 1, 1000),
        (31, 1, 2023),
        (30, 4, 2023),
        (28, 2, 2023),
        (29, 2, 2020),
        (31, 12, 9999),
    ];

    for (day, month, year) in boundaries {
        let date: Date = Date::new(day, month, year);
        assert_eq!((date.day(), date.month(), date.year()), (day, month, year));
    }
}

#[test]
fn test_new_invalid_input_falls_back() {
    let invalid: [(u8, u8, u16); 8] = [
        (31, 4, 2021),
        (29, 2, 2019),
        (0, 1, 2000),
        (32, 1, 2000),
        (1, 0, 2000),
        (1, 13, 2000),
        (1, 1, 999),
        (1, 1, 10000),
    ];

    for (day, month, year) in invalid {
        let date: Date = Date::new(day, month, year);
        assert_eq!(date, Date::FALLBACK, "({day}, {month}, {year}) should fall back");
    }
}

#[test]
fn test_fallback_is_first_of_january_2000() {
    assert_eq!(Date::FALLBACK.day(), 1);
    assert_eq!(Date::FALLBACK.month(), 1);
    assert_eq!(Date::FALLBACK.year(), 2000);
    assert_eq!(Date::default(), Date::FALLBACK);
}

#[test]
fn test_try_new_rejects_year_out_of_range() {
    assert!(matches!(
        Date::try_new(1, 1, 999),
        Err(DomainError::InvalidYear(999))
    ));
    assert!(matches!(
        Date::try_new(1, 1, 10000),
        Err(DomainError::InvalidYear(10000))
    ));
}

#[test]
fn test_try_new_rejects_month_out_of_range() {
    assert!(matches!(
        Date::try_new(1, 0, 2000),
        Err(DomainError::InvalidMonth(0))
    ));
    assert!(matches!(
        Date::try_new(1, 13, 2000),
        Err(DomainError::InvalidMonth(13))
    ));
}

#[test]
fn test_try_new_rejects_day_against_month_table() {
    assert!(matches!(
        Date::try_new(31, 4, 2021),
        Err(DomainError::InvalidDay {
            day: 31,
            month: 4,
            year: 2021
        })
    ));
    assert!(matches!(
        Date::try_new(29, 2, 2019),
        Err(DomainError::InvalidDay {
            day: 29,
            month: 2,
            year: 2019
        })
    ));
    assert!(matches!(
        Date::try_new(0, 6, 2019),
        Err(DomainError::InvalidDay {
            day: 0,
            month: 6,
            year: 2019
        })
    ));
}

#[test]
fn test_is_leap_year_rules() {
    assert!(is_leap_year(2020));
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2400));
    assert!(!is_leap_year(2019));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
}

#[test]
fn test_set_day_commits_valid_value() {
    let mut date: Date = Date::new(15, 6, 2021);
    assert!(date.set_day(30).is_ok());
    assert_eq!(date.day(), 30);
}

#[test]
fn test_set_day_rejects_against_current_month() {
    let mut date: Date = Date::new(15, 4, 2021);
    let result: Result<(), DomainError> = date.set_day(31);
    assert!(matches!(
        result,
        Err(DomainError::InvalidDay {
            day: 31,
            month: 4,
            year: 2021
        })
    ));
    assert_eq!(date, Date::new(15, 4, 2021));
}

#[test]
fn test_set_month_rejects_when_day_overflows_target_month() {
    let mut date: Date = Date::new(31, 1, 2021);
    assert!(date.set_month(4).is_err());
    assert_eq!(date, Date::new(31, 1, 2021));

    assert!(date.set_month(3).is_ok());
    assert_eq!(date, Date::new(31, 3, 2021));
}

#[test]
fn test_set_month_rejects_out_of_range() {
    let mut date: Date = Date::new(15, 6, 2021);
    assert!(matches!(date.set_month(0), Err(DomainError::InvalidMonth(0))));
    assert!(matches!(
        date.set_month(13),
        Err(DomainError::InvalidMonth(13))
    ));
    assert_eq!(date, Date::new(15, 6, 2021));
}

#[test]
fn test_set_year_rejects_leap_day_in_common_year() {
    let mut date: Date = Date::new(29, 2, 2020);
    let result: Result<(), DomainError> = date.set_year(2021);
    assert!(matches!(
        result,
        Err(DomainError::InvalidDay {
            day: 29,
            month: 2,
            year: 2021
        })
    ));
    assert_eq!(date, Date::new(29, 2, 2020));

    assert!(date.set_year(2024).is_ok());
    assert_eq!(date, Date::new(29, 2, 2024));
}

#[test]
fn test_set_year_rejects_out_of_range() {
    let mut date: Date = Date::new(15, 6, 2021);
    assert!(matches!(date.set_year(999), Err(DomainError::InvalidYear(999))));
    assert!(matches!(
        date.set_year(10000),
        Err(DomainError::InvalidYear(10000))
    ));
    assert_eq!(date.year(), 2021);
}

#[test]
fn test_comparison_trichotomy() {
    let pairs: [(Date, Date); 4] = [
        (Date::new(1, 1, 2000), Date::new(2, 1, 2000)),
        (Date::new(31, 12, 1999), Date::new(1, 1, 2000)),
        (Date::new(15, 6, 2021), Date::new(15, 6, 2021)),
        (Date::new(2, 3, 1998), Date::new(28, 2, 1998)),
    ];

    for (a, b) in pairs {
        let holds: u8 =
            u8::from(a.before(&b)) + u8::from(a == b) + u8::from(a.after(&b));
        assert_eq!(holds, 1, "exactly one of before/equals/after must hold for {a} vs {b}");
    }
}

#[test]
fn test_after_is_inverse_of_before() {
    let earlier: Date = Date::new(2, 3, 1998);
    let later: Date = Date::new(31, 12, 2023);

    assert!(earlier.before(&later));
    assert!(later.after(&earlier));
    assert!(!later.before(&earlier));
    assert!(!earlier.after(&later));
}

#[test]
fn test_ordering_is_consistent_with_comparisons() {
    let mut dates: Vec<Date> = vec![
        Date::new(31, 12, 2023),
        Date::new(1, 1, 2000),
        Date::new(29, 2, 2020),
        Date::new(2, 3, 1998),
    ];
    dates.sort();

    assert_eq!(
        dates,
        vec![
            Date::new(2, 3, 1998),
            Date::new(1, 1, 2000),
            Date::new(29, 2, 2020),
            Date::new(31, 12, 2023),
        ]
    );
    for window in dates.windows(2) {
        assert!(window[0].before(&window[1]));
    }
}

#[test]
fn test_difference_is_symmetric_and_zero_on_equal() {
    let a: Date = Date::new(1, 1, 2000);
    let b: Date = Date::new(31, 12, 1999);

    assert_eq!(a.difference(&b), 1);
    assert_eq!(b.difference(&a), 1);
    assert_eq!(a.difference(&a), 0);
}

#[test]
fn test_difference_spans_leap_day() {
    let before_leap: Date = Date::new(28, 2, 2020);
    let after_leap: Date = Date::new(1, 3, 2020);
    assert_eq!(before_leap.difference(&after_leap), 2);

    let before_common: Date = Date::new(28, 2, 2019);
    let after_common: Date = Date::new(1, 3, 2019);
    assert_eq!(before_common.difference(&after_common), 1);
}

#[test]
fn test_add_years_snaps_forward_onto_leap_day() {
    let date: Date = Date::new(28, 2, 2019);
    assert_eq!(date.add_years(1), Date::new(29, 2, 2020));
}

#[test]
fn test_add_years_snaps_back_off_leap_day() {
    let date: Date = Date::new(29, 2, 2020);
    assert_eq!(date.add_years(1), Date::new(28, 2, 2021));
}

#[test]
fn test_add_years_leap_to_leap_passes_through() {
    let date: Date = Date::new(29, 2, 2020);
    assert_eq!(date.add_years(4), Date::new(29, 2, 2024));
}

#[test]
fn test_add_years_common_february_passes_through() {
    let date: Date = Date::new(28, 2, 2019);
    assert_eq!(date.add_years(2), Date::new(28, 2, 2021));
}

#[test]
fn test_add_years_plain_date() {
    let date: Date = Date::new(15, 6, 2000);
    assert_eq!(date.add_years(5), Date::new(15, 6, 2005));
}

#[test]
fn test_add_years_beyond_max_year_falls_back() {
    let date: Date = Date::new(1, 1, 9999);
    assert_eq!(date.add_years(1), Date::FALLBACK);
}

#[test]
fn test_display_zero_pads_day_and_month() {
    assert_eq!(Date::new(2, 3, 1998).to_string(), "02/03/1998");
    assert_eq!(Date::new(31, 12, 2023).to_string(), "31/12/2023");
    assert_eq!(Date::FALLBACK.to_string(), "01/01/2000");
}

#[test]
fn test_copies_do_not_alias() {
    let original: Date = Date::new(15, 6, 2021);
    let mut copy: Date = original;

    assert!(copy.set_day(16).is_ok());
    assert_eq!(copy.day(), 16);
    assert_eq!(original.day(), 15);
}
