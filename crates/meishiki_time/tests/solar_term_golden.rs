//! Golden-value tests for the approximate solar-term estimator.
//!
//! Almanac instants (JST) are compared with a tolerance of about one day,
//! the documented accuracy of the mean-drift approximation.

use chrono::{NaiveDate, NaiveDateTime};
use meishiki_time::{SolarTerm, month_boundary, next_boundary_after, risshun, term_boundary};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn hours_between(a: NaiveDateTime, b: NaiveDateTime) -> f64 {
    (a - b).num_minutes().abs() as f64 / 60.0
}

/// Almanac 立春 instants (JST).
const RISSHUN_ALMANAC: [(i32, u32, u32, u32, u32); 5] = [
    (1979, 2, 4, 19, 13),
    (1990, 2, 4, 11, 14),
    (2001, 2, 4, 2, 29),
    (2021, 2, 3, 23, 59),
    (2024, 2, 4, 17, 27),
];

#[test]
fn risshun_within_a_day_of_almanac() {
    for (y, m, d, h, min) in RISSHUN_ALMANAC {
        let estimate = risshun(y);
        let almanac = at(y, m, d, h, min);
        assert!(
            hours_between(estimate, almanac) < 24.0,
            "{y}: estimate {estimate}, almanac {almanac}"
        );
    }
}

/// 2000 jie terms (JST) against the mean offsets.
#[test]
fn year_2000_terms_within_hours() {
    let almanac = [
        (SolarTerm::Keichitsu, at(2000, 3, 5, 15, 43)),
        (SolarTerm::Seimei, at(2000, 4, 4, 20, 32)),
        (SolarTerm::Rikka, at(2000, 5, 5, 13, 50)),
        (SolarTerm::Boshu, at(2000, 6, 5, 17, 59)),
        (SolarTerm::Shosho, at(2000, 7, 7, 4, 14)),
        (SolarTerm::Risshu, at(2000, 8, 7, 13, 44)),
        (SolarTerm::Hakuro, at(2000, 9, 7, 16, 59)),
        (SolarTerm::Kanro, at(2000, 10, 8, 8, 38)),
        (SolarTerm::Ritto, at(2000, 11, 7, 11, 48)),
        (SolarTerm::Taisetsu, at(2000, 12, 7, 4, 37)),
        (SolarTerm::Shokan, at(2001, 1, 5, 15, 49)),
    ];
    for (term, expected) in almanac {
        let estimate = term_boundary(2000, term);
        assert!(
            hours_between(estimate, expected) < 6.0,
            "{}: estimate {estimate}, almanac {expected}",
            term.name()
        );
    }
}

#[test]
fn month_boundary_matches_term_boundary() {
    assert_eq!(
        month_boundary(1979, 6),
        term_boundary(1979, SolarTerm::Boshu)
    );
    assert_eq!(
        month_boundary(1980, 1),
        term_boundary(1979, SolarTerm::Shokan)
    );
}

#[test]
fn boundaries_increase_through_a_year() {
    let mut previous = month_boundary(1985, 1);
    for month in 2..=12 {
        let b = month_boundary(1985, month);
        assert!(b > previous, "month {month}: {b} <= {previous}");
        previous = b;
    }
}

#[test]
fn next_boundary_is_strictly_after() {
    for (y, m, d) in [(1979, 6, 27), (2000, 2, 4), (2024, 12, 31), (1950, 1, 1)] {
        let instant = at(y, m, d, 12, 0);
        let next = next_boundary_after(instant);
        assert!(next.at > instant);
        assert!((next.at - instant).num_days() <= 32);
    }
}

#[test]
fn next_boundary_on_boundary_instant_moves_on() {
    let b = month_boundary(1979, 6);
    let next = next_boundary_after(b);
    assert_eq!(next.term, SolarTerm::Shosho);
}
