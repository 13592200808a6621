//! Julian Day conversions for cyclic day counting.
//!
//! Uses the standard astronomical (Meeus) formula: January and February are
//! treated as months 13 and 14 of the previous year so the leap day falls at
//! the end of the counting year, then the Gregorian century correction is
//! applied. The result is the Julian Date at 0h, i.e. a half-integer.

/// Julian Date at 0h of a Gregorian civil date.
///
/// ```
/// use meishiki_time::julian_day;
///
/// assert_eq!(julian_day(2000, 1, 1), 2_451_544.5);
/// ```
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
}

/// Floor of [`julian_day`], the integer used for sexagenary day arithmetic.
///
/// This is one less than the conventional (noon-based) Julian Day Number.
pub fn julian_day_floor(year: i32, month: u32, day: u32) -> i64 {
    julian_day(year, month, day).floor() as i64
}

/// Conventional Julian Day Number (the JD at noon of the civil date).
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    (julian_day(year, month, day) + 0.5).floor() as i64
}

/// Gregorian `(year, month, day)` for a Julian Day Number.
pub fn calendar_from_jdn(jdn: i64) -> (i32, u32, u32) {
    let f = jdn + 1401 + (((4 * jdn + 274_277).div_euclid(146_097)) * 3).div_euclid(4) - 38;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);
    (year as i32, month as u32, day as u32)
}

/// ISO weekday index of a Julian Day Number: 0 = Monday .. 6 = Sunday.
pub fn weekday_from_jdn(jdn: i64) -> u8 {
    jdn.rem_euclid(7) as u8
}
