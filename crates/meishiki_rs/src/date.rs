//! Parsing of textual birth dates and times.
//!
//! Dates are `YYYY-MM-DD`, times `HH:MM` (24-hour). Out-of-range values that
//! are well-formed numbers, such as `2023-02-30` or `24:00`, surface as
//! [`TimeError`](meishiki_time::TimeError) rather than as parse errors.

use chrono::NaiveDate;
use meishiki_time::BirthMoment;

use crate::error::MeishikiError;

const DATE_FORMAT: &str = "YYYY-MM-DD";
const TIME_FORMAT: &str = "HH:MM";

fn parse_error(field: &'static str, input: &str, expected: &'static str) -> MeishikiError {
    MeishikiError::Parse {
        field,
        input: input.to_string(),
        expected,
    }
}

fn split_numbers<const N: usize>(input: &str, sep: char) -> Option<[i64; N]> {
    let mut out = [0i64; N];
    let mut parts = input.trim().split(sep);
    for slot in out.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }
    parts.next().is_none().then_some(out)
}

/// Split `YYYY-MM-DD` into numeric fields without validating the calendar.
pub fn parse_date_fields(input: &str) -> Result<(i32, u32, u32), MeishikiError> {
    split_numbers::<3>(input, '-')
        .and_then(|[y, m, d]| {
            Some((
                i32::try_from(y).ok()?,
                u32::try_from(m).ok()?,
                u32::try_from(d).ok()?,
            ))
        })
        .ok_or_else(|| parse_error("date", input, DATE_FORMAT))
}

/// Split `HH:MM` into numeric fields without validating ranges.
pub fn parse_time_fields(input: &str) -> Result<(u32, u32), MeishikiError> {
    split_numbers::<2>(input, ':')
        .and_then(|[h, m]| Some((u32::try_from(h).ok()?, u32::try_from(m).ok()?)))
        .ok_or_else(|| parse_error("time", input, TIME_FORMAT))
}

/// Parse and validate a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, MeishikiError> {
    let (y, m, d) = parse_date_fields(input)?;
    Ok(BirthMoment::date_only(y, m, d)?.date())
}

/// Parse a birth date and optional time into a validated [`BirthMoment`].
pub fn parse_birth(date: &str, time: Option<&str>) -> Result<BirthMoment, MeishikiError> {
    let (y, m, d) = parse_date_fields(date)?;
    let moment = match time {
        Some(t) => {
            let (h, min) = parse_time_fields(t)?;
            BirthMoment::with_time(y, m, d, h, min)?
        }
        None => BirthMoment::date_only(y, m, d)?,
    };
    Ok(moment)
}
