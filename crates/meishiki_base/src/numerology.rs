//! Numerology (数秘術) life-path number.

use tracing::debug;

use crate::util::digit_sum;

/// Master numbers left unreduced.
pub const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];

/// Life-path number: every digit of `YYYYMMDD` summed, then reduced to one
/// digit unless a master number (11, 22, 33) appears on the way.
pub fn life_path_number(year: i32, month: u32, day: u32) -> u64 {
    let mut n = digit_sum(u64::from(year.unsigned_abs()))
        + digit_sum(u64::from(month))
        + digit_sum(u64::from(day));
    while n > 9 && !MASTER_NUMBERS.contains(&n) {
        n = digit_sum(n);
    }
    debug!(year, month, day, life_path = n, "numerology");
    n
}
