//! Digit-sum helpers shared by the numeric lookups.

/// Sum of the decimal digits of `n`.
pub fn digit_sum(n: u64) -> u64 {
    let mut n = n;
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Replace `n` by its digit sum until it is at most `limit`.
///
/// `limit` must be at least 9, otherwise single digits above it never shrink.
pub fn reduce_to(n: u64, limit: u64) -> u64 {
    let mut n = n;
    while n > limit.max(9) {
        n = digit_sum(n);
    }
    n
}

/// Digit root of the decimal digits of `year`, in 1..=9 (0 maps to 9).
pub fn year_digit_root(year: i32) -> u64 {
    match reduce_to(u64::from(year.unsigned_abs()), 9) {
        0 => 9,
        d => d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1979), 26);
        assert_eq!(digit_sum(19790627), 41);
    }

    #[test]
    fn reduce_stops_at_limit() {
        assert_eq!(reduce_to(2012, 9), 5);
        assert_eq!(reduce_to(2012, 22), 5);
        assert_eq!(reduce_to(1999, 22), 10);
        assert_eq!(reduce_to(1999, 9), 1);
        assert_eq!(reduce_to(2035, 22), 10);
        assert_eq!(reduce_to(22, 22), 22);
        assert_eq!(reduce_to(7, 22), 7);
    }

    #[test]
    fn year_roots() {
        assert_eq!(year_digit_root(2000), 2);
        assert_eq!(year_digit_root(2024), 8);
        assert_eq!(year_digit_root(1979), 8);
        assert_eq!(year_digit_root(2007), 9);
        assert_eq!(year_digit_root(0), 9);
    }
}
