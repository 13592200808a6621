//! Fortune score and deterministic annual message.

use crate::element::{Element, ElementTally};

/// Bounds of the fortune score.
pub const SCORE_MIN: u32 = 30;
pub const SCORE_MAX: u32 = 100;

/// Annual-theme messages selected by [`pick_message`].
pub const ANNUAL_MESSAGES: [&str; 3] = [
    "今年は「開拓」の年です。新しい一歩が大きな実りを生みます。",
    "「調和」が鍵となる年です。周囲との協力を惜しまないでください。",
    "「結実」の時期です。これまでの努力が形になります。",
];

/// Score = 50 + 5 per 木 symbol, clamped to [30, 100].
pub fn fortune_score(tally: &ElementTally) -> u32 {
    (50 + 5 * u32::from(tally.count(Element::Wood))).clamp(SCORE_MIN, SCORE_MAX)
}

/// Seed string for message selection: the sum of the date fields followed by the name.
pub fn message_seed(year: i32, month: u32, day: u32, name: &str) -> String {
    let sum = i64::from(year) + i64::from(month) + i64::from(day);
    format!("{sum}{name}")
}

/// Rolling hash over UTF-16 code units: `h = (h << 5) − h + unit`.
///
/// The shift operates on the low 32 bits of `h` (two's complement) while the
/// subtraction and addition do not wrap.
pub fn seed_hash(seed: &str) -> i64 {
    seed.encode_utf16().fold(0i64, |h, unit| {
        i64::from((h as i32).wrapping_shl(5)) - h + i64::from(unit)
    })
}

/// Deterministically pick one message for `seed`; `None` when `messages` is empty.
pub fn pick_message<'a>(seed: &str, messages: &[&'a str]) -> Option<&'a str> {
    if messages.is_empty() {
        return None;
    }
    let i = seed_hash(seed).unsigned_abs() % messages.len() as u64;
    messages.get(i as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_from_wood() {
        assert_eq!(fortune_score(&ElementTally::default()), 50);
        let t = ElementTally::from_elements([Element::Wood; 4]);
        assert_eq!(fortune_score(&t), 70);
        let t = ElementTally::from_elements([Element::Wood; 12]);
        assert_eq!(fortune_score(&t), 100);
    }

    #[test]
    fn seed_format() {
        assert_eq!(message_seed(1979, 6, 27, "太郎"), "2012太郎");
        assert_eq!(message_seed(2000, 1, 1, ""), "2002");
    }

    #[test]
    fn hash_of_short_strings() {
        assert_eq!(seed_hash(""), 0);
        // 'a' = 97
        assert_eq!(seed_hash("a"), 97);
        // 97·31 + 98
        assert_eq!(seed_hash("ab"), 3105);
        // "2002": ((50·31 + 48)·31 + 48)·31 + 50
        assert_eq!(seed_hash("2002"), 1_537_216);
    }

    #[test]
    fn pick_is_deterministic() {
        let seed = message_seed(1979, 6, 27, "太郎");
        let a = pick_message(&seed, &ANNUAL_MESSAGES);
        assert_eq!(a, pick_message(&seed, &ANNUAL_MESSAGES));
        assert!(a.is_some());
        // 1537216 % 3 = 1
        assert_eq!(
            pick_message("2002", &ANNUAL_MESSAGES),
            Some(ANNUAL_MESSAGES[1])
        );
    }

    #[test]
    fn empty_message_list() {
        assert_eq!(pick_message("x", &[]), None);
    }
}
