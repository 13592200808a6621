//! Golden values for the companion lookups.

use meishiki_base::{
    Branch, GoseiType, Metal, Sephira, birth_card, gosei, honmei_star, life_path_number,
    mansion_for_date, nine_star_for_year, sephira, sun_sign, ziwei,
};
use meishiki_time::{BirthMoment, julian_day_number, weekday_from_jdn};

#[test]
fn gosei_worked_example() {
    let g = gosei(1979, 6, 27);
    assert_eq!(g.destiny, 9);
    assert_eq!(g.kind, GoseiType::Compass);
    assert_eq!(g.metal, Metal::Silver);
    assert_eq!(g.label(), "銀の羅針盤");
}

#[test]
fn gosei_other_types() {
    // base 40, add 29 → 9, +21 → 30
    assert_eq!(gosei(2000, 1, 21).label(), "金の鳳凰");
    // base 40, add 0 → 40, +20 → 0
    assert_eq!(gosei(2000, 2, 20).label(), "金のイルカ");
    // base 30, add 5 → 35, +10 → 45
    assert_eq!(gosei(1990, 12, 10).label(), "金のカメレオン");
}

#[test]
fn nine_star_scenarios() {
    assert_eq!(nine_star_for_year(2000).name(), "九紫火星");
    assert_eq!(nine_star_for_year(2024).name(), "三碧木星");
    let b = BirthMoment::date_only(2000, 6, 1).unwrap();
    assert_eq!(honmei_star(&b).name(), "九紫火星");
    // still 1999 before 立春
    let b = BirthMoment::date_only(2000, 1, 15).unwrap();
    assert_eq!(honmei_star(&b).name(), "一白水星");
}

#[test]
fn numeric_lookups_1979_06_27() {
    assert_eq!(life_path_number(1979, 6, 27), 5);
    assert_eq!(sephira(1979, 6, 27), Sephira::Geburah);
    assert_eq!(birth_card(1979, 6, 27).name(), "法王");
}

#[test]
fn sun_signs() {
    assert_eq!(sun_sign(6, 27).name(), "蟹座");
    assert_eq!(sun_sign(1, 1).name(), "山羊座");
    assert_eq!(sun_sign(12, 25).name(), "山羊座");
    assert_eq!(sun_sign(2, 19).name(), "魚座");
}

#[test]
fn ziwei_from_pillars() {
    // 己未 year, 午 month, 辰 hour (slot 4) → palace 寅 → 禄存
    let z = ziwei(Branch::Wei, Branch::Wu, Some(4));
    assert_eq!(z.body_star.name(), "天相");
    assert_eq!(z.life_palace, Some(Branch::Yin));
    assert_eq!(z.life_star.map(|s| s.name()), Some("禄存"));
}

#[test]
fn mansion_weekday_alignment() {
    for day in 1..=28 {
        let m = mansion_for_date(2024, 2, day);
        if ["角", "斗", "奎", "井"].contains(&m.name()) {
            let jdn = julian_day_number(2024, 2, day);
            assert_eq!(weekday_from_jdn(jdn), 3, "{m} on 2024-02-{day:02}");
        }
    }
}
