//! End-to-end tests from textual input to a serialized reading.

use chrono::NaiveDate;
use meishiki_rs::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 27).unwrap()
}

fn read(date: &str, time: Option<&str>, name: &str) -> Reading {
    let moment = parse_birth(date, time).unwrap();
    reading(&BirthProfile::new(moment, name), today(), &ReadingConfig::default())
}

#[test]
fn worked_example_1979_06_27() {
    let r = read("1979-06-27", None, "");
    assert_eq!(r.chart.pillars.year.to_string(), "己未");
    assert_eq!(r.chart.pillars.month.to_string(), "庚午");
    assert_eq!(r.gosei.destiny, 9);
    assert_eq!(r.gosei.label(), "銀の羅針盤");
    assert_eq!(r.nine_star.name(), "三碧木星");
    assert_eq!(r.life_path, 5);
    assert_eq!(r.sephira, Sephira::Geburah);
    assert_eq!(r.tarot.name(), "法王");
    assert_eq!(r.sun_sign.name(), "蟹座");
    assert_eq!(r.ziwei.body_star.name(), "天相");
    assert!(r.message.is_some());
}

#[test]
fn nine_star_scenarios() {
    assert_eq!(read("2000-06-01", None, "").nine_star.name(), "九紫火星");
    assert_eq!(read("2024-06-01", None, "").nine_star.name(), "三碧木星");
}

#[test]
fn message_depends_on_name() {
    let a = read("1979-06-27", None, "");
    let b = read("1979-06-27", None, "");
    assert_eq!(a.message, b.message);

    // seed "2012": ((50·31 + 48)·31 + 49)·31 + 50 = 1537247 → 1537247 % 3 = 2
    assert_eq!(
        a.message.as_deref(),
        Some("「結実」の時期です。これまでの努力が形になります。")
    );
}

#[test]
fn reading_serializes() {
    let r = read("1990-08-15", Some("23:30"), "花子");
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["chart"]["day"], "癸丑");
    assert_eq!(v["chart"]["hour"], "壬子");
    assert_eq!(v["profile"]["name"], "花子");
    assert_eq!(v["gosei"]["label"], r.gosei.label());
    assert_eq!(v["nineStar"], r.nine_star.name());
    assert_eq!(v["sunSign"], "獅子座");
    assert!(v["ziwei"]["lifePalace"].is_string());
    assert_eq!(v["score"], r.score);
}

#[test]
fn invalid_input_is_rejected() {
    assert!(matches!(
        parse_birth("2023-02-30", None),
        Err(MeishikiError::Time(TimeError::InvalidDate { .. }))
    ));
    assert!(matches!(
        parse_birth("2023-02-28", Some("12:60")),
        Err(MeishikiError::Time(TimeError::InvalidTime { minute: 60, .. }))
    ));
}

#[test]
fn identical_input_identical_output() {
    let a = serde_json::to_string(&read("1985-11-03", Some("04:15"), "x")).unwrap();
    let b = serde_json::to_string(&read("1985-11-03", Some("04:15"), "x")).unwrap();
    assert_eq!(a, b);
}
