mod logger;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use meishiki_base::{
    Chart, DecadeConfig, Element, chart_for_birth, day_pillar, gosei, honmei_star, mansion_for_date,
};
use meishiki_rs::{BirthProfile, Reading, ReadingConfig, parse_birth, parse_date, reading};
use meishiki_time::{
    BirthMoment, SolarTerm, is_calibrated, julian_day, julian_day_floor, julian_day_number,
    month_boundary, risshun, weekday_from_jdn,
};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "meishiki", about = "Sexagenary birth chart and companion readings")]
struct Cli {
    /// Log intermediate values (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars, element tally, void pair and decade cycle
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, JST); omit when unknown
        #[arg(long)]
        time: Option<String>,
        /// Date the decade cycle is evaluated at (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Chart plus every companion lookup, score and message
    Reading {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, JST); omit when unknown
        #[arg(long)]
        time: Option<String>,
        /// Name used to seed the message
        #[arg(long, default_value = "")]
        name: String,
        /// Date the decade cycle is evaluated at (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,
        /// Print JSON instead of text
        #[arg(long, conflicts_with = "summary")]
        json: bool,
        /// Print only the copyable summary block
        #[arg(long)]
        summary: bool,
    },
    /// Approximate 立春 of a year (JST)
    Risshun {
        /// Gregorian year
        year: i32,
    },
    /// Approximate jie boundary governing a civil month (JST)
    Boundary {
        /// Gregorian year
        year: i32,
        /// Civil month (1-12)
        month: u32,
    },
    /// Julian Date, Julian Day Number and day pillar of a date
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Nine-star ki natal star
    Kyusei {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, JST); matters only on the day of 立春
        #[arg(long)]
        time: Option<String>,
    },
    /// Five-star three-heart destiny number and type
    Gosei {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

const WEEKDAYS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

fn require_birth(date: &str, time: Option<&str>) -> BirthMoment {
    parse_birth(date, time).unwrap_or_else(|e| {
        eprintln!("Invalid birth input: {e}");
        std::process::exit(1);
    })
}

fn require_today(today: Option<&str>) -> NaiveDate {
    match today {
        Some(s) => parse_date(s).unwrap_or_else(|e| {
            eprintln!("Invalid --today: {e}");
            std::process::exit(1);
        }),
        None => Local::now().date_naive(),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn warn_if_uncalibrated(year: i32) {
    if !is_calibrated(year) {
        warn!(year, "outside the calibrated range; boundaries may be off by more than a day");
    }
}

fn element_names(elements: &[Element]) -> String {
    if elements.is_empty() {
        return "なし".to_string();
    }
    elements.iter().map(|e| e.name()).collect::<Vec<_>>().join("")
}

fn chart_lines(chart: &Chart) -> Vec<String> {
    let p = &chart.pillars;
    let mut lines = vec![
        format!("年柱: {} ({}年)", p.year, p.year.branch.animal()),
        format!("月柱: {}", p.month),
        format!("日柱: {}", p.day),
    ];
    match p.hour {
        Some(h) => lines.push(format!("時柱: {h}")),
        None => lines.push("時柱: (不明)".to_string()),
    }
    let elements: Vec<String> = chart
        .elements
        .iter()
        .map(|(e, n)| format!("{}{n}", e.name()))
        .collect();
    lines.push(format!("五行: {}", elements.join(" ")));
    lines.push(format!(
        "最多: {} / 欠如: {}",
        element_names(&chart.elements.dominant()),
        element_names(&chart.elements.missing())
    ));
    lines.push(format!("空亡: {}", chart.void));
    lines.push(format!("大運: {}", chart.decade));
    lines.push(format!("節入り: {}", chart.boundary_note));
    lines
}

fn print_chart(chart: &Chart) {
    for line in chart_lines(chart) {
        println!("{line}");
    }
}

fn print_reading(r: &Reading) {
    print_chart(&r.chart);
    println!("九星: {}", r.nine_star);
    println!("五星三心: {} (運命数 {})", r.gosei, r.gosei.destiny);
    println!("数秘術: {}", r.life_path);
    println!("カバラ: {}", r.sephira);
    println!("タロット: {}", r.tarot);
    println!("星座: {} ({})", r.sun_sign, r.sun_sign.element().name());
    match (r.ziwei.life_palace, r.ziwei.life_star) {
        (Some(palace), Some(star)) => println!(
            "紫微斗数: 身主 {} / 命宮 {} / 命主 {}",
            r.ziwei.body_star,
            palace.name(),
            star
        ),
        _ => println!("紫微斗数: 身主 {}", r.ziwei.body_star),
    }
    println!("二十八宿: {}", r.mansion);
    println!("運勢スコア: {}", r.score);
    if let Some(message) = &r.message {
        println!("{message}");
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Commands::Chart {
            date,
            time,
            today,
            json,
        } => {
            let birth = require_birth(&date, time.as_deref());
            let today = require_today(today.as_deref());
            debug!(%birth, %today, "chart");
            let chart = chart_for_birth(&birth, today, &DecadeConfig::default());
            if json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Reading {
            date,
            time,
            name,
            today,
            json,
            summary,
        } => {
            let birth = require_birth(&date, time.as_deref());
            let today = require_today(today.as_deref());
            let profile = BirthProfile::new(birth, name);
            let r = reading(&profile, today, &ReadingConfig::default());
            if json {
                print_json(&r);
            } else if summary {
                println!("{}", r.summary_text());
            } else {
                print_reading(&r);
            }
        }

        Commands::Risshun { year } => {
            warn_if_uncalibrated(year);
            println!(
                "{} {} {}",
                year,
                SolarTerm::Risshun.name(),
                risshun(year).format("%Y-%m-%d %H:%M")
            );
        }

        Commands::Boundary { year, month } => {
            if !(1..=12).contains(&month) {
                eprintln!("Invalid month: {month} (1-12)");
                std::process::exit(1);
            }
            warn_if_uncalibrated(year);
            let term = SolarTerm::for_month(month);
            println!(
                "{}-{:02} {} {}",
                year,
                month,
                term.name(),
                month_boundary(year, month).format("%Y-%m-%d %H:%M")
            );
        }

        Commands::Jd { date } => {
            let birth = require_birth(&date, None);
            let (y, m, d) = (birth.year(), birth.month(), birth.day());
            let jdn = julian_day_number(y, m, d);
            let weekday = WEEKDAYS[usize::from(weekday_from_jdn(jdn))];
            println!("JD (0h):  {:.1}", julian_day(y, m, d));
            println!("floor:    {}", julian_day_floor(y, m, d));
            println!("JDN:      {jdn} ({weekday})");
            println!("日柱:     {}", day_pillar(&birth));
            println!("二十八宿: {}", mansion_for_date(y, m, d));
        }

        Commands::Kyusei { date, time } => {
            let birth = require_birth(&date, time.as_deref());
            warn_if_uncalibrated(birth.year());
            println!("{}", honmei_star(&birth));
        }

        Commands::Gosei { date } => {
            let birth = require_birth(&date, None);
            let g = gosei(birth.year(), birth.month(), birth.day());
            println!("{g} (運命数 {})", g.destiny);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chart_with_time() {
        let cli = Cli::try_parse_from([
            "meishiki", "chart", "--date", "1990-08-15", "--time", "23:30", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { time, json, .. } => {
                assert_eq!(time.as_deref(), Some("23:30"));
                assert!(json);
            }
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["meishiki", "risshun", "2024", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn reading_json_conflicts_with_summary() {
        let r = Cli::try_parse_from([
            "meishiki", "reading", "--date", "1979-06-27", "--json", "--summary",
        ]);
        assert!(r.is_err());
    }

    #[test]
    fn chart_text_lists_animal_and_element_balance() {
        let birth = BirthMoment::date_only(1979, 6, 27).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 27).unwrap();
        let chart = chart_for_birth(&birth, today, &DecadeConfig::default());
        let lines = chart_lines(&chart);
        assert_eq!(lines[0], "年柱: 己未 (羊年)");
        assert_eq!(lines[3], "時柱: (不明)");
        assert_eq!(lines[4], "五行: 木1 火1 土3 金1 水0");
        assert_eq!(lines[5], "最多: 土 / 欠如: 水");
    }

    #[test]
    fn element_names_of_empty_list() {
        assert_eq!(element_names(&[]), "なし");
        assert_eq!(element_names(&[Element::Wood, Element::Fire]), "木火");
    }

    #[test]
    fn chart_requires_date() {
        assert!(Cli::try_parse_from(["meishiki", "chart"]).is_err());
    }
}
