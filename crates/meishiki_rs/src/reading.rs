//! Complete reading: chart plus every companion lookup, score and message.

use chrono::NaiveDate;
use meishiki_base::{
    ANNUAL_MESSAGES, Chart, DecadeConfig, Gosei, MajorArcana, Mansion, NineStar, Sephira,
    SunSign, Ziwei, birth_card, chart_for_birth, fortune_score, gosei, hour_slot,
    life_path_number, mansion_for_date, message_seed, nine_star_for_year, pick_message, sephira,
    sun_sign, ziwei,
};
use meishiki_time::BirthMoment;
use serde::Serialize;
use tracing::{debug, info};

/// Birth moment plus the name used to seed the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthProfile {
    pub moment: BirthMoment,
    pub name: String,
}

impl BirthProfile {
    pub fn new(moment: BirthMoment, name: impl Into<String>) -> Self {
        Self {
            moment,
            name: name.into(),
        }
    }

    /// Profile without a name.
    pub fn anonymous(moment: BirthMoment) -> Self {
        Self::new(moment, "")
    }
}

/// Configurable parameters for a reading.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingConfig {
    /// Decade cycle parameters.
    pub decade: DecadeConfig,
    /// Messages to pick from. Default: the three annual-theme messages.
    pub messages: Vec<String>,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            decade: DecadeConfig::default(),
            messages: ANNUAL_MESSAGES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Everything computed for one birth profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub profile: BirthProfile,
    pub chart: Chart,
    pub nine_star: NineStar,
    pub gosei: Gosei,
    pub life_path: u64,
    pub sephira: Sephira,
    pub tarot: MajorArcana,
    pub sun_sign: SunSign,
    pub ziwei: Ziwei,
    pub mansion: Mansion,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Reading {
    /// Plain-text block for copying:
    ///
    /// ```text
    /// 【鑑定結果】
    /// 生年月日: 1979/6/27
    /// 運勢スコア: 55
    /// 五行: {"木":1,"火":1,"土":3,"金":1,"水":0}
    /// ```
    pub fn summary_text(&self) -> String {
        let m = &self.profile.moment;
        let elements = serde_json::to_string(&self.chart.elements).unwrap_or_default();
        format!(
            "【鑑定結果】\n生年月日: {}/{}/{}\n運勢スコア: {}\n五行: {}",
            m.year(),
            m.month(),
            m.day(),
            self.score,
            elements
        )
    }
}

/// Compute a complete reading. `today` only affects the decade cycle.
pub fn reading(profile: &BirthProfile, today: NaiveDate, config: &ReadingConfig) -> Reading {
    let birth = &profile.moment;
    let (y, m, d) = (birth.year(), birth.month(), birth.day());

    let chart = chart_for_birth(birth, today, &config.decade);
    let nine_star = nine_star_for_year(chart.solar.sexagenary_year);
    let ziwei = ziwei(
        chart.pillars.year.branch,
        chart.pillars.month.branch,
        birth.hour().map(hour_slot),
    );
    let score = fortune_score(&chart.elements);

    let seed = message_seed(y, m, d, &profile.name);
    let messages: Vec<&str> = config.messages.iter().map(String::as_str).collect();
    let message = pick_message(&seed, &messages).map(str::to_string);
    debug!(%seed, score, "message selected");

    let reading = Reading {
        profile: profile.clone(),
        nine_star,
        gosei: gosei(y, m, d),
        life_path: life_path_number(y, m, d),
        sephira: sephira(y, m, d),
        tarot: birth_card(y, m, d),
        sun_sign: sun_sign(m, d),
        ziwei,
        mansion: mansion_for_date(y, m, d),
        score,
        message,
        chart,
    };
    info!(birth = %birth, score, "reading computed");
    reading
}
