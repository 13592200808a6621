//! Complete sexagenary chart: pillars, element tally, void pair, decade cycle.

use chrono::NaiveDate;
use meishiki_time::{BirthMoment, CALIBRATED_YEARS, SolarTerm, is_calibrated};
use serde::Serialize;
use tracing::{debug, warn};

use crate::decade::{DecadeConfig, DecadeCycle, decade_cycle};
use crate::element::ElementTally;
use crate::pillars::{FourPillars, SolarPosition, four_pillars_at, solar_position};
use crate::void::{VoidPair, void_pair};

/// Output of the calendar engine for one birth moment.
///
/// Serializes as
/// `{year, month, day, hour?, elements, void, decade, boundaryNote}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    #[serde(flatten)]
    pub pillars: FourPillars,
    pub elements: ElementTally,
    pub void: VoidPair,
    pub decade: DecadeCycle,
    pub boundary_note: String,
    #[serde(skip)]
    pub solar: SolarPosition,
}

/// Derive the chart of `birth`. `today` only affects the decade cycle.
pub fn chart_for_birth(birth: &BirthMoment, today: NaiveDate, config: &DecadeConfig) -> Chart {
    if !is_calibrated(birth.year()) {
        warn!(
            year = birth.year(),
            "solar-term boundaries are approximate outside {}-{}",
            CALIBRATED_YEARS.start(),
            CALIBRATED_YEARS.end()
        );
    }

    let solar = solar_position(birth);
    let pillars = four_pillars_at(birth, &solar);
    let elements = pillars.element_tally();
    let void = void_pair(pillars.day);
    let decade = decade_cycle(birth, pillars.year, today, config);
    debug!(
        %birth,
        sexagenary_year = solar.sexagenary_year,
        solar_month = solar.solar_month,
        day = %pillars.day,
        "chart derived"
    );

    Chart {
        pillars,
        elements,
        void,
        decade,
        boundary_note: boundary_note(birth, &solar),
        solar,
    }
}

/// Human-readable account of the boundaries that decided the year and month.
pub fn boundary_note(birth: &BirthMoment, solar: &SolarPosition) -> String {
    let fmt = "%Y-%m-%d %H:%M";
    let term = SolarTerm::for_month(birth.month());
    let mut parts = vec![format!("立春 {}", solar.risshun.format(fmt))];
    if term != SolarTerm::Risshun {
        parts.push(format!("{} {}", term.name(), solar.month_boundary.format(fmt)));
    }
    if solar.year_shifted {
        parts.push("立春前の生まれのため年柱は前年".to_string());
    }
    if solar.month_shifted {
        parts.push(format!("{}前の生まれのため月柱は前月", term.name()));
    }
    if !birth.has_time() {
        parts.push("出生時刻不明のため正午で判定".to_string());
    }
    parts.push("節入り時刻は概算 (誤差±1日)".to_string());
    parts.join("。")
}
