use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kroppsmetrikker vi sporer per medlem. Serde-navnene matcher backendens
/// camelCase-felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    #[serde(rename = "weight")]
    Weight,
    #[serde(rename = "height")]
    Height,
    #[serde(rename = "bodyFat")]
    BodyFat,
    #[serde(rename = "muscleMass")]
    MuscleMass,
    #[serde(rename = "chestMeasurement")]
    Chest,
    #[serde(rename = "waistMeasurement")]
    Waist,
    #[serde(rename = "armMeasurement")]
    Arm,
    #[serde(rename = "legMeasurement")]
    Leg,
}

impl MetricKind {
    pub const ALL: [MetricKind; 8] = [
        MetricKind::Weight,
        MetricKind::Height,
        MetricKind::BodyFat,
        MetricKind::MuscleMass,
        MetricKind::Chest,
        MetricKind::Waist,
        MetricKind::Arm,
        MetricKind::Leg,
    ];

    /// Tolerant navne-parsing – aksepterer camelCase, snake_case og
    /// kortformene uten "Measurement"-suffiks.
    pub fn parse(name: &str) -> Option<MetricKind> {
        match name.trim().to_lowercase().as_str() {
            "weight" | "bodyweight" => Some(MetricKind::Weight),
            "height" => Some(MetricKind::Height),
            "bodyfat" | "body_fat" | "fat" => Some(MetricKind::BodyFat),
            "musclemass" | "muscle_mass" | "muscle" => Some(MetricKind::MuscleMass),
            "chestmeasurement" | "chest_measurement" | "chest" => Some(MetricKind::Chest),
            "waistmeasurement" | "waist_measurement" | "waist" => Some(MetricKind::Waist),
            "armmeasurement" | "arm_measurement" | "arm" => Some(MetricKind::Arm),
            "legmeasurement" | "leg_measurement" | "leg" => Some(MetricKind::Leg),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Weight => "weight",
            MetricKind::Height => "height",
            MetricKind::BodyFat => "bodyFat",
            MetricKind::MuscleMass => "muscleMass",
            MetricKind::Chest => "chestMeasurement",
            MetricKind::Waist => "waistMeasurement",
            MetricKind::Arm => "armMeasurement",
            MetricKind::Leg => "legMeasurement",
        }
    }

    /// Kanonisk enhet etter dekoding (lbs/in normaliseres i decode.rs).
    pub fn canonical_unit(self) -> &'static str {
        match self {
            MetricKind::Weight | MetricKind::MuscleMass => "kg",
            MetricKind::Height
            | MetricKind::Chest
            | MetricKind::Waist
            | MetricKind::Arm
            | MetricKind::Leg => "cm",
            MetricKind::BodyFat => "%",
        }
    }
}

/// Én registrert observasjon av en metrikk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub value: f64,
    pub unit: Option<String>,
    pub date: NaiveDate,
}

/// All registrert progresjon for ett medlem. Append-only: opprettes implisitt
/// ved første måling og vokser etter hvert som nye målinger logges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberHistory {
    pub member_id: String,
    pub metrics: BTreeMap<MetricKind, Vec<MetricSample>>,
}

impl MemberHistory {
    pub fn new(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            metrics: BTreeMap::new(),
        }
    }

    pub fn push(&mut self, kind: MetricKind, sample: MetricSample) {
        self.metrics.entry(kind).or_default().push(sample);
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.values().all(|v| v.is_empty())
    }

    pub fn total_samples(&self) -> usize {
        self.metrics.values().map(|v| v.len()).sum()
    }
}

/// Én rekonstruert rad: alle metrikkers carry-forward-verdi per dato.
/// Metrikker uten måling på eller før datoen er fraværende (aldri 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    pub date: NaiveDate,
    pub values: BTreeMap<MetricKind, f64>,
}

impl AlignedRow {
    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        self.values.get(&kind).copied()
    }
}

/// Trailing vindu for delta-beregning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMonths {
    One,
    Three,
    Six,
    Twelve,
}

impl WindowMonths {
    pub fn from_months(months: u32) -> Option<WindowMonths> {
        match months {
            1 => Some(WindowMonths::One),
            3 => Some(WindowMonths::Three),
            6 => Some(WindowMonths::Six),
            12 => Some(WindowMonths::Twelve),
            _ => None,
        }
    }

    pub fn months(self) -> u32 {
        match self {
            WindowMonths::One => 1,
            WindowMonths::Three => 3,
            WindowMonths::Six => 6,
            WindowMonths::Twelve => 12,
        }
    }
}

/// Valgfri applikasjonskonfig fra verten.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cfg {
    pub default_window_months: Option<u32>,
    pub base_url: Option<String>,
    pub cache_path: Option<String>,
}

/// Avledet statistikk for valgt vindu. Deltaer er rå endepunkt-differanser
/// (siste minus første rad i vinduet); manglende endepunkt gir 0.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub weight_change: f64,
    pub height_change: f64,
    pub body_fat_change: f64,
    pub muscle_mass_change: f64,
    pub chest_change: f64,
    pub waist_change: f64,
    pub arm_change: f64,
    pub leg_change: f64,
    pub bmi_change: f64,

    pub weight_min: Option<f64>,
    pub weight_max: Option<f64>,
    pub latest_weight: Option<f64>,
    pub latest_bmi: Option<f64>,
    /// Avstand til målvekt (kg), positiv = over mål. None uten målvekt/vekt.
    pub to_goal_kg: Option<f64>,

    pub rows_in_window: usize,
}
