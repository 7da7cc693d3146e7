use chrono::NaiveDate;
use ordered_float::OrderedFloat;

use crate::models::MemberProfile;
use crate::types::{AlignedRow, Cfg, MetricKind, ProgressStats, WindowMonths};
use crate::window::filter_window;

// --- RoundTo trait (offentlig, brukt av cli.rs og tester) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 {
            return self.round();
        }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Differanse med vakt: begge endepunkt må finnes, ellers 0.
fn delta(first: Option<f64>, last: Option<f64>) -> f64 {
    match (first, last) {
        (Some(a), Some(b)) => b - a,
        _ => 0.0,
    }
}

/// BMI = vekt (kg) / høyde (m)². Høyden tas fra radens carry-forward-verdi,
/// ellers fra profilen.
fn bmi_at(row: &AlignedRow, profile: &MemberProfile) -> Option<f64> {
    let weight = row.get(MetricKind::Weight)?;
    let height_cm = row.get(MetricKind::Height).or(profile.height_cm)?;
    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight / (height_m * height_m))
}

/// Velg vindu: forespurt hvis gyldig (1/3/6/12), ellers cfg-default, ellers 3.
pub fn resolve_window(requested: Option<u32>, cfg: &Cfg) -> WindowMonths {
    if let Some(m) = requested {
        match WindowMonths::from_months(m) {
            Some(w) => return w,
            None => log::warn!("ugyldig vindu {} mnd, faller tilbake til default", m),
        }
    }
    cfg.default_window_months
        .and_then(WindowMonths::from_months)
        .unwrap_or(WindowMonths::Three)
}

/// Avledet statistikk for vinduet [today - window, today].
///
/// Deltaer er rå endepunkt-differanser mellom første og siste rad i vinduet.
/// Færre enn 2 rader gir alle deltaer 0 (policy, ikke feil). Ingen glatting,
/// regresjon eller outlier-fjerning.
pub fn compute_stats(
    rows: &[AlignedRow],
    window: WindowMonths,
    today: NaiveDate,
    profile: &MemberProfile,
) -> ProgressStats {
    let in_window = filter_window(rows, window, today);

    let mut stats = ProgressStats {
        rows_in_window: in_window.len(),
        ..Default::default()
    };

    // Siste kjente verdier og vindu-ekstremer settes uavhengig av delta-policyen
    if let Some(last) = in_window.last() {
        stats.latest_weight = last.get(MetricKind::Weight);
        stats.latest_bmi = bmi_at(last, profile).map(|b| b.round_to(1));
    }
    stats.weight_min = in_window
        .iter()
        .filter_map(|r| r.get(MetricKind::Weight))
        .min_by_key(|w| OrderedFloat(*w));
    stats.weight_max = in_window
        .iter()
        .filter_map(|r| r.get(MetricKind::Weight))
        .max_by_key(|w| OrderedFloat(*w));

    // Målavstand: positiv = over mål
    stats.to_goal_kg = match (stats.latest_weight, profile.goal_weight_kg) {
        (Some(w), Some(goal)) => Some((w - goal).round_to(1)),
        _ => None,
    };

    if in_window.len() < 2 {
        return stats;
    }

    let first = &in_window[0];
    let last = &in_window[in_window.len() - 1];
    let change = |kind: MetricKind| delta(first.get(kind), last.get(kind)).round_to(2);

    stats.weight_change = change(MetricKind::Weight);
    stats.height_change = change(MetricKind::Height);
    stats.body_fat_change = change(MetricKind::BodyFat);
    stats.muscle_mass_change = change(MetricKind::MuscleMass);
    stats.chest_change = change(MetricKind::Chest);
    stats.waist_change = change(MetricKind::Waist);
    stats.arm_change = change(MetricKind::Arm);
    stats.leg_change = change(MetricKind::Leg);
    stats.bmi_change = delta(bmi_at(first, profile), bmi_at(last, profile)).round_to(2);

    stats
}
