use std::collections::BTreeMap;

use chrono::NaiveDate;
use gymgraph_core::{
    compute_stats, reconstruct, resolve_window, Cfg, MemberProfile, MetricKind, MetricSample,
    WindowMonths,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample(value: f64, date: &str) -> MetricSample {
    MetricSample {
        value,
        unit: None,
        date: d(date),
    }
}

#[test]
fn vektdelta_er_endepunkt_differansen_i_vinduet() {
    // Scenario: tre vektmålinger, 3 mnd vindu, "i dag" = 15. mars
    let mut metrics = BTreeMap::new();
    metrics.insert(
        MetricKind::Weight,
        vec![
            sample(80.0, "2024-01-01"),
            sample(78.0, "2024-02-01"),
            sample(76.0, "2024-03-01"),
        ],
    );

    let rows = reconstruct(&metrics);
    let stats = compute_stats(
        &rows,
        WindowMonths::Three,
        d("2024-03-15"),
        &MemberProfile::default(),
    );

    assert_eq!(stats.rows_in_window, 3);
    assert!((stats.weight_change - (-4.0)).abs() < 1e-9, "76 - 80 = -4");
    assert_eq!(stats.latest_weight, Some(76.0));
    assert_eq!(stats.weight_min, Some(76.0));
    assert_eq!(stats.weight_max, Some(80.0));
}

#[test]
fn en_rad_i_vinduet_gir_null_deltaer() {
    // Policy, ikke feil: < 2 rader => alle deltaer 0
    let mut metrics = BTreeMap::new();
    metrics.insert(MetricKind::Weight, vec![sample(80.0, "2024-03-01")]);

    let rows = reconstruct(&metrics);
    let stats = compute_stats(
        &rows,
        WindowMonths::One,
        d("2024-03-15"),
        &MemberProfile::default(),
    );

    assert_eq!(stats.rows_in_window, 1);
    assert_eq!(stats.weight_change, 0.0);
    assert_eq!(stats.bmi_change, 0.0);
    // Siste kjente verdi settes likevel
    assert_eq!(stats.latest_weight, Some(80.0));
}

#[test]
fn vinduet_flytter_endepunktene() {
    // Deltaene beregnes fra vinduets egne endepunkter, ikke de globale
    let mut metrics = BTreeMap::new();
    metrics.insert(
        MetricKind::Weight,
        vec![
            sample(90.0, "2023-01-01"), // utenfor 3 mnd-vinduet
            sample(80.0, "2024-01-10"),
            sample(78.0, "2024-03-01"),
        ],
    );

    let rows = reconstruct(&metrics);
    let stats = compute_stats(
        &rows,
        WindowMonths::Three,
        d("2024-03-15"),
        &MemberProfile::default(),
    );

    assert_eq!(stats.rows_in_window, 2);
    assert!((stats.weight_change - (-2.0)).abs() < 1e-9, "78 - 80, ikke 78 - 90");
}

#[test]
fn metrikk_som_mangler_i_et_endepunkt_gir_null() {
    // Fettprosenten dukker først opp i siste rad => delta 0
    let mut metrics = BTreeMap::new();
    metrics.insert(
        MetricKind::Weight,
        vec![sample(80.0, "2024-02-01"), sample(78.0, "2024-03-01")],
    );
    metrics.insert(MetricKind::BodyFat, vec![sample(21.0, "2024-03-01")]);

    let rows = reconstruct(&metrics);
    let stats = compute_stats(
        &rows,
        WindowMonths::Three,
        d("2024-03-15"),
        &MemberProfile::default(),
    );

    assert_eq!(stats.body_fat_change, 0.0);
    assert!((stats.weight_change - (-2.0)).abs() < 1e-9);
}

#[test]
fn bmi_bruker_profilhoyde_som_fallback() {
    let mut metrics = BTreeMap::new();
    metrics.insert(
        MetricKind::Weight,
        vec![sample(100.0, "2024-01-01"), sample(81.0, "2024-03-01")],
    );

    let profile = MemberProfile {
        height_cm: Some(180.0),
        goal_weight_kg: Some(78.0),
        ..Default::default()
    };

    let rows = reconstruct(&metrics);
    let stats = compute_stats(&rows, WindowMonths::Three, d("2024-03-15"), &profile);

    // BMI: 100/1.8² = 30.86, 81/1.8² = 25.0 => delta -5.86
    assert!((stats.bmi_change - (-5.86)).abs() < 0.01);
    assert_eq!(stats.latest_bmi, Some(25.0));
    // Målavstand: 81 - 78 = +3 (over mål)
    assert_eq!(stats.to_goal_kg, Some(3.0));
}

#[test]
fn bmi_delta_null_uten_hoyde() {
    let mut metrics = BTreeMap::new();
    metrics.insert(
        MetricKind::Weight,
        vec![sample(90.0, "2024-01-01"), sample(85.0, "2024-03-01")],
    );

    let rows = reconstruct(&metrics);
    let stats = compute_stats(
        &rows,
        WindowMonths::Three,
        d("2024-03-15"),
        &MemberProfile::default(),
    );

    assert_eq!(stats.bmi_change, 0.0);
    assert_eq!(stats.latest_bmi, None);
    assert_eq!(stats.to_goal_kg, None, "ingen målvekt registrert");
}

#[test]
fn resolve_window_faller_tilbake_ved_ugyldig_input() {
    let cfg = Cfg::default();
    assert_eq!(resolve_window(Some(6), &cfg), WindowMonths::Six);
    assert_eq!(resolve_window(Some(5), &cfg), WindowMonths::Three, "5 er ikke gyldig vindu");
    assert_eq!(resolve_window(None, &cfg), WindowMonths::Three);

    let cfg = Cfg {
        default_window_months: Some(12),
        ..Default::default()
    };
    assert_eq!(resolve_window(None, &cfg), WindowMonths::Twelve);
}
