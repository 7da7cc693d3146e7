use chrono::NaiveDate;
use gymgraph_core::{load_history, save_history, MemberHistory, MetricKind, MetricSample};
use std::fs;

#[test]
fn test_save_and_load_history() {
    let path = "tests/tmp_history.json";

    // Sørg for ren start (slett hvis filen finnes)
    let _ = fs::remove_file(path);

    let mut history = MemberHistory::new("m-77");
    history.push(
        MetricKind::Weight,
        MetricSample {
            value: 82.5,
            unit: Some("kg".into()),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        },
    );
    history.push(
        MetricKind::Chest,
        MetricSample {
            value: 101.0,
            unit: Some("cm".into()),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        },
    );

    // Save
    save_history(&history, path).expect("save_history failed");

    // Load
    let loaded = load_history(path)
        .expect("load_history failed")
        .expect("filen skal finnes");

    assert_eq!(loaded.member_id, "m-77");
    assert_eq!(loaded.total_samples(), 2);
    assert_eq!(loaded.metrics[&MetricKind::Weight][0].value, 82.5);
    assert_eq!(
        loaded.metrics[&MetricKind::Chest][0].unit.as_deref(),
        Some("cm")
    );

    // Clean up
    let _ = fs::remove_file(path);
}

#[test]
fn manglende_fil_er_ikke_feil() {
    let loaded = load_history("tests/finnes_ikke.json").expect("skal ikke feile");
    assert!(loaded.is_none());
}
