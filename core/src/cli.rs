use crate::stats::RoundTo;
use crate::types::{AlignedRow, ProgressStats};

pub fn print_progress_report(rows: &[AlignedRow], stats: &ProgressStats) {
    println!("--- Progress Report ---");
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => {
            println!("Periode: {} -> {} ({} rader)", first.date, last.date, rows.len());
        }
        _ => {
            println!("Ingen målinger registrert.");
            return;
        }
    }
    println!("Rader i vinduet: {}", stats.rows_in_window);

    if let Some(w) = stats.latest_weight {
        println!("Vekt nå: {:.1} kg (Δ {:+.1})", w.round_to(1), stats.weight_change);
    }
    if let Some(b) = stats.latest_bmi {
        println!("BMI nå: {:.1} (Δ {:+.2})", b, stats.bmi_change);
    }
    if let (Some(min), Some(max)) = (stats.weight_min, stats.weight_max) {
        println!("Vekt i vinduet: min {:.1} / max {:.1} kg", min, max);
    }
    if let Some(g) = stats.to_goal_kg {
        println!("Til målvekt: {:+.1} kg", g);
    }

    // Siste rad som enkel tabell
    if let Some(last) = rows.last() {
        for (kind, value) in &last.values {
            println!("  {:<18} {:>8.1} {}", kind.as_str(), value, kind.canonical_unit());
        }
    }
}
