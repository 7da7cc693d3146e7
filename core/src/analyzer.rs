use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::decode::decode_history;
use crate::models::MemberProfile;
use crate::series::reconstruct;
use crate::stats::{compute_stats, resolve_window};
use crate::types::Cfg;

/// JSON-grensesnittet verts-applikasjonen kaller i prosess.
///
/// Returnerer en JSON-respons som `Value`. Hvis payload ikke inneholder
/// noen målinger, antas det at medlemmet mangler registrert progresjon.
pub fn analyze_progress_json(
    payload: &Value,
    window_months: Option<u32>,
    today: &str,
    profile: &MemberProfile,
) -> Result<Value, String> {
    let today = NaiveDate::parse_from_str(today, "%Y-%m-%d")
        .map_err(|e| format!("ugyldig dato '{today}': {e}"))?;

    let history = decode_history("inline", payload).map_err(|e| e.to_string())?;
    if history.is_empty() {
        return Ok(json!({
            "ok": false,
            "reason": "no_samples"
        }));
    }

    let window = resolve_window(window_months, &Cfg::default());
    let rows = reconstruct(&history.metrics);
    let stats = compute_stats(&rows, window, today, profile);

    Ok(json!({
        "ok": true,
        "windowMonths": window.months(),
        "rows": rows,
        "stats": stats
    }))
}
