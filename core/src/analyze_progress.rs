use chrono::{NaiveDate, Utc};

use crate::models::MemberProfile;
use crate::series::reconstruct;
use crate::stats::compute_stats;
use crate::storage;
use crate::store::ProgressSource;
use crate::types::{AlignedRow, MemberHistory, ProgressStats, WindowMonths};

#[derive(Clone, Copy)]
pub struct AnalyzeInputs<'a> {
    pub member_id: &'a str,
    /// Trailing vindu for delta-beregning (1/3/6/12 mnd)
    pub window: WindowMonths,
    /// "I dag" injiseres for deterministiske tester. None => dagens dato (UTC).
    pub today: Option<NaiveDate>,
    /// Progresjonskilde (prod: GymApiClient bak cache, test: StaticProgressSource)
    pub source: Option<&'a dyn ProgressSource>,
    /// Sti til lokal historikk-cache brukt som fallback når kilden svikter
    pub cache_path: Option<&'a str>,
    pub profile: &'a MemberProfile,
}

#[derive(Debug, Clone)]
pub struct AnalyzeOutputs {
    /// Dato-justert serie, stigende (tom hvis medlemmet mangler målinger)
    pub rows: Vec<AlignedRow>,
    pub stats: ProgressStats,
    pub total_samples: usize,
    /// Kilden som faktisk ble brukt: "source" | "disk" | "empty"
    pub source_used: &'static str,
}

/// Full progresjon-analyse for ett medlem: hent historikk, rekonstruer
/// serien, beregn vindus-statistikk.
pub fn analyze_progress(inputs: AnalyzeInputs) -> AnalyzeOutputs {
    let today = inputs.today.unwrap_or_else(|| Utc::now().date_naive());

    // 1️⃣ Prøv angitt kilde (API-klient bak cache i prod)
    let mut source_used = "source";
    let mut history = inputs
        .source
        .and_then(|s| s.fetch_history(inputs.member_id));

    // 2️⃣ Fallback til lokal disk-cache
    if history.is_none() {
        if let Some(path) = inputs.cache_path {
            match storage::load_history(path) {
                Ok(Some(h)) => {
                    source_used = "disk";
                    history = Some(h);
                }
                Ok(None) => {}
                Err(e) => log::warn!("kunne ikke lese historikk-cache: {e:#}"),
            }
        }
    }

    // 3️⃣ Siste fallback: tom historikk => tomme rader og null-deltaer
    let history = history.unwrap_or_else(|| {
        source_used = "empty";
        MemberHistory::new(inputs.member_id)
    });

    let rows = reconstruct(&history.metrics);
    let stats = compute_stats(&rows, inputs.window, today, inputs.profile);

    AnalyzeOutputs {
        rows,
        stats,
        total_samples: history.total_samples(),
        source_used,
    }
}
