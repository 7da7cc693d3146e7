use anyhow::{Context, Result};
use std::path::Path;

use crate::types::MemberHistory;

/// Leser inn mellomlagret historikk fra disk (JSON).
/// Hvis filen ikke finnes, returneres Ok(None) – det er ikke en feil.
pub fn load_history(path: &str) -> Result<Option<MemberHistory>> {
    if !Path::new(path).exists() {
        println!("⚠️ Fant ingen historikk-cache på {path}");
        return Ok(None);
    }
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("kunne ikke lese {path}"))?;
    let history: MemberHistory =
        serde_json::from_str(&contents).with_context(|| format!("ugyldig JSON i {path}"))?;
    println!(
        "📂 Historikk lastet fra {} ({} målinger)",
        path,
        history.total_samples()
    );
    Ok(Some(history))
}

/// Lagrer historikk til disk som JSON (pretty-print).
pub fn save_history(history: &MemberHistory, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(history)?;
    std::fs::write(path, json).with_context(|| format!("kunne ikke skrive {path}"))?;
    println!(
        "✅ Historikk lagret til {} ({} målinger)",
        path,
        history.total_samples()
    );
    Ok(())
}
