// core/src/decode.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::de::IntoDeserializer; // for Value::into_deserializer()
use serde::Deserialize;
use serde_json::Value;
use serde_path_to_error as spte;
use thiserror::Error;

use crate::telemetry;
use crate::types::{MemberHistory, MetricKind, MetricSample};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("progresjon-payload er ikke et JSON-objekt")]
    NotAnObject,
    #[error("ugyldig payload ved {path}: {message}")]
    Shape { path: String, message: String },
}

// ──────────────────────────────────────────────────────────────────────────────
// TOLERANT INNGANG: verdier kan komme som tall eller tallstreng, dato som
// "YYYY-MM-DD" eller full ISO-8601. Feltnavn-drift dekkes med aliaser.
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
struct SampleIn {
    #[serde(default, alias = "val")]
    value: Value,
    #[serde(default)]
    unit: Option<String>,
    #[serde(
        default,
        alias = "recordedAt",
        alias = "recorded_at",
        alias = "loggedAt"
    )]
    date: Value,
}

// Backend v2 pakker mappingen inn under "metrics"/"progress"
#[derive(Debug, Deserialize)]
struct WrappedIn {
    #[serde(alias = "progress")]
    metrics: BTreeMap<String, Vec<SampleIn>>,
}

// Prøv wrapped først, deretter bare mappingen (legacy)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HistoryIn {
    Wrapped(WrappedIn),
    Bare(BTreeMap<String, Vec<SampleIn>>),
}

fn number_of(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn date_of(v: &Value) -> Option<NaiveDate> {
    let s = v.as_str()?.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    // Siste utvei: datodelen av en ISO-aktig streng
    let head = s.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Normaliser til kanonisk enhet. Imperial-enheter regnes om; ukjente
/// enheter lar verdien stå som den er.
fn normalize(value: f64, unit: Option<&str>) -> f64 {
    let u = unit.unwrap_or("").trim().to_lowercase();
    match u.as_str() {
        "lb" | "lbs" | "pound" | "pounds" => value * 0.453_592_37,
        "in" | "inch" | "inches" => value * 2.54,
        _ => value,
    }
}

fn to_sample(kind: MetricKind, s: &SampleIn) -> Option<MetricSample> {
    let raw = number_of(&s.value)?;
    if !raw.is_finite() {
        return None;
    }
    let date = date_of(&s.date)?;
    let value = normalize(raw, s.unit.as_deref());
    Some(MetricSample {
        value,
        unit: Some(kind.canonical_unit().to_string()),
        date,
    })
}

/// Dekoder backendens løst formede progresjon-payload til typet historikk.
///
/// Toppnivå-feil (ikke et objekt, feil form) er typede feil med JSON-sti.
/// Per måling er dekodingen best-effort: ukjente metrikknavn, uparsbare
/// datoer og ikke-numeriske/ikke-finitte verdier hoppes over med logging og
/// telling – én råtten måling velter ikke hele rekonstruksjonen.
pub fn decode_history(member_id: &str, payload: &Value) -> Result<MemberHistory, DecodeError> {
    if !payload.is_object() {
        return Err(DecodeError::NotAnObject);
    }

    let parsed: HistoryIn =
        spte::deserialize(payload.clone().into_deserializer()).map_err(|e| DecodeError::Shape {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })?;

    let raw = match parsed {
        HistoryIn::Wrapped(w) => w.metrics,
        HistoryIn::Bare(m) => m,
    };

    let mut history = MemberHistory::new(member_id);
    for (name, samples) in raw {
        let Some(kind) = MetricKind::parse(&name) else {
            log::warn!(
                "ukjent metrikk '{}' for {} hoppes over ({} målinger)",
                name,
                member_id,
                samples.len()
            );
            telemetry::decode_skipped_total().inc_by(samples.len() as u64);
            continue;
        };
        for s in &samples {
            match to_sample(kind, s) {
                Some(sample) => history.push(kind, sample),
                None => {
                    log::warn!(
                        "hopper over ugyldig {}-måling for {}: {:?}",
                        kind.as_str(),
                        member_id,
                        s
                    );
                    telemetry::decode_skipped_total().inc();
                }
            }
        }
    }
    Ok(history)
}
