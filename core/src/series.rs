use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::types::{AlignedRow, MetricKind, MetricSample};

/// Fremover-markør per metrikk: peker inn i den sorterte måling-listen og
/// husker siste passerte verdi.
struct Cursor<'a> {
    kind: MetricKind,
    samples: Vec<&'a MetricSample>,
    idx: usize,
    last: Option<f64>,
}

/// Rekonstruerer en tett, dato-justert serie fra spredte målinger.
///
/// Radene defineres av unionen av alle datoer på tvers av metrikkene – ikke
/// av noen enkelt metrikks datoliste. Per rad bærer hver metrikk frem verdien
/// fra sin siste måling med dato <= radens dato; finnes ingen slik måling er
/// metrikken fraværende i raden (aldri 0, aldri interpolert).
///
/// Markørene beveger seg kun fremover, så kostnaden er
/// O(antall målinger + antall datoer) – ikke kvadratisk.
pub fn reconstruct(metrics: &BTreeMap<MetricKind, Vec<MetricSample>>) -> Vec<AlignedRow> {
    // 1️⃣ Union av alle datoer, stigende – fastlegger radene
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    for samples in metrics.values() {
        for s in samples {
            dates.insert(s.date);
        }
    }
    if dates.is_empty() {
        return Vec::new();
    }

    // 2️⃣ Stabil sortering per metrikk. Lik dato beholder innsettingsrekkefølge,
    //    så den sist innsatte målingen vinner når markøren passerer begge.
    let mut cursors: Vec<Cursor> = Vec::with_capacity(metrics.len());
    for (kind, samples) in metrics {
        if samples.is_empty() {
            continue;
        }
        let mut sorted: Vec<&MetricSample> = samples.iter().collect();
        sorted.sort_by_key(|s| s.date);
        cursors.push(Cursor {
            kind: *kind,
            samples: sorted,
            idx: 0,
            last: None,
        });
    }

    // 3️⃣ Gå gjennom datoene og rykk hver markør frem til og med raddatoen
    let mut rows = Vec::with_capacity(dates.len());
    for date in dates {
        let mut values = BTreeMap::new();
        for c in cursors.iter_mut() {
            while c.idx < c.samples.len() && c.samples[c.idx].date <= date {
                c.last = Some(c.samples[c.idx].value);
                c.idx += 1;
            }
            if let Some(v) = c.last {
                values.insert(c.kind, v);
            }
        }
        rows.push(AlignedRow { date, values });
    }
    rows
}
