use chrono::{Datelike, NaiveDate};

use crate::types::{AlignedRow, WindowMonths};

/// Siste gyldige dag i gitt måned (håndterer skuddår).
fn days_in_month(year: i32, month: u32) -> u32 {
    for day in (28..=31).rev() {
        if NaiveDate::from_ymd_opt(year, month, day).is_some() {
            return day;
        }
    }
    28
}

/// Gå `months` hele måneder tilbake fra `date`, med klemming til månedens
/// siste dag (31. mars - 1 mnd = 28./29. februar).
pub fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 - months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Filtrer rader til vinduet [today - window, today], begge grenser inklusive.
/// Radene antas stigende sortert (slik `reconstruct` leverer dem).
pub fn filter_window(rows: &[AlignedRow], window: WindowMonths, today: NaiveDate) -> Vec<AlignedRow> {
    let cutoff = months_back(today, window.months());
    rows.iter()
        .filter(|r| r.date >= cutoff && r.date <= today)
        .cloned()
        .collect()
}
