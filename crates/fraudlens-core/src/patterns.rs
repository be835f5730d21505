//! Daily transaction pattern aggregation.

use jiff::civil::{Date, date};

use crate::models::pattern::TransactionPattern;
use crate::models::prediction::PredictionResult;

/// Placeholder series shown until the first results arrive.
pub fn seed_patterns() -> Vec<TransactionPattern> {
    [
        (date(2024, 3, 1), 20, 5),
        (date(2024, 3, 2), 30, 8),
        (date(2024, 3, 3), 45, 15),
        (date(2024, 3, 4), 35, 12),
        (date(2024, 3, 5), 25, 4),
    ]
    .into_iter()
    .map(|(date, total, fraudulent)| TransactionPattern {
        date,
        total,
        fraudulent,
    })
    .collect()
}

/// Fold results into per-day counts.
///
/// Results carry no timestamp, so every result is counted against `today`.
/// Returns the seed series when `results` is empty.
pub fn aggregate_daily(results: &[PredictionResult], today: Date) -> Vec<TransactionPattern> {
    if results.is_empty() {
        return seed_patterns();
    }

    let fraudulent = results
        .iter()
        .filter(|r| r.prediction.is_fraudulent())
        .count();

    vec![TransactionPattern {
        date: today,
        total: results.len() as u32,
        fraudulent: fraudulent as u32,
    }]
}

/// Current calendar day in UTC.
pub fn today_utc() -> Date {
    jiff::Timestamp::now()
        .to_zoned(jiff::tz::TimeZone::UTC)
        .date()
}
