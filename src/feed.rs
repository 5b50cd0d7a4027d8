use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::geo::{distance_km, filter_by_radius};
use crate::models::{Coordinates, DisasterRecord};
use crate::severity::{classify_record, SeverityLevel};

/// Acquisition polling period: five minutes.
pub const REFRESH_INTERVAL_MS: i64 = 300_000;

/// How far back the "recent alerts" list reaches: 24 hours.
pub const RECENT_WINDOW_MS: i64 = 86_400_000;

/// A record as the presentation layer sees it, with derived fields filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertView<'a> {
    pub record: &'a DisasterRecord,
    pub severity: SeverityLevel,
    pub distance_km: Option<f64>,
}

pub fn parse_snapshot(json: &str) -> Result<Vec<DisasterRecord>> {
    match serde_json::from_str::<Vec<DisasterRecord>>(json) {
        Ok(records) => {
            debug!(count = records.len(), "snapshot decoded");
            Ok(records)
        }
        Err(e) => {
            warn!(error = %e, "snapshot rejected");
            Err(e.into())
        }
    }
}

/// Most recent events first. Events with equal timestamps keep their order.
pub fn newest_first<'a, I>(records: I) -> Vec<&'a DisasterRecord>
where
    I: IntoIterator<Item = &'a DisasterRecord>,
{
    let mut sorted: Vec<&DisasterRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

pub fn annotate<'a, I>(records: I, center: Option<&Coordinates>) -> Vec<AlertView<'a>>
where
    I: IntoIterator<Item = &'a DisasterRecord>,
{
    records
        .into_iter()
        .map(|record| AlertView {
            record,
            severity: classify_record(record),
            distance_km: center.map(|c| distance_km(c, &record.coordinates)),
        })
        .collect()
}

/// Alerts for the list view: radius filtered, newest first, annotated.
pub fn alerts_near<'a>(
    records: &'a [DisasterRecord],
    center: Option<&Coordinates>,
    radius_km: f64,
) -> Vec<AlertView<'a>> {
    let nearby = filter_by_radius(records, center, radius_km);
    annotate(newest_first(nearby), center)
}

/// Records reported strictly after `now_ms - window_ms`, in input order.
pub fn recent<'a, I>(records: I, now_ms: i64, window_ms: i64) -> Vec<&'a DisasterRecord>
where
    I: IntoIterator<Item = &'a DisasterRecord>,
{
    let cutoff = now_ms.saturating_sub(window_ms);
    records.into_iter().filter(|r| r.timestamp > cutoff).collect()
}

pub fn with_severity<'a>(views: &[AlertView<'a>], level: SeverityLevel) -> Vec<AlertView<'a>> {
    views.iter().filter(|v| v.severity == level).cloned().collect()
}

pub fn critical<'a>(views: &[AlertView<'a>]) -> Vec<AlertView<'a>> {
    with_severity(views, SeverityLevel::Critical)
}

pub fn at_least(views: &[AlertView<'_>], floor: SeverityLevel) -> usize {
    views.iter().filter(|v| v.severity >= floor).count()
}

pub fn is_stale(fetched_at_ms: i64, now_ms: i64, interval_ms: i64) -> bool {
    now_ms.saturating_sub(fetched_at_ms) >= interval_ms
}
