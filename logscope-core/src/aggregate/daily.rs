use crate::aggregate::AggregateReport;
use crate::parse::LogLine;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};
use std::collections::BTreeMap;

/// Logs covering fewer hours than this are reported as a single summary.
pub const DAILY_SPLIT_HOURS: i64 = 24;

/// Per-day counters, keyed by the calendar date in each line's own offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyBreakdown {
    watch: Vec<String>,
    pub days: BTreeMap<NaiveDate, AggregateReport>,
    /// Lines whose timestamp did not parse.
    pub undated: Option<AggregateReport>,
    pub earliest: Option<DateTime<FixedOffset>>,
    pub latest: Option<DateTime<FixedOffset>>,
}

impl DailyBreakdown {
    pub fn new(watch: &[String]) -> Self {
        Self {
            watch: watch.to_vec(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, line: &LogLine<'_>) {
        let Some(ts) = line.parsed_timestamp() else {
            self.undated
                .get_or_insert_with(|| AggregateReport::with_watch(&self.watch))
                .record(line);
            return;
        };

        if self.earliest.is_none_or(|earliest| ts < earliest) {
            self.earliest = Some(ts);
        }
        if self.latest.is_none_or(|latest| ts > latest) {
            self.latest = Some(ts);
        }

        self.days
            .entry(ts.date_naive())
            .or_insert_with(|| AggregateReport::with_watch(&self.watch))
            .record(line);
    }

    /// Whether the dated lines span at least a full day.
    pub fn spans_multiple_days(&self) -> bool {
        match (self.earliest, self.latest) {
            (Some(earliest), Some(latest)) => {
                latest - earliest >= TimeDelta::hours(DAILY_SPLIT_HOURS)
            }
            _ => false,
        }
    }
}
