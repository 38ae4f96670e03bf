use crate::aggregate::{AggregateReport, DailyBreakdown, SkipCounts};
use crate::parse::{LogLine, ParseFailure, parse_line, parse_line_bytes};
use tracing::trace;

pub const SUMMARY_TITLE: &str = "Summary";
pub const UNDATED_TITLE: &str = "unknown-date";

/// Folds raw lines into an [`Aggregation`].
#[derive(Debug, Default)]
pub struct Aggregator {
    watch: Vec<String>,
    lines_seen: u64,
    summary: AggregateReport,
    daily: Option<DailyBreakdown>,
    skipped: SkipCounts,
}

impl Aggregator {
    pub fn new(watch: &[String]) -> Self {
        Self {
            watch: watch.to_vec(),
            summary: AggregateReport::with_watch(watch),
            ..Self::default()
        }
    }

    /// Also group parsed lines by day.
    pub fn with_daily_breakdown(mut self) -> Self {
        self.daily = Some(DailyBreakdown::new(&self.watch));
        self
    }

    pub fn push_line(&mut self, raw: &str) {
        self.lines_seen += 1;
        let outcome = parse_line(raw);
        self.fold(outcome);
    }

    pub fn push_bytes(&mut self, raw: &[u8]) {
        self.lines_seen += 1;
        let outcome = parse_line_bytes(raw);
        self.fold(outcome);
    }

    fn fold(&mut self, outcome: Result<LogLine<'_>, ParseFailure>) {
        match outcome {
            Ok(line) => {
                self.summary.record(&line);
                if let Some(daily) = self.daily.as_mut() {
                    daily.record(&line);
                }
            }
            Err(failure) => {
                trace!(line = self.lines_seen, reason = %failure, "skipping malformed line");
                self.skipped.record(failure.reason());
            }
        }
    }

    pub fn finish(self) -> Aggregation {
        Aggregation {
            lines: self.lines_seen,
            summary: self.summary,
            daily: self.daily,
            skipped: self.skipped,
        }
    }
}

/// Aggregates `lines` in order with no watched paths and no daily breakdown.
pub fn aggregate<I, S>(lines: I) -> Aggregation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = Aggregator::default();
    for line in lines {
        aggregator.push_line(line.as_ref());
    }
    aggregator.finish()
}

/// Final, read-only result of one pass over the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    pub lines: u64,
    pub summary: AggregateReport,
    pub daily: Option<DailyBreakdown>,
    pub skipped: SkipCounts,
}

pub struct Section<'a> {
    pub title: String,
    pub report: &'a AggregateReport,
}

impl Aggregation {
    pub fn parsed(&self) -> u64 {
        self.summary.requests
    }

    pub fn skipped(&self) -> u64 {
        self.skipped.total()
    }

    /// Report sections in render order.
    ///
    /// Without a daily breakdown, or when the log covers under a day, this is
    /// the single summary section.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let Some(daily) = self.daily.as_ref().filter(|d| d.spans_multiple_days()) else {
            return vec![Section {
                title: SUMMARY_TITLE.to_string(),
                report: &self.summary,
            }];
        };

        let mut sections: Vec<_> = daily
            .days
            .iter()
            .map(|(day, report)| Section {
                title: day.format("%Y-%m-%d").to_string(),
                report,
            })
            .collect();

        if let Some(undated) = &daily.undated {
            sections.push(Section {
                title: UNDATED_TITLE.to_string(),
                report: undated,
            });
        }

        sections
    }
}
