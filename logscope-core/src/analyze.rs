use crate::aggregate::{Aggregation, Aggregator};
use crate::config::ReportSettings;
use crate::source::{LogSource, SourceError};
use std::path::Path;
use tracing::{debug, info_span, warn};

/// Opens `path` and folds every line into an [`Aggregation`].
///
/// Only file access problems are errors; malformed lines are counted as
/// skipped. A read failure part way through discards the partial result.
pub fn analyze_file(path: &Path, settings: &ReportSettings) -> Result<Aggregation, SourceError> {
    let span = info_span!("analyze", path = %path.display());
    let _enter = span.enter();

    let source = LogSource::open(path)?;

    let mut aggregator = Aggregator::new(&settings.watch);
    if settings.by_day {
        aggregator = aggregator.with_daily_breakdown();
    }

    for (index, line) in source.lines().enumerate() {
        let line = line.map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            line: index as u64,
            source,
        })?;
        aggregator.push_bytes(&line);
    }

    let aggregation = aggregator.finish();
    if aggregation.parsed() == 0 {
        warn!(
            lines = aggregation.lines,
            "no parsable lines; report will show zero counts"
        );
    }
    debug!(
        lines = aggregation.lines,
        parsed = aggregation.parsed(),
        skipped = aggregation.skipped(),
        "aggregation complete"
    );

    Ok(aggregation)
}
