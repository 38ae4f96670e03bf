use crate::aggregate::{AggregateReport, Aggregation, SkipCounts, StatusCounts};
use crate::identity::{Classifier, IdentitySummary};
use crate::render::RenderOptions;
use serde::Serialize;

/// Serializable, already-ranked view of an aggregation.
#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub sections: Vec<SectionView<'a>>,
    pub lines: LineCounts,
    pub skipped_by_reason: &'a SkipCounts,
}

#[derive(Debug, Serialize)]
pub struct LineCounts {
    pub total: u64,
    pub parsed: u64,
    pub skipped: u64,
}

#[derive(Debug, Serialize)]
pub struct SectionView<'a> {
    pub title: String,
    pub total_requests: u64,
    pub client_errors: u64,
    pub server_errors: u64,
    pub status: StatusCounts,
    pub watched: Vec<RankedEntry<'a>>,
    pub top_ips: Vec<RankedEntry<'a>>,
    pub top_user_agents: Vec<RankedEntry<'a>>,
    pub top_paths: Vec<RankedEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentitySummary>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RankedEntry<'a> {
    pub value: &'a str,
    pub count: u64,
}

impl<'a> ReportView<'a> {
    pub fn build(aggregation: &'a Aggregation, options: RenderOptions) -> Self {
        let classifier = options.identify.then(Classifier::new);

        let sections = aggregation
            .sections()
            .into_iter()
            .map(|section| {
                SectionView::build(
                    section.title,
                    section.report,
                    options.top_n,
                    classifier.as_ref(),
                )
            })
            .collect();

        Self {
            sections,
            lines: LineCounts {
                total: aggregation.lines,
                parsed: aggregation.parsed(),
                skipped: aggregation.skipped(),
            },
            skipped_by_reason: &aggregation.skipped,
        }
    }
}

impl<'a> SectionView<'a> {
    fn build(
        title: String,
        report: &'a AggregateReport,
        top_n: usize,
        classifier: Option<&Classifier>,
    ) -> Self {
        Self {
            title,
            total_requests: report.requests,
            client_errors: report.client_errors(),
            server_errors: report.server_errors(),
            status: report.status,
            watched: ranked(report.watched.iter()),
            top_ips: ranked(report.ips.top(top_n)),
            top_user_agents: ranked(report.user_agents.top(top_n)),
            top_paths: ranked(report.paths.top(top_n)),
            identity: classifier.map(|c| c.summarize(&report.user_agents)),
        }
    }
}

fn ranked<'a>(entries: impl IntoIterator<Item = (&'a str, u64)>) -> Vec<RankedEntry<'a>> {
    entries
        .into_iter()
        .map(|(value, count)| RankedEntry { value, count })
        .collect()
}

