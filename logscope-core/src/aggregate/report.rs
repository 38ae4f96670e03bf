use crate::aggregate::Tally;
use crate::parse::{LogLine, SkipReason, StatusClass};
use serde::Serialize;
use std::collections::BTreeMap;

/// Traffic counters for one report section.
///
/// Every recorded line bumps exactly one IP entry, one user-agent entry and
/// one status class; the 4xx and 5xx counters are therefore disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    pub requests: u64,
    pub ips: Tally,
    pub user_agents: Tally,
    pub paths: Tally,
    pub status: StatusCounts,
    pub watched: Tally,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A report that counts request paths containing any of `patterns`.
    pub fn with_watch(patterns: &[String]) -> Self {
        Self {
            watched: Tally::seeded(patterns),
            ..Self::default()
        }
    }

    pub fn record(&mut self, line: &LogLine<'_>) {
        self.requests += 1;
        self.ips.record(line.remote_addr);
        self.user_agents.record(line.user_agent);
        self.paths.record(line.request.path);
        self.status.record(line.status_class());

        let path = line.request.path;
        self.watched.record_matching(|pattern| path.contains(pattern));
    }

    pub fn client_errors(&self) -> u64 {
        self.status.client_error
    }

    pub fn server_errors(&self) -> u64 {
        self.status.server_error
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub informational: u64,
    pub success: u64,
    pub redirection: u64,
    pub client_error: u64,
    pub server_error: u64,
    pub other: u64,
}

impl StatusCounts {
    pub fn record(&mut self, class: StatusClass) {
        let slot = match class {
            StatusClass::Informational => &mut self.informational,
            StatusClass::Success => &mut self.success,
            StatusClass::Redirection => &mut self.redirection,
            StatusClass::ClientError => &mut self.client_error,
            StatusClass::ServerError => &mut self.server_error,
            StatusClass::Other => &mut self.other,
        };
        *slot += 1;
    }

    pub fn get(&self, class: StatusClass) -> u64 {
        match class {
            StatusClass::Informational => self.informational,
            StatusClass::Success => self.success,
            StatusClass::Redirection => self.redirection,
            StatusClass::ClientError => self.client_error,
            StatusClass::ServerError => self.server_error,
            StatusClass::Other => self.other,
        }
    }
}

/// Lines rejected by the parser, by reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkipCounts {
    by_reason: BTreeMap<SkipReason, u64>,
}

impl SkipCounts {
    pub fn record(&mut self, reason: SkipReason) {
        *self.by_reason.entry(reason).or_insert(0) += 1;
    }

    pub fn get(&self, reason: SkipReason) -> u64 {
        self.by_reason.get(&reason).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.by_reason.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkipReason, u64)> + '_ {
        self.by_reason.iter().map(|(r, c)| (*r, *c))
    }
}
