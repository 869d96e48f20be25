//! Per-endpoint success/failure counts and the end-of-run report.
mod render;


use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::Outcome;
use crate::services::Service;

pub use render::{render_json, render_text};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub successes: u64,
    pub failures: u64,
}

impl Tally {
    #[must_use]
    pub const fn total(self) -> u64 {
        self.successes.saturating_add(self.failures)
    }
}

/// Counts keyed by endpoint. Entries appear on first sight and are never
/// removed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TallyTable {
    entries: BTreeMap<String, Tally>,
}

impl TallyTable {
    /// Increments exactly one counter for the outcome's endpoint.
    pub fn record(&mut self, outcome: &Outcome) {
        let tally = self.entries.entry(outcome.endpoint().to_owned()).or_default();
        if outcome.is_success() {
            tally.successes = tally.successes.saturating_add(1);
        } else {
            tally.failures = tally.failures.saturating_add(1);
        }
    }

    #[must_use]
    pub fn get(&self, endpoint: &str) -> Option<Tally> {
        self.entries.get(endpoint).copied()
    }

    #[must_use]
    pub fn totals(&self) -> Tally {
        self.entries.values().fold(Tally::default(), |acc, tally| Tally {
            successes: acc.successes.saturating_add(tally.successes),
            failures: acc.failures.saturating_add(tally.failures),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Tally)> {
        self.entries
            .iter()
            .map(|(endpoint, tally)| (endpoint.as_str(), *tally))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Final counts for a run, grouped by service.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TallyReport {
    counts: BTreeMap<&'static str, TallyTable>,
}

impl TallyReport {
    pub fn record(&mut self, outcome: &Outcome) {
        self.counts
            .entry(outcome.service().as_str())
            .or_default()
            .record(outcome);
    }

    #[must_use]
    pub fn service(&self, service: Service) -> Option<&TallyTable> {
        self.counts.get(service.as_str())
    }

    pub fn services(&self) -> impl Iterator<Item = (&'static str, &TallyTable)> {
        self.counts.iter().map(|(service, table)| (*service, table))
    }

    #[must_use]
    pub fn totals(&self) -> Tally {
        self.counts.values().fold(Tally::default(), |acc, table| {
            let totals = table.totals();
            Tally {
                successes: acc.successes.saturating_add(totals.successes),
                failures: acc.failures.saturating_add(totals.failures),
            }
        })
    }
}
