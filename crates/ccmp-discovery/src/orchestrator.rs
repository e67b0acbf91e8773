//! # Discovery Orchestrator
//!
//! Runs every registered integration adapter concurrently, scores the raw
//! records against the obligation list, and appends the resulting artifacts
//! to the evidence store.
//!
//! ## Failure Semantics
//!
//! Each adapter branch is isolated. A branch that returns an error or
//! panics contributes an empty record list and a `warn!` event; the join
//! always completes and `run_discovery` never fails. The only resilience
//! mechanism is this isolation — there are no retries.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future;

use ccmp_core::{IntegrationSource, Period, StateFootprint, Timestamp};
use ccmp_evidence::{EvidenceArtifact, EvidenceStore, Matcher, Obligation};

use crate::adapter::{IntegrationAdapter, RawRecord};
use crate::feeds::builtin_adapters;

/// Summary of one discovery run.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOutcome {
    /// Total artifacts appended to the evidence store.
    pub artifacts_added: usize,
    /// Artifacts appended per source.
    pub added_by_source: BTreeMap<IntegrationSource, usize>,
    /// Sources whose fetch failed (and contributed nothing).
    pub failed_sources: Vec<IntegrationSource>,
}

/// Coordinates the adapter fan-out and writes results to the evidence store.
pub struct DiscoveryOrchestrator {
    adapters: Vec<Arc<dyn IntegrationAdapter>>,
    store: EvidenceStore,
}

impl DiscoveryOrchestrator {
    /// An orchestrator over the nine built-in feeds.
    pub fn new(store: EvidenceStore) -> Self {
        Self::with_adapters(store, builtin_adapters())
    }

    /// An orchestrator over a caller-supplied adapter registry.
    pub fn with_adapters(store: EvidenceStore, adapters: Vec<Arc<dyn IntegrationAdapter>>) -> Self {
        Self { adapters, store }
    }

    /// Run discovery for a reporting period: fetch from every adapter
    /// concurrently, match against `obligations`, and append each
    /// qualifying artifact to the evidence store (one append per artifact;
    /// no batch guarantee, no deduplication against earlier runs).
    ///
    /// Never fails: adapter errors are absorbed per branch. A hung adapter
    /// stalls the join indefinitely — impose `tokio::time::timeout` around
    /// this call if an upper bound is required.
    pub async fn run_discovery(
        &self,
        period: Period,
        footprint: &StateFootprint,
        obligations: &[Obligation],
    ) -> DiscoveryOutcome {
        self.run_discovery_at(Timestamp::now(), period, footprint, obligations)
            .await
    }

    /// [`run_discovery`](Self::run_discovery) with a pinned matching
    /// instant, for callers that need reproducible recency scoring.
    pub async fn run_discovery_at(
        &self,
        now: Timestamp,
        period: Period,
        footprint: &StateFootprint,
        obligations: &[Obligation],
    ) -> DiscoveryOutcome {
        // Fan out: every adapter is dispatched at once on its own task so a
        // slow or panicking branch cannot take the others down with it.
        let handles: Vec<_> = self
            .adapters
            .iter()
            .map(|adapter| {
                let adapter = Arc::clone(adapter);
                let footprint = footprint.clone();
                tokio::spawn(async move {
                    let source = adapter.source();
                    (source, adapter.fetch(&period, &footprint).await)
                })
            })
            .collect();

        // Fan in: a failed branch resolves to an empty record list.
        let mut fetched: Vec<(IntegrationSource, Vec<RawRecord>)> = Vec::new();
        let mut failed_sources = Vec::new();
        for (idx, joined) in future::join_all(handles).await.into_iter().enumerate() {
            match joined {
                Ok((source, Ok(records))) => fetched.push((source, records)),
                Ok((source, Err(error))) => {
                    tracing::warn!(%source, %error, "integration fetch failed; contributing no records");
                    failed_sources.push(source);
                    fetched.push((source, Vec::new()));
                }
                Err(join_error) => {
                    let source = self.adapters[idx].source();
                    tracing::warn!(%source, error = %join_error, "integration task aborted; contributing no records");
                    failed_sources.push(source);
                    fetched.push((source, Vec::new()));
                }
            }
        }

        let matcher = Matcher::at(now);
        let mut outcome = DiscoveryOutcome {
            failed_sources,
            ..DiscoveryOutcome::default()
        };

        for (source, records) in fetched {
            // The adapter's declared source is stamped onto every artifact,
            // regardless of what the feed put in its records.
            let artifacts: Vec<EvidenceArtifact> = records
                .into_iter()
                .map(|r| EvidenceArtifact::new(r.title, source, r.period, r.tags, r.integration_ref))
                .collect();

            for matched in matcher.match_batch(artifacts, obligations) {
                self.store.add_artifact(matched.artifact);
                outcome.artifacts_added += 1;
                *outcome.added_by_source.entry(source).or_insert(0) += 1;
            }
        }

        tracing::info!(
            added = outcome.artifacts_added,
            failed = outcome.failed_sources.len(),
            "discovery run complete"
        );
        outcome
    }
}
