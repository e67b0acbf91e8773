//! # Evidence Artifact
//!
//! An evidence artifact is a record of proof that one or more compliance
//! obligations were satisfied, sourced from an integration feed or a manual
//! upload.
//!
//! ## Lifecycle
//!
//! Artifacts are created by the discovery orchestrator from raw integration
//! records (or entered manually), matched against the obligation list at
//! creation time, and afterwards mutated only by reviewer disposition or
//! manual re-linking. They are never deleted except by an explicit removal
//! action on the store.

use serde::{Deserialize, Serialize};

use ccmp_core::{ArtifactId, IntegrationRef, IntegrationSource, ObligationId, Period, Timestamp};

use crate::matcher::ScoredMatch;

/// A single piece of compliance evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceArtifact {
    /// Unique identifier, generated at matching time.
    pub id: ArtifactId,
    /// Human-readable title.
    pub title: String,
    /// Originating integration (or `Manual`).
    pub source: IntegrationSource,
    /// The half-open interval the evidence covers.
    pub period: Period,
    /// When the artifact was ingested.
    pub uploaded_at: Timestamp,
    /// External reference into the originating system, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_ref: Option<IntegrationRef>,
    /// Obligations this artifact was matched to, best match first.
    /// At most [`MAX_OBLIGATION_REFS`](crate::matcher::MAX_OBLIGATION_REFS)
    /// entries; every entry cleared the retention threshold.
    #[serde(default)]
    pub obligation_refs: Vec<ObligationId>,
    /// Confidence of the best match, absent when nothing cleared the
    /// threshold or after a manual re-link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Reviewer disposition: accepted, rejected, or not yet reviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,
    /// Free-text keywords describing the content.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl EvidenceArtifact {
    /// Create an unmatched artifact, stamped with a fresh id and the
    /// current ingestion time.
    pub fn new(
        title: impl Into<String>,
        source: IntegrationSource,
        period: Period,
        tags: Vec<String>,
        integration_ref: Option<IntegrationRef>,
    ) -> Self {
        Self {
            id: ArtifactId::new(),
            title: title.into(),
            source,
            period,
            uploaded_at: Timestamp::now(),
            integration_ref,
            obligation_refs: Vec::new(),
            confidence: None,
            accepted: None,
            tags,
        }
    }

    /// Attach ranked matcher output: the top-N obligation references and
    /// the best score as `confidence`. An empty ranking leaves both empty —
    /// an unmatched artifact is a normal value, not an error.
    pub fn apply_matches(&mut self, ranked: &[ScoredMatch], top_n: usize) {
        self.obligation_refs = ranked
            .iter()
            .take(top_n)
            .map(|m| m.obligation.clone())
            .collect();
        self.confidence = ranked.first().map(|m| m.score);
    }
}
