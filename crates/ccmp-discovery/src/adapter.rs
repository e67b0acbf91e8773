//! # Integration Adapter Contract
//!
//! The boundary between discovery and the outside world. An adapter fetches
//! raw records for one integration source; the orchestrator owns scoring,
//! source stamping, and persistence, so adapters stay thin.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ccmp_core::{IntegrationRef, IntegrationSource, Period, StateFootprint};

/// A raw record as returned by an integration feed, before matching.
///
/// Raw records carry no source tag — the orchestrator stamps the adapter's
/// declared source onto every artifact it produces, so a feed cannot
/// mislabel its own output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Human-readable title.
    pub title: String,
    /// The interval the record covers.
    pub period: Period,
    /// Free-text keywords describing the content.
    pub tags: Vec<String>,
    /// Reference into the originating system, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_ref: Option<IntegrationRef>,
}

/// Error raised by an integration fetch.
///
/// Adapter errors never propagate out of a discovery run — the orchestrator
/// logs them and treats the branch as empty.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The upstream system could not be reached or refused the request.
    #[error("integration {feed} unavailable: {reason}")]
    Unavailable {
        /// The feed that failed.
        feed: IntegrationSource,
        /// Upstream failure detail.
        reason: String,
    },

    /// The upstream system responded with data the adapter cannot read.
    #[error("integration {feed} returned malformed data: {reason}")]
    Malformed {
        /// The feed that failed.
        feed: IntegrationSource,
        /// Parse failure detail.
        reason: String,
    },
}

/// One named integration feed.
///
/// `fetch` is an asynchronous network-like operation. Jurisdiction-scoped
/// feeds (payroll tax, workers compensation, long service leave) produce
/// records per state in the footprint; all others ignore it.
#[async_trait]
pub trait IntegrationAdapter: Send + Sync {
    /// The fixed source identity of this adapter.
    fn source(&self) -> IntegrationSource;

    /// Fetch raw records covering `period` for the given footprint.
    ///
    /// Within the returned list, order is preserved all the way into the
    /// evidence store.
    async fn fetch(
        &self,
        period: &Period,
        footprint: &StateFootprint,
    ) -> Result<Vec<RawRecord>, AdapterError>;
}
