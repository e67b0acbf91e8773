//! # ccmp-discovery — Evidence Discovery Orchestration
//!
//! Pulls raw records from the nine integration feeds, scores them against
//! the obligation list with the evidence matcher, and appends qualifying
//! artifacts to the evidence store.
//!
//! ## Concurrency Model
//!
//! The adapter fan-out is the only concurrent code path in the workspace.
//! All adapters are dispatched at once and joined before matching begins;
//! each branch is isolated, so a failing (or panicking) adapter resolves to
//! an empty record list and a warning while every other branch proceeds.
//! No per-adapter timeout is imposed; callers that need an upper bound
//! should wrap [`DiscoveryOrchestrator::run_discovery`] in
//! `tokio::time::timeout`.

pub mod adapter;
pub mod feeds;
pub mod orchestrator;

pub use adapter::{AdapterError, IntegrationAdapter, RawRecord};
pub use feeds::builtin_adapters;
pub use orchestrator::{DiscoveryOrchestrator, DiscoveryOutcome};
