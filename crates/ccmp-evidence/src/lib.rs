//! # ccmp-evidence — Evidence Artifacts and the Auto-Matching Engine
//!
//! Models evidence artifacts (proof that a compliance obligation was
//! satisfied), the obligation records they are matched against, and the
//! confidence-scoring matcher that links the two.
//!
//! ## Modules
//!
//! - **`artifact`** — [`EvidenceArtifact`] and its lifecycle (creation at
//!   discovery time, reviewer disposition, manual re-linking, removal).
//!
//! - **`obligation`** — [`Obligation`], the read-only view of a compliance
//!   obligation consumed by the matcher. Obligations are owned by the
//!   external obligations registry.
//!
//! - **`matcher`** — [`Matcher`], five additive weighted signals producing
//!   a confidence score in `[0, 1]`, a retention threshold, and top-N
//!   ranking. The hardest-working code in the workspace.
//!
//! - **`store`** — [`EvidenceStore`], the thread-safe owner of the artifact
//!   list. No other component mutates artifacts directly.

pub mod artifact;
pub mod matcher;
pub mod obligation;
pub mod store;

pub use artifact::EvidenceArtifact;
pub use matcher::{MatchedArtifact, Matcher, ScoredMatch, MATCH_THRESHOLD, MAX_OBLIGATION_REFS};
pub use obligation::Obligation;
pub use store::EvidenceStore;
