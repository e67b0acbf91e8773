//! # Obligation — Read-Only Matching Input
//!
//! The matcher's view of a compliance obligation. Obligations live in the
//! external obligations registry; this crate never mutates them.

use serde::{Deserialize, Serialize};

use ccmp_core::ObligationId;

/// A compliance obligation record, as consumed by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    /// Unique obligation identifier.
    pub id: ObligationId,
    /// Human-readable title.
    pub title: String,
    /// Optional cross-reference code into the control register
    /// (e.g. `BAS-001`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_ref: Option<String>,
    /// Free-text keywords describing the obligation.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Obligation {
    /// Create an obligation record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        control_ref: Option<&str>,
        tags: &[&str],
    ) -> Self {
        Self {
            id: ObligationId::new(id),
            title: title.into(),
            control_ref: control_ref.map(String::from),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}
