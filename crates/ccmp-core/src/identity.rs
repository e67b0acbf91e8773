//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all identifiers in CoreComply. These prevent
//! accidental identifier confusion — you cannot pass an `ObligationId`
//! where a `PersonId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an evidence artifact, generated at matching time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactId(pub Uuid);

/// Identifier for a compliance obligation. Obligations are owned by the
/// external obligations registry; their identifiers are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObligationId(pub String);

/// Identifier for a person in the key personnel directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub String);

impl ArtifactId {
    /// Generate a new random artifact identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ArtifactId {
    fn default() -> Self {
        Self::new()
    }
}

impl ObligationId {
    /// Wrap an external obligation identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PersonId {
    /// Wrap a person identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty after trimming. An empty person
    /// identifier is treated everywhere as "role unassigned".
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "artifact:{}", self.0)
    }
}

impl std::fmt::Display for ObligationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── IntegrationRef ──────────────────────────────────────────────────

/// An external integration reference, e.g. `STP-2026-Q1` or
/// `SuperStream-CONTRIB-0042`.
///
/// The text before the first `-` identifies the originating system and is
/// consumed by the matcher's integration-relevance lookup. The split is
/// performed once, at construction, so downstream code works with an
/// explicit `system` field instead of re-deriving it from the raw string.
///
/// Parsing never fails: a reference with no `-` has the whole string as its
/// system and no trailing reference. An unrecognized system is a lawful
/// value — it simply earns no relevance bonus during matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct IntegrationRef {
    system: String,
    reference: Option<String>,
}

impl IntegrationRef {
    /// Parse a raw reference string, splitting at the first `-`.
    pub fn parse(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        match raw.split_once('-') {
            Some((system, reference)) => Self {
                system: system.to_string(),
                reference: Some(reference.to_string()),
            },
            None => Self {
                system: raw.to_string(),
                reference: None,
            },
        }
    }

    /// The originating system identifier (case-sensitive, e.g. `STP`,
    /// `SuperStream`).
    pub fn system(&self) -> &str {
        &self.system
    }

    /// The remainder of the reference after the system prefix, if any.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

impl From<String> for IntegrationRef {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<&str> for IntegrationRef {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<IntegrationRef> for String {
    fn from(r: IntegrationRef) -> Self {
        r.to_string()
    }
}

impl std::fmt::Display for IntegrationRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reference {
            Some(rest) => write!(f, "{}-{}", self.system, rest),
            None => f.write_str(&self.system),
        }
    }
}
