//! # Jurisdiction Types
//!
//! Defines the Australian state/territory jurisdictions and the
//! `StateFootprint` — the set of jurisdictions an employer operates in.
//! The footprint drives the fan-out of jurisdiction-scoped discovery feeds
//! (payroll tax, workers compensation, long service leave).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CcmpError;

/// An Australian state or territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StateJurisdiction {
    /// New South Wales.
    #[serde(rename = "NSW")]
    Nsw,
    /// Victoria.
    #[serde(rename = "VIC")]
    Vic,
    /// Queensland.
    #[serde(rename = "QLD")]
    Qld,
    /// South Australia.
    #[serde(rename = "SA")]
    Sa,
    /// Western Australia.
    #[serde(rename = "WA")]
    Wa,
    /// Tasmania.
    #[serde(rename = "TAS")]
    Tas,
    /// Northern Territory.
    #[serde(rename = "NT")]
    Nt,
    /// Australian Capital Territory.
    #[serde(rename = "ACT")]
    Act,
}

/// Total number of jurisdictions.
pub const STATE_COUNT: usize = 8;

impl StateJurisdiction {
    /// All eight jurisdictions in canonical order.
    pub fn all_states() -> &'static [StateJurisdiction] {
        &[
            Self::Nsw,
            Self::Vic,
            Self::Qld,
            Self::Sa,
            Self::Wa,
            Self::Tas,
            Self::Nt,
            Self::Act,
        ]
    }

    /// The uppercase jurisdiction code (e.g. `NSW`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Nsw => "NSW",
            Self::Vic => "VIC",
            Self::Qld => "QLD",
            Self::Sa => "SA",
            Self::Wa => "WA",
            Self::Tas => "TAS",
            Self::Nt => "NT",
            Self::Act => "ACT",
        }
    }
}

impl std::fmt::Display for StateJurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StateJurisdiction {
    type Err = CcmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NSW" => Ok(Self::Nsw),
            "VIC" => Ok(Self::Vic),
            "QLD" => Ok(Self::Qld),
            "SA" => Ok(Self::Sa),
            "WA" => Ok(Self::Wa),
            "TAS" => Ok(Self::Tas),
            "NT" => Ok(Self::Nt),
            "ACT" => Ok(Self::Act),
            other => Err(CcmpError::Validation(format!(
                "unknown jurisdiction: {other:?}"
            ))),
        }
    }
}

// ─── StateFootprint ──────────────────────────────────────────────────

/// The set of jurisdictions an employer operates in.
///
/// Order is preserved as given; jurisdiction-scoped feeds iterate the
/// footprint in this order, so discovery output is deterministic for a
/// fixed footprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFootprint {
    /// Operating jurisdictions.
    pub states: Vec<StateJurisdiction>,
}

impl StateFootprint {
    /// Create a footprint from a list of jurisdictions.
    pub fn new(states: Vec<StateJurisdiction>) -> Self {
        Self { states }
    }

    /// A footprint covering all eight jurisdictions.
    pub fn national() -> Self {
        Self {
            states: StateJurisdiction::all_states().to_vec(),
        }
    }

    /// Whether the footprint includes a jurisdiction.
    pub fn contains(&self, state: StateJurisdiction) -> bool {
        self.states.contains(&state)
    }

    /// Whether the footprint is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_states_count() {
        assert_eq!(StateJurisdiction::all_states().len(), STATE_COUNT);
    }

    #[test]
    fn test_code_roundtrip() {
        for state in StateJurisdiction::all_states() {
            let parsed: StateJurisdiction = state.code().parse().unwrap();
            assert_eq!(*state, parsed);
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(
            serde_json::to_string(&StateJurisdiction::Nsw).unwrap(),
            "\"NSW\""
        );
    }

    #[test]
    fn test_national_footprint() {
        let fp = StateFootprint::national();
        assert_eq!(fp.states.len(), 8);
        assert!(fp.contains(StateJurisdiction::Tas));
    }

    #[test]
    fn test_empty_footprint() {
        let fp = StateFootprint::default();
        assert!(fp.is_empty());
        assert!(!fp.contains(StateJurisdiction::Vic));
    }
}
