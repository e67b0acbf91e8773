//! # Integration Sources
//!
//! Defines the `IntegrationSource` enum: the nine external integration
//! feeds evidence can originate from, plus `Manual` for uploads. The
//! identifier strings are fixed — they name the adapters in the discovery
//! registry and prefix every `IntegrationRef` those adapters emit, so the
//! exact casing is load-bearing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CcmpError;

/// Origin of an evidence artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntegrationSource {
    /// Single Touch Payroll lodgement feed.
    #[serde(rename = "STP")]
    Stp,
    /// SuperStream contribution clearing feed.
    #[serde(rename = "SuperStream")]
    SuperStream,
    /// Business Activity Statement lodgement feed.
    #[serde(rename = "BAS")]
    Bas,
    /// State payroll tax return feed (jurisdiction-scoped).
    #[serde(rename = "PayrollTax")]
    PayrollTax,
    /// Workers compensation policy feed (jurisdiction-scoped).
    #[serde(rename = "WorkersComp")]
    WorkersComp,
    /// Long service leave scheme feed (jurisdiction-scoped).
    #[serde(rename = "LSL")]
    Lsl,
    /// VEVO work-rights verification feed.
    #[serde(rename = "VEVO")]
    Vevo,
    /// Stapled super fund lookup feed.
    #[serde(rename = "Stapled")]
    Stapled,
    /// Payslip archive feed.
    #[serde(rename = "Payslip")]
    Payslip,
    /// Manually uploaded evidence.
    #[serde(rename = "Manual")]
    Manual,
}

/// The nine adapter-backed sources, in registry order. `Manual` is not an
/// adapter — manual uploads enter through the evidence store directly.
pub const ADAPTER_SOURCES: [IntegrationSource; 9] = [
    IntegrationSource::Stp,
    IntegrationSource::SuperStream,
    IntegrationSource::Bas,
    IntegrationSource::PayrollTax,
    IntegrationSource::WorkersComp,
    IntegrationSource::Lsl,
    IntegrationSource::Vevo,
    IntegrationSource::Stapled,
    IntegrationSource::Payslip,
];

impl IntegrationSource {
    /// The fixed identifier string (case-sensitive).
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Stp => "STP",
            Self::SuperStream => "SuperStream",
            Self::Bas => "BAS",
            Self::PayrollTax => "PayrollTax",
            Self::WorkersComp => "WorkersComp",
            Self::Lsl => "LSL",
            Self::Vevo => "VEVO",
            Self::Stapled => "Stapled",
            Self::Payslip => "Payslip",
            Self::Manual => "Manual",
        }
    }

    /// Whether this source's feed is scoped per jurisdiction. Scoped feeds
    /// are fetched once per state in the footprint during discovery.
    pub fn jurisdiction_scoped(&self) -> bool {
        matches!(self, Self::PayrollTax | Self::WorkersComp | Self::Lsl)
    }
}

impl std::fmt::Display for IntegrationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for IntegrationSource {
    type Err = CcmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STP" => Ok(Self::Stp),
            "SuperStream" => Ok(Self::SuperStream),
            "BAS" => Ok(Self::Bas),
            "PayrollTax" => Ok(Self::PayrollTax),
            "WorkersComp" => Ok(Self::WorkersComp),
            "LSL" => Ok(Self::Lsl),
            "VEVO" => Ok(Self::Vevo),
            "Stapled" => Ok(Self::Stapled),
            "Payslip" => Ok(Self::Payslip),
            "Manual" => Ok(Self::Manual),
            other => Err(CcmpError::Validation(format!(
                "unknown integration source: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_sources_excludes_manual() {
        assert_eq!(ADAPTER_SOURCES.len(), 9);
        assert!(!ADAPTER_SOURCES.contains(&IntegrationSource::Manual));
    }

    #[test]
    fn test_identifier_roundtrip() {
        for source in ADAPTER_SOURCES {
            let parsed: IntegrationSource = source.identifier().parse().unwrap();
            assert_eq!(source, parsed);
        }
    }

    #[test]
    fn test_serde_matches_identifier() {
        for source in ADAPTER_SOURCES {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.identifier()));
        }
    }

    #[test]
    fn test_identifier_case_sensitive() {
        assert!("stp".parse::<IntegrationSource>().is_err());
        assert!("SUPERSTREAM".parse::<IntegrationSource>().is_err());
    }

    #[test]
    fn test_jurisdiction_scoped_sources() {
        let scoped: Vec<_> = ADAPTER_SOURCES
            .iter()
            .filter(|s| s.jurisdiction_scoped())
            .collect();
        assert_eq!(
            scoped,
            vec![
                &IntegrationSource::PayrollTax,
                &IntegrationSource::WorkersComp,
                &IntegrationSource::Lsl,
            ]
        );
    }
}
