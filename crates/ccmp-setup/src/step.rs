//! # Setup Steps
//!
//! The eight wizard steps in their fixed total order, with soft dependency
//! edges. Dependencies are advisory: they drive "visit this first" nudges
//! in the UI and never gate completion.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use ccmp_core::CcmpError;

/// The eight setup steps, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKey {
    /// Connect integration feeds.
    Integrations,
    /// Record the company profile (legal name, ABN, footprint).
    CompanyProfile,
    /// Record key personnel.
    People,
    /// Adopt default RASCI assignments.
    Rasci,
    /// Seed the obligation register.
    ObligationsSeed,
    /// Generate the compliance timetable.
    Timetable,
    /// Run evidence discovery.
    EvidenceDiscovery,
    /// Final review and sign-off. Terminal manual action; never counted
    /// as complete.
    Review,
}

/// Total number of steps.
pub const STEP_COUNT: usize = 8;

/// Steps counted in the completion denominator (`Review` is excluded).
pub const COMPLETABLE_STEP_COUNT: usize = 7;

impl StepKey {
    /// All eight steps in wizard order.
    pub fn all_steps() -> &'static [StepKey] {
        &[
            Self::Integrations,
            Self::CompanyProfile,
            Self::People,
            Self::Rasci,
            Self::ObligationsSeed,
            Self::Timetable,
            Self::EvidenceDiscovery,
            Self::Review,
        ]
    }

    /// The kebab-case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integrations => "integrations",
            Self::CompanyProfile => "company-profile",
            Self::People => "people",
            Self::Rasci => "rasci",
            Self::ObligationsSeed => "obligations-seed",
            Self::Timetable => "timetable",
            Self::EvidenceDiscovery => "evidence-discovery",
            Self::Review => "review",
        }
    }

    /// Zero-based position in the wizard order.
    pub fn position(&self) -> usize {
        Self::all_steps()
            .iter()
            .position(|s| s == self)
            .unwrap_or(usize::MAX)
    }
}

impl std::fmt::Display for StepKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepKey {
    type Err = CcmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integrations" => Ok(Self::Integrations),
            "company-profile" => Ok(Self::CompanyProfile),
            "people" => Ok(Self::People),
            "rasci" => Ok(Self::Rasci),
            "obligations-seed" => Ok(Self::ObligationsSeed),
            "timetable" => Ok(Self::Timetable),
            "evidence-discovery" => Ok(Self::EvidenceDiscovery),
            "review" => Ok(Self::Review),
            other => Err(CcmpError::Validation(format!("unknown setup step: {other:?}"))),
        }
    }
}

// ─── Step definitions ────────────────────────────────────────────────

/// Static definition of one setup step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDef {
    /// The step.
    pub key: StepKey,
    /// Wizard card title.
    pub title: &'static str,
    /// Soft prerequisites — nudge material only, never blocking.
    pub depends_on: &'static [StepKey],
}

/// All step definitions in wizard order.
pub fn step_definitions() -> &'static [StepDef] {
    &[
        StepDef {
            key: StepKey::Integrations,
            title: "Connect integrations",
            depends_on: &[],
        },
        StepDef {
            key: StepKey::CompanyProfile,
            title: "Company profile",
            depends_on: &[],
        },
        StepDef {
            key: StepKey::People,
            title: "Key personnel",
            depends_on: &[StepKey::CompanyProfile],
        },
        StepDef {
            key: StepKey::Rasci,
            title: "Adopt RASCI defaults",
            depends_on: &[StepKey::People],
        },
        StepDef {
            key: StepKey::ObligationsSeed,
            title: "Seed obligation register",
            depends_on: &[StepKey::CompanyProfile],
        },
        StepDef {
            key: StepKey::Timetable,
            title: "Generate timetable",
            depends_on: &[StepKey::ObligationsSeed],
        },
        StepDef {
            key: StepKey::EvidenceDiscovery,
            title: "Run evidence discovery",
            depends_on: &[StepKey::Integrations, StepKey::ObligationsSeed],
        },
        StepDef {
            key: StepKey::Review,
            title: "Review and finish",
            depends_on: &[StepKey::Rasci, StepKey::Timetable, StepKey::EvidenceDiscovery],
        },
    ]
}
