//! # Role Taxonomy — Role Keys and RASCI Letters
//!
//! Defines the 13 abstract organizational role keys used by the key
//! personnel directory, and the five RASCI responsibility letters.
//!
//! Role keys are abstract positions ("the payroll manager"), not people.
//! The directory maps each key to at most one concrete person; the
//! responsibility templates reference keys only, so re-assigning a person
//! never requires editing a template.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CcmpError;

/// The 13 abstract role keys of the key personnel directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKey {
    /// Chief executive officer.
    Ceo,
    /// Chief financial officer.
    Cfo,
    /// Owner of the compliance program.
    ComplianceOwner,
    /// Manager of the payroll function.
    PayrollManager,
    /// Payroll officer executing pay runs.
    PayrollOfficer,
    /// Human resources manager.
    HrManager,
    /// Chair of the board.
    BoardChair,
    /// Internal audit function.
    InternalAudit,
    /// IT manager responsible for payroll systems.
    ItManager,
    /// In-house or retained legal counsel.
    LegalCounsel,
    /// Procurement/supplier relationship lead.
    ProcurementLead,
    /// Work health and safety officer.
    WhsOfficer,
    /// External advisor (accountant, consultant).
    ExternalAdvisor,
}

/// Total number of role keys. Used for compile-time assertions.
pub const ROLE_KEY_COUNT: usize = 13;

impl RoleKey {
    /// Returns all 13 role keys in canonical order.
    pub fn all_roles() -> &'static [RoleKey] {
        &[
            Self::Ceo,
            Self::Cfo,
            Self::ComplianceOwner,
            Self::PayrollManager,
            Self::PayrollOfficer,
            Self::HrManager,
            Self::BoardChair,
            Self::InternalAudit,
            Self::ItManager,
            Self::LegalCounsel,
            Self::ProcurementLead,
            Self::WhsOfficer,
            Self::ExternalAdvisor,
        ]
    }

    /// Returns the snake_case string identifier for this role key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ceo => "ceo",
            Self::Cfo => "cfo",
            Self::ComplianceOwner => "compliance_owner",
            Self::PayrollManager => "payroll_manager",
            Self::PayrollOfficer => "payroll_officer",
            Self::HrManager => "hr_manager",
            Self::BoardChair => "board_chair",
            Self::InternalAudit => "internal_audit",
            Self::ItManager => "it_manager",
            Self::LegalCounsel => "legal_counsel",
            Self::ProcurementLead => "procurement_lead",
            Self::WhsOfficer => "whs_officer",
            Self::ExternalAdvisor => "external_advisor",
        }
    }
}

impl std::fmt::Display for RoleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKey {
    type Err = CcmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ceo" => Ok(Self::Ceo),
            "cfo" => Ok(Self::Cfo),
            "compliance_owner" => Ok(Self::ComplianceOwner),
            "payroll_manager" => Ok(Self::PayrollManager),
            "payroll_officer" => Ok(Self::PayrollOfficer),
            "hr_manager" => Ok(Self::HrManager),
            "board_chair" => Ok(Self::BoardChair),
            "internal_audit" => Ok(Self::InternalAudit),
            "it_manager" => Ok(Self::ItManager),
            "legal_counsel" => Ok(Self::LegalCounsel),
            "procurement_lead" => Ok(Self::ProcurementLead),
            "whs_officer" => Ok(Self::WhsOfficer),
            "external_advisor" => Ok(Self::ExternalAdvisor),
            other => Err(CcmpError::Validation(format!("unknown role key: {other:?}"))),
        }
    }
}

// ─── RASCI Letters ───────────────────────────────────────────────────

/// The five RASCI responsibility letters.
///
/// Serialized as the single uppercase letter (`"R"`, `"A"`, ...), matching
/// the form the templates and reports use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RasciRole {
    /// Responsible — does the work.
    #[serde(rename = "R")]
    Responsible,
    /// Accountable — owns the outcome.
    #[serde(rename = "A")]
    Accountable,
    /// Support — assists the responsible party.
    #[serde(rename = "S")]
    Support,
    /// Consulted — provides input before decisions.
    #[serde(rename = "C")]
    Consulted,
    /// Informed — kept up to date after decisions.
    #[serde(rename = "I")]
    Informed,
}

impl RasciRole {
    /// All five letters in R/A/S/C/I order.
    pub fn all_letters() -> &'static [RasciRole] {
        &[
            Self::Responsible,
            Self::Accountable,
            Self::Support,
            Self::Consulted,
            Self::Informed,
        ]
    }

    /// The single-letter code.
    pub fn letter(&self) -> char {
        match self {
            Self::Responsible => 'R',
            Self::Accountable => 'A',
            Self::Support => 'S',
            Self::Consulted => 'C',
            Self::Informed => 'I',
        }
    }
}

impl std::fmt::Display for RasciRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for RasciRole {
    type Err = CcmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Self::Responsible),
            "A" => Ok(Self::Accountable),
            "S" => Ok(Self::Support),
            "C" => Ok(Self::Consulted),
            "I" => Ok(Self::Informed),
            other => Err(CcmpError::Validation(format!(
                "unknown RASCI letter: {other:?}"
            ))),
        }
    }
}
