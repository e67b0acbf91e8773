//! # Control Domain — Single Source of Truth
//!
//! Defines the `ControlDomain` enum with all 12 control domains used to
//! group default responsibility templates and obligation registers. This is
//! the ONE definition used across the workspace. Every `match` on
//! `ControlDomain` must be exhaustive — adding a domain forces every
//! consumer (templates, registers, reports) to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CcmpError;

/// The fixed business areas of an Australian payroll/HR compliance program.
///
/// Each domain carries its own default RASCI template and groups related
/// obligations. The adopted assignment map always contains exactly these
/// 12 keys.
///
/// | # | Domain | Concern |
/// |---|--------|---------|
/// |  1 | Governance | Board oversight, compliance charter |
/// |  2 | PayrollProcessing | Pay runs, STP lodgement |
/// |  3 | Superannuation | SG contributions, SuperStream |
/// |  4 | TaxReporting | BAS, PAYG withholding |
/// |  5 | PayrollTax | State payroll tax registration and returns |
/// |  6 | WorkersCompensation | Policies, premium declarations |
/// |  7 | LeaveEntitlements | Long service leave, portable schemes |
/// |  8 | RightToWork | Visa/work-rights verification |
/// |  9 | RecordKeeping | Pay records, payslip content |
/// | 10 | AwardsAndAgreements | Modern award and EA classification |
/// | 11 | SupplierManagement | Outsourced payroll/supplier evaluation |
/// | 12 | IncidentCapa | Nonconformities and corrective actions |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlDomain {
    /// Board oversight, compliance charter, policy approval.
    Governance,
    /// Pay run execution and Single Touch Payroll lodgement.
    PayrollProcessing,
    /// Superannuation guarantee contributions and SuperStream compliance.
    Superannuation,
    /// BAS lodgement and PAYG withholding reporting.
    TaxReporting,
    /// State payroll tax registration, grouping, and returns.
    PayrollTax,
    /// Workers compensation policies and premium declarations.
    WorkersCompensation,
    /// Leave accruals including long service leave and portable schemes.
    LeaveEntitlements,
    /// Right-to-work and visa condition verification.
    RightToWork,
    /// Employee record keeping and payslip content requirements.
    RecordKeeping,
    /// Modern award and enterprise agreement classification.
    AwardsAndAgreements,
    /// Evaluation and monitoring of outsourced payroll suppliers.
    SupplierManagement,
    /// Nonconformity registers and corrective/preventive actions.
    IncidentCapa,
}

/// Total number of control domains. Used for compile-time assertions.
pub const CONTROL_DOMAIN_COUNT: usize = 12;

impl ControlDomain {
    /// Returns all 12 control domains in canonical order.
    pub fn all_domains() -> &'static [ControlDomain] {
        &[
            Self::Governance,
            Self::PayrollProcessing,
            Self::Superannuation,
            Self::TaxReporting,
            Self::PayrollTax,
            Self::WorkersCompensation,
            Self::LeaveEntitlements,
            Self::RightToWork,
            Self::RecordKeeping,
            Self::AwardsAndAgreements,
            Self::SupplierManagement,
            Self::IncidentCapa,
        ]
    }

    /// Returns the kebab-case string identifier for this domain.
    ///
    /// This must match the serde serialization format and the keys of the
    /// adopted assignment map.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Governance => "governance",
            Self::PayrollProcessing => "payroll-processing",
            Self::Superannuation => "superannuation",
            Self::TaxReporting => "tax-reporting",
            Self::PayrollTax => "payroll-tax",
            Self::WorkersCompensation => "workers-compensation",
            Self::LeaveEntitlements => "leave-entitlements",
            Self::RightToWork => "right-to-work",
            Self::RecordKeeping => "record-keeping",
            Self::AwardsAndAgreements => "awards-and-agreements",
            Self::SupplierManagement => "supplier-management",
            Self::IncidentCapa => "incident-capa",
        }
    }
}

impl std::fmt::Display for ControlDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlDomain {
    type Err = CcmpError;

    /// Parse a control domain from its kebab-case string identifier.
    ///
    /// Accepts the same identifiers produced by [`ControlDomain::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "governance" => Ok(Self::Governance),
            "payroll-processing" => Ok(Self::PayrollProcessing),
            "superannuation" => Ok(Self::Superannuation),
            "tax-reporting" => Ok(Self::TaxReporting),
            "payroll-tax" => Ok(Self::PayrollTax),
            "workers-compensation" => Ok(Self::WorkersCompensation),
            "leave-entitlements" => Ok(Self::LeaveEntitlements),
            "right-to-work" => Ok(Self::RightToWork),
            "record-keeping" => Ok(Self::RecordKeeping),
            "awards-and-agreements" => Ok(Self::AwardsAndAgreements),
            "supplier-management" => Ok(Self::SupplierManagement),
            "incident-capa" => Ok(Self::IncidentCapa),
            other => Err(CcmpError::Validation(format!(
                "unknown control domain: {other:?}"
            ))),
        }
    }
}
