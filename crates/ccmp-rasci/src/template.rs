//! # Default Responsibility Templates
//!
//! The hard-coded RASCI template for each control domain. Templates name
//! abstract role keys only; adoption resolves them through the directory.
//! A role key may request more than one letter (e.g. a lean finance
//! function where the CFO is both responsible and accountable for tax
//! reporting) — each requested letter becomes its own assignment.

use ccmp_core::{ControlDomain, RasciRole, RoleKey};

use RasciRole::{Accountable as A, Consulted as C, Informed as I, Responsible as R, Support as S};
use RoleKey::*;

/// The template for one domain: `(role key, requested letters)` pairs, in
/// emission order.
pub fn template_for(domain: ControlDomain) -> &'static [(RoleKey, &'static [RasciRole])] {
    match domain {
        ControlDomain::Governance => &[
            (ComplianceOwner, &[R]),
            (Ceo, &[A]),
            (BoardChair, &[C]),
            (InternalAudit, &[I]),
        ],
        ControlDomain::PayrollProcessing => &[
            (PayrollOfficer, &[R]),
            (PayrollManager, &[A]),
            (HrManager, &[S]),
            (ItManager, &[C]),
            (Cfo, &[I]),
        ],
        ControlDomain::Superannuation => &[
            (PayrollManager, &[R]),
            (Cfo, &[A]),
            (PayrollOfficer, &[S]),
            (ExternalAdvisor, &[C]),
            (ComplianceOwner, &[I]),
        ],
        ControlDomain::TaxReporting => &[
            (Cfo, &[R, A]),
            (PayrollManager, &[S]),
            (ExternalAdvisor, &[C]),
            (Ceo, &[I]),
        ],
        ControlDomain::PayrollTax => &[
            (PayrollManager, &[R]),
            (Cfo, &[A]),
            (ExternalAdvisor, &[C]),
            (ComplianceOwner, &[I]),
        ],
        ControlDomain::WorkersCompensation => &[
            (WhsOfficer, &[R]),
            (HrManager, &[A]),
            (PayrollManager, &[S]),
            (LegalCounsel, &[C]),
            (Ceo, &[I]),
        ],
        ControlDomain::LeaveEntitlements => &[
            (PayrollManager, &[R]),
            (HrManager, &[A]),
            (PayrollOfficer, &[S]),
            (ComplianceOwner, &[I]),
        ],
        ControlDomain::RightToWork => &[
            (HrManager, &[R, A]),
            (LegalCounsel, &[C]),
            (ComplianceOwner, &[I]),
        ],
        ControlDomain::RecordKeeping => &[
            (PayrollOfficer, &[R]),
            (PayrollManager, &[A]),
            (ItManager, &[S]),
            (InternalAudit, &[C]),
            (ComplianceOwner, &[I]),
        ],
        ControlDomain::AwardsAndAgreements => &[
            (HrManager, &[R]),
            (ComplianceOwner, &[A]),
            (PayrollManager, &[S]),
            (LegalCounsel, &[C]),
            (Ceo, &[I]),
        ],
        ControlDomain::SupplierManagement => &[
            (ProcurementLead, &[R, A]),
            (Cfo, &[C]),
            (ComplianceOwner, &[I]),
        ],
        ControlDomain::IncidentCapa => &[
            (ComplianceOwner, &[R, A]),
            (WhsOfficer, &[S]),
            (InternalAudit, &[C]),
            (Ceo, &[I]),
        ],
    }
}
