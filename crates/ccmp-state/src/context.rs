//! # Application Context
//!
//! The dependency-injection root. One [`AppContext`] is constructed at
//! application start (fresh, or rehydrated from a state directory) and
//! passed by reference; components receive cloned store handles, never
//! globals.

use ccmp_discovery::DiscoveryOrchestrator;
use ccmp_evidence::EvidenceStore;
use ccmp_rasci::RasciStore;
use ccmp_setup::{SetupCalculator, SetupReadPorts, SetupStore};

use crate::registry::{
    DirectoryStore, IntegrationRegistry, ObligationRegistry, ProfileStore, TimetableStore,
};

/// Every store in the system, with explicit ownership and lifecycle.
#[derive(Debug, Default)]
pub struct AppContext {
    /// Evidence artifacts.
    pub evidence: EvidenceStore,
    /// Adopted RASCI assignments.
    pub rasci: RasciStore,
    /// Setup wizard visited-step state.
    pub setup: SetupStore,
    /// Connected integration feeds.
    pub integrations: IntegrationRegistry,
    /// Company profile.
    pub profile: ProfileStore,
    /// Key personnel directory.
    pub directory: DirectoryStore,
    /// Seeded obligation register.
    pub obligations: ObligationRegistry,
    /// Compliance timetable.
    pub timetable: TimetableStore,
}

impl AppContext {
    /// A fresh context with every store empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt default RASCI assignments from the current key personnel
    /// directory. Call again after any directory edit or hand-over; each
    /// run fully replaces the previous assignments.
    pub fn adopt_rasci(&self) {
        self.rasci.adopt_from_key_personnel(&self.directory.get());
    }

    /// A discovery orchestrator over the built-in feeds, writing into this
    /// context's evidence store.
    pub fn discovery(&self) -> DiscoveryOrchestrator {
        DiscoveryOrchestrator::new(self.evidence.clone())
    }

    /// A setup calculator wired to this context's stores via
    /// [`ContextPorts`], sharing this context's visited-step store.
    pub fn setup_calculator(&self) -> SetupCalculator<ContextPorts> {
        SetupCalculator::with_store(ContextPorts::new(self), self.setup.clone())
    }
}

/// [`SetupReadPorts`] over the context's concrete stores. Each method is a
/// snapshot read of already-committed state; the calculator stays ignorant
/// of store types.
#[derive(Debug, Clone)]
pub struct ContextPorts {
    evidence: EvidenceStore,
    rasci: RasciStore,
    integrations: IntegrationRegistry,
    profile: ProfileStore,
    directory: DirectoryStore,
    obligations: ObligationRegistry,
    timetable: TimetableStore,
}

impl ContextPorts {
    /// Capture store handles from a context.
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            evidence: ctx.evidence.clone(),
            rasci: ctx.rasci.clone(),
            integrations: ctx.integrations.clone(),
            profile: ctx.profile.clone(),
            directory: ctx.directory.clone(),
            obligations: ctx.obligations.clone(),
            timetable: ctx.timetable.clone(),
        }
    }
}

impl SetupReadPorts for ContextPorts {
    fn integrations_connected(&self) -> bool {
        self.integrations.any_connected()
    }

    fn company_profile_complete(&self) -> bool {
        self.profile.get().is_complete()
    }

    fn people_recorded(&self) -> bool {
        self.directory.assigned_count() > 0
    }

    fn rasci_adopted(&self) -> bool {
        self.rasci.adopted()
    }

    fn obligations_seeded(&self) -> bool {
        self.obligations.seeded()
    }

    fn timetable_generated(&self) -> bool {
        self.timetable.generated()
    }

    fn has_evidence(&self) -> bool {
        self.evidence.has_evidence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccmp_core::{IntegrationSource, PersonId, RoleKey, StateFootprint, StateJurisdiction};
    use ccmp_evidence::Obligation;
    use ccmp_setup::StepKey;

    use crate::registry::CompanyProfile;

    #[test]
    fn test_fresh_context_is_zero_percent() {
        let ctx = AppContext::new();
        assert_eq!(ctx.setup_calculator().calculate_completion(), 0);
    }

    #[test]
    fn test_ports_reflect_store_mutations() {
        let ctx = AppContext::new();
        let calc = ctx.setup_calculator();

        ctx.integrations.connect(IntegrationSource::Stp);
        assert!(calc.is_complete(StepKey::Integrations));

        ctx.profile.set(CompanyProfile {
            legal_name: "Acme Payroll Pty Ltd".into(),
            abn: "51 824 753 556".into(),
            footprint: StateFootprint::new(vec![StateJurisdiction::Nsw]),
        });
        assert!(calc.is_complete(StepKey::CompanyProfile));

        ctx.directory
            .update(|d| d.assign(RoleKey::ComplianceOwner, PersonId::new("u1")));
        assert!(calc.is_complete(StepKey::People));

        ctx.adopt_rasci();
        assert!(calc.is_complete(StepKey::Rasci));

        ctx.obligations
            .seed(vec![Obligation::new("ob-1", "Lodge BAS", None, &[])]);
        assert!(calc.is_complete(StepKey::ObligationsSeed));

        ctx.timetable.generate(vec![]);
        assert!(calc.is_complete(StepKey::Timetable));

        // Six of seven complete; evidence discovery still pending.
        assert_eq!(calc.calculate_completion(), 86);
        assert!(!calc.is_complete(StepKey::EvidenceDiscovery));
    }

    #[test]
    fn test_adopt_rasci_reads_current_directory() {
        let ctx = AppContext::new();
        ctx.directory
            .update(|d| d.assign(RoleKey::Ceo, PersonId::new("u1")));
        ctx.adopt_rasci();
        assert!(ctx.rasci.adopted());
        assert!(!ctx.rasci.rasci_for("governance").is_empty());
    }

    #[test]
    fn test_calculators_share_visited_store() {
        let ctx = AppContext::new();
        ctx.setup_calculator().visit_step(StepKey::People);
        assert!(ctx.setup.was_visited(StepKey::People));
        assert!(ctx.setup_calculator().store().was_visited(StepKey::People));
    }
}
