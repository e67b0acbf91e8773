//! # Setup Completion Calculator
//!
//! Computes the overall setup percentage from the live step predicates and
//! serves the per-step dependency nudges.
//!
//! The percentage denominator is the 7 completable steps; `Review` is a
//! terminal manual action and is always incomplete by construction.
//! Evaluating completion is side-effect free and idempotent — two calls
//! with no intervening upstream change return the same value.

use crate::ports::SetupReadPorts;
use crate::step::{step_definitions, StepDef, StepKey, COMPLETABLE_STEP_COUNT};
use crate::store::SetupStore;

/// The setup wizard's completion engine.
///
/// Generic over the read ports so the application wires in its context and
/// tests wire in a fake.
#[derive(Debug)]
pub struct SetupCalculator<P: SetupReadPorts> {
    ports: P,
    store: SetupStore,
}

impl<P: SetupReadPorts> SetupCalculator<P> {
    /// A calculator with a fresh (nothing-visited) store.
    pub fn new(ports: P) -> Self {
        Self::with_store(ports, SetupStore::new())
    }

    /// A calculator over an existing (possibly rehydrated) store.
    pub fn with_store(ports: P, store: SetupStore) -> Self {
        Self { ports, store }
    }

    /// The visited-step store.
    pub fn store(&self) -> &SetupStore {
        &self.store
    }

    /// Live completion state of one step.
    ///
    /// `Review` always evaluates false: finishing setup is an action a
    /// person takes, not a state the system can derive.
    pub fn is_complete(&self, key: StepKey) -> bool {
        match key {
            StepKey::Integrations => self.ports.integrations_connected(),
            StepKey::CompanyProfile => self.ports.company_profile_complete(),
            StepKey::People => self.ports.people_recorded(),
            StepKey::Rasci => self.ports.rasci_adopted(),
            StepKey::ObligationsSeed => self.ports.obligations_seeded(),
            StepKey::Timetable => self.ports.timetable_generated(),
            StepKey::EvidenceDiscovery => self.ports.has_evidence(),
            StepKey::Review => false,
        }
    }

    /// Overall completion percentage in `[0, 100]`:
    /// `round(100 * complete / 7)` over the completable steps.
    pub fn calculate_completion(&self) -> u8 {
        let complete = StepKey::all_steps()
            .iter()
            .filter(|k| **k != StepKey::Review && self.is_complete(**k))
            .count();
        let percent = (complete as f64 * 100.0 / COMPLETABLE_STEP_COUNT as f64).round() as u8;
        debug_assert!(percent <= 100);
        percent
    }

    /// Look up a step definition by its string key. Unknown keys resolve to
    /// `None`; callers handle absence explicitly.
    pub fn get_step(&self, key: &str) -> Option<&'static StepDef> {
        let key: StepKey = key.parse().ok()?;
        step_definitions().iter().find(|d| d.key == key)
    }

    /// Record that the user opened a step, then recompute completion.
    ///
    /// Visits accumulate into a set — revisiting is harmless — and never
    /// change any completion predicate themselves.
    pub fn visit_step(&self, key: StepKey) -> u8 {
        let newly = self.store.mark_visited(key);
        if newly {
            tracing::debug!(step = %key, "setup step visited");
        }
        self.calculate_completion()
    }

    /// The soft prerequisites of `key` that are currently incomplete.
    ///
    /// Dependencies are advisory: a step with unmet dependencies is still
    /// independently completable. This list only feeds the "visit X first"
    /// nudge.
    pub fn unmet_dependencies(&self, key: StepKey) -> Vec<StepKey> {
        step_definitions()
            .iter()
            .find(|d| d.key == key)
            .map(|d| {
                d.depends_on
                    .iter()
                    .filter(|dep| !self.is_complete(**dep))
                    .copied()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the UI should nudge toward a prerequisite before this step.
    pub fn should_nudge(&self, key: StepKey) -> bool {
        !self.unmet_dependencies(key).is_empty()
    }
}
