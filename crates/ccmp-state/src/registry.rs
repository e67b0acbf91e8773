//! # Thin State Registries
//!
//! The small stores backing the setup wizard's out-of-core predicates.
//! Each follows the same shape as the evidence and RASCI stores: an
//! `Arc<parking_lot::RwLock<_>>` handle, clone-to-share, snapshot/restore
//! for the persistence boundary.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use ccmp_core::{ControlDomain, IntegrationSource, StateFootprint, Timestamp};
use ccmp_evidence::Obligation;
use ccmp_rasci::RoleDirectory;

// ─── Integrations ────────────────────────────────────────────────────

/// The set of connected integration feeds.
#[derive(Debug, Default)]
pub struct IntegrationRegistry {
    connected: Arc<RwLock<BTreeSet<IntegrationSource>>>,
}

impl Clone for IntegrationRegistry {
    fn clone(&self) -> Self {
        Self {
            connected: Arc::clone(&self.connected),
        }
    }
}

impl IntegrationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a feed connected. Returns `true` if newly connected.
    pub fn connect(&self, source: IntegrationSource) -> bool {
        self.connected.write().insert(source)
    }

    /// Mark a feed disconnected. Returns `true` if it was connected.
    pub fn disconnect(&self, source: IntegrationSource) -> bool {
        self.connected.write().remove(&source)
    }

    /// Whether a specific feed is connected.
    pub fn is_connected(&self, source: IntegrationSource) -> bool {
        self.connected.read().contains(&source)
    }

    /// Whether any feed is connected — the integrations step predicate.
    pub fn any_connected(&self) -> bool {
        !self.connected.read().is_empty()
    }

    /// Connected feeds, in canonical order.
    pub fn snapshot(&self) -> Vec<IntegrationSource> {
        self.connected.read().iter().copied().collect()
    }

    /// Replace state from a persisted snapshot.
    pub fn restore(&self, connected: Vec<IntegrationSource>) {
        *self.connected.write() = connected.into_iter().collect();
    }
}

// ─── Company profile ─────────────────────────────────────────────────

/// The employer's profile, including its operating footprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Registered legal name.
    pub legal_name: String,
    /// Australian Business Number.
    pub abn: String,
    /// Operating jurisdictions; drives jurisdiction-scoped discovery.
    pub footprint: StateFootprint,
}

impl CompanyProfile {
    /// The company-profile step predicate: legal name, ABN, and at least
    /// one operating jurisdiction.
    pub fn is_complete(&self) -> bool {
        !self.legal_name.trim().is_empty()
            && !self.abn.trim().is_empty()
            && !self.footprint.is_empty()
    }
}

/// Thread-safe holder of the (single) company profile.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profile: Arc<RwLock<CompanyProfile>>,
}

impl Clone for ProfileStore {
    fn clone(&self) -> Self {
        Self {
            profile: Arc::clone(&self.profile),
        }
    }
}

impl ProfileStore {
    /// Create a store with an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the profile.
    pub fn set(&self, profile: CompanyProfile) {
        *self.profile.write() = profile;
    }

    /// Current profile.
    pub fn get(&self) -> CompanyProfile {
        self.profile.read().clone()
    }
}

// ─── Key personnel directory ─────────────────────────────────────────

/// Thread-safe holder of the key personnel directory.
#[derive(Debug, Default)]
pub struct DirectoryStore {
    directory: Arc<RwLock<RoleDirectory>>,
}

impl Clone for DirectoryStore {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
        }
    }
}

impl DirectoryStore {
    /// Create a store with an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutate the directory in place (assign, designate, hand over).
    pub fn update<R>(&self, f: impl FnOnce(&mut RoleDirectory) -> R) -> R {
        f(&mut self.directory.write())
    }

    /// Current directory, by value.
    pub fn get(&self) -> RoleDirectory {
        self.directory.read().clone()
    }

    /// Number of assigned roles — the people step predicate reads `> 0`.
    pub fn assigned_count(&self) -> usize {
        self.directory.read().assigned_count()
    }
}

// ─── Obligation register ─────────────────────────────────────────────

/// The seeded obligation register. Also the obligation supply handed to
/// discovery for matching.
#[derive(Debug, Default)]
pub struct ObligationRegistry {
    obligations: Arc<RwLock<Vec<Obligation>>>,
}

impl Clone for ObligationRegistry {
    fn clone(&self) -> Self {
        Self {
            obligations: Arc::clone(&self.obligations),
        }
    }
}

impl ObligationRegistry {
    /// Create an empty register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the register contents with a seed set.
    pub fn seed(&self, obligations: Vec<Obligation>) {
        *self.obligations.write() = obligations;
    }

    /// Whether the register is non-empty — the obligations step predicate.
    pub fn seeded(&self) -> bool {
        !self.obligations.read().is_empty()
    }

    /// All obligations.
    pub fn list(&self) -> Vec<Obligation> {
        self.obligations.read().clone()
    }
}

// ─── Timetable ───────────────────────────────────────────────────────

/// One scheduled compliance activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// What is due.
    pub title: String,
    /// The domain the activity belongs to.
    pub domain: ControlDomain,
    /// When it is due.
    pub due: Timestamp,
}

/// Persistable image of the timetable store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableSnapshot {
    /// Whether a timetable has ever been generated.
    pub generated: bool,
    /// The scheduled activities.
    pub entries: Vec<TimetableEntry>,
}

/// Thread-safe holder of the compliance timetable.
#[derive(Debug, Default)]
pub struct TimetableStore {
    state: Arc<RwLock<TimetableSnapshot>>,
}

impl Clone for TimetableStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl TimetableStore {
    /// Create an ungenerated store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the timetable with a generated schedule. An empty schedule
    /// still counts as generated — generation is an action, not a count.
    pub fn generate(&self, entries: Vec<TimetableEntry>) {
        *self.state.write() = TimetableSnapshot {
            generated: true,
            entries,
        };
    }

    /// Whether generation has ever run — the timetable step predicate.
    pub fn generated(&self) -> bool {
        self.state.read().generated
    }

    /// All scheduled activities.
    pub fn entries(&self) -> Vec<TimetableEntry> {
        self.state.read().entries.clone()
    }

    /// Snapshot for persistence.
    pub fn snapshot(&self) -> TimetableSnapshot {
        self.state.read().clone()
    }

    /// Replace state from a persisted snapshot.
    pub fn restore(&self, snapshot: TimetableSnapshot) {
        *self.state.write() = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccmp_core::StateJurisdiction;

    #[test]
    fn test_integration_registry_predicate() {
        let registry = IntegrationRegistry::new();
        assert!(!registry.any_connected());
        assert!(registry.connect(IntegrationSource::Stp));
        assert!(!registry.connect(IntegrationSource::Stp));
        assert!(registry.any_connected());
        registry.disconnect(IntegrationSource::Stp);
        assert!(!registry.any_connected());
    }

    #[test]
    fn test_profile_completeness() {
        let mut profile = CompanyProfile::default();
        assert!(!profile.is_complete());

        profile.legal_name = "Acme Payroll Pty Ltd".into();
        profile.abn = "51 824 753 556".into();
        assert!(!profile.is_complete());

        profile.footprint = StateFootprint::new(vec![StateJurisdiction::Nsw]);
        assert!(profile.is_complete());
    }

    #[test]
    fn test_blank_abn_is_incomplete() {
        let profile = CompanyProfile {
            legal_name: "Acme".into(),
            abn: "   ".into(),
            footprint: StateFootprint::new(vec![StateJurisdiction::Vic]),
        };
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_obligation_registry_seeding() {
        let registry = ObligationRegistry::new();
        assert!(!registry.seeded());
        registry.seed(vec![Obligation::new("ob-1", "Lodge BAS", None, &[])]);
        assert!(registry.seeded());
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn test_empty_generated_timetable_counts() {
        let store = TimetableStore::new();
        assert!(!store.generated());
        store.generate(vec![]);
        assert!(store.generated());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_directory_store_update() {
        use ccmp_core::{PersonId, RoleKey};

        let store = DirectoryStore::new();
        assert_eq!(store.assigned_count(), 0);
        store.update(|d| d.assign(RoleKey::Ceo, PersonId::new("u1")));
        assert_eq!(store.assigned_count(), 1);
    }
}
