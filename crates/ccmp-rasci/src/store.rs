//! # RASCI Store — Adoption and Lookup
//!
//! Holds the adopted assignment map: one entry per control domain, each an
//! ordered list of `(role, person, letter)` assignments. Adoption rebuilds
//! the entire map from the directory and swaps it in atomically; readers
//! never observe a partially-updated map.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use ccmp_core::{ControlDomain, PersonId, RasciRole, RoleKey, Timestamp};

use crate::directory::RoleDirectory;
use crate::template::template_for;

/// One concrete responsibility assignment within a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The abstract role the assignment came from.
    pub role: RoleKey,
    /// The person resolved from the directory at adoption time.
    pub person: PersonId,
    /// The RASCI letter.
    pub rasci: RasciRole,
}

/// Assignments for one lookup key, grouped by letter. Letters with no
/// assignment hold empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedRasci {
    /// Responsible assignments.
    pub responsible: Vec<Assignment>,
    /// Accountable assignments.
    pub accountable: Vec<Assignment>,
    /// Support assignments.
    pub support: Vec<Assignment>,
    /// Consulted assignments.
    pub consulted: Vec<Assignment>,
    /// Informed assignments.
    pub informed: Vec<Assignment>,
}

impl GroupedRasci {
    /// Whether every letter group is empty.
    pub fn is_empty(&self) -> bool {
        self.responsible.is_empty()
            && self.accountable.is_empty()
            && self.support.is_empty()
            && self.consulted.is_empty()
            && self.informed.is_empty()
    }
}

/// Persistable image of the store's full state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RasciSnapshot {
    /// Adopted assignments per domain. Exactly the 12 domain keys after
    /// any adoption; empty before the first.
    pub assignments: BTreeMap<ControlDomain, Vec<Assignment>>,
    /// Whether adoption has ever run.
    pub adopted: bool,
    /// When adoption last ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adopted_at: Option<Timestamp>,
}

/// Thread-safe owner of the adopted assignment map.
#[derive(Debug, Default)]
pub struct RasciStore {
    state: Arc<RwLock<RasciSnapshot>>,
}

impl Clone for RasciStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl RasciStore {
    /// Create an unadopted store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand every domain template against the directory and replace the
    /// stored map wholesale.
    ///
    /// For each `(role, letters)` template entry: if the directory has a
    /// person for the role, one assignment per letter is emitted; otherwise
    /// the entry contributes nothing. Domains where no template role is
    /// assigned still get a (empty) map entry, so all 12 domain keys are
    /// always present after adoption.
    ///
    /// Running adoption again discards the previous result entirely — the
    /// outcome is identical to adopting the new directory into a fresh
    /// store.
    pub fn adopt_from_key_personnel(&self, directory: &RoleDirectory) {
        let mut assignments: BTreeMap<ControlDomain, Vec<Assignment>> = BTreeMap::new();

        for domain in ControlDomain::all_domains() {
            let mut list = Vec::new();
            for (role, letters) in template_for(*domain) {
                if let Some(person) = directory.person_for(*role) {
                    for letter in *letters {
                        list.push(Assignment {
                            role: *role,
                            person: person.clone(),
                            rasci: *letter,
                        });
                    }
                }
            }
            assignments.insert(*domain, list);
        }

        let total: usize = assignments.values().map(Vec::len).sum();
        let next = RasciSnapshot {
            assignments,
            adopted: true,
            adopted_at: Some(Timestamp::now()),
        };
        *self.state.write() = next;

        tracing::info!(
            assignments = total,
            assigned_roles = directory.assigned_count(),
            "default RASCI adopted from key personnel"
        );
    }

    /// Whether adoption has ever run.
    pub fn adopted(&self) -> bool {
        self.state.read().adopted
    }

    /// When adoption last ran.
    pub fn adopted_at(&self) -> Option<Timestamp> {
        self.state.read().adopted_at
    }

    /// The raw assignment list for a domain. Empty before adoption.
    pub fn assignments_for(&self, domain: ControlDomain) -> Vec<Assignment> {
        self.state
            .read()
            .assignments
            .get(&domain)
            .cloned()
            .unwrap_or_default()
    }

    /// Group the stored assignments for a lookup key by RASCI letter.
    ///
    /// The map is keyed by the 12 domain identifiers only. Callers passing
    /// a control reference (e.g. `BAS-001`) that is not also a domain name
    /// get the all-empty grouping — that asymmetry is inherited behavior,
    /// kept deliberately rather than silently widening the lookup.
    pub fn rasci_for(&self, key: &str) -> GroupedRasci {
        let Ok(domain) = key.parse::<ControlDomain>() else {
            return GroupedRasci::default();
        };

        let mut grouped = GroupedRasci::default();
        for assignment in self.assignments_for(domain) {
            match assignment.rasci {
                RasciRole::Responsible => grouped.responsible.push(assignment),
                RasciRole::Accountable => grouped.accountable.push(assignment),
                RasciRole::Support => grouped.support.push(assignment),
                RasciRole::Consulted => grouped.consulted.push(assignment),
                RasciRole::Informed => grouped.informed.push(assignment),
            }
        }
        grouped
    }

    /// Snapshot the full state for persistence.
    pub fn snapshot(&self) -> RasciSnapshot {
        self.state.read().clone()
    }

    /// Replace the full state from a persisted snapshot.
    pub fn restore(&self, snapshot: RasciSnapshot) {
        *self.state.write() = snapshot;
    }
}
