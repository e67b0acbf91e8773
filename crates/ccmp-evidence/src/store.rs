//! # Evidence Store
//!
//! The exclusive owner of the evidence artifact list. Discovery appends
//! here; reviewers accept/reject or re-link here; nothing else mutates an
//! artifact.
//!
//! All operations are synchronous (the RwLock is `parking_lot`, not
//! `tokio::sync`) because the lock is never held across `.await` points.
//! Cloning the store clones the handle, not the data — discovery tasks and
//! the setup calculator's read port share one artifact list.

use std::sync::Arc;

use parking_lot::RwLock;

use ccmp_core::{ArtifactId, ObligationId};

use crate::artifact::EvidenceArtifact;

/// Thread-safe, cloneable owner of the artifact list.
#[derive(Debug, Default)]
pub struct EvidenceStore {
    artifacts: Arc<RwLock<Vec<EvidenceArtifact>>>,
}

impl Clone for EvidenceStore {
    fn clone(&self) -> Self {
        Self {
            artifacts: Arc::clone(&self.artifacts),
        }
    }
}

impl EvidenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one artifact. Each append is an independent write; a
    /// discovery run that stops midway leaves the artifacts already added
    /// in place. No deduplication is performed — re-running discovery
    /// re-adds.
    pub fn add_artifact(&self, artifact: EvidenceArtifact) {
        self.artifacts.write().push(artifact);
    }

    /// Whether any artifact exists. This is the completion predicate for
    /// the evidence-discovery setup step.
    pub fn has_evidence(&self) -> bool {
        !self.artifacts.read().is_empty()
    }

    /// Number of artifacts held.
    pub fn len(&self) -> usize {
        self.artifacts.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.artifacts.read().is_empty()
    }

    /// Retrieve one artifact by id.
    pub fn get(&self, id: &ArtifactId) -> Option<EvidenceArtifact> {
        self.artifacts.read().iter().find(|a| &a.id == id).cloned()
    }

    /// All artifacts, in insertion order.
    pub fn list(&self) -> Vec<EvidenceArtifact> {
        self.artifacts.read().clone()
    }

    /// Record a reviewer disposition. Returns the updated artifact, or
    /// `None` if the id is unknown.
    pub fn set_disposition(&self, id: &ArtifactId, accepted: bool) -> Option<EvidenceArtifact> {
        let mut guard = self.artifacts.write();
        let artifact = guard.iter_mut().find(|a| &a.id == id)?;
        artifact.accepted = Some(accepted);
        Some(artifact.clone())
    }

    /// Manually replace an artifact's obligation links. The stored
    /// `confidence` is cleared — a manual link is a reviewer judgement,
    /// not a scored match. Returns the updated artifact, or `None` if the
    /// id is unknown.
    pub fn relink(
        &self,
        id: &ArtifactId,
        obligation_refs: Vec<ObligationId>,
    ) -> Option<EvidenceArtifact> {
        let mut guard = self.artifacts.write();
        let artifact = guard.iter_mut().find(|a| &a.id == id)?;
        artifact.obligation_refs = obligation_refs;
        artifact.confidence = None;
        Some(artifact.clone())
    }

    /// Explicitly remove an artifact — the only deletion path. Returns the
    /// removed artifact, or `None` if the id is unknown.
    pub fn remove(&self, id: &ArtifactId) -> Option<EvidenceArtifact> {
        let mut guard = self.artifacts.write();
        let idx = guard.iter().position(|a| &a.id == id)?;
        Some(guard.remove(idx))
    }

    /// Snapshot the full artifact list for persistence.
    pub fn snapshot(&self) -> Vec<EvidenceArtifact> {
        self.list()
    }

    /// Replace the full artifact list from a persisted snapshot.
    pub fn restore(&self, artifacts: Vec<EvidenceArtifact>) {
        *self.artifacts.write() = artifacts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccmp_core::{IntegrationSource, Period, Timestamp};
    use chrono::{TimeZone, Utc};

    fn artifact(title: &str) -> EvidenceArtifact {
        let start = Timestamp::from_utc(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let end = Timestamp::from_utc(Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap());
        EvidenceArtifact::new(
            title,
            IntegrationSource::Manual,
            Period::new(start, end).unwrap(),
            vec![],
            None,
        )
    }

    #[test]
    fn test_empty_store_has_no_evidence() {
        let store = EvidenceStore::new();
        assert!(!store.has_evidence());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_flips_has_evidence() {
        let store = EvidenceStore::new();
        store.add_artifact(artifact("one"));
        assert!(store.has_evidence());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicates_are_not_deduplicated() {
        let store = EvidenceStore::new();
        let a = artifact("same title");
        store.add_artifact(a.clone());
        store.add_artifact(a);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_disposition_tristate() {
        let store = EvidenceStore::new();
        let a = artifact("one");
        let id = a.id.clone();
        store.add_artifact(a);

        assert_eq!(store.get(&id).unwrap().accepted, None);
        store.set_disposition(&id, true);
        assert_eq!(store.get(&id).unwrap().accepted, Some(true));
        store.set_disposition(&id, false);
        assert_eq!(store.get(&id).unwrap().accepted, Some(false));
    }

    #[test]
    fn test_disposition_unknown_id() {
        let store = EvidenceStore::new();
        assert!(store.set_disposition(&ArtifactId::new(), true).is_none());
    }

    #[test]
    fn test_relink_clears_confidence() {
        let store = EvidenceStore::new();
        let mut a = artifact("one");
        a.confidence = Some(0.8);
        a.obligation_refs = vec![ObligationId::new("old")];
        let id = a.id.clone();
        store.add_artifact(a);

        let updated = store
            .relink(&id, vec![ObligationId::new("new-1"), ObligationId::new("new-2")])
            .unwrap();
        assert_eq!(updated.obligation_refs.len(), 2);
        assert_eq!(updated.obligation_refs[0], ObligationId::new("new-1"));
        assert!(updated.confidence.is_none());
    }

    #[test]
    fn test_remove_is_the_only_deletion_path() {
        let store = EvidenceStore::new();
        let a = artifact("one");
        let id = a.id.clone();
        store.add_artifact(a);
        store.add_artifact(artifact("two"));

        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(store.len(), 1);
        assert!(store.remove(&id).is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = EvidenceStore::new();
        let handle = store.clone();
        handle.add_artifact(artifact("shared"));
        assert!(store.has_evidence());
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let store = EvidenceStore::new();
        store.add_artifact(artifact("one"));
        store.add_artifact(artifact("two"));

        let snapshot = store.snapshot();
        let fresh = EvidenceStore::new();
        fresh.restore(snapshot);
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh.list()[0].title, "one");
    }
}
