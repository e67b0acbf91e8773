//! # Persistence Boundary
//!
//! Each store's full state is written as one JSON document keyed by a
//! stable store name, and rehydrated at context construction. There is no
//! incremental persistence — a store saves and loads as a unit, mirroring
//! the atomic-replacement semantics the stores have in memory.
//!
//! The setup store's visited collection is a set in memory and an ordered
//! list on disk; the conversion is the explicit typed pair in
//! [`ccmp_setup::store`], applied here at the boundary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ccmp_evidence::{EvidenceArtifact, Obligation};
use ccmp_rasci::{RasciSnapshot, RoleDirectory};
use ccmp_setup::SetupSnapshot;

use crate::context::AppContext;
use crate::registry::{CompanyProfile, TimetableSnapshot};

/// Store name for the evidence artifact list.
pub const EVIDENCE_STORE: &str = "evidence";
/// Store name for the adopted RASCI state.
pub const RASCI_STORE: &str = "rasci";
/// Store name for the setup visited-step state.
pub const SETUP_STORE: &str = "setup";
/// Store name for the thin registries (integrations, profile, directory,
/// obligations, timetable).
pub const REGISTRY_STORE: &str = "registry";

/// Error at the persistence boundary.
#[derive(Error, Debug)]
pub enum PersistError {
    /// Filesystem failure.
    #[error("state io error: {0}")]
    Io(#[from] std::io::Error),

    /// Document failed to serialize or parse.
    #[error("state serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A directory of per-store JSON documents.
#[derive(Debug, Clone)]
pub struct StateDir {
    root: PathBuf,
}

impl StateDir {
    /// A state directory rooted at `root`. Created lazily on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The document path for a store name.
    pub fn path_for(&self, store: &str) -> PathBuf {
        self.root.join(format!("{store}.json"))
    }

    /// Write one store's state.
    pub fn save<T: Serialize>(&self, store: &str, state: &T) -> Result<(), PersistError> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_vec_pretty(state)?;
        fs::write(self.path_for(store), json)?;
        Ok(())
    }

    /// Read one store's state. A missing document is `None`, not an error —
    /// first launch has nothing on disk.
    pub fn load<T: DeserializeOwned>(&self, store: &str) -> Result<Option<T>, PersistError> {
        let path = self.path_for(store);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// The root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Persisted form of the thin registries, bundled into one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Connected integration feeds.
    #[serde(default)]
    pub connected: Vec<ccmp_core::IntegrationSource>,
    /// Company profile.
    #[serde(default)]
    pub profile: CompanyProfile,
    /// Key personnel directory.
    #[serde(default)]
    pub directory: RoleDirectory,
    /// Seeded obligations.
    #[serde(default)]
    pub obligations: Vec<Obligation>,
    /// Timetable state.
    #[serde(default)]
    pub timetable: TimetableSnapshot,
}

impl AppContext {
    /// Write every store to the state directory.
    pub fn save_to(&self, dir: &StateDir) -> Result<(), PersistError> {
        dir.save::<Vec<EvidenceArtifact>>(EVIDENCE_STORE, &self.evidence.snapshot())?;
        dir.save::<RasciSnapshot>(RASCI_STORE, &self.rasci.snapshot())?;
        dir.save::<SetupSnapshot>(SETUP_STORE, &self.setup.snapshot())?;
        dir.save::<RegistrySnapshot>(
            REGISTRY_STORE,
            &RegistrySnapshot {
                connected: self.integrations.snapshot(),
                profile: self.profile.get(),
                directory: self.directory.get(),
                obligations: self.obligations.list(),
                timetable: self.timetable.snapshot(),
            },
        )?;
        tracing::debug!(root = %dir.root().display(), "application state saved");
        Ok(())
    }

    /// Rehydrate a context from the state directory. Stores with no
    /// persisted document start empty.
    pub fn load_from(dir: &StateDir) -> Result<Self, PersistError> {
        let ctx = Self::new();

        if let Some(artifacts) = dir.load::<Vec<EvidenceArtifact>>(EVIDENCE_STORE)? {
            ctx.evidence.restore(artifacts);
        }
        if let Some(snapshot) = dir.load::<RasciSnapshot>(RASCI_STORE)? {
            ctx.rasci.restore(snapshot);
        }
        if let Some(snapshot) = dir.load::<SetupSnapshot>(SETUP_STORE)? {
            ctx.setup.restore(snapshot);
        }
        if let Some(snapshot) = dir.load::<RegistrySnapshot>(REGISTRY_STORE)? {
            ctx.integrations.restore(snapshot.connected);
            ctx.profile.set(snapshot.profile);
            ctx.directory.update(|d| *d = snapshot.directory);
            ctx.obligations.seed(snapshot.obligations);
            ctx.timetable.restore(snapshot.timetable);
        }

        tracing::debug!(root = %dir.root().display(), "application state loaded");
        Ok(ctx)
    }
}
