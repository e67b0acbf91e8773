//! # ccmp-core — Foundational Types for CoreComply
//!
//! This crate is the bedrock of the CoreComply compliance core. It defines
//! the type-system primitives shared by every other crate in the workspace;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ArtifactId`,
//!    `ObligationId`, `PersonId`, `IntegrationRef` — all newtypes with
//!    explicit constructors. No bare strings for identifiers.
//!
//! 2. **Single `ControlDomain` enum.** One definition, 12 variants,
//!    exhaustive `match` everywhere. Adding a domain forces every consumer
//!    to handle it.
//!
//! 3. **Closed role taxonomy.** `RoleKey` (13 organizational roles) and
//!    `RasciRole` (R/A/S/C/I letters) are enums, not strings — a template
//!    cannot reference a role that does not exist.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    seconds precision; `Period` is a half-open interval over it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ccmp-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod domain;
pub mod error;
pub mod identity;
pub mod jurisdiction;
pub mod roles;
pub mod source;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use domain::{ControlDomain, CONTROL_DOMAIN_COUNT};
pub use error::CcmpError;
pub use identity::{ArtifactId, IntegrationRef, ObligationId, PersonId};
pub use jurisdiction::{StateFootprint, StateJurisdiction, STATE_COUNT};
pub use roles::{RasciRole, RoleKey, ROLE_KEY_COUNT};
pub use source::{IntegrationSource, ADAPTER_SOURCES};
pub use temporal::{Period, Timestamp};
