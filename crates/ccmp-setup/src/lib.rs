//! # ccmp-setup — Setup Completion
//!
//! The setup wizard's derived-state core: eight ordered steps, each with a
//! live completion predicate read through an injected port, an overall
//! percentage, and advisory dependency nudges.
//!
//! ## Derived, Never Stored
//!
//! Step completion is not persisted anywhere. Every predicate is a live
//! read against another store's current state, so completion "transitions"
//! happen implicitly whenever upstream state changes. The only state this
//! crate owns is the set of steps the user has visited.
//!
//! ## Ports, Not Stores
//!
//! The calculator never touches a concrete store type. It reads through
//! [`SetupReadPorts`], a small read-only trait the application context
//! implements — which also makes the calculator trivially testable with a
//! fake.

pub mod calculator;
pub mod ports;
pub mod step;
pub mod store;

pub use calculator::SetupCalculator;
pub use ports::SetupReadPorts;
pub use step::{step_definitions, StepDef, StepKey, COMPLETABLE_STEP_COUNT, STEP_COUNT};
pub use store::{ordered_list_to_visited, visited_to_ordered_list, SetupSnapshot, SetupStore};
