//! # ccmp-rasci — Responsibility Assignment
//!
//! Derives concrete RASCI assignments for every control domain from the key
//! personnel directory. A fixed template per domain names abstract role
//! keys; adoption resolves each key through the directory and emits one
//! assignment per requested letter for every role that has a person.
//!
//! Adoption is all-or-nothing replacement: each run rebuilds the full
//! 12-domain assignment map and swaps it in atomically. There is no merge
//! path — editing key personnel and re-adopting is the only way to update
//! assignments, which keeps the derived state trivially consistent with the
//! directory.

pub mod directory;
pub mod store;
pub mod template;

pub use directory::{RoleDirectory, RoleEntry};
pub use store::{Assignment, GroupedRasci, RasciSnapshot, RasciStore};
pub use template::template_for;
