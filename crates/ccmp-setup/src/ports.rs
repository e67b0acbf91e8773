//! # Setup Read Ports
//!
//! The calculator's only window onto the rest of the system. Each
//! completable step's predicate is exactly one method here; the application
//! context implements the trait over its concrete stores, and tests
//! implement it with a fake.
//!
//! Every method is a cheap, side-effect-free snapshot read of
//! already-committed state.

/// Read-only completion predicates, one per completable setup step.
pub trait SetupReadPorts: Send + Sync {
    /// At least one integration feed is connected.
    fn integrations_connected(&self) -> bool;

    /// The company profile is filled in (legal name, ABN, footprint).
    fn company_profile_complete(&self) -> bool;

    /// At least one key personnel role is assigned.
    fn people_recorded(&self) -> bool;

    /// Default RASCI assignments have been adopted.
    fn rasci_adopted(&self) -> bool;

    /// The obligation register is non-empty.
    fn obligations_seeded(&self) -> bool;

    /// The compliance timetable has been generated.
    fn timetable_generated(&self) -> bool;

    /// The evidence store holds at least one artifact.
    fn has_evidence(&self) -> bool;
}
