//! Session-scoped project state.
//!
//! # Responsibility
//! - Own the ordered project list for one session.
//! - Expose index- and ID-addressed state transitions.
//!
//! # Invariants
//! - Out-of-range indices and unknown IDs are reported as `StoreError`,
//!   never silently applied elsewhere.

pub mod project_store;
