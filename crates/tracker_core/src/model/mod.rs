//! Project tracking domain model.
//!
//! # Responsibility
//! - Define the project/subcategory records owned by the session store.
//! - Own wire-level conventions (ISO dates, integer progress, UUID ids).
//!
//! # Invariants
//! - Every project and subcategory carries a stable generated ID.
//! - Progress never exceeds 100.

pub mod deadline;
pub mod project;
pub mod subcategory;
