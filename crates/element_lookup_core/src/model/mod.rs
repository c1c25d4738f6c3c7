//! Element reference data model.
//!
//! # Responsibility
//! - Define the immutable record shape every lookup resolves to.
//!
//! # Invariants
//! - Records are read-only after the catalog is built.
//! - Absent measurements are `None`, never zero.

pub mod element;
