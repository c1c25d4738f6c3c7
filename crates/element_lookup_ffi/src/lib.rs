//! Flutter-facing bindings for element lookups.

pub mod api;
