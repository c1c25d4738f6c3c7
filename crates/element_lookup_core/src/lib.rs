//! Core element lookup logic.
//! This crate is the single source of truth for resolution semantics.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod render;
pub mod resolver;
pub mod session;

pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use logging::{default_log_level, init_logging, logging_status, sanitize_for_log, LoggingError};
pub use model::element::{ElementRecord, ElementValidationError};
pub use render::{render_text, CardField, ElementCard, NO_RESULT_TEXT, PLACEHOLDER};
pub use resolver::{ElementResolver, MatchKind, Resolution, ResolutionOutcome, MASS_TOLERANCE};
pub use session::{LookupSession, INITIAL_PROMPT};

/// Resolves `raw` against the built-in catalog.
pub fn resolve(raw: &str) -> Resolution<'static> {
    ElementResolver::builtin().resolve(raw)
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
