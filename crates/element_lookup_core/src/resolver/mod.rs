//! Query resolution against an element catalog.
//!
//! # Responsibility
//! - Map a free-form query to at most one record plus a status message.
//!
//! # Invariants
//! - Rule precedence is fixed: symbol, name, atomic number, atomic mass.
//! - Within a rule the first record in catalog order wins.
//! - "Not found" is a normal outcome, never an error.
//! - Resolution has no side effects beyond a debug log line.

mod numeric;

use crate::catalog::Catalog;
use crate::logging::sanitize_for_log;
use crate::model::element::ElementRecord;
use log::debug;
use serde::Serialize;

/// Absolute tolerance for atomic-mass matches, inclusive.
pub const MASS_TOLERANCE: f64 = 0.5;

const MAX_LOGGED_QUERY_CHARS: usize = 64;

/// Rule that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Symbol,
    Name,
    AtomicNumber,
    AtomicMass,
}

impl MatchKind {
    /// Stable snake_case label, also used as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Name => "name",
            Self::AtomicNumber => "atomic_number",
            Self::AtomicMass => "atomic_mass",
        }
    }
}

/// How a resolution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Query was empty or whitespace-only.
    EmptyQuery,
    Found(MatchKind),
    NotFound,
}

impl ResolutionOutcome {
    /// User-facing status text for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyQuery => "Please enter something.",
            Self::Found(MatchKind::Symbol) => "Found by symbol.",
            Self::Found(MatchKind::Name) => "Found by name.",
            Self::Found(MatchKind::AtomicNumber) => "Found by atomic number.",
            Self::Found(MatchKind::AtomicMass) => "Found by atomic mass.",
            Self::NotFound => "No element found.",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::EmptyQuery => "empty",
            Self::Found(kind) => kind.as_str(),
            Self::NotFound => "not_found",
        }
    }
}

/// Result of [`ElementResolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub record: Option<&'a ElementRecord>,
    pub outcome: ResolutionOutcome,
}

impl<'a> Resolution<'a> {
    fn found(record: &'a ElementRecord, kind: MatchKind) -> Self {
        Self {
            record: Some(record),
            outcome: ResolutionOutcome::Found(kind),
        }
    }

    fn miss(outcome: ResolutionOutcome) -> Self {
        Self {
            record: None,
            outcome,
        }
    }

    pub fn message(&self) -> &'static str {
        self.outcome.message()
    }

    /// Rule that matched, if any.
    pub fn match_kind(&self) -> Option<MatchKind> {
        match self.outcome {
            ResolutionOutcome::Found(kind) => Some(kind),
            _ => None,
        }
    }

    /// `(record, message)` pair for callers that only render.
    pub fn into_pair(self) -> (Option<&'a ElementRecord>, &'static str) {
        (self.record, self.outcome.message())
    }
}

/// Resolves queries against a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct ElementResolver<'a> {
    catalog: &'a Catalog,
}

impl ElementResolver<'static> {
    /// Resolver over [`Catalog::builtin`].
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'a> ElementResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolves `raw` to at most one record.
    ///
    /// # Contract
    /// - Leading/trailing whitespace and byte-order marks are ignored; blank
    ///   input yields
    ///   [`ResolutionOutcome::EmptyQuery`].
    /// - Symbol and name are compared case-insensitively before any numeric
    ///   interpretation.
    /// - A whole number is tried as an atomic number first; if that misses,
    ///   any number is tried against atomic masses within [`MASS_TOLERANCE`].
    pub fn resolve(&self, raw: &str) -> Resolution<'a> {
        let resolution = self.resolve_trimmed(trim_query(raw));
        debug!(
            "event=element_resolve module=resolver status=ok outcome={} number={} query={}",
            resolution.outcome.label(),
            resolution
                .record
                .map(|record| record.number.to_string())
                .unwrap_or_else(|| "none".to_string()),
            sanitize_for_log(raw, MAX_LOGGED_QUERY_CHARS)
        );
        resolution
    }

    fn resolve_trimmed(&self, query: &str) -> Resolution<'a> {
        if query.is_empty() {
            return Resolution::miss(ResolutionOutcome::EmptyQuery);
        }

        let folded = query.to_lowercase();
        if let Some(record) = self.find(|record| record.symbol.to_lowercase() == folded) {
            return Resolution::found(record, MatchKind::Symbol);
        }
        if let Some(record) = self.find(|record| record.name.to_lowercase() == folded) {
            return Resolution::found(record, MatchKind::Name);
        }

        if let Some(value) = numeric::parse_query_number(query) {
            if let Some(whole) = numeric::as_whole_number(value) {
                if let Some(record) = self.find(|record| u64::from(record.number) == whole) {
                    return Resolution::found(record, MatchKind::AtomicNumber);
                }
            }
            if let Some(record) =
                self.find(|record| (record.atomic_mass - value).abs() <= MASS_TOLERANCE)
            {
                return Resolution::found(record, MatchKind::AtomicMass);
            }
        }

        Resolution::miss(ResolutionOutcome::NotFound)
    }

    fn find(&self, predicate: impl Fn(&ElementRecord) -> bool) -> Option<&'a ElementRecord> {
        self.catalog.iter().find(|record| predicate(*record))
    }
}

/// Strips surrounding whitespace, including the U+FEFF byte-order mark.
fn trim_query(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
