//! Per-interaction query state.
//!
//! # Responsibility
//! - Track the pending query, last result and last status message for one
//!   input surface.
//!
//! # Invariants
//! - Each submission overwrites result and message; nothing carries over.
//! - Editing the query never changes result or message until submission.

use crate::model::element::ElementRecord;
use crate::render::ElementCard;
use crate::resolver::{ElementResolver, MatchKind, Resolution};

/// Status shown before the first submission.
pub const INITIAL_PROMPT: &str =
    "Type a symbol (Fe), name (iron), atomic number (26), or atomic mass (55.845)";

/// Query state owned by a presentation surface.
#[derive(Debug, Clone)]
pub struct LookupSession<'a> {
    resolver: ElementResolver<'a>,
    query: String,
    last: Option<Resolution<'a>>,
}

impl LookupSession<'static> {
    /// Session over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(ElementResolver::builtin())
    }
}

impl<'a> LookupSession<'a> {
    pub fn new(resolver: ElementResolver<'a>) -> Self {
        Self {
            resolver,
            query: String::new(),
            last: None,
        }
    }

    /// Current text of the input field.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the pending query without resolving it.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Resolves the pending query and records the outcome.
    pub fn submit(&mut self) -> Resolution<'a> {
        let resolution = self.resolver.resolve(&self.query);
        self.last = Some(resolution);
        resolution
    }

    /// Shorthand for [`set_query`](Self::set_query) then [`submit`](Self::submit).
    pub fn submit_query(&mut self, text: impl Into<String>) -> Resolution<'a> {
        self.set_query(text);
        self.submit()
    }

    /// Record from the last submission.
    pub fn result(&self) -> Option<&'a ElementRecord> {
        self.last.and_then(|resolution| resolution.record)
    }

    pub fn match_kind(&self) -> Option<MatchKind> {
        self.last.and_then(|resolution| resolution.match_kind())
    }

    /// Status from the last submission, or [`INITIAL_PROMPT`] before any.
    pub fn message(&self) -> &'static str {
        self.last
            .map(|resolution| resolution.message())
            .unwrap_or(INITIAL_PROMPT)
    }

    /// Display model of the current result.
    pub fn card(&self) -> Option<ElementCard> {
        self.result().map(ElementCard::from_record)
    }
}
