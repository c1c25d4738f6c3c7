//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose lookup and display data to Dart via FRB as plain envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Absent measurements arrive pre-rendered as the shared placeholder.

use element_lookup_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, resolve,
    ElementCard, ElementRecord, INITIAL_PROMPT, NO_RESULT_TEXT,
};

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Status text to show before the first lookup.
#[flutter_rust_bridge::frb(sync)]
pub fn initial_prompt() -> String {
    INITIAL_PROMPT.to_owned()
}

/// Text for the result panel when nothing is selected.
#[flutter_rust_bridge::frb(sync)]
pub fn empty_result_text() -> String {
    NO_RESULT_TEXT.to_owned()
}

/// One labelled value of the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFieldDto {
    pub label: String,
    pub value: String,
}

/// Result panel content for a matched element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementCardDto {
    pub number: u32,
    pub symbol: String,
    pub name: String,
    /// `"{name} ({symbol})"`.
    pub heading: String,
    /// `"Atomic # {number} • Mass {atomic_mass}"`.
    pub subheading: String,
    /// Ordered fields with placeholders applied.
    pub fields: Vec<CardFieldDto>,
}

/// Response envelope for one lookup submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    /// Whether an element matched.
    pub found: bool,
    /// `symbol|name|atomic_number|atomic_mass`, `None` on miss.
    pub match_kind: Option<String>,
    /// Status line for the input panel.
    pub message: String,
    pub element: Option<ElementCardDto>,
}

/// Resolves one submitted query against the built-in element set.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; misses and blank input are normal responses.
#[flutter_rust_bridge::frb(sync)]
pub fn lookup_element(query: String) -> LookupResponse {
    let resolution = resolve(query.as_str());
    LookupResponse {
        found: resolution.record.is_some(),
        match_kind: resolution
            .match_kind()
            .map(|kind| kind.as_str().to_owned()),
        message: resolution.message().to_owned(),
        element: resolution.record.map(to_card_dto),
    }
}

fn to_card_dto(record: &ElementRecord) -> ElementCardDto {
    let card = ElementCard::from_record(record);
    ElementCardDto {
        number: record.number,
        symbol: record.symbol.clone(),
        name: record.name.clone(),
        heading: card.heading,
        subheading: card.subheading,
        fields: card
            .fields
            .into_iter()
            .map(|field| CardFieldDto {
                label: field.label.to_owned(),
                value: field.value,
            })
            .collect(),
    }
}
