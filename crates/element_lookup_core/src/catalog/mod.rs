//! Read-only element record set.
//!
//! # Responsibility
//! - Own the ordered records a resolver searches.
//! - Enforce cross-record uniqueness at construction time.
//!
//! # Invariants
//! - `number` is unique.
//! - `symbol` and `name` are unique under case-insensitive comparison.
//! - Records keep declaration order; lookups that can match several records
//!   return the first in this order.
//! - A catalog is never mutated after construction.

mod builtin;

use crate::model::element::{ElementRecord, ElementValidationError};
use log::{error, info};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

// An invalid built-in set degrades to an empty catalog: every lookup misses.
static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    match Catalog::new(builtin::sample_records()) {
        Ok(catalog) => {
            info!(
                "event=catalog_load module=catalog status=ok source=builtin records={}",
                catalog.len()
            );
            catalog
        }
        Err(err) => {
            error!("event=catalog_load module=catalog status=error source=builtin error={err}");
            Catalog {
                records: Vec::new(),
            }
        }
    }
});

/// Result type for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog construction error.
#[derive(Debug)]
pub enum CatalogError {
    /// A catalog needs at least one record.
    Empty,
    InvalidRecord {
        index: usize,
        source: ElementValidationError,
    },
    DuplicateNumber(u32),
    DuplicateSymbol(String),
    DuplicateName(String),
    /// JSON input could not be decoded into records.
    Parse(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "catalog must contain at least one record"),
            Self::InvalidRecord { index, source } => {
                write!(f, "invalid record at index {index}: {source}")
            }
            Self::DuplicateNumber(number) => write!(f, "duplicate atomic number {number}"),
            Self::DuplicateSymbol(symbol) => write!(f, "duplicate symbol `{symbol}`"),
            Self::DuplicateName(name) => write!(f, "duplicate name `{name}`"),
            Self::Parse(err) => write!(f, "invalid catalog json: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRecord { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Ordered, immutable collection of element records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<ElementRecord>,
}

impl Catalog {
    /// Builds a catalog after validating each record and uniqueness.
    ///
    /// # Errors
    /// - [`CatalogError::Empty`] for an empty list.
    /// - [`CatalogError::InvalidRecord`] for the first record failing
    ///   [`ElementRecord::validate`].
    /// - `Duplicate*` for the first repeated number, symbol or name.
    pub fn new(records: Vec<ElementRecord>) -> CatalogResult<Self> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut numbers = HashSet::new();
        let mut symbols = HashSet::new();
        let mut names = HashSet::new();

        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|source| CatalogError::InvalidRecord { index, source })?;
            if !numbers.insert(record.number) {
                return Err(CatalogError::DuplicateNumber(record.number));
            }
            if !symbols.insert(record.symbol.to_lowercase()) {
                return Err(CatalogError::DuplicateSymbol(record.symbol.clone()));
            }
            if !names.insert(record.name.to_lowercase()) {
                return Err(CatalogError::DuplicateName(record.name.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Decodes a JSON array of records and validates it like [`Catalog::new`].
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let records: Vec<ElementRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Returns the compiled-in sample set (hydrogen, helium, lithium).
    ///
    /// Built once on first use and shared by every caller.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Records in declaration order.
    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ElementRecord;
    type IntoIter = std::slice::Iter<'a, ElementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
