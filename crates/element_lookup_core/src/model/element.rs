//! Chemical element record.
//!
//! # Responsibility
//! - Hold the properties shown for a matched element.
//! - Validate a single record in isolation.
//!
//! # Invariants
//! - `number` is a positive atomic number.
//! - `atomic_mass` is finite and positive.
//! - Optional measurements are finite when present.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One entry of the element reference set.
///
/// Serialized with snake_case wire names; absent measurements are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Atomic number, unique within a catalog.
    pub number: u32,
    /// Chemical symbol, unique case-insensitively.
    pub symbol: String,
    /// English element name, unique case-insensitively.
    pub name: String,
    /// Standard atomic weight in daltons.
    pub atomic_mass: f64,
    pub category: String,
    pub electron_configuration: String,
    /// Pauling scale.
    pub electronegativity: Option<f64>,
    /// g/cm³ at standard conditions.
    pub density: Option<f64>,
    /// Melting point in °C.
    pub melting_c: Option<f64>,
    /// Boiling point in °C.
    pub boiling_c: Option<f64>,
    /// Short free-form fact shown with the record.
    pub summary: String,
}

/// Reasons a single record is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValidationError {
    /// Atomic numbers start at 1.
    ZeroNumber,
    BlankSymbol,
    BlankName,
    InvalidAtomicMass(f64),
    /// An optional measurement is present but not a finite number.
    NonFiniteMeasurement { field: &'static str },
}

impl Display for ElementValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroNumber => write!(f, "atomic number must be >= 1"),
            Self::BlankSymbol => write!(f, "symbol cannot be blank"),
            Self::BlankName => write!(f, "name cannot be blank"),
            Self::InvalidAtomicMass(value) => {
                write!(f, "atomic_mass must be finite and > 0, got {value}")
            }
            Self::NonFiniteMeasurement { field } => {
                write!(f, "{field} must be finite when present")
            }
        }
    }
}

impl Error for ElementValidationError {}

impl ElementRecord {
    /// Validates field-level invariants of this record.
    ///
    /// Cross-record uniqueness is checked by [`crate::catalog::Catalog::new`].
    pub fn validate(&self) -> Result<(), ElementValidationError> {
        if self.number == 0 {
            return Err(ElementValidationError::ZeroNumber);
        }
        if self.symbol.trim().is_empty() {
            return Err(ElementValidationError::BlankSymbol);
        }
        if self.name.trim().is_empty() {
            return Err(ElementValidationError::BlankName);
        }
        if !self.atomic_mass.is_finite() || self.atomic_mass <= 0.0 {
            return Err(ElementValidationError::InvalidAtomicMass(self.atomic_mass));
        }

        let measurements = [
            ("electronegativity", self.electronegativity),
            ("density", self.density),
            ("melting_c", self.melting_c),
            ("boiling_c", self.boiling_c),
        ];
        for (field, value) in measurements {
            if matches!(value, Some(v) if !v.is_finite()) {
                return Err(ElementValidationError::NonFiniteMeasurement { field });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementRecord, ElementValidationError};

    fn carbon() -> ElementRecord {
        ElementRecord {
            number: 6,
            symbol: "C".to_string(),
            name: "Carbon".to_string(),
            atomic_mass: 12.011,
            category: "Nonmetal".to_string(),
            electron_configuration: "[He] 2s2 2p2".to_string(),
            electronegativity: Some(2.55),
            density: Some(2.267),
            melting_c: None,
            boiling_c: Some(4827.0),
            summary: "Basis of organic chemistry".to_string(),
        }
    }

    #[test]
    fn validate_accepts_record_with_missing_measurements() {
        assert_eq!(carbon().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_number_and_blank_strings() {
        let mut record = carbon();
        record.number = 0;
        assert_eq!(record.validate(), Err(ElementValidationError::ZeroNumber));

        let mut record = carbon();
        record.symbol = "  ".to_string();
        assert_eq!(record.validate(), Err(ElementValidationError::BlankSymbol));

        let mut record = carbon();
        record.name = String::new();
        assert_eq!(record.validate(), Err(ElementValidationError::BlankName));
    }

    #[test]
    fn validate_rejects_bad_mass_and_non_finite_measurement() {
        let mut record = carbon();
        record.atomic_mass = -1.0;
        assert!(matches!(
            record.validate(),
            Err(ElementValidationError::InvalidAtomicMass(_))
        ));

        let mut record = carbon();
        record.density = Some(f64::NAN);
        assert_eq!(
            record.validate(),
            Err(ElementValidationError::NonFiniteMeasurement { field: "density" })
        );
    }
}
