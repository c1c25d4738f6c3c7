//! Display model for a resolved element.
//!
//! # Responsibility
//! - Turn a record into labelled, display-ready strings.
//! - Own the placeholder and empty-result texts every surface shares.
//!
//! # Invariants
//! - Absent measurements render as [`PLACEHOLDER`], never as `0`.
//! - Field order is stable.

use crate::model::element::ElementRecord;

/// Shown in place of an absent measurement.
pub const PLACEHOLDER: &str = "—";

/// Shown when no element is selected.
pub const NO_RESULT_TEXT: &str = "No result yet";

/// One labelled value of an [`ElementCard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

/// Display-ready projection of an [`ElementRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementCard {
    /// `"{name} ({symbol})"`.
    pub heading: String,
    /// `"Atomic # {number} • Mass {atomic_mass}"`.
    pub subheading: String,
    pub fields: Vec<CardField>,
}

impl ElementCard {
    pub fn from_record(record: &ElementRecord) -> Self {
        let fields = vec![
            field("Category", record.category.clone()),
            field("Electron config", record.electron_configuration.clone()),
            field("Electronegativity", format_optional(record.electronegativity)),
            field("Density (g/cm³)", format_optional(record.density)),
            field(
                "Melting / Boiling °C",
                format!(
                    "{} / {}",
                    format_optional(record.melting_c),
                    format_optional(record.boiling_c)
                ),
            ),
            field("Fun fact", record.summary.clone()),
        ];

        Self {
            heading: format!("{} ({})", record.name, record.symbol),
            subheading: format!(
                "Atomic # {} • Mass {}",
                record.number,
                format_number(record.atomic_mass)
            ),
            fields,
        }
    }

    /// Looks up a field value by its label.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

/// Formats a measurement, or [`PLACEHOLDER`] when absent.
pub fn format_optional(value: Option<f64>) -> String {
    value
        .map(format_number)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Shortest round-trip form: `1342`, `6.94`, `0.00008988`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Plain-text layout of a result surface.
///
/// Returns [`NO_RESULT_TEXT`] when `record` is `None`.
pub fn render_text(record: Option<&ElementRecord>) -> String {
    let Some(record) = record else {
        return NO_RESULT_TEXT.to_string();
    };

    let card = ElementCard::from_record(record);
    let width = card
        .fields
        .iter()
        .map(|field| field.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n{}\n", card.heading, card.subheading);
    for field in &card.fields {
        let pad = width - field.label.chars().count();
        out.push_str(&format!(
            "  {}{}  {}\n",
            field.label,
            " ".repeat(pad),
            field.value
        ));
    }
    out
}

fn field(label: &'static str, value: String) -> CardField {
    CardField { label, value }
}

#[cfg(test)]
mod tests {
    use super::{format_number, format_optional, render_text, NO_RESULT_TEXT, PLACEHOLDER};

    #[test]
    fn numbers_use_shortest_form() {
        assert_eq!(format_number(1342.0), "1342");
        assert_eq!(format_number(8.988e-05), "0.00008988");
        assert_eq!(format_number(-259.14), "-259.14");
    }

    #[test]
    fn absent_value_uses_placeholder() {
        assert_eq!(format_optional(None), PLACEHOLDER);
        assert_eq!(format_optional(Some(0.0)), "0");
    }

    #[test]
    fn render_text_without_record_is_empty_state() {
        assert_eq!(render_text(None), NO_RESULT_TEXT);
    }
}
