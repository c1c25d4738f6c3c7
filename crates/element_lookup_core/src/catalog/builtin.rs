//! Compiled-in sample element set.

use crate::model::element::ElementRecord;

/// Returns the built-in records in declaration order.
pub(crate) fn sample_records() -> Vec<ElementRecord> {
    vec![
        record(
            1,
            "H",
            "Hydrogen",
            1.008,
            "Nonmetal",
            "1s1",
            [Some(2.2), Some(8.988e-05), Some(-259.14), Some(-252.87)],
            "Lightest element",
        ),
        record(
            2,
            "He",
            "Helium",
            4.002602,
            "Noble gas",
            "1s2",
            [None, Some(0.0001785), None, Some(-268.93)],
            "Noble gas, inert",
        ),
        record(
            3,
            "Li",
            "Lithium",
            6.94,
            "Alkali metal",
            "[He] 2s1",
            [Some(0.98), Some(0.534), Some(180.54), Some(1342.0)],
            "Lightest metal",
        ),
    ]
}

/// Measurements are `[electronegativity, density, melting_c, boiling_c]`.
#[allow(clippy::too_many_arguments)]
fn record(
    number: u32,
    symbol: &str,
    name: &str,
    atomic_mass: f64,
    category: &str,
    electron_configuration: &str,
    measurements: [Option<f64>; 4],
    summary: &str,
) -> ElementRecord {
    let [electronegativity, density, melting_c, boiling_c] = measurements;
    ElementRecord {
        number,
        symbol: symbol.to_string(),
        name: name.to_string(),
        atomic_mass,
        category: category.to_string(),
        electron_configuration: electron_configuration.to_string(),
        electronegativity,
        density,
        melting_c,
        boiling_c,
        summary: summary.to_string(),
    }
}
