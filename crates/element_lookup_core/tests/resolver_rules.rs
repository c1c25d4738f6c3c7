use element_lookup_core::{resolve, Catalog, ElementResolver, MatchKind, ResolutionOutcome};

fn symbol_of(query: &str) -> Option<String> {
    resolve(query).record.map(|record| record.symbol.clone())
}

#[test]
fn every_symbol_resolves_in_any_case() {
    for record in Catalog::builtin() {
        for query in [
            record.symbol.clone(),
            record.symbol.to_lowercase(),
            record.symbol.to_uppercase(),
        ] {
            let resolution = resolve(&query);
            assert_eq!(resolution.record, Some(record), "query `{query}`");
            assert_eq!(resolution.message(), "Found by symbol.");
        }
    }
}

#[test]
fn every_name_resolves_in_any_case() {
    for record in Catalog::builtin() {
        for query in [
            record.name.clone(),
            record.name.to_lowercase(),
            record.name.to_uppercase(),
        ] {
            let resolution = resolve(&query);
            assert_eq!(resolution.record, Some(record), "query `{query}`");
            assert_eq!(resolution.message(), "Found by name.");
        }
    }
}

#[test]
fn every_atomic_number_resolves() {
    for record in Catalog::builtin() {
        let resolution = resolve(&record.number.to_string());
        assert_eq!(resolution.record, Some(record));
        assert_eq!(resolution.message(), "Found by atomic number.");
    }
}

#[test]
fn every_atomic_mass_resolves() {
    for record in Catalog::builtin() {
        let resolution = resolve(&record.atomic_mass.to_string());
        assert_eq!(resolution.record, Some(record));
        assert_eq!(resolution.message(), "Found by atomic mass.");
    }
}

#[test]
fn blank_queries_ask_for_input() {
    for query in ["", "   ", "\t\n", "\u{feff}", " \u{feff}\u{a0} "] {
        let resolution = resolve(query);
        assert_eq!(resolution.record, None);
        assert_eq!(resolution.outcome, ResolutionOutcome::EmptyQuery);
        assert_eq!(resolution.message(), "Please enter something.");
    }
}

#[test]
fn unknown_query_is_not_found() {
    let resolution = resolve("Xx");
    assert_eq!(resolution.record, None);
    assert_eq!(resolution.message(), "No element found.");
}

#[test]
fn sample_set_scenarios() {
    let cases = [
        ("Fe", None, "No element found."),
        ("hydrogen", Some("H"), "Found by name."),
        ("26", None, "No element found."),
        ("2", Some("He"), "Found by atomic number."),
        ("6.9", Some("Li"), "Found by atomic mass."),
        ("li", Some("Li"), "Found by symbol."),
    ];

    for (query, symbol, message) in cases {
        let resolution = resolve(query);
        assert_eq!(
            resolution.record.map(|record| record.symbol.as_str()),
            symbol,
            "query `{query}`"
        );
        assert_eq!(resolution.message(), message, "query `{query}`");
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(symbol_of("  he \n"), Some("He".to_string()));
    assert_eq!(symbol_of("\tLithium "), Some("Li".to_string()));
    assert_eq!(symbol_of("\u{feff}Li"), Some("Li".to_string()));
}

#[test]
fn whole_float_matches_atomic_number() {
    let resolution = resolve("3.0");
    assert_eq!(resolution.match_kind(), Some(MatchKind::AtomicNumber));
    assert_eq!(symbol_of("3.0"), Some("Li".to_string()));
}

#[test]
fn integer_falls_through_to_mass_when_no_number_matches() {
    // No element 4 in the sample set; helium's mass is 4.0026.
    let resolution = resolve("4");
    assert_eq!(resolution.match_kind(), Some(MatchKind::AtomicMass));
    assert_eq!(symbol_of("4"), Some("He".to_string()));

    // Lithium (6.94) is within tolerance of 7 but not of 7.5.
    assert_eq!(resolve("7").outcome, ResolutionOutcome::Found(MatchKind::AtomicMass));
    assert_eq!(resolve("7.5").outcome, ResolutionOutcome::NotFound);
}

#[test]
fn radix_prefixed_integers_are_numbers() {
    assert_eq!(symbol_of("0x2"), Some("He".to_string()));
    assert_eq!(resolve("0b11").match_kind(), Some(MatchKind::AtomicNumber));
}

#[test]
fn non_numeric_and_non_finite_queries_are_not_found() {
    for query in ["NaN", "Infinity", "-inf", "1e999", "two", "2 3"] {
        assert_eq!(
            resolve(query).outcome,
            ResolutionOutcome::NotFound,
            "query `{query}`"
        );
    }
}

#[test]
fn resolver_borrows_custom_catalog() {
    let catalog = Catalog::from_json(
        r#"[{"number": 26, "symbol": "Fe", "name": "Iron", "atomic_mass": 55.845,
             "category": "Transition metal", "electron_configuration": "[Ar] 3d6 4s2",
             "electronegativity": 1.83, "density": 7.874, "melting_c": 1538,
             "boiling_c": 2862, "summary": "Most common element on Earth by mass"}]"#,
    )
    .expect("valid catalog json");
    let resolver = ElementResolver::new(&catalog);

    assert_eq!(resolver.resolve("iron").match_kind(), Some(MatchKind::Name));
    assert_eq!(resolver.resolve("26").match_kind(), Some(MatchKind::AtomicNumber));
    assert_eq!(resolver.resolve("55.845").match_kind(), Some(MatchKind::AtomicMass));
    assert_eq!(resolver.resolve("H").outcome, ResolutionOutcome::NotFound);
}
