use element_lookup_core::{
    render_text, Catalog, ElementCard, LookupSession, MatchKind, INITIAL_PROMPT, NO_RESULT_TEXT,
    PLACEHOLDER,
};

#[test]
fn repeated_submissions_overwrite_previous_state() {
    let mut session = LookupSession::builtin();

    session.submit_query("li");
    assert_eq!(session.result().map(|r| r.number), Some(3));
    assert_eq!(session.match_kind(), Some(MatchKind::Symbol));
    assert_eq!(session.message(), "Found by symbol.");

    session.submit_query("Fe");
    assert!(session.result().is_none());
    assert!(session.card().is_none());
    assert_eq!(session.match_kind(), None);
    assert_eq!(session.message(), "No element found.");

    session.submit_query("  ");
    assert_eq!(session.message(), "Please enter something.");
    assert_ne!(session.message(), INITIAL_PROMPT);
}

#[test]
fn resubmitting_same_query_is_idempotent() {
    let mut session = LookupSession::builtin();
    session.set_query("helium");

    let first = session.submit();
    let second = session.submit();
    assert_eq!(first, second);
    assert_eq!(session.query(), "helium");
    assert_eq!(session.result().map(|r| r.symbol.as_str()), Some("He"));
}

#[test]
fn helium_card_uses_placeholders_for_missing_values() {
    let helium = &Catalog::builtin().records()[1];
    let card = ElementCard::from_record(helium);

    assert_eq!(card.heading, "Helium (He)");
    assert_eq!(card.subheading, "Atomic # 2 • Mass 4.002602");
    assert_eq!(card.field("Electronegativity"), Some(PLACEHOLDER));
    assert_eq!(card.field("Density (g/cm³)"), Some("0.0001785"));
    assert_eq!(
        card.field("Melting / Boiling °C"),
        Some(format!("{PLACEHOLDER} / -268.93").as_str())
    );
    assert_eq!(card.field("Fun fact"), Some("Noble gas, inert"));
}

#[test]
fn lithium_card_lists_fields_in_display_order() {
    let mut session = LookupSession::builtin();
    session.submit_query("6.9");
    let card = session.card().expect("lithium resolved by mass");

    let labels = card.fields.iter().map(|f| f.label).collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            "Category",
            "Electron config",
            "Electronegativity",
            "Density (g/cm³)",
            "Melting / Boiling °C",
            "Fun fact",
        ]
    );
    assert_eq!(card.field("Melting / Boiling °C"), Some("180.54 / 1342"));
}

#[test]
fn render_text_lays_out_card_or_empty_state() {
    let hydrogen = &Catalog::builtin().records()[0];
    let text = render_text(Some(hydrogen));

    assert!(text.starts_with("Hydrogen (H)\nAtomic # 1 • Mass 1.008\n"));
    assert!(text.contains("Density (g/cm³)       0.00008988"));
    assert!(text.contains("Melting / Boiling °C  -259.14 / -252.87"));
    assert_eq!(render_text(None), NO_RESULT_TEXT);
}
