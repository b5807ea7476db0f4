use crate::view::SectionPosition;

use super::*;

fn sections() -> Vec<SectionPosition> {
    [("intro", 0.0), ("week-1", 800.0), ("week-2", 1600.0)]
        .into_iter()
        .map(|(id, top)| SectionPosition { id: id.into(), top })
        .collect()
}

#[test]
fn toggle_section() {
    let config = ViewConfig::default();
    let mut state = ViewState::default();

    assert!(state.apply(&ViewEvent::ToggleSection(2), &config));
    assert_eq!(state.expanded_section, Some(2));

    // Another section replaces the expanded one.
    assert!(state.apply(&ViewEvent::ToggleSection(0), &config));
    assert_eq!(state.expanded_section, Some(0));

    assert!(state.apply(&ViewEvent::ToggleSection(0), &config));
    assert_eq!(state.expanded_section, None);
}

#[test]
fn toggle_accordion() {
    let config = ViewConfig::default();
    let mut state = ViewState::default();

    state.apply(&ViewEvent::ToggleAccordion("faq".into()), &config);
    assert_eq!(state.expanded_accordion.as_deref(), Some("faq"));
    state.apply(&ViewEvent::ToggleAccordion("faq".into()), &config);
    assert_eq!(state.expanded_accordion, None);
}

#[test]
fn scroll_spy() {
    let config = ViewConfig::default();
    let mut state = ViewState::default();
    let scrolled = |offset| ViewEvent::Scrolled {
        offset,
        sections: sections(),
    };

    assert!(state.apply(&scrolled(0.0), &config));
    assert_eq!(state.active_section.as_deref(), Some("intro"));

    // The margin counts a section as reached before its top scrolls past.
    assert!(state.apply(&scrolled(710.0), &config));
    assert_eq!(state.active_section.as_deref(), Some("week-1"));

    assert!(!state.apply(&scrolled(900.0), &config));
    assert!(state.apply(&scrolled(5000.0), &config));
    assert_eq!(state.active_section.as_deref(), Some("week-2"));

    let above = ViewEvent::Scrolled {
        offset: 0.0,
        sections: vec![SectionPosition {
            id: "late".into(),
            top: 500.0,
        }],
    };
    state.apply(&above, &config);
    assert_eq!(state.active_section, None);
}

#[test]
fn resize_collapses_accordion() {
    let config = ViewConfig::default();
    let mut state = ViewState::default();
    state.apply(&ViewEvent::ToggleAccordion("faq".into()), &config);

    assert!(!state.apply(&ViewEvent::Resized { width: 1024.0 }, &config));
    assert_eq!(state.expanded_accordion.as_deref(), Some("faq"));

    assert!(state.apply(&ViewEvent::Resized { width: 600.0 }, &config));
    assert_eq!(state.expanded_accordion, None);
}

#[test]
fn state_serializes() {
    let state = ViewState {
        expanded_section: Some(1),
        expanded_accordion: None,
        active_section: Some("week-1".into()),
    };
    insta::assert_snapshot!(serde_json::to_string(&state).unwrap(), @r#"{"expandedSection":1,"expandedAccordion":null,"activeSection":"week-1"}"#);
}
