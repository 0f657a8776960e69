use chrono::{TimeZone, Utc};
use ocean_core::{
    update, AppState, CategoryFilter, ComponentStatus, LoadLevel, Msg, QueryCategory, SimSettings,
};

fn seeded() -> AppState {
    AppState::seeded(
        SimSettings::default(),
        Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).unwrap(),
    )
}

fn queries(state: &AppState) -> Vec<String> {
    state
        .view()
        .history
        .items
        .iter()
        .map(|item| item.query.clone())
        .collect()
}

#[test]
fn empty_search_lists_everything() {
    let view = seeded().view();
    assert_eq!(view.history.items.len(), 5);
    assert_eq!(view.history.total, 5);
    assert_eq!(view.history.starred, 2);
    // (1200 + 800 + 2100 + 1500 + 1800) / 5
    assert_eq!(view.history.average_duration_ms, Some(1480));
}

#[test]
fn search_is_case_insensitive_over_query_and_response() {
    let (state, _) = update(seeded(), Msg::HistorySearchChanged("PSU".to_string()));
    assert_eq!(
        queries(&state),
        vec!["What is the average salinity in the Pacific at 1000m depth?"]
    );

    let (state, _) = update(state, Msg::HistorySearchChanged("temperature".to_string()));
    assert_eq!(queries(&state).len(), 3);
}

#[test]
fn category_filter_combines_with_search() {
    let (state, _) = update(
        seeded(),
        Msg::HistoryCategorySelected(CategoryFilter::Only(QueryCategory::Temperature)),
    );
    assert_eq!(
        queries(&state),
        vec!["Show temperature profiles for the North Atlantic Ocean"]
    );

    let (state, _) = update(state, Msg::HistorySearchChanged("depth".to_string()));
    assert!(queries(&state).is_empty());

    let (state, _) = update(state, Msg::HistoryCategorySelected(CategoryFilter::All));
    assert_eq!(queries(&state).len(), 2);
}

#[test]
fn star_toggle_flips_and_ignores_unknown_ids() {
    let (mut state, _) = update(seeded(), Msg::HistoryStarToggled(2));
    assert!(state.consume_dirty());
    assert_eq!(state.view().history.starred, 3);

    let (mut state, _) = update(state, Msg::HistoryStarToggled(2));
    assert!(state.consume_dirty());
    assert_eq!(state.view().history.starred, 2);

    let (mut state, effects) = update(state, Msg::HistoryStarToggled(42));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn category_labels_round_trip() {
    for category in QueryCategory::ALL {
        assert_eq!(QueryCategory::from_label(category.label()), Some(category));
    }
    assert_eq!(QueryCategory::from_label(" Salinity "), Some(QueryCategory::Salinity));
    assert_eq!(QueryCategory::from_label("charts"), None);
}

#[test]
fn system_summary_counts_components() {
    let view = AppState::new().view();
    let summary = view.system.summary;
    assert_eq!((summary.online, summary.warning, summary.offline), (5, 1, 0));
    assert_eq!(summary.total(), 6);

    let orchestrator = view
        .system
        .components
        .iter()
        .find(|c| c.status == ComponentStatus::Warning)
        .unwrap();
    assert_eq!(orchestrator.name, "MCP Orchestrator");
    assert_eq!(orchestrator.load_level, Some(LoadLevel::Elevated));
}
