//! Render and flow tests using RenderHarness

use lookup::testing::{key, type_text, RenderHarness};
use lookup::{DropdownSource, EventKind, LookupAction, LookupConfig, LookupEffect, Record};
use picker::action::PickerAction;
use picker::reducer::reducer;
use picker::state::PickerState;
use picker::ui::PickerUi;

fn accounts() -> Vec<Record> {
    vec![
        Record::new("001", "Acme").unwrap(),
        Record::new("002", "Acme Corp").unwrap(),
        Record::new("014", "Zeta Systems").unwrap(),
    ]
}

fn initialized(config: LookupConfig) -> (PickerState, Vec<LookupEffect>) {
    let init = LookupAction::LookupInit {
        records: config.records.clone(),
        default_record_id: config.default_record_id.clone(),
    };
    let mut state = PickerState::new(config);
    let result = reducer(&mut state, PickerAction::Lookup(init));
    (state, result.effects)
}

fn render(ui: &mut PickerUi, state: &PickerState) -> String {
    let mut harness = RenderHarness::new(60, 16);
    harness.render_to_string_plain(|frame| ui.render(frame, frame.area(), state))
}

#[test]
fn test_initial_screen() {
    let (state, effects) = initialized(LookupConfig::new().with_label("Account").with_records(accounts()));
    assert!(effects.is_empty());

    let output = render(&mut PickerUi::new(), &state);

    assert!(output.contains("Account"));
    assert!(output.contains("Search..."));
    assert!(output.contains("no selection events yet"));
}

#[test]
fn test_default_selection_shows_in_status() {
    let config = LookupConfig::new()
        .with_records(accounts())
        .with_default_record_id("014");
    let (state, effects) = initialized(config);
    assert_eq!(effects.len(), 1);

    let output = render(&mut PickerUi::new(), &state);

    assert!(output.contains("Zeta Systems ×"));
    assert!(output.contains("selectionChanged #1: Zeta Systems (014)"));
}

#[test]
fn test_typing_opens_dropdown_and_schedules_search() {
    let (mut state, _) = initialized(LookupConfig::new().with_records(accounts()));
    let mut ui = PickerUi::new();

    let mut effects = Vec::new();
    for event in type_text("Ze") {
        let outcome = ui.map_event(&event, &state);
        assert!(outcome.needs_render);
        for action in outcome.actions {
            effects.extend(reducer(&mut state, action).effects);
        }
    }

    assert!(state.lookup.dropdown_open);
    assert_eq!(state.lookup.search.query, "Ze");
    assert!(state.lookup.search.is_loading);
    assert_eq!(
        effects
            .iter()
            .filter(|e| matches!(e, LookupEffect::ScheduleSearch { .. }))
            .count(),
        2
    );

    let output = render(&mut ui, &state);
    assert!(output.contains("Searching..."));
}

#[test]
fn test_choose_then_clear_updates_status() {
    let (mut state, _) = initialized(LookupConfig::new().with_records(accounts()));
    let mut ui = PickerUi::new();

    let result = reducer(
        &mut state,
        PickerAction::Lookup(LookupAction::DropdownToggle(DropdownSource::Input)),
    );
    assert!(result.changed);

    for k in ["down", "enter"] {
        let outcome = ui.map_event(&EventKind::Key(key(k)), &state);
        for action in outcome.actions {
            reducer(&mut state, action);
        }
    }
    assert_eq!(state.status(), "selectionChanged #1: Acme Corp (002) | searches: 0");

    let outcome = ui.map_event(&EventKind::Key(key("backspace")), &state);
    for action in outcome.actions {
        reducer(&mut state, action);
    }
    assert_eq!(state.status(), "selectionChanged #2: cleared | searches: 0");
}

#[test]
fn test_ctrl_c_quits() {
    let (state, _) = initialized(LookupConfig::new());
    let outcome = PickerUi::new().map_event(&EventKind::Key(key("ctrl+c")), &state);
    assert_eq!(outcome.actions, vec![PickerAction::Quit]);
}

#[test]
fn test_status_updates_in_the_selecting_dispatch() {
    let (mut state, _) = initialized(LookupConfig::new().with_records(accounts()));

    let result = reducer(
        &mut state,
        PickerAction::Lookup(LookupAction::SelectionSet(Record::new("020", "Initech").unwrap())),
    );

    assert!(matches!(result.effects.as_slice(), [LookupEffect::EmitSelection(_)]));
    assert_eq!(state.status(), "selectionChanged #1: Initech (020) | searches: 0");
}
