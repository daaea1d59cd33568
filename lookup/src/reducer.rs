//! Reducer - (state, action) -> effects
//!
//! All state transitions of the lookup happen here. The reducer never
//! touches timers or listeners; it returns [`LookupEffect`]s instead.

use lookup_core::DispatchResult;

use crate::action::LookupAction;
use crate::effect::{LookupEffect, SelectionChanged};
use crate::filter::ResultSet;
use crate::record::{dedup_by_id, upsert, Record};
use crate::state::{DropdownSource, LookupState, PresentationMode};

pub fn reducer(state: &mut LookupState, action: LookupAction) -> DispatchResult<LookupEffect> {
    match action {
        LookupAction::LookupInit {
            records,
            default_record_id,
        } => {
            state.records = dedup_by_id(records);
            state.search.query.clear();
            state.show_head();
            let cancel = state.cancel_pending().then_some(LookupEffect::CancelSearch);
            state.initialized = true;

            let default = default_record_id
                .as_deref()
                .and_then(|id| state.find_record(id))
                .cloned();

            match default {
                Some(record) => {
                    state.selected = Some(record.clone());
                    state.presentation = PresentationMode::Pill;
                    DispatchResult::changed_with(LookupEffect::EmitSelection(
                        SelectionChanged::selected(record),
                    ))
                    .with_opt(cancel)
                }
                None => {
                    if let Some(id) = default_record_id {
                        tracing::debug!(%id, "default record not in list, starting unselected");
                    }
                    state.selected = None;
                    state.presentation = PresentationMode::Search;
                    DispatchResult::changed().with_opt(cancel)
                }
            }
        }

        LookupAction::RecordsReset(records) => {
            state.records = dedup_by_id(records);
            state.selected = None;
            state.presentation = PresentationMode::Search;
            state.search.query.clear();
            state.show_head();
            let cancel = state.cancel_pending().then_some(LookupEffect::CancelSearch);

            DispatchResult::changed_with(LookupEffect::EmitSelection(SelectionChanged::cleared()))
                .with_opt(cancel)
        }

        LookupAction::SelectionSet(record) => {
            let index = upsert(&mut state.records, record);
            let record = state.records[index].clone();
            // Results must keep pointing at entries of the list
            state.results.refresh(&record);
            select(state, record)
        }

        LookupAction::SelectionChoose(id) => match state.results.find(&id).cloned() {
            Some(record) => select(state, record),
            None => {
                tracing::warn!(%id, "chosen id is not in the current results, ignoring");
                DispatchResult::unchanged()
            }
        },

        LookupAction::SelectionClear => {
            state.selected = None;
            state.presentation = PresentationMode::Search;
            state.search.query.clear();
            state.show_head();
            let cancel = state.cancel_pending().then_some(LookupEffect::CancelSearch);

            DispatchResult::changed_with(LookupEffect::EmitSelection(SelectionChanged::cleared()))
                .with_opt(cancel)
        }

        LookupAction::SearchUpdate(query) => {
            state.search.query = query.clone();
            // Optimistic until the filter runs
            state.search.is_loading = true;
            state.search.has_results = true;
            state.search.generation += 1;
            state.search.pending = Some(state.search.generation);

            DispatchResult::changed_with(LookupEffect::ScheduleSearch {
                query,
                generation: state.search.generation,
                delay: state.debounce,
            })
        }

        LookupAction::SearchDidComplete { query, generation } => {
            if state.search.pending != Some(generation) {
                tracing::trace!(generation, pending = ?state.search.pending, "dropping stale search");
                return DispatchResult::unchanged();
            }

            state.search.pending = None;
            state.results = ResultSet::search(&state.records, &query, state.result_limit);
            state.search.has_results = !state.results.is_empty();
            state.search.is_loading = false;
            state.search.searches_run += 1;
            tracing::debug!(%query, results = state.results.len(), "search complete");
            DispatchResult::changed()
        }

        LookupAction::DropdownToggle(source) => {
            let open = matches!(source, DropdownSource::Input);
            if state.dropdown_open == open {
                return DispatchResult::unchanged();
            }
            state.dropdown_open = open;
            DispatchResult::changed()
        }
    }
}

fn select(state: &mut LookupState, record: Record) -> DispatchResult<LookupEffect> {
    state.selected = Some(record.clone());
    state.presentation = PresentationMode::Pill;
    state.dropdown_open = false;
    let cancel = state.cancel_pending().then_some(LookupEffect::CancelSearch);

    DispatchResult::changed_with(LookupEffect::EmitSelection(SelectionChanged::selected(record)))
        .with_opt(cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn rec(id: &str, name: &str) -> Record {
        Record::new(id, name).unwrap()
    }

    fn sample() -> Vec<Record> {
        vec![rec("1", "Acme"), rec("2", "Acme Corp"), rec("3", "Zeta")]
    }

    fn many(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| rec(&i.to_string(), &format!("Record {i}")))
            .collect()
    }

    fn init(records: Vec<Record>, default: Option<&str>) -> (LookupState, DispatchResult<LookupEffect>) {
        let mut state = LookupState::default();
        let result = reducer(
            &mut state,
            LookupAction::LookupInit {
                records,
                default_record_id: default.map(str::to_string),
            },
        );
        (state, result)
    }

    fn emitted(result: &DispatchResult<LookupEffect>) -> Vec<&SelectionChanged> {
        result
            .effects
            .iter()
            .filter_map(|e| match e {
                LookupEffect::EmitSelection(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_init_shows_first_five() {
        let (state, result) = init(many(8), None);

        assert!(state.initialized);
        assert_eq!(state.results.len(), 5);
        assert_eq!(state.results.ids().collect::<Vec<_>>(), vec!["1", "2", "3", "4", "5"]);
        assert!(state.search.has_results);
        assert_eq!(state.presentation, PresentationMode::Search);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_init_empty_list() {
        let (state, _) = init(Vec::new(), None);
        assert!(state.results.is_empty());
        assert!(!state.search.has_results);
    }

    #[test]
    fn test_init_with_default_selects_pill() {
        let (state, result) = init(sample(), Some("3"));

        assert_eq!(state.selected_id(), Some("3"));
        assert_eq!(state.presentation, PresentationMode::Pill);
        assert_eq!(emitted(&result), vec![&SelectionChanged::selected(rec("3", "Zeta"))]);
    }

    #[test]
    fn test_init_with_unknown_default() {
        let (state, result) = init(sample(), Some("9"));

        assert!(state.selected.is_none());
        assert_eq!(state.presentation, PresentationMode::Search);
        assert!(emitted(&result).is_empty());
    }

    #[test]
    fn test_init_drops_duplicate_ids() {
        let (state, _) = init(vec![rec("1", "Acme"), rec("1", "Other")], None);
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].name(), "Acme");
    }

    #[test]
    fn test_search_update_is_optimistic_and_schedules() {
        let (mut state, _) = init(sample(), None);
        state.search.has_results = false;

        let result = reducer(&mut state, LookupAction::SearchUpdate("ac".into()));

        assert!(state.search.is_loading);
        assert!(state.search.has_results);
        assert_eq!(state.search.pending, Some(1));
        assert_eq!(
            result.effects,
            vec![LookupEffect::ScheduleSearch {
                query: "ac".into(),
                generation: 1,
                delay: Duration::from_millis(1000),
            }]
        );
    }

    #[test]
    fn test_search_complete_filters() {
        let (mut state, _) = init(sample(), None);
        reducer(&mut state, LookupAction::SearchUpdate("acme".into()));

        let result = reducer(
            &mut state,
            LookupAction::SearchDidComplete {
                query: "acme".into(),
                generation: 1,
            },
        );

        assert!(result.changed);
        assert_eq!(state.results.ids().collect::<Vec<_>>(), vec!["1", "2"]);
        assert!(state.search.has_results);
        assert!(!state.search.is_loading);
        assert_eq!(state.search.pending, None);
        assert_eq!(state.search.searches_run, 1);
    }

    #[test]
    fn test_search_without_matches_clears_loading() {
        let (mut state, _) = init(sample(), None);
        reducer(&mut state, LookupAction::SearchUpdate("omega".into()));
        reducer(
            &mut state,
            LookupAction::SearchDidComplete {
                query: "omega".into(),
                generation: 1,
            },
        );

        assert!(state.results.is_empty());
        assert!(!state.search.has_results);
        assert!(!state.search.is_loading);
    }

    #[test]
    fn test_empty_query_restores_head() {
        let (mut state, _) = init(many(7), None);
        reducer(&mut state, LookupAction::SearchUpdate(String::new()));
        reducer(
            &mut state,
            LookupAction::SearchDidComplete {
                query: String::new(),
                generation: 1,
            },
        );
        assert_eq!(state.results, ResultSet::head(&state.records, 5));
    }

    #[test]
    fn test_stale_search_is_dropped() {
        let (mut state, _) = init(sample(), None);
        reducer(&mut state, LookupAction::SearchUpdate("a".into()));
        reducer(&mut state, LookupAction::SearchUpdate("zeta".into()));

        let result = reducer(
            &mut state,
            LookupAction::SearchDidComplete {
                query: "a".into(),
                generation: 1,
            },
        );
        assert!(!result.changed);
        assert!(state.search.is_loading);
        assert_eq!(state.search.searches_run, 0);

        reducer(
            &mut state,
            LookupAction::SearchDidComplete {
                query: "zeta".into(),
                generation: 2,
            },
        );
        assert_eq!(state.results.ids().collect::<Vec<_>>(), vec!["3"]);

        // A duplicate delivery of the winning generation is stale too
        let result = reducer(
            &mut state,
            LookupAction::SearchDidComplete {
                query: "zeta".into(),
                generation: 2,
            },
        );
        assert!(!result.changed);
        assert_eq!(state.search.searches_run, 1);
    }

    #[test]
    fn test_choose_selects_and_collapses() {
        let (mut state, _) = init(sample(), None);
        reducer(&mut state, LookupAction::DropdownToggle(DropdownSource::Input));
        assert!(state.dropdown_open);

        let result = reducer(&mut state, LookupAction::SelectionChoose("2".into()));

        assert_eq!(state.selected_id(), Some("2"));
        assert!(state.is_pill());
        assert!(!state.dropdown_open);
        assert_eq!(emitted(&result).len(), 1);
        assert_eq!(emitted(&result)[0].selected_record.as_ref().map(Record::id), Some("2"));
    }

    #[test]
    fn test_choose_unknown_id_is_noop() {
        let (mut state, _) = init(sample(), None);
        let before = state.clone();

        let result = reducer(&mut state, LookupAction::SelectionChoose("9".into()));

        assert_eq!(result, DispatchResult::unchanged());
        assert_eq!(state, before);
    }

    #[test]
    fn test_choose_only_from_current_results() {
        let (mut state, _) = init(sample(), None);
        reducer(&mut state, LookupAction::SearchUpdate("zeta".into()));
        reducer(
            &mut state,
            LookupAction::SearchDidComplete {
                query: "zeta".into(),
                generation: 1,
            },
        );

        // Record 1 exists but is filtered out
        let result = reducer(&mut state, LookupAction::SelectionChoose("1".into()));
        assert!(!result.changed);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_clear_restores_head_and_search_mode() {
        let (mut state, _) = init(many(6), Some("6"));
        reducer(&mut state, LookupAction::SearchUpdate("record 6".into()));

        let result = reducer(&mut state, LookupAction::SelectionClear);

        assert!(state.selected.is_none());
        assert_eq!(state.presentation, PresentationMode::Search);
        assert_eq!(state.results.ids().collect::<Vec<_>>(), vec!["1", "2", "3", "4", "5"]);
        assert!(state.search.query.is_empty());
        assert!(!state.search.is_loading);
        assert_eq!(
            result.effects,
            vec![
                LookupEffect::EmitSelection(SelectionChanged::cleared()),
                LookupEffect::CancelSearch,
            ]
        );
    }

    #[test]
    fn test_reset_to_empty_while_selected() {
        let (mut state, _) = init(sample(), Some("1"));

        let result = reducer(&mut state, LookupAction::RecordsReset(Vec::new()));

        assert!(state.selected.is_none());
        assert!(!state.search.has_results);
        assert!(state.results.is_empty());
        assert_eq!(state.presentation, PresentationMode::Search);
        assert_eq!(emitted(&result), vec![&SelectionChanged::cleared()]);
    }

    #[test]
    fn test_reset_replaces_list() {
        let (mut state, _) = init(sample(), None);
        reducer(&mut state, LookupAction::RecordsReset(many(3)));

        assert_eq!(state.records.len(), 3);
        assert_eq!(state.results[0].name(), "Record 1");
        assert!(state.search.has_results);
    }

    #[test]
    fn test_set_programmatically_appends() {
        let (mut state, _) = init(sample(), None);

        let result = reducer(&mut state, LookupAction::SelectionSet(rec("4", "Omega")));

        assert_eq!(state.records.len(), 4);
        assert_eq!(state.selected_id(), Some("4"));
        assert!(state.is_pill());
        assert_eq!(emitted(&result), vec![&SelectionChanged::selected(rec("4", "Omega"))]);
    }

    #[test]
    fn test_set_programmatically_upserts_duplicate() {
        let (mut state, _) = init(sample(), None);

        reducer(&mut state, LookupAction::SelectionSet(rec("2", "Acme Corporation")));

        assert_eq!(state.records.len(), 3);
        assert_eq!(state.records[1].name(), "Acme Corporation");
        assert_eq!(state.selected.as_ref().map(Record::name), Some("Acme Corporation"));
    }

    #[test]
    fn test_set_programmatically_refreshes_shown_result() {
        let (mut state, _) = init(vec![rec("1", "Acme"), rec("2", "Zeta")], None);

        reducer(&mut state, LookupAction::SelectionSet(rec("2", "Zeta Renamed")));

        assert_eq!(
            state.results.iter().map(Record::name).collect::<Vec<_>>(),
            vec!["Acme", "Zeta Renamed"]
        );
        assert!(state.results.iter().all(|r| state.records.contains(r)));
        assert_eq!(state.selected.as_ref(), state.find_record("2"));
    }

    #[test]
    fn test_results_stay_within_records() {
        let (mut state, _) = init(sample(), None);
        let within = |state: &LookupState| state.results.iter().all(|r| state.records.contains(r));

        reducer(&mut state, LookupAction::SearchUpdate("acme".into()));
        reducer(
            &mut state,
            LookupAction::SearchDidComplete {
                query: "acme".into(),
                generation: 1,
            },
        );
        reducer(&mut state, LookupAction::SelectionSet(rec("1", "Acme Inc")));
        assert!(within(&state));
        assert_eq!(state.results[0].name(), "Acme Inc");

        reducer(&mut state, LookupAction::SearchUpdate("ze".into()));
        reducer(&mut state, LookupAction::RecordsReset(vec![rec("9", "Omega")]));
        assert!(within(&state));

        // The superseded timer arrives after the reset
        reducer(
            &mut state,
            LookupAction::SearchDidComplete {
                query: "ze".into(),
                generation: 2,
            },
        );
        assert!(within(&state));
        assert_eq!(state.results.ids().collect::<Vec<_>>(), vec!["9"]);
    }

    #[test]
    fn test_selection_cancels_pending_search() {
        let (mut state, _) = init(sample(), None);
        reducer(&mut state, LookupAction::SearchUpdate("ze".into()));

        let result = reducer(&mut state, LookupAction::SelectionChoose("3".into()));

        assert!(result.effects.contains(&LookupEffect::CancelSearch));
        assert_eq!(state.search.pending, None);
        assert!(!state.search.is_loading);
    }

    #[test]
    fn test_dropdown_toggle() {
        let mut state = LookupState::default();

        assert!(reducer(&mut state, LookupAction::DropdownToggle(DropdownSource::Input)).changed);
        assert!(state.dropdown_open);
        assert!(!reducer(&mut state, LookupAction::DropdownToggle(DropdownSource::Input)).changed);

        reducer(
            &mut state,
            LookupAction::DropdownToggle(DropdownSource::OutsideContainer),
        );
        assert!(!state.dropdown_open);
        // Selection state is untouched
        assert!(state.selected.is_none());
        assert_eq!(state.presentation, PresentationMode::Search);
    }
}
