//! Account picker demo for the lookup widget
//!
//! The pieces a host needs to put the widget on screen:
//! 1. Event (keyboard/mouse) -> LookupView.handle_event() -> Actions
//! 2. Actions dispatched to the store; the lookup reducer does the work
//! 3. Effects: searches are debounced on the runtime's TaskManager.
//!    Selection events are recorded by the reducer during the dispatch that
//!    caused them
//! 4. If state changed, re-render

pub mod action;
pub mod reducer;
pub mod state;
pub mod ui;

use lookup::{EffectContext, LookupAction, LookupEffect, TaskKey};

use crate::action::PickerAction;

const SEARCH_TASK: &str = "search";

/// Perform lookup effects inside the runtime
pub fn handle_effect(effect: LookupEffect, ctx: &mut EffectContext<PickerAction>) {
    match effect {
        LookupEffect::EmitSelection(event) => {
            tracing::info!(
                selected = ?event.selected_record.as_ref().map(|record| record.id()),
                "selectionChanged"
            );
        }
        LookupEffect::ScheduleSearch {
            query,
            generation,
            delay,
        } => {
            ctx.tasks().debounce(SEARCH_TASK, delay, async move {
                PickerAction::Lookup(LookupAction::SearchDidComplete { query, generation })
            });
        }
        LookupEffect::CancelSearch => {
            ctx.tasks().cancel(&TaskKey::new(SEARCH_TASK));
        }
    }
}
