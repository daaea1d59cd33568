use lookup::{DispatchResult, LookupEffect};

use crate::action::PickerAction;
use crate::state::PickerState;

pub fn reducer(state: &mut PickerState, action: PickerAction) -> DispatchResult<LookupEffect> {
    match action {
        PickerAction::Lookup(action) => {
            let result = lookup::reducer(&mut state.lookup, action);
            // Selection events land in the same dispatch that caused them
            for effect in &result.effects {
                if let LookupEffect::EmitSelection(event) = effect {
                    state.last_selection = Some(event.clone());
                    state.selection_events += 1;
                }
            }
            result
        }

        // Handled by the runtime
        PickerAction::Quit => DispatchResult::unchanged(),
    }
}
