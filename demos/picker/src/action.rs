use lookup::{Action, ActionSummary, LookupAction};

#[derive(Action, Clone, Debug, PartialEq)]
pub enum PickerAction {
    /// Anything the lookup widget handles
    Lookup(LookupAction),

    /// Global
    Quit,
}

impl ActionSummary for PickerAction {
    fn summary(&self) -> String {
        match self {
            PickerAction::Lookup(action) => action.summary(),
            PickerAction::Quit => "Quit".to_string(),
        }
    }
}
