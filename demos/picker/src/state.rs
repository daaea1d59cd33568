use lookup::{LookupConfig, LookupState, SelectionChanged};

/// Application state
#[derive(Clone, Debug)]
pub struct PickerState {
    pub config: LookupConfig,
    pub lookup: LookupState,
    /// Payload of the most recent `selectionChanged` event
    pub last_selection: Option<SelectionChanged>,
    pub selection_events: usize,
}

impl PickerState {
    pub fn new(config: LookupConfig) -> Self {
        let lookup = LookupState::new(&config);
        Self {
            config,
            lookup,
            last_selection: None,
            selection_events: 0,
        }
    }

    /// Text for the status line
    pub fn status(&self) -> String {
        let searches = self.lookup.search.searches_run;
        match &self.last_selection {
            None => format!("no selection events yet | searches: {searches}"),
            Some(SelectionChanged {
                selected_record: None,
            }) => format!(
                "selectionChanged #{}: cleared | searches: {searches}",
                self.selection_events
            ),
            Some(SelectionChanged {
                selected_record: Some(record),
            }) => format!(
                "selectionChanged #{}: {} ({}) | searches: {searches}",
                self.selection_events,
                record.name(),
                record.id()
            ),
        }
    }
}
