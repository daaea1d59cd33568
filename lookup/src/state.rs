//! Lookup state - single source of truth
//!
//! The rendering layer binds to these fields; only the reducer mutates them.

use std::time::Duration;

use crate::config::LookupConfig;
use crate::filter::ResultSet;
use crate::record::Record;

/// Which surface the widget shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PresentationMode {
    /// Search input with the dropdown of results
    #[default]
    Search,
    /// The selected record as a removable chip
    Pill,
}

/// Surface that triggered a dropdown toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownSource {
    /// The search input gained focus or received input
    Input,
    /// A click landed outside the lookup container
    OutsideContainer,
}

/// Debounced search bookkeeping
#[derive(Clone, Debug, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub is_loading: bool,
    pub has_results: bool,
    /// Bumped on every keystroke
    pub generation: u64,
    /// Generation of the one search still waiting on its timer
    pub pending: Option<u64>,
    /// Filter computations that actually ran
    pub searches_run: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            is_loading: false,
            has_results: false,
            generation: 0,
            pending: None,
            searches_run: 0,
        }
    }
}

/// Everything the lookup knows
#[derive(Clone, Debug, PartialEq)]
pub struct LookupState {
    /// Full record list owned by the host
    pub records: Vec<Record>,
    pub results: ResultSet,
    pub selected: Option<Record>,
    pub search: SearchState,
    pub presentation: PresentationMode,
    pub dropdown_open: bool,
    pub result_limit: usize,
    pub debounce: Duration,
    /// Set once the first `LookupInit` has been applied
    pub initialized: bool,
}

impl LookupState {
    /// State for a lookup that has not been initialized yet.
    pub fn new(config: &LookupConfig) -> Self {
        Self {
            records: Vec::new(),
            results: ResultSet::default(),
            selected: None,
            search: SearchState::default(),
            presentation: PresentationMode::Search,
            dropdown_open: false,
            result_limit: config.result_limit.max(1),
            debounce: config.debounce(),
            initialized: false,
        }
    }

    pub fn is_pill(&self) -> bool {
        self.presentation == PresentationMode::Pill
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(Record::id)
    }

    pub fn find_record(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Reset the result set to the head of the full list.
    pub(crate) fn show_head(&mut self) {
        self.results = ResultSet::head(&self.records, self.result_limit);
        self.search.has_results = !self.results.is_empty();
    }

    /// Forget any pending search. Returns whether one was pending.
    pub(crate) fn cancel_pending(&mut self) -> bool {
        self.search.is_loading = false;
        self.search.pending.take().is_some()
    }
}

impl Default for LookupState {
    fn default() -> Self {
        Self::new(&LookupConfig::default())
    }
}
