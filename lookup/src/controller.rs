//! Host-facing lookup controller
//!
//! [`Lookup`] owns the store, the debounce timer and the selection listener.
//! Each operation dispatches one action and performs the resulting effects
//! before returning, so listeners observe selection changes synchronously.
//!
//! Timers run on tokio. Construct inside a runtime, or hand one over with
//! [`Lookup::with_handle`], then drive results with [`Lookup::next_search`]
//! or [`Lookup::pump`].

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use lookup_core::{DispatchResult, EffectStoreWithMiddleware, LoggingMiddleware, TaskKey, TaskManager};

use crate::action::LookupAction;
use crate::config::LookupConfig;
use crate::effect::LookupEffect;
use crate::error::LookupError;
use crate::filter::ResultSet;
use crate::listener::SelectionListener;
use crate::record::Record;
use crate::reducer::reducer;
use crate::state::{DropdownSource, LookupState, PresentationMode, SearchState};

const SEARCH_TASK: &str = "search";

type LookupStore = EffectStoreWithMiddleware<LookupState, LookupAction, LookupEffect, LoggingMiddleware>;

pub struct Lookup<L> {
    store: LookupStore,
    tasks: TaskManager<LookupAction>,
    action_rx: mpsc::UnboundedReceiver<LookupAction>,
    listener: L,
    config: LookupConfig,
}

impl<L: SelectionListener> Lookup<L> {
    /// Construct without initializing, timers on the current tokio runtime.
    /// Call [`Lookup::initialize`] next.
    ///
    /// Fails outside a runtime or when the config is invalid.
    pub fn new(config: LookupConfig, listener: L) -> Result<Self, LookupError> {
        Self::with_handle(config, listener, Handle::try_current()?)
    }

    /// Construct without initializing, timers on `handle`.
    pub fn with_handle(config: LookupConfig, listener: L, handle: Handle) -> Result<Self, LookupError> {
        config.validate()?;
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let state = LookupState::new(&config);

        Ok(Self {
            store: EffectStoreWithMiddleware::new(state, reducer, LoggingMiddleware::new()),
            tasks: TaskManager::new(action_tx, handle),
            action_rx,
            listener,
            config,
        })
    }

    /// Construct on the current runtime and initialize from the config's
    /// records and default id.
    pub fn activate(config: LookupConfig, listener: L) -> Result<Self, LookupError> {
        let records = config.records.clone();
        let default_record_id = config.default_record_id.clone();
        let mut lookup = Self::new(config, listener)?;
        lookup.initialize(records, default_record_id);
        Ok(lookup)
    }

    pub fn initialize(&mut self, records: Vec<Record>, default_record_id: Option<String>) {
        self.dispatch(LookupAction::LookupInit {
            records,
            default_record_id,
        });
    }

    pub fn reset_records(&mut self, records: Vec<Record>) {
        self.dispatch(LookupAction::RecordsReset(records));
    }

    pub fn set_record_programmatically(&mut self, record: Record) {
        self.dispatch(LookupAction::SelectionSet(record));
    }

    /// Record a keystroke and restart the debounce timer.
    pub fn on_query_changed(&mut self, query: impl Into<String>) {
        self.dispatch(LookupAction::SearchUpdate(query.into()));
    }

    /// Select a result by id. Returns `false` when the id is not among the
    /// current results.
    pub fn on_result_chosen(&mut self, id: impl Into<String>) -> bool {
        self.dispatch(LookupAction::SelectionChoose(id.into())).changed
    }

    pub fn on_selection_cleared(&mut self) {
        self.dispatch(LookupAction::SelectionClear);
    }

    pub fn on_dropdown_toggle(&mut self, source: DropdownSource) {
        self.dispatch(LookupAction::DropdownToggle(source));
    }

    /// Wait for the pending search to complete and apply it.
    ///
    /// Returns `false` right away when no search is pending.
    pub async fn next_search(&mut self) -> bool {
        loop {
            if self.store.state().search.pending.is_none() {
                return false;
            }

            let action = match self.action_rx.try_recv() {
                Ok(action) => action,
                Err(_) if !self.tasks.is_running(&TaskKey::new(SEARCH_TASK)) => {
                    // The timer may have delivered between the two checks
                    match self.action_rx.try_recv() {
                        Ok(action) => action,
                        Err(_) => return false,
                    }
                }
                Err(_) => match self.action_rx.recv().await {
                    Some(action) => action,
                    None => return false,
                },
            };

            if self.dispatch(action).changed {
                return true;
            }
        }
    }

    /// Apply every timer result that has already arrived, without waiting.
    ///
    /// Returns how many of them changed state.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            if self.dispatch(action).changed {
                applied += 1;
            }
        }
        applied
    }

    pub fn state(&self) -> &LookupState {
        self.store.state()
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Presentational flag. Hosts keep their input surface inert when set.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn selected(&self) -> Option<&Record> {
        self.state().selected.as_ref()
    }

    pub fn results(&self) -> &ResultSet {
        &self.state().results
    }

    pub fn presentation(&self) -> PresentationMode {
        self.state().presentation
    }

    pub fn search(&self) -> &SearchState {
        &self.state().search
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    fn dispatch(&mut self, action: LookupAction) -> DispatchResult<LookupEffect> {
        let mut result = self.store.dispatch(action);
        for effect in std::mem::take(&mut result.effects) {
            self.handle_effect(effect);
        }
        result
    }

    fn handle_effect(&mut self, effect: LookupEffect) {
        match effect {
            LookupEffect::EmitSelection(event) => {
                tracing::debug!(
                    selected = ?event.selected_record.as_ref().map(Record::id),
                    "selection changed"
                );
                self.listener.selection_changed(&event);
            }
            LookupEffect::ScheduleSearch {
                query,
                generation,
                delay,
            } => {
                self.tasks.debounce(SEARCH_TASK, delay, async move {
                    LookupAction::SearchDidComplete { query, generation }
                });
            }
            LookupEffect::CancelSearch => {
                self.tasks.cancel(&TaskKey::new(SEARCH_TASK));
            }
        }
    }
}
