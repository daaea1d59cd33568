//! lookup: a debounced autocomplete widget with a Redux-style core
//!
//! The widget keeps a host-supplied list of [`Record`]s, filters it by name
//! as the user types (debounced), shows at most a handful of matches, and
//! reports every selection change to the host.
//!
//! Components are pure functions of state, and all state mutations happen
//! through dispatched actions.
//!
//! # Example
//! ```ignore
//! use lookup::prelude::*;
//!
//! let config = LookupConfig::new().with_records(records_from_json(json)?);
//! let mut lookup = Lookup::activate(config, |event: &SelectionChanged| {
//!     println!("{:?}", event.selected_record);
//! })?;
//!
//! lookup.on_query_changed("acme");
//! lookup.next_search().await;
//! lookup.on_result_chosen("1");
//! ```

// The derive macro emits `::lookup::` paths
extern crate self as lookup;

// Re-export everything from core
pub use lookup_core::*;

// Re-export derive macros
pub use lookup_macros::Action;

pub mod action;
pub mod config;
pub mod controller;
pub mod effect;
pub mod error;
pub mod filter;
pub mod listener;
pub mod record;
pub mod reducer;
pub mod state;

pub use action::{LookupAction, LookupActionCategory};
pub use config::{LookupConfig, DEFAULT_DEBOUNCE_MS};
pub use controller::Lookup;
pub use effect::{LookupEffect, SelectionChanged};
pub use error::{ConfigError, LookupError, RecordError};
pub use filter::{NameMatcher, ResultSet, DEFAULT_RESULT_LIMIT};
pub use listener::SelectionListener;
pub use record::{records_from_json, records_from_values, Record};
pub use reducer::reducer;
pub use state::{DropdownSource, LookupState, PresentationMode, SearchState};

/// Prelude for convenient imports
pub mod prelude {
    // Dispatch plumbing
    pub use lookup_core::prelude::*;

    // Derive macros
    pub use lookup_macros::Action;

    // Widget
    pub use crate::{
        records_from_json, reducer, ConfigError, DropdownSource, Lookup, LookupAction,
        LookupConfig, LookupEffect, LookupError, LookupState, PresentationMode, Record, RecordError,
        ResultSet, SearchState, SelectionChanged, SelectionListener,
    };
}
