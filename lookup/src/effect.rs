//! Effects - side effects declared by the reducer
//!
//! The host performs these right after dispatch, so a selection change is
//! reported before the triggering operation returns.

use std::time::Duration;

use crate::record::Record;

/// Payload of the `selectionChanged` output event
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionChanged {
    /// `None` when the selection was cleared
    pub selected_record: Option<Record>,
}

impl SelectionChanged {
    pub fn selected(record: Record) -> Self {
        Self {
            selected_record: Some(record),
        }
    }

    pub fn cleared() -> Self {
        Self {
            selected_record: None,
        }
    }
}

/// Side effects that can be triggered by actions
#[derive(Clone, Debug, PartialEq)]
pub enum LookupEffect {
    /// Notify the host listener
    EmitSelection(SelectionChanged),
    /// Arm the debounce timer, replacing any armed one
    ScheduleSearch {
        query: String,
        generation: u64,
        delay: Duration,
    },
    /// Disarm the debounce timer
    CancelSearch,
}
