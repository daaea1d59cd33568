//! Receiver for `selectionChanged` events

use crate::effect::SelectionChanged;

/// Host-side receiver of selection changes.
///
/// Closures taking `&SelectionChanged` implement this directly.
pub trait SelectionListener {
    fn selection_changed(&mut self, event: &SelectionChanged);
}

impl<F> SelectionListener for F
where
    F: FnMut(&SelectionChanged),
{
    fn selection_changed(&mut self, event: &SelectionChanged) {
        self(event)
    }
}
