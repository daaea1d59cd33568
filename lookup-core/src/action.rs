//! Action traits for type-safe state mutations

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions represent intents to change state. They should be:
/// - Clone: Actions may be logged or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: Debounced actions are produced on tokio tasks
///
/// Use `#[derive(Action)]` from `lookup-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Category information generated by `#[action(infer_categories)]`
///
/// Categories are inferred from the variant name prefix, e.g.
/// `SelectionClear` and `SelectionChoose` both land in `"selection"`.
pub trait ActionCategory: Action {
    /// Enum of every category the action type can report
    type Category: Copy + Eq + Hash + Debug;

    /// Category name, or `None` for uncategorized actions
    fn category(&self) -> Option<&'static str>;

    /// Category as an enum value
    fn category_enum(&self) -> Self::Category;
}

/// Short human-readable form of an action for logs
///
/// The default uses `Debug`. Override it for actions that carry large
/// payloads (record lists, for instance).
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
