//! Lookup actions
//!
//! One action per host operation, plus `SearchDidComplete`, which the
//! debounce timer delivers. Categories are inferred from the prefix:
//! `SearchUpdate` and `SearchDidComplete` are both "search".

use crate::record::Record;
use crate::state::DropdownSource;
use lookup_core::ActionSummary;

#[derive(lookup_macros::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum LookupAction {
    /// First activation with the host's records and optional default id
    LookupInit {
        records: Vec<Record>,
        default_record_id: Option<String>,
    },

    /// Replace the record list and drop the selection
    RecordsReset(Vec<Record>),

    /// Select a record supplied by the host, adding it to the list
    SelectionSet(Record),

    /// Select a record from the current results by id
    SelectionChoose(String),

    /// Remove the selection and return to search
    SelectionClear,

    /// Keystroke in the search input
    SearchUpdate(String),

    /// The debounce timer fired
    SearchDidComplete { query: String, generation: u64 },

    /// Open or close the results dropdown
    DropdownToggle(DropdownSource),
}

/// Record lists are summarized by length to keep logs short
impl ActionSummary for LookupAction {
    fn summary(&self) -> String {
        match self {
            LookupAction::LookupInit {
                records,
                default_record_id,
            } => format!(
                "LookupInit {{ records: {}, default: {:?} }}",
                records.len(),
                default_record_id
            ),
            LookupAction::RecordsReset(records) => {
                format!("RecordsReset({} records)", records.len())
            }
            LookupAction::SelectionSet(record) => format!("SelectionSet({:?})", record.id()),
            _ => format!("{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookup_core::{Action, ActionCategory};

    #[test]
    fn test_names_and_categories() {
        let action = LookupAction::SearchDidComplete {
            query: "acme".into(),
            generation: 3,
        };
        assert_eq!(action.name(), "SearchDidComplete");
        assert_eq!(ActionCategory::category(&action), Some("search"));
        assert!(action.is_search());

        assert_eq!(LookupAction::SelectionClear.category(), Some("selection"));
        assert_eq!(
            LookupAction::DropdownToggle(DropdownSource::Input).category(),
            Some("dropdown")
        );
        assert_eq!(
            LookupAction::RecordsReset(Vec::new()).category_enum(),
            LookupActionCategory::Records
        );
        assert_eq!(LookupActionCategory::Lookup.name(), "lookup");
        assert_eq!(LookupActionCategory::all().len(), 6);
    }

    #[test]
    fn test_summary_hides_record_lists() {
        let records = vec![
            Record::new("1", "Acme").unwrap(),
            Record::new("2", "Zeta").unwrap(),
        ];
        let summary = LookupAction::RecordsReset(records).summary();
        assert_eq!(summary, "RecordsReset(2 records)");

        let summary = LookupAction::SearchUpdate("ac".into()).summary();
        assert_eq!(summary, "SearchUpdate(\"ac\")");
    }
}
