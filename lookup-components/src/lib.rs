//! ratatui views for the lookup widget
//!
//! Components implement the `Component<A>` trait and emit actions via
//! callback functions passed through Props.
//!
//! # Components
//!
//! - [`LookupView`] - Label, search input or selection pill, and results dropdown
//! - [`SelectList`] - Result list with a movable highlight
//! - [`TextInput`] - Single-line text input with cursor and status hint
//!
//! # Example
//!
//! ```ignore
//! use lookup_components::{LookupView, LookupViewProps};
//!
//! // In your render function:
//! view.render(frame, area, LookupViewProps {
//!     state: &state.lookup,
//!     config: &state.config,
//!     is_focused: true,
//!     on_query_change: |q| Action::Lookup(LookupAction::SearchUpdate(q)),
//!     on_choose: |id| Action::Lookup(LookupAction::SelectionChoose(id)),
//!     on_clear: || Action::Lookup(LookupAction::SelectionClear),
//!     on_dropdown: |source| Action::Lookup(LookupAction::DropdownToggle(source)),
//! });
//! ```

mod lookup_view;
mod select_list;
mod text_input;

pub use lookup_view::{LookupView, LookupViewProps};
pub use select_list::{SelectList, SelectListProps};
pub use text_input::{TextInput, TextInputProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        LookupView, LookupViewProps, SelectList, SelectListProps, TextInput, TextInputProps,
    };
}
