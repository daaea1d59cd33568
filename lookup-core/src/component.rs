//! Widgets that draw from props and answer input with actions

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A terminal widget driven entirely by its props
///
/// Everything the widget shows comes from `Props`, including focus and the
/// disabled flag. Input never touches host state directly; it turns into
/// actions of type `A` that the host dispatches. `&mut self` is reserved for
/// view-local details such as the highlighted row, the cursor, or the
/// screen regions remembered for mouse hit-testing.
///
/// ```ignore
/// impl Component<LookupAction> for LookupView {
///     type Props<'a> = LookupViewProps<'a, LookupAction>;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>)
///         -> impl IntoIterator<Item = LookupAction>
///     {
///         match event {
///             EventKind::Key(key) if key.code == KeyCode::Esc => Some((props.on_dropdown)(false)),
///             _ => None,
///         }
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         // draw the input row and, when open, the result list below it
///     }
/// }
/// ```
pub trait Component<A> {
    /// Read-only inputs for one render or one event
    type Props<'a>;

    /// Map an input event to zero or more actions.
    ///
    /// `None`, `Some(action)` and `vec![..]` all work as return values.
    /// Widgets that only draw can keep the default, which emits nothing.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Draw into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
