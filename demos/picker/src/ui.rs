use lookup::{Component, DropdownSource, EventKind, EventOutcome, LookupAction};
use lookup_components::{LookupView, LookupViewProps};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::action::PickerAction;
use crate::state::PickerState;

const HELP: &str = "type to search | up/down highlight | enter choose | esc close | backspace clear | ctrl+c quit";

fn view_props(state: &PickerState) -> LookupViewProps<'_, PickerAction> {
    LookupViewProps {
        state: &state.lookup,
        config: &state.config,
        is_focused: true,
        on_query_change: |query| PickerAction::Lookup(LookupAction::SearchUpdate(query)),
        on_choose: |id| PickerAction::Lookup(LookupAction::SelectionChoose(id)),
        on_clear: || PickerAction::Lookup(LookupAction::SelectionClear),
        on_dropdown: |source: DropdownSource| {
            PickerAction::Lookup(LookupAction::DropdownToggle(source))
        },
    }
}

/// Screen: the lookup on top, status and help lines at the bottom
#[derive(Default)]
pub struct PickerUi {
    view: LookupView,
}

impl PickerUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &PickerState) {
        let [body, status, help] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.view.render(frame, body, view_props(state));

        frame.render_widget(
            Paragraph::new(state.status()).style(Style::default().fg(Color::Green)),
            status,
        );
        frame.render_widget(
            Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
            help,
        );
    }

    pub fn map_event(&mut self, event: &EventKind, state: &PickerState) -> EventOutcome<PickerAction> {
        if event.is_interrupt() {
            return EventOutcome::action(PickerAction::Quit);
        }
        if let EventKind::Resize(..) = event {
            return EventOutcome::ignored().with_render();
        }

        // Highlight moves are view-local, so always repaint after input
        EventOutcome::from_actions(self.view.handle_event(event, view_props(state))).with_render()
    }
}
