//! Terminal events delivered to components

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

/// The event payload handed to [`Component::handle_event`](crate::Component)
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Terminal focus moved into or out of the window
    Focus(bool),
}

impl EventKind {
    /// Ctrl+C, the conventional quit chord
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            EventKind::Key(key)
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c'))
        )
    }
}
