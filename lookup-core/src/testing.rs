//! Test utilities for lookup hosts and components
//!
//! - [`key`]: Create a `KeyEvent` from a string (e.g. `key("ctrl+c")`)
//! - [`type_text`]: Key events for every character of a string
//! - [`RenderHarness`]: Render a component into a `TestBackend` and read it back
//! - Assertion macros for verifying emitted actions
//!
//! ```ignore
//! use lookup::testing::{key, RenderHarness};
//!
//! let mut render = RenderHarness::new(40, 8);
//! let output = render.render_to_string_plain(|frame| {
//!     view.render(frame, frame.area(), props);
//! });
//! assert!(output.contains("Acme"));
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::event::EventKind;

/// Parse strings like `"q"`, `"ctrl+p"`, `"enter"` or `"shift+tab"`.
fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    // A lone "+" is the plus key, not a separator
    if key_str == "+" {
        return Some(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::empty()));
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let mut modifiers = KeyModifiers::empty();
    let key_part = parts.last()?.trim();

    for part in &parts[..parts.len() - 1] {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match key_part {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Create a `KeyEvent` from a key string.
///
/// ```
/// use lookup_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("ctrl+c");
/// assert_eq!(k.code, KeyCode::Char('c'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
///
/// Unlike [`key`], this keeps the character's case.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// One [`EventKind::Key`] per character of `text`, case preserved.
pub fn type_text(text: &str) -> Vec<EventKind> {
    text.chars().map(|c| EventKind::Key(char_key(c))).collect()
}

/// Renders into an in-memory terminal for assertions on output.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer.
    pub fn render<F>(&mut self, draw: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("failed to draw test frame: {e}"));
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return it as plain text, one line per row with
    /// trailing spaces trimmed.
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let buffer = self.render(draw);
        let width = buffer.area.width.max(1) as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.symbol()).collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Assert that a specific action was emitted.
///
/// ```ignore
/// let actions: Vec<_> = view.handle_event(&event, props).into_iter().collect();
/// assert_emitted!(actions, Action::SelectionChoose(id) if id == "1");
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_key_with_modifiers() {
        let k = key("ctrl+alt+x");
        assert_eq!(k.code, KeyCode::Char('x'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
        assert!(k.modifiers.contains(KeyModifiers::ALT));
    }

    #[test]
    fn test_key_special() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("Enter").code, KeyCode::Enter);
        assert_eq!(key("shift+tab").code, KeyCode::BackTab);
        assert_eq!(key("space").code, KeyCode::Char(' '));
        assert_eq!(key("+").code, KeyCode::Char('+'));
    }

    #[test]
    fn test_invalid_key_strings() {
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("hyper+x").is_none());
        assert!(parse_key_string("notakey").is_none());
    }

    #[test]
    fn test_type_text_preserves_case() {
        let events = type_text("Ab");
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], EventKind::Key(k) if k.code == KeyCode::Char('A')));
        assert!(matches!(&events[1], EventKind::Key(k) if k.code == KeyCode::Char('b')));
    }

    #[test]
    fn test_render_harness() {
        let mut render = RenderHarness::new(12, 2);
        let output = render.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("Acme Corp"), frame.area());
        });
        assert_eq!(output, "Acme Corp\n");
    }

    #[test]
    fn test_assert_macros() {
        #[derive(Debug)]
        enum Emitted {
            Choose(&'static str),
            Clear,
        }

        let actions = vec![Emitted::Choose("1"), Emitted::Clear, Emitted::Choose("2")];

        assert_emitted!(actions, Emitted::Clear);
        assert_emitted!(actions, Emitted::Choose(id) if *id == "2");
        assert_not_emitted!(actions, Emitted::Choose("3"));
        assert_eq!(count_emitted!(actions, Emitted::Choose(_)), 2);
    }
}
