//! Result list with a movable highlight

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use lookup::{Component, EventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Props for SelectList component
pub struct SelectListProps<'a, A> {
    /// Items to display
    pub items: &'a [String],
    /// Currently highlighted index
    pub highlighted: usize,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Callback when the highlight moves
    pub on_highlight: fn(usize) -> A,
    /// Callback when an item is picked (Enter or click)
    pub on_choose: fn(usize) -> A,
}

/// A scrollable list that tracks a highlighted row
///
/// Up/Down/Home/End move the highlight, Enter or a left click picks.
/// Letter keys are left alone so the list can sit under a text input.
#[derive(Default)]
pub struct SelectList {
    /// Scroll offset for viewport
    scroll_offset: usize,
    /// Inner area from the last render, for mouse hit-testing
    inner: Rect,
}

impl SelectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure the highlighted index is visible within the viewport
    fn ensure_visible(&mut self, highlighted: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if highlighted < self.scroll_offset {
            self.scroll_offset = highlighted;
        } else if highlighted >= self.scroll_offset + viewport_height {
            self.scroll_offset = highlighted.saturating_sub(viewport_height - 1);
        }
    }

    /// Item index under a screen position, if any
    fn hit(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        let inside = column >= self.inner.x
            && column < self.inner.x.saturating_add(self.inner.width)
            && row >= self.inner.y
            && row < self.inner.y.saturating_add(self.inner.height);
        if !inside {
            return None;
        }
        let index = self.scroll_offset + usize::from(row - self.inner.y);
        (index < len).then_some(index)
    }
}

impl<A> Component<A> for SelectList {
    type Props<'a> = SelectListProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.items.is_empty() {
            return None;
        }

        let len = props.items.len();
        let current = props.highlighted.min(len - 1);
        let move_to = |index: usize| (index != current).then(|| (props.on_highlight)(index));

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Down => move_to((current + 1).min(len - 1)),
                KeyCode::Up => move_to(current.saturating_sub(1)),
                KeyCode::Home => move_to(0),
                KeyCode::End => move_to(len - 1),
                KeyCode::Enter => Some((props.on_choose)(current)),
                _ => None,
            },
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => self
                .hit(mouse.column, mouse.row, len)
                .map(|index| (props.on_choose)(index)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        self.inner = block.inner(area);

        let highlighted = props.highlighted.min(props.items.len().saturating_sub(1));
        self.ensure_visible(highlighted, self.inner.height as usize);

        let items: Vec<ListItem> = props
            .items
            .iter()
            .map(|item| ListItem::new(Line::raw(item.as_str())))
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default().with_selected(Some(highlighted));
        *state.offset_mut() = self.scroll_offset;

        frame.render_stateful_widget(list, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use lookup::testing::{key, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Highlight(usize),
        Choose(usize),
    }

    fn make_items() -> Vec<String> {
        vec!["Acme".into(), "Acme Corp".into(), "Zeta".into()]
    }

    fn props(items: &[String], highlighted: usize) -> SelectListProps<'_, TestAction> {
        SelectListProps {
            items,
            highlighted,
            is_focused: true,
            on_highlight: TestAction::Highlight,
            on_choose: TestAction::Choose,
        }
    }

    fn press(list: &mut SelectList, props: SelectListProps<'_, TestAction>, k: &str) -> Vec<TestAction> {
        list.handle_event(&EventKind::Key(key(k)), props)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_navigate_down_and_up() {
        let mut list = SelectList::new();
        let items = make_items();

        assert_eq!(press(&mut list, props(&items, 0), "down"), vec![TestAction::Highlight(1)]);
        assert_eq!(press(&mut list, props(&items, 2), "up"), vec![TestAction::Highlight(1)]);
        assert_eq!(press(&mut list, props(&items, 0), "end"), vec![TestAction::Highlight(2)]);
    }

    #[test]
    fn test_navigate_at_bounds() {
        let mut list = SelectList::new();
        let items = make_items();

        assert!(press(&mut list, props(&items, 0), "up").is_empty());
        assert!(press(&mut list, props(&items, 2), "down").is_empty());
    }

    #[test]
    fn test_letters_pass_through() {
        let mut list = SelectList::new();
        let items = make_items();
        assert!(press(&mut list, props(&items, 0), "j").is_empty());
    }

    #[test]
    fn test_enter_chooses_highlighted() {
        let mut list = SelectList::new();
        let items = make_items();
        assert_eq!(press(&mut list, props(&items, 1), "enter"), vec![TestAction::Choose(1)]);
        // Stale highlight past the end picks the last item
        assert_eq!(press(&mut list, props(&items, 7), "enter"), vec![TestAction::Choose(2)]);
    }

    #[test]
    fn test_empty_or_unfocused_ignores_events() {
        let mut list = SelectList::new();
        assert!(press(&mut list, props(&[], 0), "enter").is_empty());

        let items = make_items();
        let mut unfocused = props(&items, 0);
        unfocused.is_focused = false;
        assert!(press(&mut list, unfocused, "down").is_empty());
    }

    #[test]
    fn test_click_chooses_row() {
        let mut render = RenderHarness::new(30, 6);
        let mut list = SelectList::new();
        let items = make_items();

        render.render(|frame| list.render(frame, frame.area(), props(&items, 0)));

        // Row 0 is the border, row 3 is the third item
        let click = EventKind::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 3,
            modifiers: KeyModifiers::empty(),
        });
        let actions: Vec<_> = list.handle_event(&click, props(&items, 0)).into_iter().collect();
        assert_eq!(actions, vec![TestAction::Choose(2)]);

        let border = EventKind::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 0,
            modifiers: KeyModifiers::empty(),
        });
        let actions: Vec<_> = list.handle_event(&border, props(&items, 0)).into_iter().collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_render() {
        let mut render = RenderHarness::new(30, 5);
        let mut list = SelectList::new();
        let items = make_items();

        let output = render.render_to_string_plain(|frame| {
            list.render(frame, frame.area(), props(&items, 1));
        });

        assert!(output.contains("Acme"));
        assert!(output.contains("Acme Corp"));
        assert!(output.contains("Zeta"));
    }
}
