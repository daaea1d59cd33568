//! The complete lookup widget: label, search input or pill, and dropdown

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use lookup::{Component, DropdownSource, EventKind, LookupConfig, LookupState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::select_list::{SelectList, SelectListProps};
use crate::text_input::{TextInput, TextInputProps};

const SEARCHING_HINT: &str = "Searching...";
const INPUT_HEIGHT: u16 = 3;

/// Props for LookupView component
pub struct LookupViewProps<'a, A> {
    pub state: &'a LookupState,
    pub config: &'a LookupConfig,
    /// Whether this component has focus
    pub is_focused: bool,
    /// The search text changed
    pub on_query_change: fn(String) -> A,
    /// A result was picked, by record id
    pub on_choose: fn(String) -> A,
    /// The pill's remove control was used
    pub on_clear: fn() -> A,
    /// The dropdown should open or close
    pub on_dropdown: fn(DropdownSource) -> A,
}

/// Internal list messages, mapped to host actions by the view
#[derive(Debug, Clone, Copy, PartialEq)]
enum ListMsg {
    Highlight(usize),
    Choose(usize),
}

/// Screen regions from the last render
#[derive(Debug, Default, Clone, Copy)]
struct Regions {
    container: Rect,
    input: Rect,
    dropdown: Option<Rect>,
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Lookup widget view
///
/// Renders whatever the state says and maps keys and clicks to host
/// callbacks. The only state it keeps is UI state: the highlighted result
/// and the cursor of the search input.
#[derive(Default)]
pub struct LookupView {
    input: TextInput,
    list: SelectList,
    highlight: usize,
    regions: Regions,
}

impl LookupView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted result
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    fn result_names(state: &LookupState) -> Vec<String> {
        state.results.iter().map(|r| r.name().to_string()).collect()
    }

    fn list_event<A>(&mut self, event: &EventKind, props: &LookupViewProps<'_, A>) -> Vec<A> {
        let items = Self::result_names(props.state);
        let msgs: Vec<ListMsg> = self
            .list
            .handle_event(
                event,
                SelectListProps {
                    items: &items,
                    highlighted: self.highlight,
                    is_focused: true,
                    on_highlight: ListMsg::Highlight,
                    on_choose: ListMsg::Choose,
                },
            )
            .into_iter()
            .collect();

        let mut actions = Vec::new();
        for msg in msgs {
            match msg {
                ListMsg::Highlight(index) => self.highlight = index,
                ListMsg::Choose(index) => {
                    if let Some(record) = props.state.results.get(index) {
                        actions.push((props.on_choose)(record.id().to_string()));
                    }
                }
            }
        }
        actions
    }

    fn input_event<A>(&mut self, event: &EventKind, props: &LookupViewProps<'_, A>) -> Vec<A> {
        let edits: Vec<String> = self
            .input
            .handle_event(
                event,
                TextInputProps {
                    value: &props.state.search.query,
                    placeholder: &props.config.placeholder,
                    hint: None,
                    is_focused: true,
                    disabled: false,
                    on_change: |value: String| value,
                },
            )
            .into_iter()
            .collect();

        let mut actions = Vec::new();
        for query in edits {
            if !props.state.dropdown_open && actions.is_empty() {
                actions.push((props.on_dropdown)(DropdownSource::Input));
            }
            self.highlight = 0;
            actions.push((props.on_query_change)(query));
        }
        actions
    }

    fn mouse_down<A>(&mut self, event: &EventKind, column: u16, row: u16, props: &LookupViewProps<'_, A>) -> Vec<A> {
        let open = props.state.dropdown_open;

        if !contains(self.regions.container, column, row) {
            return if open {
                vec![(props.on_dropdown)(DropdownSource::OutsideContainer)]
            } else {
                Vec::new()
            };
        }

        if let Some(dropdown) = self.regions.dropdown {
            if contains(dropdown, column, row) {
                return self.list_event(event, props);
            }
        }

        if contains(self.regions.input, column, row) && !props.state.is_pill() && !open {
            return vec![(props.on_dropdown)(DropdownSource::Input)];
        }
        Vec::new()
    }

    fn render_label(frame: &mut Frame, area: Rect, label: &str, disabled: bool) {
        let style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        frame.render_widget(Paragraph::new(label).style(style), area);
    }

    fn render_pill(frame: &mut Frame, area: Rect, props: &LookupViewProps<'_, impl Sized>) {
        let Some(record) = props.state.selected.as_ref() else {
            return;
        };

        let mut spans = Vec::new();
        if let Some(icon) = props.config.icon_name.as_deref() {
            spans.push(Span::styled(
                format!("[{icon}] "),
                Style::default().fg(Color::Cyan),
            ));
        }
        spans.push(Span::styled(
            record.name(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        if !props.config.disabled {
            spans.push(Span::styled(" ×", Style::default().fg(Color::Red)));
        }

        let border = if props.is_focused && !props.config.disabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .block(Block::default().borders(Borders::ALL).border_style(border)),
            area,
        );
    }
}

impl<A> Component<A> for LookupView {
    type Props<'a> = LookupViewProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if props.config.disabled || !props.is_focused {
            return Vec::new();
        }

        let state = props.state;

        match event {
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.mouse_down(event, mouse.column, mouse.row, &props)
            }
            EventKind::Focus(false) if state.dropdown_open => {
                vec![(props.on_dropdown)(DropdownSource::OutsideContainer)]
            }
            EventKind::Key(key) if state.is_pill() => match key.code {
                KeyCode::Backspace | KeyCode::Delete => vec![(props.on_clear)()],
                _ => Vec::new(),
            },
            EventKind::Key(key) => match key.code {
                KeyCode::Esc if state.dropdown_open => {
                    vec![(props.on_dropdown)(DropdownSource::OutsideContainer)]
                }
                KeyCode::Down if !state.dropdown_open => {
                    self.highlight = 0;
                    vec![(props.on_dropdown)(DropdownSource::Input)]
                }
                KeyCode::Up | KeyCode::Down | KeyCode::Enter if state.dropdown_open => {
                    self.list_event(event, &props)
                }
                _ => self.input_event(event, &props),
            },
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let config = props.config;
        let mut y = area.y;
        let bottom = area.y.saturating_add(area.height);
        let row = |y: u16, height: u16| Rect {
            x: area.x,
            y,
            width: area.width,
            height: height.min(bottom.saturating_sub(y)),
        };

        if !config.label.is_empty() {
            Self::render_label(frame, row(y, 1), &config.label, config.disabled);
            y = y.saturating_add(1);
        }

        let input_area = row(y, INPUT_HEIGHT);
        y = y.saturating_add(input_area.height);
        self.regions.input = input_area;
        self.regions.dropdown = None;

        if state.is_pill() {
            Self::render_pill(frame, input_area, &props);
        } else {
            self.input.render(
                frame,
                input_area,
                TextInputProps {
                    value: &state.search.query,
                    placeholder: &config.placeholder,
                    hint: state.search.is_loading.then_some(SEARCHING_HINT),
                    is_focused: props.is_focused,
                    disabled: config.disabled,
                    on_change: |value: String| value,
                },
            );

            if state.dropdown_open && !config.disabled {
                let dropdown = if state.search.has_results {
                    let items = Self::result_names(state);
                    self.highlight = self.highlight.min(items.len().saturating_sub(1));
                    let rows = u16::try_from(items.len()).unwrap_or(u16::MAX);
                    let dropdown = row(y, rows.saturating_add(2));
                    self.list.render(
                        frame,
                        dropdown,
                        SelectListProps {
                            items: &items,
                            highlighted: self.highlight,
                            is_focused: props.is_focused,
                            on_highlight: ListMsg::Highlight,
                            on_choose: ListMsg::Choose,
                        },
                    );
                    dropdown
                } else {
                    let dropdown = row(y, 3);
                    frame.render_widget(
                        Paragraph::new(config.empty_message.as_str())
                            .style(Style::default().fg(Color::DarkGray))
                            .block(Block::default().borders(Borders::ALL)),
                        dropdown,
                    );
                    dropdown
                };
                y = y.saturating_add(dropdown.height);
                self.regions.dropdown = Some(dropdown);
            }
        }

        self.regions.container = Rect {
            height: y.saturating_sub(area.y),
            ..area
        };
    }
}
