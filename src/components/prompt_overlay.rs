use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, TextInput, TextInputProps,
    TextInputStyle, centered_rect,
};

use super::Component;
use super::weather_display::QUERY_PLACEHOLDER;
use crate::action::Action;
use crate::state::{AppState, InputMode};

pub const WEB_SEARCH_PLACEHOLDER: &str = "Google에서 검색할 내용 입력";

/// Where the prompt modal sits inside the frame
pub fn modal_area(area: Rect) -> Rect {
    centered_rect(60, 7, area)
}

/// Modal single-line prompt, shared by the place query and the web search
pub struct PromptOverlay {
    input: TextInput,
    modal: Modal,
    was_open: bool,
}

pub struct PromptOverlayProps<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
    pub on_close: fn() -> Action,
}

impl Default for PromptOverlay {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            modal: Modal::new(),
            was_open: false,
        }
    }
}

impl PromptOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.input = TextInput::new();
        }
        self.was_open = is_open;
    }
}

impl Component<Action> for PromptOverlay {
    type Props<'a> = PromptOverlayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![(props.on_close)()],
            KeyCode::Enter => return vec![(props.on_submit)(props.value.to_string())],
            _ => {}
        }

        let input_props = TextInputProps {
            value: props.value,
            placeholder: props.placeholder,
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::new(1, 0, 1, 0),
                    bg: None,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };

        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < 7 {
            return;
        }

        let PromptOverlay { input, modal, .. } = self;
        let modal_area = modal_area(area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Input
                Constraint::Min(0),
            ])
            .split(content_area);

            let title = Line::from(Span::styled(
                props.title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered();
            frame.render_widget(Paragraph::new(title), chunks[0]);

            // Input with lighter background
            let input_props = TextInputProps {
                value: props.value,
                placeholder: props.placeholder,
                is_focused: props.is_focused,
                style: TextInputStyle {
                    base: BaseStyle {
                        border: None,
                        padding: Padding::all(1),
                        bg: Some(Color::Rgb(50, 50, 60)),
                        fg: None,
                    },
                    placeholder_style: None,
                    cursor_style: None,
                },
                on_change: props.on_change,
                on_submit: props.on_submit,
                on_cursor_move: Some(|_| Action::Render),
            };
            input.render(frame, chunks[1], input_props);
        };

        modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(35, 35, 45)),
                        padding: Padding::xy(1, 1),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: props.on_close,
                render_content: &mut render_content,
            },
        );
    }
}

impl<'a> PromptOverlayProps<'a> {
    /// Props for whichever prompt is open, if any
    pub fn for_state(state: &'a AppState, is_focused: bool) -> Option<Self> {
        let props = match state.input_mode {
            InputMode::Normal => return None,
            InputMode::Query => PromptOverlayProps {
                title: "장소 검색",
                value: &state.query,
                placeholder: QUERY_PLACEHOLDER,
                is_focused,
                on_change: Action::SearchQueryChange,
                on_submit: Action::SearchSubmit,
                on_close: || Action::SearchClose,
            },
            InputMode::WebSearch => PromptOverlayProps {
                title: "Google 검색",
                value: &state.web_query,
                placeholder: WEB_SEARCH_PLACEHOLDER,
                is_focused,
                on_change: Action::WebSearchChange,
                on_submit: Action::WebSearchSubmit,
                on_close: || Action::WebSearchClose,
            },
        };
        Some(props)
    }
}
