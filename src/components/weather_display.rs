use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, ResultPanel, ResultPanelProps};
use crate::action::Action;
use crate::state::AppState;

pub const TITLE: &str = "weatherpp";
pub const QUERY_PLACEHOLDER: &str = "도시나 주소를 입력하세요 (예: Seoul, Korea)";
pub const ATTRIBUTION: &str = "Data: OpenStreetMap (geocoding), Open-Meteo (weather)";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main screen: title, query, results, key hints
#[derive(Default)]
pub struct WeatherDisplay;

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('/') | KeyCode::Enter => Some(Action::SearchOpen),
                KeyCode::Char('l') => Some(Action::LocateRequest),
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::WeatherFetch),
                KeyCode::Char('x') => Some(Action::Reset),
                KeyCode::Char('g') => Some(Action::WebSearchOpen),
                KeyCode::Char('u') => Some(Action::UiToggleUnits),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Query
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Results
            Constraint::Length(1), // Attribution
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let title = Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold()));
        frame.render_widget(Paragraph::new(title.centered()), chunks[0]);

        let query = if props.state.query.is_empty() {
            Span::styled(QUERY_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(props.state.query.clone(), Style::default().fg(Color::White))
        };
        let query_line = Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::Cyan)),
            query,
        ]);
        frame.render_widget(Paragraph::new(query_line.centered()), chunks[1]);

        let mut panel = ResultPanel;
        panel.render(frame, chunks[3], ResultPanelProps { state: props.state });

        let attribution = Line::from(Span::styled(
            ATTRIBUTION,
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(attribution.centered()), chunks[4]);

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[5],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("/", "search"),
                    StatusBarHint::new("l", "locate"),
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("x", "reset"),
                    StatusBarHint::new("g", "google"),
                    StatusBarHint::new("u", "units"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn actions_for(keys: &str, is_focused: bool) -> Vec<Action> {
        let mut component = WeatherDisplay;
        let state = AppState::default();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused,
        };
        component
            .handle_event(&EventKind::Key(key(keys)), props)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_handle_event_locate() {
        let actions = actions_for("l", true);
        actions.assert_count(1);
        actions.assert_first(Action::LocateRequest);
    }

    #[test]
    fn test_handle_event_reset_and_search() {
        actions_for("x", true).assert_first(Action::Reset);
        actions_for("/", true).assert_first(Action::SearchOpen);
        actions_for("g", true).assert_first(Action::WebSearchOpen);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        actions_for("r", false).assert_empty();
    }

    #[test]
    fn test_render_idle_hint() {
        let mut render = RenderHarness::new(80, 24);
        let mut component = WeatherDisplay;
        let state = AppState::default();

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("weatherpp"));
        assert!(output.contains("for your location"));
    }
}
