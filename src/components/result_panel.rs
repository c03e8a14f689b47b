use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::location_header::{HEADER_FONT_HEIGHT, HEADER_OVERHEAD};
use super::{Component, LocationHeader, LocationHeaderProps};
use crate::action::Action;
use crate::api::weather_description;
use crate::state::{AppState, Location, WeatherSnapshot};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
pub const LOADING_TEXT: &str = "불러오는 중…";
pub const NO_WEATHER_SUFFIX: &str = "현재 날씨 정보 없음";

/// Loading line, error line and the lookup result
pub struct ResultPanel;

pub struct ResultPanelProps<'a> {
    pub state: &'a AppState,
}

/// Five detail rows under the header.
const DETAIL_ROWS: u16 = 5;

impl Component<Action> for ResultPanel {
    type Props<'a> = ResultPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let status = status_lines(state);

        let chunks = Layout::vertical([
            Constraint::Length(status.len() as u16),
            Constraint::Min(1),
        ])
        .split(area);
        frame.render_widget(Paragraph::new(status), chunks[0]);

        match ResultView::from_state(state) {
            ResultView::Report(location, weather) => {
                render_report(frame, chunks[1], state, location, weather)
            }
            ResultView::NoWeather(location) => {
                let line = Line::from(Span::styled(
                    format!("{} — {}", location.name, NO_WEATHER_SUFFIX),
                    Style::default().fg(Color::Gray),
                ))
                .centered();
                frame.render_widget(Paragraph::new(line), chunks[1]);
            }
            ResultView::Pending => {}
            ResultView::Empty => render_hint(frame, chunks[1]),
        }
    }
}

fn status_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if state.loading {
        lines.push(
            Line::from(Span::styled(
                LOADING_TEXT,
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        );
    }
    if let Some(error) = &state.error {
        lines.push(
            Line::from(vec![
                Span::raw(format!("{ERROR_ICON} ")),
                Span::styled("Error ", Style::default().fg(Color::Red).bold()),
                Span::styled(error.clone(), Style::default().fg(Color::Rgb(200, 100, 100))),
            ])
            .centered(),
        );
    }
    lines
}

fn render_report(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    location: &Location,
    weather: &WeatherSnapshot,
) {
    let chunks = Layout::vertical([
        Constraint::Max(HEADER_FONT_HEIGHT + HEADER_OVERHEAD),
        Constraint::Length(1),
        Constraint::Length(DETAIL_ROWS),
    ])
    .flex(Flex::Center)
    .split(area);

    let mut header = LocationHeader;
    header.render(
        frame,
        chunks[0],
        LocationHeaderProps {
            location,
            temperature: Some(weather.temperature),
        },
    );

    let rows = [
        ("온도", state.unit.format(weather.temperature)),
        ("풍속", format!("{} km/h", weather.windspeed)),
        ("풍향", format!("{}°", weather.winddirection)),
        (
            "조건 코드",
            format!(
                "{} ({})",
                weather.weathercode,
                weather_description(weather.weathercode)
            ),
        ),
        ("관측 시각", weather.time.clone()),
    ];
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
            .centered()
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[2]);
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan).bold();
    let dim = Style::default().fg(Color::DarkGray);
    let hint = Line::from(vec![
        Span::styled("Press ", dim),
        Span::styled("/", key),
        Span::styled(" to search a place or ", dim),
        Span::styled("l", key),
        Span::styled(" for your location", dim),
    ])
    .centered();
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

// ============================================================================
// Helpers
// ============================================================================

enum ResultView<'a> {
    Report(&'a Location, &'a WeatherSnapshot),
    NoWeather(&'a Location),
    Pending,
    Empty,
}

impl<'a> ResultView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        if let Some((location, weather)) = state.report() {
            return ResultView::Report(location, weather);
        }
        match &state.location {
            Some(location) if !state.loading => ResultView::NoWeather(location),
            Some(_) => ResultView::Pending,
            None if state.loading || state.error.is_some() => ResultView::Pending,
            None => ResultView::Empty,
        }
    }
}
