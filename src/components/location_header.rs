use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::Location;

/// Place name in FIGlet letters, coloured by temperature, with coordinates below
pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub location: &'a Location,
    pub temperature: Option<f64>,
}

/// Rows below the FIGlet name: full label + coordinates.
pub const HEADER_OVERHEAD: u16 = 2;

/// Tallest font in the stack (terminus).
pub const HEADER_FONT_HEIGHT: u16 = 6;

pub fn temperature_colors(temp: Option<f64>) -> (ArtColor, ArtColor) {
    match temp {
        Some(t) if t < 0.0 => (ArtColor::rgb(150, 200, 255), ArtColor::rgb(200, 230, 255)),
        Some(t) if t < 15.0 => (ArtColor::rgb(100, 180, 255), ArtColor::rgb(150, 220, 200)),
        Some(t) if t < 25.0 => (ArtColor::rgb(100, 200, 150), ArtColor::rgb(255, 220, 100)),
        Some(t) if t < 35.0 => (ArtColor::rgb(255, 180, 80), ArtColor::rgb(255, 120, 80)),
        Some(_) => (ArtColor::rgb(255, 100, 80), ArtColor::rgb(255, 60, 60)),
        None => (ArtColor::rgb(180, 180, 180), ArtColor::rgb(220, 220, 220)),
    }
}

/// Nominatim labels run long ("Seoul, South Korea"); the headline keeps the first part.
fn headline(name: &str) -> &str {
    name.split(',').next().map(str::trim).unwrap_or(name)
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet name, artbox picks the font that fits
            Constraint::Length(1), // Full label
            Constraint::Length(1), // Coordinates
        ])
        .split(area);

        let (start, end) = temperature_colors(props.temperature);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(Fill::Linear(LinearGradient::horizontal(start, end)));
        frame.render_widget(
            ArtBox::new(&renderer, headline(&props.location.name)),
            chunks[0],
        );

        let label = Line::from(Span::styled(
            props.location.name.clone(),
            Style::default().fg(Color::Gray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(label), chunks[1]);

        let coords = Line::from(Span::styled(
            format!("{:.4}, {:.4}", props.location.lat, props.location.lon),
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(coords), chunks[2]);
    }
}
