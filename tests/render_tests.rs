//! Render snapshot tests using RenderHarness

use tui_dispatch::testing::*;
use weatherpp::{
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    state::{AppState, Location, TempUnit, WeatherSnapshot},
};

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherDisplay;
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn tokyo() -> Location {
    Location {
        name: "Tokyo, Japan".into(),
        lat: 35.6762,
        lon: 139.6503,
    }
}

fn rainy() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: 0.0,
        windspeed: 12.4,
        winddirection: 315.0,
        weathercode: 61,
        time: "2024-03-05T08:00".into(),
    }
}

#[test]
fn test_render_report() {
    let state = AppState {
        location: Some(tokyo()),
        weather: Some(rainy()),
        ..Default::default()
    };

    let output = render(&state, 80, 30);

    assert!(output.contains("Tokyo, Japan"), "full label:\n{}", output);
    assert!(output.contains("35.6762"), "coordinates:\n{}", output);
    assert!(output.contains("12.4"), "wind speed:\n{}", output);
    assert!(output.contains("315"), "wind direction:\n{}", output);
    assert!(output.contains("61 (Rain)"), "condition:\n{}", output);
    assert!(output.contains("2024-03-05T08:00"), "time:\n{}", output);
}

#[test]
fn test_render_fahrenheit() {
    let state = AppState {
        location: Some(tokyo()),
        weather: Some(rainy()),
        unit: TempUnit::Fahrenheit,
        ..Default::default()
    };

    let output = render(&state, 80, 30);

    assert!(output.contains("32.0"), "0°C shown as 32°F:\n{}", output);
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        error: Some("network down".into()),
        ..Default::default()
    };

    let output = render(&state, 80, 24);

    assert!(output.contains("Error"), "Should show error label");
    assert!(output.contains("network down"), "Should show error message");
}

#[test]
fn test_render_location_without_weather() {
    let state = AppState {
        location: Some(tokyo()),
        error: Some("failed".into()),
        ..Default::default()
    };

    let output = render(&state, 80, 24);

    assert!(output.contains("Tokyo, Japan"), "Should name the location");
    assert!(!output.contains("12.4"));
}

#[test]
fn test_render_query_line() {
    let state = AppState {
        query: "Reykjavik".into(),
        ..Default::default()
    };

    let output = render(&state, 80, 24);

    assert!(output.contains("Reykjavik"));
}

#[test]
fn test_render_help_bar() {
    let output = render(&AppState::default(), 100, 24);

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("refresh"), "Should show refresh hint");
    assert!(output.contains("reset"), "Should show reset hint");
    assert!(output.contains("quit"), "Should show quit hint");
}
