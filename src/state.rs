//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display label used for positions read from the device
pub const CURRENT_LOCATION_LABEL: &str = "Current location";

/// Current weather snapshot from Open-Meteo (`current_weather` payload)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub windspeed: f64,
    /// Degrees
    pub winddirection: f64,
    pub weathercode: i32, // WMO weather code
    pub time: String,
}

/// A resolved place: first geocoding match or a device reading
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Location for a raw device position (no reverse geocoding of the label)
    pub fn current(lat: f64, lon: f64) -> Self {
        Self {
            name: CURRENT_LOCATION_LABEL.to_string(),
            lat,
            lon,
        }
    }
}

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn format(&self, celsius: f64) -> String {
        match self {
            TempUnit::Celsius => format!("{:.1} °C", celsius),
            TempUnit::Fahrenheit => format!("{:.1} °F", celsius * 9.0 / 5.0 + 32.0),
        }
    }
}

/// Which prompt overlay currently owns the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum InputMode {
    #[default]
    Normal,
    Query,
    WebSearch,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Lookup state (visible in debug) ---
    /// Free-text place query
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Generation of the newest lookup; results tagged otherwise are stale
    #[debug(section = "Search", label = "Lookup")]
    pub lookup: u64,

    /// Most recently resolved location
    #[debug(section = "Search", label = "Location", debug_fmt)]
    pub location: Option<Location>,

    /// Weather for `location`, if the last fetch succeeded
    #[debug(section = "Weather", label = "Snapshot", debug_fmt)]
    pub weather: Option<WeatherSnapshot>,

    /// A resolve/fetch sequence is in flight
    #[debug(section = "Weather", label = "Loading")]
    pub loading: bool,

    /// User-facing error line
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: Option<String>,

    /// The device can report its position
    #[debug(section = "Device", label = "Geolocation")]
    pub geolocation_supported: bool,

    // --- UI (skipped) ---
    #[debug(skip)]
    pub unit: TempUnit,

    #[debug(skip)]
    pub input_mode: InputMode,

    /// Text of the web-search prompt
    #[debug(skip)]
    pub web_query: String,
}

impl AppState {
    pub fn new(geolocation_supported: bool) -> Self {
        Self {
            geolocation_supported,
            ..Self::default()
        }
    }

    /// Initial state with a query to submit on mount
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Location with weather to show, if both are settled
    pub fn report(&self) -> Option<(&Location, &WeatherSnapshot)> {
        self.location.as_ref().zip(self.weather.as_ref())
    }

    /// Start a new lookup, superseding any result still on its way
    pub fn begin_lookup(&mut self) -> u64 {
        self.lookup = self.lookup.wrapping_add(1);
        self.lookup
    }

    pub fn is_current(&self, lookup: u64) -> bool {
        self.lookup == lookup
    }

    pub fn is_editing(&self) -> bool {
        self.input_mode != InputMode::Normal
    }
}
