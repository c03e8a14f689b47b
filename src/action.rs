//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Failure;
use crate::state::{Location, WeatherSnapshot};

/// Application actions with automatic category inference
///
/// Every lookup result carries the `lookup` generation it was started under;
/// the reducer drops results from a superseded lookup.
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Open the query prompt
    SearchOpen,

    /// Close the query prompt without submitting
    SearchClose,

    /// Query text changed
    SearchQueryChange(String),

    /// Submit the query (triggers geocoding)
    SearchSubmit(String),

    /// Result: first geocoding match
    SearchDidResolve { lookup: u64, location: Location },

    /// Result: geocoding failed
    SearchDidFail { lookup: u64, failure: Failure },

    // ===== Locate category =====
    /// Intent: use the device position
    LocateRequest,

    /// Result: device position read
    LocateDidResolve { lookup: u64, location: Location },

    /// Result: device position unavailable
    LocateDidFail { lookup: u64, failure: Failure },

    /// Result: start-up position read failed; ignored
    LocateDidFailSilently { lookup: u64, failure: Failure },

    // ===== Weather category =====
    /// Intent: refetch weather for the current location
    WeatherFetch,

    /// Result: snapshot loaded
    WeatherDidLoad { lookup: u64, snapshot: WeatherSnapshot },

    /// Result: weather fetch failed
    WeatherDidFail { lookup: u64, failure: Failure },

    // ===== Web search category =====
    /// Open the web-search prompt
    WebSearchOpen,

    /// Close the web-search prompt
    WebSearchClose,

    /// Web-search text changed
    WebSearchChange(String),

    /// Submit the web-search term (opens the browser)
    WebSearchSubmit(String),

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Dispatched once when the app starts
    Mount,

    /// Clear query, location, weather and error
    Reset,

    /// Exit the application
    Quit,
}
