//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Resolve a free-text query to coordinates
    Geocode { lookup: u64, query: String },
    /// Read the device position once
    Locate { lookup: u64, silent: bool },
    /// Fetch current weather for the given coordinates
    FetchWeather { lookup: u64, lat: f64, lon: f64 },
    /// Open a web search for `term` in the browser
    WebSearch { term: String },
}
