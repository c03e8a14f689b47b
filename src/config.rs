//! Endpoint configuration for the HTTP clients

use std::time::Duration;

pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";

/// Nominatim rejects requests without an identifying user agent.
pub const USER_AGENT: &str = concat!("weatherpp/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub geocode_url: String,
    pub forecast_url: String,
    pub web_search_url: String,
    pub user_agent: String,
    /// No timeout when `None`; a hung call keeps the lookup loading.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            geocode_url: NOMINATIM_SEARCH_URL.to_string(),
            forecast_url: OPEN_METEO_FORECAST_URL.to_string(),
            web_search_url: GOOGLE_SEARCH_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}
