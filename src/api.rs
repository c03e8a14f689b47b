//! Nominatim geocoding and Open-Meteo weather clients

use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::{ResolveError, WeatherError};
use crate::state::{Location, WeatherSnapshot};

// ============================================================================
// Geocoding API
// ============================================================================

/// One element of the Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct GeocodingResult {
    display_name: String,
    lat: String,
    lon: String,
}

impl TryFrom<GeocodingResult> for Location {
    type Error = ResolveError;

    fn try_from(result: GeocodingResult) -> Result<Self, Self::Error> {
        let lat = parse_coordinate(&result.lat)?;
        let lon = parse_coordinate(&result.lon)?;
        Ok(Location {
            name: result.display_name,
            lat,
            lon,
        })
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, ResolveError> {
    raw.trim()
        .parse()
        .map_err(|_| ResolveError::Network(format!("invalid coordinate: {raw:?}")))
}

// ============================================================================
// Weather API
// ============================================================================

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<WeatherSnapshot>,
}

/// HTTP client for both upstream services
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolve a free-text query to the first geocoding match
    pub async fn resolve(&self, query: &str) -> Result<Location, ResolveError> {
        let url = format!(
            "{}?format=json&q={}",
            self.config.geocode_url,
            urlencoding::encode(query)
        );
        tracing::debug!(%url, "geocoding query");

        let network = |e: reqwest::Error| ResolveError::Network(e.to_string());
        let results: Vec<GeocodingResult> = self
            .http
            .get(&url)
            .header(ACCEPT_LANGUAGE, "en")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(network)?
            .json()
            .await
            .map_err(network)?;

        let first = results.into_iter().next().ok_or(ResolveError::NoResults)?;
        Location::try_from(first)
    }

    /// Fetch the current weather snapshot for the given coordinates
    pub async fn fetch_current(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current_weather=true&timezone=auto",
            self.config.forecast_url, lat, lon
        );
        tracing::debug!(%url, "fetching current weather");

        let network = |e: reqwest::Error| WeatherError::Network(e.to_string());
        let data: ForecastResponse = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(network)?
            .json()
            .await
            .map_err(network)?;

        data.current_weather.ok_or(WeatherError::NoData)
    }
}

/// Convert WMO weather code to human-readable description
pub fn weather_description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}
