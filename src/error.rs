//! Error taxonomy for lookups and the messages shown for each kind

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Location Resolver failures
#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("no geocoding results")]
    NoResults,
    #[error("geocoding request failed: {0}")]
    Network(String),
}

/// Weather Fetcher failures
#[derive(thiserror::Error, Debug)]
pub enum WeatherError {
    #[error("response has no current weather")]
    NoData,
    #[error("weather request failed: {0}")]
    Network(String),
}

/// Geolocation Adapter failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("geolocation is not supported on this device")]
    Unsupported,
}

/// Serializable failure kind carried by result actions.
///
/// Each kind maps to one fixed user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Failure {
    NoResults,
    SearchNetwork,
    NoData,
    WeatherNetwork,
    LocationUnavailable,
    LocationUnsupported,
}

impl Failure {
    pub fn message(self) -> &'static str {
        match self {
            Failure::NoResults => "검색 결과가 없습니다.",
            Failure::SearchNetwork => "검색 중 오류가 발생했습니다.",
            Failure::NoData => "날씨 정보를 가져오지 못했습니다.",
            Failure::WeatherNetwork => "네트워크 오류가 발생했습니다.",
            Failure::LocationUnavailable => "위치 정보를 가져올 수 없습니다.",
            Failure::LocationUnsupported => "이 브라우저에서 위치 기능을 지원하지 않습니다.",
        }
    }
}

impl From<&ResolveError> for Failure {
    fn from(err: &ResolveError) -> Self {
        match err {
            ResolveError::NoResults => Failure::NoResults,
            ResolveError::Network(_) => Failure::SearchNetwork,
        }
    }
}

impl From<&WeatherError> for Failure {
    fn from(err: &WeatherError) -> Self {
        match err {
            WeatherError::NoData => Failure::NoData,
            WeatherError::Network(_) => Failure::WeatherNetwork,
        }
    }
}

impl From<&GeolocationError> for Failure {
    fn from(err: &GeolocationError) -> Self {
        match err {
            GeolocationError::PermissionDenied => Failure::LocationUnavailable,
            GeolocationError::Unsupported => Failure::LocationUnsupported,
        }
    }
}
