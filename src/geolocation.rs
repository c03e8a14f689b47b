//! Device position source
//!
//! A terminal has no position sensor of its own, so the reading is provided
//! when the program starts. Each query is one-shot.

use crate::error::GeolocationError;
use crate::state::Location;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PositionSource {
    /// No geolocation capability
    #[default]
    Unsupported,
    /// Capability exists but the user refused access
    Denied,
    /// A known device position
    Fixed { lat: f64, lon: f64 },
}

impl PositionSource {
    pub fn is_supported(&self) -> bool {
        !matches!(self, PositionSource::Unsupported)
    }

    /// Read the current position once
    pub async fn current_position(&self) -> Result<Location, GeolocationError> {
        match *self {
            PositionSource::Unsupported => Err(GeolocationError::Unsupported),
            PositionSource::Denied => Err(GeolocationError::PermissionDenied),
            PositionSource::Fixed { lat, lon } => Ok(Location::current(lat, lon)),
        }
    }
}

/// Parse a `LAT,LON` pair, as given on the command line
pub fn parse_position(raw: &str) -> Result<PositionSource, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got {raw:?}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude: {lat:?}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude: {lon:?}"))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("position out of range: {lat},{lon}"));
    }
    Ok(PositionSource::Fixed { lat, lon })
}
