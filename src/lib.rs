//! weatherpp - place search and current weather in the terminal
//!
//! Geocodes a query with Nominatim (or reads the device position), then
//! fetches the current weather for it from Open-Meteo.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod geolocation;
pub mod redirect;
pub mod reducer;
pub mod services;
pub mod state;
