pub mod location_header;
pub mod prompt_overlay;
pub mod result_panel;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use location_header::{LocationHeader, LocationHeaderProps};
pub use prompt_overlay::{PromptOverlay, PromptOverlayProps, modal_area};
pub use result_panel::{ERROR_ICON, ResultPanel, ResultPanelProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
