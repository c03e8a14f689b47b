//! Effect execution: each lookup effect runs to a single result action

use tui_dispatch::TaskManager;

use crate::action::Action;
use crate::api::ApiClient;
use crate::effect::Effect;
use crate::error::Failure;
use crate::geolocation::PositionSource;
use crate::redirect;

/// All lookup stages share one task key: a new lookup aborts the one in flight.
/// A result that already left the task is dropped by the reducer instead.
pub const LOOKUP_TASK: &str = "lookup";

/// Everything the effect handler needs to talk to the outside world
#[derive(Clone, Debug)]
pub struct Services {
    pub api: ApiClient,
    pub position: PositionSource,
}

impl Services {
    pub fn new(api: ApiClient, position: PositionSource) -> Self {
        Self { api, position }
    }

    /// Start the work for `effect`; lookup results come back through `tasks`
    pub fn spawn(&self, effect: Effect, tasks: &mut TaskManager<Action>) {
        let services = self.clone();
        match effect {
            Effect::Geocode { lookup, query } => {
                tasks.spawn(LOOKUP_TASK, async move {
                    services.geocode(lookup, &query).await
                });
            }
            Effect::Locate { lookup, silent } => {
                tasks.spawn(LOOKUP_TASK, async move {
                    services.locate(lookup, silent).await
                });
            }
            Effect::FetchWeather { lookup, lat, lon } => {
                tasks.spawn(LOOKUP_TASK, async move {
                    services.weather(lookup, lat, lon).await
                });
            }
            Effect::WebSearch { term } => services.web_search(&term),
        }
    }

    pub async fn geocode(&self, lookup: u64, query: &str) -> Action {
        match self.api.resolve(query).await {
            Ok(location) => {
                tracing::info!(lookup, name = %location.name, "resolved {:?}", query);
                Action::SearchDidResolve { lookup, location }
            }
            Err(e) => {
                tracing::warn!(lookup, "{}", e);
                Action::SearchDidFail {
                    lookup,
                    failure: Failure::from(&e),
                }
            }
        }
    }

    pub async fn locate(&self, lookup: u64, silent: bool) -> Action {
        match self.position.current_position().await {
            Ok(location) => Action::LocateDidResolve { lookup, location },
            Err(e) if silent => {
                tracing::debug!("start-up position unavailable: {}", e);
                Action::LocateDidFailSilently {
                    lookup,
                    failure: Failure::from(&e),
                }
            }
            Err(e) => {
                tracing::warn!(lookup, "{}", e);
                Action::LocateDidFail {
                    lookup,
                    failure: Failure::from(&e),
                }
            }
        }
    }

    pub async fn weather(&self, lookup: u64, lat: f64, lon: f64) -> Action {
        match self.api.fetch_current(lat, lon).await {
            Ok(snapshot) => Action::WeatherDidLoad { lookup, snapshot },
            Err(e) => {
                tracing::warn!(lookup, "{}", e);
                Action::WeatherDidFail {
                    lookup,
                    failure: Failure::from(&e),
                }
            }
        }
    }

    /// Fire-and-forget: the browser launches off the UI loop and nothing is
    /// reported back
    pub fn web_search(&self, term: &str) {
        if let Some(url) = redirect::search_url(&self.api.config().web_search_url, term) {
            tokio::task::spawn_blocking(move || redirect::open_in_browser(&url));
        }
    }
}
