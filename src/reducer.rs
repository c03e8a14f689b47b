//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::error::Failure;
use crate::state::{AppState, InputMode, Location};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchOpen => {
            state.input_mode = InputMode::Query;
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.input_mode = InputMode::Normal;
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            state.query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit(query) => submit_search(state, query),

        Action::SearchDidResolve { lookup, location }
        | Action::LocateDidResolve { lookup, location } => {
            if !state.is_current(lookup) {
                return DispatchResult::unchanged();
            }
            settle_location(state, location)
        }

        Action::SearchDidFail { lookup, failure } | Action::LocateDidFail { lookup, failure } => {
            fail_lookup(state, lookup, failure)
        }

        // ===== Locate actions =====
        Action::LocateRequest => {
            if !state.geolocation_supported {
                state.error = Some(Failure::LocationUnsupported.message().to_string());
                return DispatchResult::changed();
            }
            state.loading = true;
            let lookup = state.begin_lookup();
            DispatchResult::changed_with(Effect::Locate {
                lookup,
                silent: false,
            })
        }

        Action::LocateDidFailSilently { .. } => DispatchResult::unchanged(),

        // ===== Weather actions =====
        Action::WeatherFetch => match state.location.clone() {
            Some(location) => start_weather_fetch(state, &location),
            None => DispatchResult::unchanged(),
        },

        Action::WeatherDidLoad { lookup, snapshot } => {
            if !state.is_current(lookup) {
                return DispatchResult::unchanged();
            }
            state.weather = Some(snapshot);
            state.loading = false;
            DispatchResult::changed()
        }

        Action::WeatherDidFail { lookup, failure } => fail_lookup(state, lookup, failure),

        // ===== Web search actions =====
        Action::WebSearchOpen => {
            state.input_mode = InputMode::WebSearch;
            DispatchResult::changed()
        }

        Action::WebSearchClose => {
            state.input_mode = InputMode::Normal;
            DispatchResult::changed()
        }

        Action::WebSearchChange(term) => {
            state.web_query = term;
            DispatchResult::changed()
        }

        Action::WebSearchSubmit(term) => {
            if term.is_empty() {
                return DispatchResult::unchanged();
            }
            state.web_query = term.clone();
            state.input_mode = InputMode::Normal;
            DispatchResult::changed_with(Effect::WebSearch { term })
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Mount => {
            if !state.query.is_empty() {
                let query = state.query.clone();
                return submit_search(state, query);
            }
            if state.geolocation_supported {
                let lookup = state.begin_lookup();
                DispatchResult::changed_with(Effect::Locate {
                    lookup,
                    silent: true,
                })
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Reset => {
            state.query.clear();
            state.location = None;
            state.weather = None;
            state.error = None;
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Geocode step: previous location and weather stay until the result is known.
fn submit_search(state: &mut AppState, query: String) -> DispatchResult<Effect> {
    if query.is_empty() {
        return DispatchResult::unchanged();
    }
    state.query = query.clone();
    state.input_mode = InputMode::Normal;
    state.loading = true;
    state.error = None;
    let lookup = state.begin_lookup();
    DispatchResult::changed_with(Effect::Geocode { lookup, query })
}

fn fail_lookup(state: &mut AppState, lookup: u64, failure: Failure) -> DispatchResult<Effect> {
    if !state.is_current(lookup) {
        return DispatchResult::unchanged();
    }
    state.error = Some(failure.message().to_string());
    state.loading = false;
    DispatchResult::changed()
}

fn settle_location(state: &mut AppState, location: Location) -> DispatchResult<Effect> {
    state.location = Some(location.clone());
    start_weather_fetch(state, &location)
}

fn start_weather_fetch(state: &mut AppState, location: &Location) -> DispatchResult<Effect> {
    state.loading = true;
    state.error = None;
    state.weather = None;
    let lookup = state.begin_lookup();
    DispatchResult::changed_with(Effect::FetchWeather {
        lookup,
        lat: location.lat,
        lon: location.lon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherSnapshot;
    use pretty_assertions::assert_eq;

    fn seoul() -> Location {
        Location {
            name: "Seoul, Korea".into(),
            lat: 37.5665,
            lon: 126.978,
        }
    }

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: 15.2,
            windspeed: 3.1,
            winddirection: 200.0,
            weathercode: 2,
            time: "2024-01-01T12:00".into(),
        }
    }

    #[test]
    fn test_empty_submit_is_noop() {
        let mut state = AppState {
            error: Some("old".into()),
            ..Default::default()
        };
        let before = format!("{state:?}");

        let result = reducer(&mut state, Action::SearchSubmit(String::new()));

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(format!("{state:?}"), before);
    }

    #[test]
    fn test_submit_sets_loading_and_keeps_weather() {
        let mut state = AppState {
            location: Some(seoul()),
            weather: Some(snapshot()),
            error: Some("old".into()),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::SearchSubmit("Busan".into()));

        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.weather, Some(snapshot()));
        assert_eq!(state.location, Some(seoul()));
        assert_eq!(
            result.effects,
            vec![Effect::Geocode {
                lookup: 1,
                query: "Busan".into()
            }]
        );
    }

    #[test]
    fn test_resolve_starts_weather_fetch() {
        let mut state = AppState {
            weather: Some(snapshot()),
            ..Default::default()
        };
        reducer(&mut state, Action::SearchSubmit("Seoul".into()));

        let result = reducer(
            &mut state,
            Action::SearchDidResolve {
                lookup: 1,
                location: seoul(),
            },
        );

        assert_eq!(state.location, Some(seoul()));
        assert_eq!(state.weather, None);
        assert!(state.loading);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                lookup: 2,
                lat: 37.5665,
                lon: 126.978
            }]
        );
    }

    #[test]
    fn test_no_results_message() {
        let mut state = AppState {
            loading: true,
            ..Default::default()
        };

        reducer(
            &mut state,
            Action::SearchDidFail {
                lookup: 0,
                failure: Failure::NoResults,
            },
        );

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("검색 결과가 없습니다."));
        assert_eq!(state.location, None);
        assert_eq!(state.weather, None);
    }

    #[test]
    fn test_weather_failure_keeps_location() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit("Seoul".into()));
        let lookup = state.lookup;
        reducer(
            &mut state,
            Action::SearchDidResolve {
                lookup,
                location: seoul(),
            },
        );
        let lookup = state.lookup;
        reducer(
            &mut state,
            Action::WeatherDidFail {
                lookup,
                failure: Failure::WeatherNetwork,
            },
        );

        assert!(!state.loading);
        assert_eq!(state.location, Some(seoul()));
        assert_eq!(state.weather, None);
        assert_eq!(state.error.as_deref(), Some("네트워크 오류가 발생했습니다."));
    }

    #[test]
    fn test_locate_unsupported_has_no_effect() {
        let mut state = AppState::new(false);

        let result = reducer(&mut state, Action::LocateRequest);

        assert!(result.effects.is_empty());
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("이 브라우저에서 위치 기능을 지원하지 않습니다.")
        );
    }

    #[test]
    fn test_locate_failure_message() {
        let mut state = AppState::new(true);

        let result = reducer(&mut state, Action::LocateRequest);
        assert!(state.loading);
        assert_eq!(
            result.effects,
            vec![Effect::Locate {
                lookup: 1,
                silent: false
            }]
        );

        reducer(
            &mut state,
            Action::LocateDidFail {
                lookup: 1,
                failure: Failure::LocationUnavailable,
            },
        );
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("위치 정보를 가져올 수 없습니다."));
    }

    #[test]
    fn test_mount_locates_silently() {
        let mut state = AppState::new(true);

        let result = reducer(&mut state, Action::Mount);
        assert_eq!(
            result.effects,
            vec![Effect::Locate {
                lookup: 1,
                silent: true
            }]
        );
        assert!(!state.loading);

        let result = reducer(
            &mut state,
            Action::LocateDidFailSilently {
                lookup: 1,
                failure: Failure::LocationUnavailable,
            },
        );
        assert!(!result.changed);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_mount_without_geolocation_or_query() {
        let mut state = AppState::new(false);
        let result = reducer(&mut state, Action::Mount);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_mount_submits_startup_query() {
        let mut state = AppState::new(true).with_query("Seoul");
        let result = reducer(&mut state, Action::Mount);
        assert!(state.loading);
        assert_eq!(
            result.effects,
            vec![Effect::Geocode {
                lookup: 1,
                query: "Seoul".into()
            }]
        );
    }

    #[test]
    fn test_refresh_requires_location() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::WeatherFetch).changed);

        state.location = Some(seoul());
        state.error = Some("old".into());
        let result = reducer(&mut state, Action::WeatherFetch);
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(result.effects.len(), 1);
    }

    #[test]
    fn test_reset_clears_everything_but_loading() {
        let mut state = AppState {
            query: "Seoul".into(),
            location: Some(seoul()),
            weather: Some(snapshot()),
            error: Some("old".into()),
            loading: true,
            ..Default::default()
        };

        reducer(&mut state, Action::Reset);

        assert_eq!(state.query, "");
        assert_eq!(state.location, None);
        assert_eq!(state.weather, None);
        assert_eq!(state.error, None);
        assert!(state.loading);
    }

    #[test]
    fn test_web_search_submit() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WebSearchOpen);
        assert_eq!(state.input_mode, InputMode::WebSearch);

        assert!(!reducer(&mut state, Action::WebSearchSubmit(String::new())).changed);

        let result = reducer(&mut state, Action::WebSearchSubmit("rust".into()));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(
            result.effects,
            vec![Effect::WebSearch {
                term: "rust".into()
            }]
        );
    }

    #[test]
    fn test_stale_resolve_is_dropped() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit("Seoul".into()));
        let seoul_lookup = state.lookup;
        reducer(&mut state, Action::SearchSubmit("Busan".into()));

        let result = reducer(
            &mut state,
            Action::SearchDidResolve {
                lookup: seoul_lookup,
                location: seoul(),
            },
        );

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.query, "Busan");
        assert_eq!(state.location, None);
        assert!(state.loading);
    }

    #[test]
    fn test_stale_weather_is_dropped() {
        let mut state = AppState {
            location: Some(seoul()),
            ..Default::default()
        };
        reducer(&mut state, Action::WeatherFetch);
        let first = state.lookup;
        reducer(&mut state, Action::WeatherFetch);

        let loaded = reducer(
            &mut state,
            Action::WeatherDidLoad {
                lookup: first,
                snapshot: snapshot(),
            },
        );
        let failed = reducer(
            &mut state,
            Action::WeatherDidFail {
                lookup: first,
                failure: Failure::WeatherNetwork,
            },
        );

        assert!(!loaded.changed && !failed.changed);
        assert_eq!(state.weather, None);
        assert_eq!(state.error, None);
        assert!(state.loading);
    }

    #[test]
    fn test_search_supersedes_startup_locate() {
        let mut state = AppState::new(true);
        let mount = reducer(&mut state, Action::Mount);
        let Some(Effect::Locate { lookup, .. }) = mount.effects.first().cloned() else {
            panic!("expected a locate effect, got {:?}", mount.effects);
        };
        reducer(&mut state, Action::SearchSubmit("Busan".into()));

        let result = reducer(
            &mut state,
            Action::LocateDidResolve {
                lookup,
                location: Location::current(1.0, 2.0),
            },
        );

        assert!(!result.changed);
        assert_eq!(state.location, None);
    }
}
