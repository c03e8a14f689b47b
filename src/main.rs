//! weatherpp - place search and current weather in the terminal

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing_subscriber::EnvFilter;
use tui_dispatch::{
    EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weatherpp::action::Action;
use weatherpp::api::ApiClient;
use weatherpp::components::{
    Component, PromptOverlay, PromptOverlayProps, WeatherDisplay, WeatherDisplayProps, modal_area,
};
use weatherpp::config::{self, ApiConfig};
use weatherpp::effect::Effect;
use weatherpp::geolocation::{self, PositionSource};
use weatherpp::reducer::reducer;
use weatherpp::services::Services;
use weatherpp::state::AppState;

/// Search a place (or use your position) and show its current weather
#[derive(Parser, Debug)]
#[command(name = "weatherpp")]
#[command(about = "Search a place and show its current weather")]
struct Args {
    /// Place to look up on start instead of reading the device position
    #[arg(long)]
    query: Option<String>,

    /// Device position as LAT,LON. Without it geolocation is unsupported.
    #[arg(long, value_parser = geolocation::parse_position, allow_hyphen_values = true)]
    position: Option<PositionSource>,

    /// Treat location access as refused
    #[arg(long, conflicts_with = "position")]
    deny_location: bool,

    /// Nominatim search endpoint
    #[arg(long, default_value = config::NOMINATIM_SEARCH_URL)]
    geocode_url: String,

    /// Open-Meteo forecast endpoint
    #[arg(long, default_value = config::OPEN_METEO_FORECAST_URL)]
    forecast_url: String,

    /// Web search endpoint (`?q=` is appended)
    #[arg(long, default_value = config::GOOGLE_SEARCH_URL)]
    web_search_url: String,

    /// Request timeout in seconds (none by default)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WeatherComponentId {
    Display,
    Prompt,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WeatherContext {
    Main,
    Prompt,
}

impl EventRoutingState<WeatherComponentId, WeatherContext> for AppState {
    fn focused(&self) -> Option<WeatherComponentId> {
        if self.is_editing() {
            Some(WeatherComponentId::Prompt)
        } else {
            Some(WeatherComponentId::Display)
        }
    }

    fn modal(&self) -> Option<WeatherComponentId> {
        if self.is_editing() {
            Some(WeatherComponentId::Prompt)
        } else {
            None
        }
    }

    fn binding_context(&self, id: WeatherComponentId) -> WeatherContext {
        match id {
            WeatherComponentId::Display => WeatherContext::Main,
            WeatherComponentId::Prompt => WeatherContext::Prompt,
        }
    }

    fn default_context(&self) -> WeatherContext {
        WeatherContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        query,
        position,
        deny_location,
        geocode_url,
        forecast_url,
        web_search_url,
        timeout_secs,
        log_file,
        debug: debug_args,
    } = Args::parse();

    init_logging(log_file.as_deref())?;

    let position = if deny_location {
        PositionSource::Denied
    } else {
        position.unwrap_or_default()
    };
    let api = ApiClient::new(ApiConfig {
        geocode_url,
        forecast_url,
        web_search_url,
        timeout: timeout_secs.map(Duration::from_secs),
        ..ApiConfig::default()
    })
    .map_err(io::Error::other)?;
    let services = Services::new(api, position);
    tracing::info!(geolocation = position.is_supported(), "starting weatherpp");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let supported = position.is_supported();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(supported).with_query(query.unwrap_or_default()))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, services, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

/// The terminal belongs to the UI, so logs only go to a file.
fn init_logging(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

struct WeatherUi {
    display: WeatherDisplay,
    prompt: PromptOverlay,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay,
            prompt: PromptOverlay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WeatherComponentId>,
    ) {
        event_ctx.set_component_area(WeatherComponentId::Display, area);

        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused() && !state.is_editing(),
        };
        self.display.render(frame, area, props);

        self.prompt.set_open(state.is_editing());
        match PromptOverlayProps::for_state(state, render_ctx.is_focused()) {
            Some(props) => {
                event_ctx.set_component_area(WeatherComponentId::Prompt, modal_area(area));
                self.prompt.render(frame, area, props);
            }
            None => {
                event_ctx
                    .component_areas
                    .remove(&WeatherComponentId::Prompt);
            }
        }
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_prompt_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.prompt.set_open(state.is_editing());
        let Some(props) = PromptOverlayProps::for_state(state, true) else {
            return HandlerResponse::ignored();
        };
        let actions: Vec<_> = self.prompt.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    services: Services,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherUi::new()));
    let mut bus: EventBus<AppState, Action, WeatherComponentId, WeatherContext> = EventBus::new();
    let keybindings: Keybindings<WeatherContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(WeatherComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_prompt = Rc::clone(&ui);
    bus.register(WeatherComponentId::Prompt, move |event, state| {
        ui_prompt
            .borrow_mut()
            .handle_prompt_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Mount),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| services.spawn(effect, ctx.tasks()),
        )
        .await
}
