//! src/main.rs
//! Clipboard snippet manager: terminal front end over the item store

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
};

use anyhow::{Context, Result};
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use clipstash::{ClipboardSink, ItemStore};
use clipstash_tui::{
    AppError, Config, Logger,
    controller::{ActionDispatcher, EventLoop},
    model::{AppState, Behavior},
    view::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    setup_panic_handler();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let _guard: Option<WorkerGuard> = match Logger::init_tracing(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };

    info!("Starting clipstash");
    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    let mut app = App::new(&config).context("Failed to initialize application")?;
    let outcome = app.run().context("Application runtime error");
    drop(app);

    outcome?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    state: AppState,
    renderer: UIRenderer,
    dispatcher: ActionDispatcher,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let (store, report) = ItemStore::with_config(&config.store);
        info!(
            "Opened {:?} with {} item(s)",
            store.path(),
            store.len()
        );

        let mut state = AppState::new(store, ClipboardSink::system(), Behavior::from(config));
        state.report_load(&report);

        let terminal = setup_terminal()?;

        Ok(Self {
            terminal,
            state,
            renderer: UIRenderer::new(),
            dispatcher: ActionDispatcher::new(),
        })
    }

    /// Runs until quit; the item list is saved on the way out
    fn run(&mut self) -> Result<(), AppError> {
        let Self {
            terminal,
            state,
            renderer,
            dispatcher,
        } = self;

        EventLoop::run(
            state,
            dispatcher,
            |state| {
                terminal
                    .draw(|frame| renderer.render(frame, state))
                    .map(|_| ())
                    .map_err(|e| AppError::Terminal(e.to_string()))
            },
            || event::read().map_err(AppError::from),
        )?;

        info!(frames = renderer.stats().frames, "Event loop finished");
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
