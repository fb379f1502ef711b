mod cli;
mod controller;
mod view;

use std::io;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        EventStream,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use discography_rs::config::AppConfig;
use discography_rs::logging;
use discography_rs::model::{AppModel, Catalog, FileStore};

use cli::Cli;
use controller::AppController;
use view::AppView;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if let Err(e) = logging::init_logging(&config.logging.dir, &config.logging.filter) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Discography-RS Starting ===");

    let catalog = Catalog::embedded()?;
    let store = FileStore::new(&config.storage.data_dir);
    tracing::debug!(dir = %store.dir().display(), "Rankings store ready");

    let model = AppModel::new(catalog, Box::new(store));
    let mut controller = AppController::new(model, &config);

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut controller, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Discography-RS shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController,
    config: &AppConfig,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(config.terminal.tick());
    let transition_length = config.terminal.transition();

    loop {
        {
            let ui_state = &mut controller.model_mut().ui_state;
            ui_state.auto_clear_status();
            ui_state.settle_transition(Instant::now(), transition_length);
        }

        let model = controller.model();
        terminal.draw(|f| {
            AppView::render(f, model, transition_length);
        })?;

        if model.should_quit() {
            break;
        }

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => controller.handle_event(event),
                Some(Err(e)) => return Err(e),
                None => break,
            },
            _ = ticker.tick() => {}
        }
    }

    Ok(())
}
