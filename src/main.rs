mod api;
mod app;
mod config;
mod content;
mod error;
mod loader;
mod state;
mod ui;

use std::io;
use std::sync::Arc;

use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::app::{App, AppEvent};

#[tokio::main]
async fn main() -> error::Result<()> {
    init_logging();

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::EaselConfig::load()?;
    let client = api::ApiClient::new(&cfg.api_base_url)?;
    tracing::info!(base_url = %client.base_url(), "starting easel");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client).await;

    restore_terminal()?;
    result?;
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: api::ApiClient,
) -> io::Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) | None => break,
            }
        }
    });

    // Spawn tick task so spinners and in-flight states keep redrawing
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    let mut app = App::new(client, event_tx);
    app.run(terminal, &mut event_rx).await
}

/// Log to a file under the data dir; stdout belongs to the TUI.
/// No usable log location just means no logging.
fn init_logging() {
    let Some(dir) = config::data_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let name = format!("easel-{}.log", chrono::Utc::now().format("%Y%m%d"));
    let Ok(file) = std::fs::File::options()
        .create(true)
        .append(true)
        .open(dir.join(name))
    else {
        return;
    };
    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}
