pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod report;

use std::time::Duration;

use anyhow::{Result, bail};
use app::events::{self, AppEvent};
use app::state::{AppMode, AppState};
use cli::Cli;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::warn;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    if cli.watch {
        run_watch(cli).await
    } else {
        run_once(cli).await
    }
}

/// Resolve one place, print one report, exit. Non-zero on pipeline error.
async fn run_once(cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);
    let mut app = AppState::new(&cli);

    tx.send(AppEvent::Bootstrap).await?;

    while let Some(event) = rx.recv().await {
        app.handle_event(event, &tx, &cli);

        match app.mode {
            AppMode::Ready => {
                print!("{}", report::render(&app));
                return Ok(());
            }
            AppMode::Error => {
                let message = app
                    .last_error
                    .clone()
                    .unwrap_or_else(|| "weather lookup failed".to_string());
                bail!(message);
            }
            _ => {}
        }
    }

    Ok(())
}

/// Long-running loop: stdin lines are debounced searches, `:` lines are
/// immediate commands, a jittered timer re-fetches the selected location.
/// The report is re-printed whenever it would read differently.
async fn run_watch(cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let (query_tx, query_rx) = mpsc::channel::<String>(64);
    events::start_debounce_task(query_rx, tx.clone(), Duration::from_millis(cli.debounce_ms));
    events::start_refresh_task(tx.clone(), cli.refresh_interval);

    let lines = events::stdin_lines();
    tokio::pin!(lines);

    let mut app = AppState::new(&cli);
    let mut last_render = String::new();

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_line = lines.next() => match maybe_line {
                Some(line) => {
                    if let Some(command) = events::parse_command(&line) {
                        app.handle_event(AppEvent::Command(command), &tx, &cli);
                    } else if line.trim_start().starts_with(':') {
                        warn!(line, "unknown command");
                    } else {
                        let _ = query_tx.send(line).await;
                    }
                }
                None => app.handle_event(AppEvent::Quit, &tx, &cli),
            },
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, &cli);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                app.handle_event(AppEvent::Quit, &tx, &cli);
            }
        }

        let rendered = report::render(&app);
        if rendered != last_render {
            print!("{rendered}");
            last_render = rendered;
        }

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}
