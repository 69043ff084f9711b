use std::time::Duration;

use rand::Rng;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
    time::sleep,
};

use crate::domain::{
    errors::LookupError,
    weather::{Location, WeatherSnapshot},
};

/// Everything the orchestrator reacts to. Network task results carry the
/// request sequence they belong to; stale ones are discarded on receipt.
#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Search(String),
    Command(Command),
    TickRefresh,
    DetectFailed { seq: u64 },
    LocationResolved { seq: u64, location: Location },
    FetchSucceeded { seq: u64, snapshot: Box<WeatherSnapshot> },
    FetchFailed { seq: u64, error: LookupError },
    NoticeExpired,
    Quit,
}

/// Immediate watch-mode commands; they bypass the search debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Refresh,
    Locate,
    Metric,
    Imperial,
    ToggleUnits,
}

#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        ":q" | ":quit" => Some(Command::Quit),
        ":r" | ":refresh" => Some(Command::Refresh),
        ":locate" => Some(Command::Locate),
        ":metric" => Some(Command::Metric),
        ":imperial" => Some(Command::Imperial),
        ":toggle" => Some(Command::ToggleUnits),
        _ => None,
    }
}

pub fn stdin_lines() -> impl futures::Stream<Item = String> {
    let lines = BufReader::new(tokio::io::stdin()).lines();
    futures::stream::unfold(lines, |mut lines| async move {
        match lines.next_line().await {
            Ok(Some(line)) => Some((line, lines)),
            _ => None,
        }
    })
}

/// Coalesces a stream of query edits into one `Search` per quiet window,
/// always carrying the most recent value. Blank input never fires.
pub async fn debounce_searches(
    mut queries: mpsc::Receiver<String>,
    tx: mpsc::Sender<AppEvent>,
    window: Duration,
) {
    let mut pending: Option<String> = None;
    loop {
        match pending.take() {
            None => match queries.recv().await {
                Some(query) => pending = Some(query),
                None => break,
            },
            Some(current) => {
                tokio::select! {
                    next = queries.recv() => match next {
                        Some(query) => pending = Some(query),
                        None => break,
                    },
                    () = sleep(window) => {
                        if !current.trim().is_empty()
                            && tx.send(AppEvent::Search(current)).await.is_err()
                        {
                            break;
                        }
                    }
                }
            }
        }
    }
}

pub fn start_debounce_task(
    queries: mpsc::Receiver<String>,
    tx: mpsc::Sender<AppEvent>,
    window: Duration,
) {
    tokio::spawn(debounce_searches(queries, tx, window));
}

/// Periodic re-fetch with ±10% jitter so long-running instances do not
/// line up against the API.
pub fn start_refresh_task(tx: mpsc::Sender<AppEvent>, refresh_secs: u64) {
    tokio::spawn(async move {
        let base = refresh_secs.max(10);
        loop {
            let wait_secs = {
                let mut rng = rand::rng();
                let jitter = rng.random_range(-0.1f32..0.1f32);
                ((base as f32) * (1.0 + jitter)).max(1.0)
            };
            sleep(Duration::from_secs_f32(wait_secs)).await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}

pub fn schedule_notice_expiry(tx: mpsc::Sender<AppEvent>, delay: Duration) {
    tokio::spawn(async move {
        sleep(delay).await;
        let _ = tx.send(AppEvent::NoticeExpired).await;
    });
}
