use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{
    app::events::{AppEvent, Command, schedule_notice_expiry},
    cli::{Cli, OnErrorArg},
    data::{
        forecast::ForecastClient,
        geocode::GeocodeClient,
        geoip::GeoipClient,
        resolver::{LocationResolver, ResolveRequest},
        reverse::ReverseGeocodeClient,
    },
    domain::{
        units::UnitPreferences,
        weather::{Coordinates, Location, WeatherSnapshot},
    },
};

const NOTICE_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
    Quit,
}

/// The pipeline orchestrator. All mutation happens inside `handle_event`;
/// spawned network tasks only report back over the event channel, stamped
/// with the request sequence that started them.
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub last_error: Option<String>,
    pub notice: Option<String>,
    pub selected_location: Option<Location>,
    pub weather: Option<WeatherSnapshot>,
    pub units: UnitPreferences,
    pub latest_seq: u64,
    clear_on_error: bool,
    resolver: LocationResolver,
    forecast: ForecastClient,
    geoip: GeoipClient,
}

impl AppState {
    #[must_use]
    pub fn new(cli: &Cli) -> Self {
        let geocode = cli
            .geocode_url
            .as_deref()
            .map_or_else(GeocodeClient::new, GeocodeClient::with_base_url);
        let reverse = match cli.reverse_url.as_deref() {
            Some(url) => ReverseGeocodeClient::with_base_urls(url, url, None),
            None => ReverseGeocodeClient::from_env(),
        };
        let forecast = cli
            .forecast_url
            .as_deref()
            .map_or_else(ForecastClient::new, ForecastClient::with_base_url);
        let geoip = cli
            .geoip_url
            .as_deref()
            .map_or_else(GeoipClient::new, GeoipClient::with_base_url);

        Self {
            mode: AppMode::Idle,
            running: true,
            last_error: None,
            notice: None,
            selected_location: None,
            weather: None,
            units: cli.unit_preferences(),
            latest_seq: 0,
            clear_on_error: cli.on_error == OnErrorArg::Clear,
            resolver: LocationResolver::new(geocode, reverse),
            forecast,
            geoip,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>, cli: &Cli) {
        match event {
            AppEvent::Bootstrap => {
                if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
                    self.start_resolve(
                        tx,
                        ResolveRequest::coordinates(Coordinates::new(lat, lon)),
                    );
                } else if let Some(place) = cli.place.clone() {
                    self.start_resolve(tx, ResolveRequest::place(place));
                } else {
                    self.start_locate(tx);
                }
            }
            AppEvent::Search(query) => {
                self.start_resolve(tx, ResolveRequest::place(query));
            }
            AppEvent::Command(command) => self.handle_command(command, tx),
            AppEvent::TickRefresh => self.refresh(tx),
            AppEvent::DetectFailed { seq } => {
                if self.is_stale(seq) {
                    return;
                }
                let place = cli.default_place();
                warn!(fallback = %place, "location detection failed");
                self.notice = Some(format!("Location unavailable; showing {place}"));
                schedule_notice_expiry(tx.clone(), NOTICE_TTL);
                self.start_resolve(tx, ResolveRequest::place(place));
            }
            AppEvent::LocationResolved { seq, location } => {
                if self.is_stale(seq) {
                    return;
                }
                self.selected_location = Some(location.clone());
                self.start_fetch(tx, location, seq);
            }
            AppEvent::FetchSucceeded { seq, snapshot } => {
                if self.is_stale(seq) {
                    return;
                }
                self.weather = Some(*snapshot);
                self.mode = AppMode::Ready;
                self.last_error = None;
            }
            AppEvent::FetchFailed { seq, error } => {
                if self.is_stale(seq) {
                    return;
                }
                warn!(error = %error, "lookup failed");
                if error.clears_display() || self.clear_on_error {
                    self.weather = None;
                }
                self.last_error = Some(error.to_string());
                self.mode = AppMode::Error;
            }
            AppEvent::NoticeExpired => {
                self.notice = None;
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }
    }

    fn handle_command(&mut self, command: Command, tx: &mpsc::Sender<AppEvent>) {
        match command {
            Command::Quit => self.mode = AppMode::Quit,
            Command::Refresh => self.refresh(tx),
            Command::Locate => self.start_locate(tx),
            Command::Metric => self.units = UnitPreferences::metric(),
            Command::Imperial => self.units = UnitPreferences::imperial(),
            Command::ToggleUnits => self.units = self.units.toggle_system(),
        }
    }

    /// Allocates the next request sequence and enters `Loading`. Anything
    /// still in flight under an older sequence is superseded from here on.
    fn begin_request(&mut self) -> u64 {
        self.latest_seq += 1;
        self.mode = AppMode::Loading;
        self.last_error = None;
        self.latest_seq
    }

    fn is_stale(&self, seq: u64) -> bool {
        if seq == self.latest_seq {
            false
        } else {
            debug!(seq, latest = self.latest_seq, "discarding stale response");
            true
        }
    }

    fn start_resolve(&mut self, tx: &mpsc::Sender<AppEvent>, request: ResolveRequest) {
        let seq = self.begin_request();
        let resolver = self.resolver.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match resolver.resolve(&request).await {
                Ok(location) => {
                    let _ = tx.send(AppEvent::LocationResolved { seq, location }).await;
                }
                Err(error) => {
                    let _ = tx.send(AppEvent::FetchFailed { seq, error }).await;
                }
            }
        });
    }

    fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>, location: Location, seq: u64) {
        let client = self.forecast.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match client.fetch(location).await {
                Ok(snapshot) => {
                    let _ = tx
                        .send(AppEvent::FetchSucceeded {
                            seq,
                            snapshot: Box::new(snapshot),
                        })
                        .await;
                }
                Err(error) => {
                    let _ = tx.send(AppEvent::FetchFailed { seq, error }).await;
                }
            }
        });
    }

    fn start_locate(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let seq = self.begin_request();
        let geoip = self.geoip.clone();
        let resolver = self.resolver.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match geoip.detect().await {
                Some(coords) => {
                    // Coordinate resolution degrades to a placeholder name
                    // instead of failing, so the error arm is for symmetry.
                    match resolver.resolve(&ResolveRequest::coordinates(coords)).await {
                        Ok(location) => {
                            let _ = tx.send(AppEvent::LocationResolved { seq, location }).await;
                        }
                        Err(error) => {
                            let _ = tx.send(AppEvent::FetchFailed { seq, error }).await;
                        }
                    }
                }
                None => {
                    let _ = tx.send(AppEvent::DetectFailed { seq }).await;
                }
            }
        });
    }

    /// Re-fetches the selected location under a fresh sequence. Geocoding
    /// is skipped because the coordinates are already known.
    fn refresh(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if self.mode == AppMode::Loading {
            return;
        }
        let Some(location) = self.selected_location.clone() else {
            debug!("refresh skipped, no location selected yet");
            return;
        };
        let seq = self.begin_request();
        self.start_fetch(tx, location, seq);
    }
}
