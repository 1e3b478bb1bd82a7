use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::error;

use crate::backdrop::Backdrop;
use crate::client::{AvailabilityClient, FetchError, FETCH_ERROR_MESSAGE};
use crate::data::DoctorRecord;
use crate::form::TimeForm;
use crate::ui::Theme;

/// Orchestrator state around one query: busy flag plus the outcome of
/// the last completed query. After a completed query exactly one of
/// `records`/`error` is set; before the first query both are `None`.
#[derive(Debug, Default)]
pub struct QueryState {
    pub busy: bool,
    pub records: Option<Vec<DoctorRecord>>,
    pub error: Option<String>,
}

/// The four mutually exclusive display states of the results view,
/// selected purely from `QueryState`.
#[derive(Debug, PartialEq)]
pub enum ResultsState<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(&'a [DoctorRecord]),
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results_state(&self) -> ResultsState<'_> {
        if self.busy {
            return ResultsState::Loading;
        }
        if let Some(error) = &self.error {
            return ResultsState::Error(error);
        }
        match &self.records {
            Some(records) if !records.is_empty() => ResultsState::Populated(records),
            _ => ResultsState::Empty,
        }
    }
}

/// Bridges the async fetch onto the synchronous UI loop: the request
/// runs as a task on the runtime and delivers its outcome over a
/// oneshot channel polled once per frame.
struct Fetcher {
    client: Arc<AvailabilityClient>,
    runtime: Handle,
    pending: Option<oneshot::Receiver<Result<Vec<DoctorRecord>, FetchError>>>,
}

impl Fetcher {
    fn new(client: AvailabilityClient, runtime: Handle) -> Self {
        Self {
            client: Arc::new(client),
            runtime,
            pending: None,
        }
    }

    fn spawn(&mut self, time: String) {
        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        self.runtime.spawn(async move {
            let outcome = client.fetch_availability(&time).await;
            // The receiver may be gone if the view was torn down; the
            // completed request is then simply dropped.
            let _ = tx.send(outcome);
        });
        self.pending = Some(rx);
    }

    fn poll(&mut self) -> Option<Result<Vec<DoctorRecord>, FetchError>> {
        let rx = self.pending.as_mut()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                Some(outcome)
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.pending = None;
                Some(Err(FetchError::MalformedResponse(
                    "fetch task dropped before completing".to_string(),
                )))
            }
        }
    }
}

pub struct App {
    pub running: bool,
    pub show_help: bool,

    pub form: TimeForm,
    pub query: QueryState,
    pub last_time: Option<String>,
    pub completed_at: Option<Instant>,

    // Navigation state
    pub selected_row: usize,

    // UI
    pub theme: Theme,
    pub backdrop: Backdrop,

    fetcher: Fetcher,
}

impl App {
    pub fn new(client: AvailabilityClient, runtime: Handle) -> Self {
        Self {
            running: true,
            show_help: false,
            form: TimeForm::new(),
            query: QueryState::new(),
            last_time: None,
            completed_at: None,
            selected_row: 0,
            theme: Theme::auto_detect(),
            backdrop: Backdrop::new(80.0, 24.0),
            fetcher: Fetcher::new(client, runtime),
        }
    }

    /// Submit the current form value. No-op while a query is in flight;
    /// an unusable value only raises the form's missing-value flag.
    pub fn submit(&mut self) {
        if self.query.busy {
            return;
        }
        let Some(time) = self.form.submit_value() else {
            return;
        };
        self.begin_query(time);
    }

    /// Re-run the last submitted query
    pub fn retry(&mut self) {
        if self.query.busy {
            return;
        }
        if let Some(time) = self.last_time.clone() {
            self.begin_query(time);
        }
    }

    fn begin_query(&mut self, time: String) {
        self.query.error = None;
        self.query.busy = true;
        self.last_time = Some(time.clone());
        self.fetcher.spawn(time);
    }

    /// Apply the outcome of an in-flight query, if one has resolved.
    /// Every completion path, success or failure, clears `busy`.
    pub fn poll_fetch(&mut self) {
        let Some(outcome) = self.fetcher.poll() else {
            return;
        };
        self.query.busy = false;
        self.completed_at = Some(Instant::now());
        match outcome {
            Ok(records) => {
                self.selected_row = 0;
                self.query.error = None;
                self.query.records = Some(records);
            }
            Err(err) => {
                error!("Availability fetch failed: {}", err);
                self.query.records = None;
                self.query.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    pub fn select_next(&mut self) {
        if let ResultsState::Populated(records) = self.query.results_state() {
            if self.selected_row < records.len().saturating_sub(1) {
                self.selected_row += 1;
            }
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
