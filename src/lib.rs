//! # doctor-dashboard
//!
//! A terminal dashboard for querying predicted doctor availability.
//!
//! Given a time of day, the dashboard asks a prediction backend which
//! doctors are likely to be available and suitable at that time, and
//! renders the returned records as a table with color-coded match
//! scores. The backend itself is an external collaborator reached over
//! HTTP; this crate covers the query form, the availability client, and
//! the results view.
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Interactive dashboard against a local backend
//! doctor-dashboard --url http://127.0.0.1:5000
//!
//! # One-shot query, no TUI
//! doctor-dashboard --time 09:00 --json
//! ```
//!
//! ### As a library
//!
//! ```ignore
//! use doctor_dashboard::{AvailabilityClient, match_percent, ScoreTier};
//!
//! let client = AvailabilityClient::new("http://127.0.0.1:5000", timeout, None)?;
//! let records = client.fetch_availability("09:00").await?;
//! for record in &records {
//!     let percent = match_percent(record.match_probability);
//!     println!("{} {:.1}% ({})", record.id, percent, ScoreTier::from_percent(percent).name());
//! }
//! ```

pub mod app;
pub mod backdrop;
pub mod client;
pub mod data;
pub mod events;
pub mod form;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, QueryState, ResultsState};
pub use backdrop::Backdrop;
pub use client::{AvailabilityClient, FetchError, DEFAULT_BASE_URL, FETCH_ERROR_MESSAGE};
pub use data::{match_percent, DoctorRecord, ScoreTier};
pub use form::{TimeForm, QUICK_TIMES};
