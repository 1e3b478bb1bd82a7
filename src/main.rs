use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tokio::runtime::Runtime;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use doctor_dashboard::app::App;
use doctor_dashboard::client::{AvailabilityClient, DEFAULT_BASE_URL, FETCH_ERROR_MESSAGE};
use doctor_dashboard::data::{match_percent, DoctorRecord, ScoreTier};
use doctor_dashboard::{events, ui};

#[derive(Parser, Debug)]
#[command(name = "doctor-dashboard")]
#[command(about = "Terminal dashboard for predicted doctor availability")]
struct Args {
    /// Base URL of the availability backend
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Maximum number of doctors to request
    #[arg(short, long)]
    limit: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Run a single query for the given HH:MM time and exit
    #[arg(short, long)]
    time: Option<String>,

    /// With --time, print the result as JSON
    #[arg(long)]
    json: bool,

    /// Append diagnostic logs to this file (RUST_LOG controls levels)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args)?;

    let runtime = Runtime::new()?;
    let client = AvailabilityClient::new(
        &args.url,
        Duration::from_secs(args.timeout),
        args.limit,
    )?;

    // One-shot mode (non-interactive)
    if let Some(ref time) = args.time {
        return run_query(&runtime, &client, time, args.json);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(client, runtime.handle().clone());

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn init_logging(args: &Args) -> Result<()> {
    if let Some(path) = &args.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if args.time.is_some() {
        // No TUI to corrupt in one-shot mode
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();
            app.backdrop.resize(area.width as f64, area.height as f64);
            ui::backdrop::render(frame, &app.theme, &app.backdrop, area);

            let chunks = Layout::vertical([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, &app.theme, chunks[0]);

            let content = Layout::horizontal([
                Constraint::Length(34), // Query form
                Constraint::Min(40),    // Results
            ])
            .split(chunks[1]);

            ui::form::render(frame, &app.theme, &app.form, app.query.busy, content[0]);
            ui::results::render(frame, &app.theme, &app.query, app.selected_row, content[1]);

            ui::common::render_status_bar(frame, &app.theme, &app.query, app.completed_at, chunks[2]);

            if app.show_help {
                ui::common::render_help(frame, &app.theme, area);
            }
        })?;

        // Poll for events with a short timeout so the backdrop keeps moving
        if let Some(event) = events::poll_event(Duration::from_millis(50))? {
            match event {
                crossterm::event::Event::Key(key) => events::handle_key_event(app, key),
                crossterm::event::Event::Resize(_, _) => {
                    // Redrawn (and the backdrop refitted) on the next iteration
                }
                _ => {}
            }
        }

        // Apply a resolved fetch, if any
        app.poll_fetch();

        app.backdrop.tick();
    }

    Ok(())
}

/// Run a single query without entering the TUI and print the outcome
fn run_query(runtime: &Runtime, client: &AvailabilityClient, time: &str, json: bool) -> Result<()> {
    if !runtime.block_on(client.health()) {
        warn!("Backend health probe failed; attempting the query anyway");
    }

    let records = match runtime.block_on(client.fetch_availability(time)) {
        Ok(records) => records,
        Err(err) => {
            error!("Availability fetch failed: {}", err);
            bail!("{}", FETCH_ERROR_MESSAGE);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&export_rows(&records))?);
    } else if records.is_empty() {
        println!("No doctors available at this time");
    } else {
        print_table(&records);
    }

    Ok(())
}

/// Build the JSON export: the records plus their derived presentation fields
fn export_rows(records: &[DoctorRecord]) -> serde_json::Value {
    let doctors: Vec<serde_json::Value> = records
        .iter()
        .map(|record| {
            let percent = match_percent(record.match_probability);
            serde_json::json!({
                "id": record.id,
                "login_hour": record.login_hour,
                "logout_hour": record.logout_hour,
                "session_minutes": record.session_duration_minutes.round() as i64,
                "survey_attempts": record.survey_attempt_count,
                "match_percent": percent,
                "score_tier": ScoreTier::from_percent(percent).name(),
            })
        })
        .collect();

    serde_json::json!({
        "count": records.len(),
        "doctors": doctors,
    })
}

fn print_table(records: &[DoctorRecord]) {
    println!(
        "{:<14} {:>6} {:>7} {:>14} {:>8}  {}",
        "Doctor ID", "Login", "Logout", "Session (min)", "Surveys", "Match Score"
    );
    for record in records {
        let percent = match_percent(record.match_probability);
        println!(
            "{:<14} {:>6} {:>7} {:>14} {:>8}  {:>5.1}% ({})",
            record.id,
            format!("{}:00", record.login_hour),
            format!("{}:00", record.logout_hour),
            record.session_duration_minutes.round() as i64,
            record.survey_attempt_count,
            percent,
            ScoreTier::from_percent(percent).name()
        );
    }
}
