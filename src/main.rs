use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use work_lookup::app::{App, Outcome, initial_form};
use work_lookup::config::{self, ConfigResult};
use work_lookup::error::AppError;
use work_lookup::search::{FormFields, HttpSearchClient, ReadingTypes, spawn_worker};

/// Pre-fill a new work from a metadata search
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial title (also the first search query)
    #[arg(short, long)]
    title: Option<String>,

    /// Initial external link
    #[arg(short, long)]
    link: Option<String>,

    /// Initial reading type; must be one of the configured options
    #[arg(short, long)]
    reading_type: Option<String>,

    /// Metadata search endpoint, overrides the config file
    #[arg(short, long, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file to use instead of ~/.config/work-lookup/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();

    let ConfigResult {
        config: mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(endpoint) = args.endpoint.clone() {
        config.search.endpoint = endpoint;
    }

    let reading_types = ReadingTypes::new(config.form.reading_types.iter().cloned());
    let form = initial_form(
        args.title.as_deref(),
        args.link.as_deref(),
        args.reading_type.as_deref(),
        config.form.default_reading_type.as_deref(),
        &reading_types,
    )?;

    let source = HttpSearchClient::from_config(&config.search);
    let endpoint_warning = source.as_ref().err().map(|e| e.to_string());
    let worker = spawn_worker(source);

    let app = App::new(form, reading_types, worker).with_warning(endpoint_warning.or(warning));

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();

    match result? {
        Outcome::Saved(fields) => {
            print_form(&fields)?;
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Cancelled => Ok(ExitCode::FAILURE),
    }
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Outcome> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
        app.tick();

        if let Some(outcome) = app.outcome() {
            return Ok(outcome.clone());
        }
    }
}

/// Hand the saved form to whoever reads stdout
fn print_form(fields: &FormFields) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(fields)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

/// Log to a file in the temp dir; stderr belongs to the terminal UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::OpenOptions;

    let path = std::env::temp_dir().join("work-lookup.log");
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
