//! showroom - terminal showcase of an input field and data table component
//! library.
//!
//! Usage:
//!   showroom                      # overview page, theme from the terminal
//!   showroom --theme light        # force the light scheme
//!   showroom --page tables        # start on the data table page
//!   showroom --data ./rows.json   # replace the built-in sample data

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tikv_jemallocator::Jemalloc;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use showroom::config::{AppConfig, RESIZE_DEBOUNCE, ThemePreference};
use showroom::dataset::{DatasetStore, TableName};
use showroom::tui::{App, Page};

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Terminal showcase for input field and data table components.
#[derive(Parser)]
#[command(name = "showroom", about = "Component library showcase", version)]
struct Args {
    /// Color scheme: light, dark or auto (follows COLORFGBG).
    #[arg(long, env = "SHOWROOM_THEME", default_value = "auto")]
    theme: ThemePreference,

    /// Page shown at startup: overview, input or tables.
    #[arg(long, default_value = "overview")]
    page: Page,

    /// Demo table selected on the data table page.
    #[arg(long, default_value = "users")]
    table: TableName,

    /// JSON dataset with `users`, `products` and `orders` arrays.
    /// Defaults to the built-in sample data.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Event poll interval in milliseconds.
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Log file. The terminal belongs to the UI, so logs never go to stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("showroom.log"));
    if let Err(e) = init_logging(args.verbose, args.quiet, &log_path) {
        eprintln!("Error opening log file '{}': {}", log_path.display(), e);
        std::process::exit(1);
    }

    let store = match &args.data {
        Some(path) => DatasetStore::from_path(path),
        None => DatasetStore::sample(),
    };
    let store = match store {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let colorfgbg = std::env::var("COLORFGBG").ok();
    let config = AppConfig {
        theme: args.theme.resolve(colorfgbg.as_deref()),
        start_page: args.page,
        start_table: args.table,
        tick_rate: Duration::from_millis(args.tick_ms.max(1)),
        resize_debounce: RESIZE_DEBOUNCE,
    };
    info!(
        preference = %args.theme,
        theme = config.theme.name(),
        data = ?args.data,
        "configuration loaded"
    );

    let app = App::new(&config, store);
    if let Err(e) = app.run() {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

/// Initializes file logging. `RUST_LOG` directives are honored on top of the
/// level chosen by the flags.
fn init_logging(verbose: u8, quiet: bool, path: &Path) -> std::io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("showroom={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
