use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use tabsift::config::{self, OutputFormat};
use tabsift::input::InputReader;
use tabsift::output::{format_json, format_plain};
use tabsift::{TabRegistry, search};

#[cfg(debug_assertions)]
const DEBUG_LOG_PATH: &str = "/tmp/tabsift-debug.log";

/// Find and highlight browser tabs
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find and highlight browser tabs by title or URL",
    after_help = "Query syntax: [:title:][:url:] then 'exact, /regex, or a fuzzy needle. \
                  A leading \\ escapes ', / or \\."
)]
struct Args {
    /// Search query (empty lists every tab)
    #[arg(default_value = "")]
    query: String,

    /// JSON array of tabs (if not provided, reads from stdin)
    #[arg(short, long)]
    tabs: Option<PathBuf>,

    /// JSON lines file of tab events to replay after loading the tabs
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Marker before each highlighted range in plain output
    #[arg(long)]
    open: Option<String>,

    /// Marker after each highlighted range in plain output
    #[arg(long)]
    close: Option<String>,
}

fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }
    let mut config = config_result.config;

    let args = Args::parse();
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(open) = args.open {
        config.highlight.open = open;
    }
    if let Some(close) = args.close {
        config.highlight.close = close;
    }

    let mut registry = TabRegistry::new();
    registry.subscribe(|tabs| log::debug!("Registry snapshot: {} tabs", tabs.len()));
    registry.sync(InputReader::read_tabs(args.tabs.as_deref())?);

    if let Some(path) = &args.events {
        let mut source = InputReader::open_events(path)?;
        let applied = registry.attach(&mut source)?;
        log::debug!("Replayed {} events from {:?}", applied, path);
    }

    let outcome = search(registry.tabs(), &args.query);

    match config.output.format {
        OutputFormat::Plain => print!("{}", format_plain(&outcome, registry.len(), &config.highlight)),
        OutputFormat::Json => println!("{}", format_json(&outcome)?),
    }

    Ok(())
}

/// Logs to stderr at the `RUST_LOG` level (default warn). Debug builds write
/// DEBUG and up to /tmp/tabsift-debug.log instead.
fn init_logging() {
    use std::io::Write;

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    builder.format(|buf, record| {
        let datetime = chrono::Local::now();
        writeln!(
            buf,
            "[{}] [{}] {}",
            datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    });

    #[cfg(debug_assertions)]
    {
        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG_PATH)
        {
            builder
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)));
        }
    }

    builder.init();

    log::debug!("=== TABSIFT SESSION STARTED ===");
}
