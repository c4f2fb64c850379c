use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use folderview::config::Config;
use folderview::folder;
use folderview::i18n::Catalog;
use folderview::logic::location::Location;
use folderview::model::Model;
use folderview::services::{self, ListingRequest, ListingResponse};

mod app;
mod handlers;
mod ui;
mod utils;

use ui::icons::{IconMode, IconRenderer, IconTheme};

/// Terminal folder browser with a sort pill
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder to list (default: config `root`, then the current directory)
    path: Option<PathBuf>,

    /// Initial sort descriptor, e.g. `-createdAt`
    #[arg(short, long, allow_hyphen_values = true)]
    sort: Option<String>,

    /// Reopen a shared location, e.g. `/folders/docs?sort=-updatedAt`
    #[arg(short, long)]
    location: Option<String>,

    /// Enable debug logging to the temp directory (folderview-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, g/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

pub struct App {
    pub model: Model,

    catalog: Catalog,
    icons: IconRenderer,
    exclude: Vec<glob::Pattern>,
    update_url: bool,

    listing_tx: mpsc::UnboundedSender<ListingRequest>,
    listing_rx: mpsc::UnboundedReceiver<ListingResponse>,
}

impl App {
    fn new(config: Config, root: PathBuf, sort: String) -> Result<Self> {
        let catalog = match &config.translations {
            Some(path) => Catalog::load(path)?,
            None => Catalog::english(),
        };

        let (listing_tx, listing_rx) = services::spawn_listing_service();

        let mut app = Self {
            model: Model::new(root, sort, config.vim_mode),
            catalog,
            icons: IconRenderer::new(IconMode::from_config(&config.icon_mode), IconTheme::default()),
            exclude: folder::compile_excludes(&config.exclude),
            update_url: config.update_url,
            listing_tx,
            listing_rx,
        };

        if app.update_url {
            let sort = app.model.listing.sort.clone();
            app.model.listing.location.set("sort", sort);
        }
        app.refresh_listing();
        Ok(app)
    }
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let log_path = utils::get_debug_log_path();
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening debug log {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!("Debug mode enabled");
    Ok(())
}

/// Determine the config file path with fallback logic
///
/// A path given on the command line must exist. Otherwise the platform
/// config dir and `./config.yaml` are tried, and no file means defaults.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/folderview/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("folderview").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn load_config(cli_path: Option<String>) -> Result<Config> {
    match get_config_path(cli_path)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let config_str = fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_yaml::from_str(&config_str)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(Config::default())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug)?;

    let mut config = load_config(args.config)?;
    if args.vim {
        config.vim_mode = true;
    }

    // --sort beats a shared location, which beats the configured default
    let location_sort = args
        .location
        .as_deref()
        .map(Location::parse)
        .and_then(|location| location.get("sort").map(str::to_string));
    let sort = args
        .sort
        .or(location_sort)
        .unwrap_or_else(|| config.default_sort.clone());

    let root = args
        .path
        .or_else(|| config.root.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let root = fs::canonicalize(&root).unwrap_or(root);
    tracing::info!(root = %root.display(), sort = %sort, "starting");

    let mut app = App::new(config, root, sort)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if let Some((_, timestamp)) = app.model.ui.toast_message {
            if folderview::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis()) {
                app.model.ui.toast_message = None;
            }
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process listing responses (non-blocking)
        while let Ok(response) = app.listing_rx.try_recv() {
            handlers::handle_listing_response(app, response);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Ignore release events on platforms that report them
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(app, key);
                }
            }
        }
    }

    Ok(())
}
