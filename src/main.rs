mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod report;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{Filter, TaskList};
use persistence::{
    config_file, ensure_data_dir, get_data_dir, init_local_data_dir, load_config_or_default,
    load_tasks, log_file, save_config, AppConfig, FileStore, MemoryStore, TaskStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "A keyboard-driven terminal task list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this data directory instead of .tasklist / ~/.tasklist
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Keep tasks in memory only; nothing is written to disk
    #[arg(long, global = true)]
    memory: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tasklist directory in the current directory
    Init,
    /// Print the task list to stdout
    List {
        /// Which tasks to show
        #[arg(short, long, value_enum, default_value_t = Filter::All)]
        filter: Filter,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let data_dir = init_local_data_dir(&current_dir)?;
            save_config(config_file(&data_dir), &AppConfig::default())?;
            println!("Initialized task list directory: {}", data_dir.display());
            println!();
            println!("Run 'tasklist' to start managing tasks.");
            Ok(())
        }
        Some(Commands::List { filter }) => print_listing(cli.dir, cli.verbose, filter),
        None => run_tui(cli.dir, cli.memory, cli.verbose),
    }
}

fn print_listing(dir: Option<PathBuf>, verbose: u8, filter: Filter) -> Result<()> {
    let data_dir = get_data_dir(dir.as_deref())?;
    if data_dir.is_dir() {
        logging::init_tracing(verbose, &log_file(&data_dir))?;
    }

    let config = load_config_or_default(config_file(&data_dir));
    let store = FileStore::new(&data_dir);
    let list = TaskList::new(load_tasks(&store));

    print!("{}", report::render_listing(&list, filter, config.use_unicode));
    Ok(())
}

fn run_tui(dir: Option<PathBuf>, memory: bool, verbose: u8) -> Result<()> {
    let data_dir = ensure_data_dir(dir.as_deref())?;
    logging::init_tracing(verbose, &log_file(&data_dir))?;

    let config = load_config_or_default(config_file(&data_dir));
    let store: Box<dyn TaskStore> = if memory {
        info!("running with in-memory store");
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&data_dir))
    };
    info!(dir = %data_dir.display(), key = store.key(), "starting");

    let mut app = AppState::new(store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Ignore key release / repeat
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if input::handle_key(app, key)? {
                info!("quit");
                return Ok(());
            }
        }
    }
}
