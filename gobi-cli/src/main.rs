mod app;
mod console;
mod render;
mod storage;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use gobi_game::GameEngine;
use std::io::{self, Write};
use std::path::PathBuf;

use console::Console;
use storage::{DEFAULT_SAVE_FILE, JsonFileStorage};

#[derive(Debug, Parser)]
#[command(name = "gobi-escape", version)]
#[command(about = "Escape Across the Great Gobi - a turn-based desert survival game")]
struct Args {
    /// Save file location
    #[arg(long, env = "GOBI_SAVE_FILE", default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Log dice rolls and turn details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if args.no_color {
        colored::control::set_override(false);
    }

    farewell_on_interrupt()?;

    let storage = JsonFileStorage::new(&args.save_file);
    log::debug!("using save file {}", storage.path().display());
    let engine = GameEngine::new(storage);

    // Stdout stays unlocked so the interrupt handler can still write.
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    app::run(&mut console, &engine)
}

/// Ctrl-C at any prompt ends the game with the farewell and a zero exit code.
fn farewell_on_interrupt() -> Result<()> {
    ctrlc::set_handler(|| {
        log::debug!("interrupt received, leaving");
        let mut out = io::stdout();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", app::FAREWELL);
        let _ = out.flush();
        std::process::exit(0);
    })
    .context("failed to install the interrupt handler")
}
