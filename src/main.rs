//! termspeak - drive the terminal with plain-language commands.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use termspeak::{run_with_prompt, Notifier, Silent, SoundBoard, Terminal, DEFAULT_PLAYER};

const GREETING: &str = "Hello, my name is Raja.";
const PROMPT: &str = "How can I help you today?";

#[derive(Parser)]
#[command(name = "termspeak")]
#[command(about = "Change colors, styles and the cursor by typing what you want")]
#[command(version)]
struct Cli {
    /// Directory of .wav clips to play after each command
    #[arg(long, value_name = "DIR")]
    sounds: Option<PathBuf>,

    /// Command used to play a clip
    #[arg(long, default_value = DEFAULT_PLAYER)]
    player: String,

    /// Write logs to this file (the terminal itself is never logged to)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Don't print the greeting and prompts
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), file)
        .context("Failed to initialize logger")?;
    Ok(())
}

fn interpret<N: Notifier>(notifier: N, quiet: bool) -> Result<()> {
    let stdout = io::stdout().lock();
    let mut terminal = Terminal::with_notifier(stdout, notifier);
    if !quiet {
        terminal.report(GREETING)?;
    }

    let summary = run_with_prompt(io::stdin().lock(), &mut terminal, |t| {
        if quiet { Ok(()) } else { t.report(PROMPT) }
    })?;
    info!(
        "Session ended: {} executed, {} rejected",
        summary.executed, summary.rejected
    );

    terminal.into_inner().flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match &cli.sounds {
        Some(dir) => {
            info!("Playing clips from {} with {}", dir.display(), cli.player);
            interpret(SoundBoard::new(dir).with_player(&cli.player), cli.quiet)
        }
        None => interpret(Silent, cli.quiet),
    }
}
