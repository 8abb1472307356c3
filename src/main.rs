use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hnboard::config::Config;
use hnboard::render::render;
use hnboard::Board;

fn main() -> Result<()> {
    let config = Config::parse();

    // stdout carries the board, logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let layout = config
        .layout()
        .with_context(|| format!("cannot set up a board of size {}", config.size))?;
    let mut board = Board::new(layout.size())?;
    layout.apply(&mut board)?;

    info!(
        size = board.size(),
        pieces = board.pieces().count(),
        "rendering board"
    );
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&board, config.format, &mut out).context("failed to write board")?;
    Ok(())
}
