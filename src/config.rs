use clap::{ArgAction, Parser};

use crate::error::BoardResult;
use crate::layout::{Layout, DEFAULT_SIZE};
use crate::render::Format;

/// Print the Hnefatafl starting position.
#[derive(Debug, Parser)]
#[command(name = "hnboard", version, about)]
pub struct Config {
    /// Board dimension, odd and between 9 and 25
    #[arg(short, long, env = "HNBOARD_SIZE", default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Output format: text, hnfen or json
    #[arg(short, long, env = "HNBOARD_FORMAT", default_value = "text")]
    pub format: Format,

    /// More log output on stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Default log filter, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Placement table for the configured size. Called before any board is
    /// built so a bad size is reported up front.
    pub fn layout(&self) -> BoardResult<Layout> {
        Layout::standard(self.size)
    }
}
