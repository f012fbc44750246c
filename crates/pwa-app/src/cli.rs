use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pwactl: site and Room Navigator controls for a RoomOS endpoint.
#[derive(Parser, Debug)]
#[command(name = "pwactl", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Connect to the endpoint and keep the panel in sync (default).
    Run,
    /// Validate the config and print it with the password redacted.
    Check,
    /// Write the default config template.
    Init,
    /// Print the panel XML for the configured sites.
    Render,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
