pub mod check;

use clap::{ArgAction, Parser};
use iprange_common::config::Config;

#[derive(Parser, Debug)]
#[command(name = "ipv4-range")]
#[command(version)]
#[command(about = "Checks that an IPv4 range expression is well formed and ascending.")]
pub struct CommandLine {
    /// Range to validate, e.g. 192.0.2.1-192.0.2.10
    #[arg(value_name = "RANGE")]
    pub expression: String,

    /// Only report failures
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show parsing details (-vv for trace output)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            no_color: self.no_color,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
