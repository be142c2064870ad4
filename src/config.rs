//! Command-line configuration
//!
//! [`Cli`] is the raw `clap` surface; [`Settings`] is what the rest of the program
//! reads. Nothing is read from files and nothing persists between runs.

use std::path::PathBuf;

use clap::Parser;

use crate::roster::{RosterConfig, FIRST_STUDENT_ID, OPENING_BALANCE};
use crate::session::LookupPolicy;

#[derive(Debug, Parser)]
#[command(name = "rostty")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive student roster: add students, enroll them, collect fees")]
pub struct Cli {
    /// Use the line-oriented prompt instead of the full-screen menu
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Disable colored output in the line prompt
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Report unknown student IDs for enroll and status too
    #[arg(long, default_value_t = false)]
    pub strict_lookups: bool,

    /// Identifier given to the first student
    #[arg(long, default_value_t = FIRST_STUDENT_ID)]
    pub first_id: u64,

    /// Balance every new student starts with
    #[arg(long, default_value_t = OPENING_BALANCE, allow_negative_numbers = true)]
    pub opening_balance: f64,

    /// Append logs to this file (the full-screen menu logs nowhere else)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `info` or `rostty=debug`; RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEnd {
    /// Full-screen ratatui menu
    Tui,
    /// Line-oriented prompt over stdin/stdout
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub file: Option<PathBuf>,
    pub level: String,
    /// Also log to stderr; never set while the TUI owns the terminal
    pub stderr: bool,
    /// Color the stderr sink
    pub ansi: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub front_end: FrontEnd,
    pub color: bool,
    pub policy: LookupPolicy,
    pub roster: RosterConfig,
    pub log: LogSettings,
}

impl Settings {
    /// Resolve CLI flags. Piped stdin always gets the line prompt.
    pub fn from_cli(cli: Cli, stdin_is_terminal: bool) -> Self {
        let front_end = if cli.plain || !stdin_is_terminal {
            FrontEnd::Line
        } else {
            FrontEnd::Tui
        };

        Settings {
            front_end,
            color: !cli.no_color,
            policy: if cli.strict_lookups {
                LookupPolicy::Strict
            } else {
                LookupPolicy::Lenient
            },
            roster: RosterConfig {
                first_id: cli.first_id,
                opening_balance: cli.opening_balance,
            },
            log: LogSettings {
                file: cli.log_file,
                level: cli.log_level,
                stderr: front_end == FrontEnd::Line,
                ansi: !cli.no_color,
            },
        }
    }
}
