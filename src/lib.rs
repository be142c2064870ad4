//! # Introduction
//!
//! rostty manages a small in-memory roster of students from an interactive menu:
//! add students, enroll them in courses, collect fees and print their status.
//! Nothing is persisted; the roster lives exactly as long as the process.
//!
//! ## Request pipeline
//!
//! ```text
//! Menu → Fields → Request → Session::dispatch → Roster → Transcript → Front end
//! ```
//!
//! 1. [`menu`]: the six selections, the fields each one asks for and the
//!    structured [`menu::Request`] built from the answers.
//! 2. [`session`]: dispatches one request at a time against the roster and
//!    reports the outcome.
//! 3. [`roster`]: the [`roster::Student`] records and the identifier counter.
//! 4. [`transcript`]: tone-tagged output lines shared by both front ends.
//! 5. [`ui`] / [`prompt`]: the full-screen ratatui menu and the line-oriented
//!    prompt used for piped input.
//!
//! ## Supported operations
//!
//! Add Student, Enroll Student, View Student Balance, Pay Student Fees,
//! Show Student Status, Exit.

pub mod config;
pub mod errors;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod roster;
pub mod session;
pub mod transcript;
pub mod ui;
