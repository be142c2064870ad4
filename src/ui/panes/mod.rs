//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`menu`]: The six menu selections with the current one highlighted
//! - [`terminal`]: Transcript of everything the session reported
//! - [`prompt`]: The field currently being asked for and the typed buffer
//! - [`status`]: Status bar with keybindings and roster size
//!
//! Each pane module exports a primary `render_*` function that borrows the state
//! it draws and never mutates the session.

pub mod menu;
pub mod prompt;
pub mod status;
pub mod terminal;

// Re-export render functions for convenience
pub use menu::render_menu_pane;
pub use prompt::render_prompt_pane;
pub use status::render_status_bar;
pub use terminal::render_terminal_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every pane
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
