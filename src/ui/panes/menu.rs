//! Menu pane rendering

use super::border_style;
use crate::menu::MenuChoice;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the selectable menu. `state` carries the highlighted entry.
pub fn render_menu_pane(frame: &mut Frame, area: Rect, state: &mut ListState, is_focused: bool) {
    let block = Block::default()
        .title(" Select an option ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let items: Vec<ListItem> = MenuChoice::ALL
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            ListItem::new(format!("{}. {}", i + 1, choice.label()))
                .style(Style::default().fg(DEFAULT_THEME.fg))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("❯ ")
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.selection_bg)
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, state);
}
