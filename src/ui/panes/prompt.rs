//! Field input pane rendering

use super::border_style;
use crate::ui::app::Form;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the prompt line. With no open form this shows a hint instead.
pub fn render_prompt_pane(frame: &mut Frame, area: Rect, form: Option<&Form>) {
    let Some(form) = form else {
        let hint = Paragraph::new("Choose an option with ↑/↓ and press ↵")
            .block(
                Block::default()
                    .title(" Input ")
                    .borders(Borders::ALL)
                    .border_style(border_style(false)),
            )
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(hint, area);
        return;
    };

    let title = match &form.error {
        Some(err) => format!(" {}: {} ", form.choice.label(), err),
        None => format!(" {} ", form.choice.label()),
    };
    let title_style = if form.error.is_some() {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.secondary)
    };

    let message = form.current_field().map(|f| f.message).unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(
            "? ",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", message),
            Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(form.buffer.as_str(), Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled("█", Style::default().fg(DEFAULT_THEME.comment)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(title, title_style))
            .borders(Borders::ALL)
            .border_style(border_style(true)),
    );
    frame.render_widget(paragraph, area);
}
