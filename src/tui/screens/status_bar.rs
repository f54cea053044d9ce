//! Status bar view
//!
//! Shows session state, the current month, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    // Session state
    if app.session.is_authenticated() {
        spans.push(Span::styled(
            " Logged in",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            " Logged out",
            Style::default().fg(Color::Red),
        ));
    }

    // Separator
    spans.push(Span::raw(" │ "));

    // Current month
    spans.push(Span::styled(
        app.current_month.to_string(),
        Style::default().fg(Color::Cyan),
    ));

    // Key hints (right-aligned)
    let hints = match app.input_mode {
        InputMode::Normal => {
            if app.session.is_authenticated() {
                " q:Quit  1-2:Screens  i:Edit  r:Refresh  x:Logout "
            } else {
                " q:Quit  3:Login  4:Register  i:Edit "
            }
        }
        InputMode::Editing => " Esc:Navigation  Tab:Next field  Enter:Submit ",
    };

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}
