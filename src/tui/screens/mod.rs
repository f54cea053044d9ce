//! TUI screens
//!
//! One module per screen (login, registration, current-month home,
//! add-expense) plus the status bar. The top-level render drives the
//! navigation tabs, the active screen, the status bar, and any toast
//! notification.

pub mod add_expense;
pub mod home;
pub mod login;
pub mod registration;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::session::{can_access, Screen};
use crate::tui::app::App;
use crate::tui::layout::{top_right_rect, AppLayout};
use crate::tui::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    // Render the active screen
    match app.active_screen {
        Screen::Login => login::render(frame, app, layout.main),
        Screen::Registration => registration::render(frame, app, layout.main),
        Screen::Home => home::render(frame, app, layout.main),
        Screen::AddExpense => add_expense::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    // Render the current notification, if any, over the top-right corner
    if let Some(notification) = app.notifications.current() {
        let width = (notification.message.len() as u16 + 4).clamp(20, 40);
        let area = top_right_rect(width, 3, layout.main);
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render the navigation tabs
///
/// Only screens the session can reach appear, which is how the gate shows
/// up in the chrome: login/register before authentication, the budget
/// screens after.
fn render_tabs(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let reachable: Vec<Screen> = Screen::all()
        .iter()
        .copied()
        .filter(|screen| can_access(*screen, &app.session))
        .collect();

    let titles: Vec<String> = reachable
        .iter()
        .map(|screen| {
            let key = navigation_key(*screen);
            format!("{}:{}", key, screen.title())
        })
        .collect();

    let selected = reachable
        .iter()
        .position(|screen| *screen == app.active_screen)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" SimpleBudget "),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

/// The Normal-mode key that navigates to a screen
fn navigation_key(screen: Screen) -> char {
    match screen {
        Screen::Home => '1',
        Screen::AddExpense => '2',
        Screen::Login => '3',
        Screen::Registration => '4',
    }
}
