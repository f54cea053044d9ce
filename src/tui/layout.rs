//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: navigation tabs, main panel,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Navigation tabs across the top
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for a form screen: heading, messages, then the form body
pub struct FormLayout {
    /// Screen heading
    pub heading: Rect,
    /// Error/success message line
    pub message: Rect,
    /// Form fields
    pub body: Rect,
}

impl FormLayout {
    /// Calculate form layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Heading
                Constraint::Length(2), // Message
                Constraint::Min(3),    // Body
            ])
            .split(area);

        Self {
            heading: chunks[0],
            message: chunks[1],
            body: chunks[2],
        }
    }
}

/// A fixed-size rect anchored to the top-right corner (notifications)
pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.main.height, 20);
    }

    #[test]
    fn test_top_right_rect() {
        let r = top_right_rect(30, 4, Rect::new(0, 0, 80, 24));
        assert_eq!(r.x, 50);
        assert_eq!(r.y, 0);
        assert_eq!(r.width, 30);
    }
}
