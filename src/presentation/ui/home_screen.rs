//! Home screen: the resident driving view.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};

use crate::presentation::ui::ViewLifecycle;
use crate::presentation::widgets::{StatusBar, StatusLevel};

const BRAND_TEXT: &str = "
 ██████  █████  ██████  ██    ██ ██ ███████ ██     ██
██      ██   ██ ██   ██ ██    ██ ██ ██      ██     ██
██      ███████ ██████  ██    ██ ██ █████   ██  █  ██
██      ██   ██ ██   ██  ██  ██  ██ ██      ██ ███ ██
 ██████ ██   ██ ██████    ████   ██ ███████  ███ ███ ";

/// Result of a key press on the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    /// Nothing to do.
    None,
    /// Raise the settings overlay.
    OpenSettings,
    /// Quit the application.
    Quit,
}

/// The resident driving view.
pub struct HomeScreen {
    clock_24h: bool,
    status: StatusBar,
}

impl HomeScreen {
    /// Creates the home screen.
    #[must_use]
    pub fn new(clock_24h: bool) -> Self {
        Self {
            clock_24h,
            status: Self::rest_status(),
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        match key.code {
            KeyCode::Char('s') => HomeAction::OpenSettings,
            KeyCode::Char('q') => HomeAction::Quit,
            _ => HomeAction::None,
        }
    }

    fn rest_status() -> StatusBar {
        StatusBar::new()
            .left("ready")
            .right("s settings | q quit")
            .level(StatusLevel::Success)
    }

    fn clock_line(&self) -> String {
        let now = Local::now();
        if self.clock_24h {
            now.format("%H:%M").to_string()
        } else {
            now.format("%I:%M %p").to_string()
        }
    }

    fn date_line() -> String {
        Local::now().format("%A, %B %-d").to_string()
    }
}

impl ViewLifecycle for HomeScreen {
    fn on_show(&mut self) {
        self.status = Self::rest_status();
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [content_area, status_area] = vertical.areas(area);

        let brand = BRAND_TEXT.trim_matches('\n');
        let mut lines: Vec<Line> = brand
            .lines()
            .map(|l| Line::styled(l, Style::default().fg(Color::Cyan)))
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            self.clock_line(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            HomeScreen::date_line(),
            Style::default().fg(Color::DarkGray),
        ));

        let text = Text::from(lines).centered();
        let text_height = u16::try_from(text.lines.len()).unwrap_or(0);
        let y = content_area.y + (content_area.height.saturating_sub(text_height)) / 2;
        let center_area = Rect::new(
            content_area.x,
            y,
            content_area.width,
            text_height.min(content_area.height),
        );

        Paragraph::new(text).render(center_area, buf);

        (&self.status).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test_case(KeyCode::Char('s'), HomeAction::OpenSettings ; "s opens settings")]
    #[test_case(KeyCode::Char('q'), HomeAction::Quit ; "q quits")]
    #[test_case(KeyCode::Enter, HomeAction::None ; "enter is ignored")]
    #[test_case(KeyCode::Esc, HomeAction::None ; "esc is ignored")]
    fn test_key_actions(code: KeyCode, expected: HomeAction) {
        let mut screen = HomeScreen::new(true);
        assert_eq!(screen.handle_key(key(code)), expected);
    }

    #[test]
    fn test_clock_formats() {
        let display = HomeScreen::new(true).clock_line();
        assert_eq!(display.len(), 5);
        assert!(display.contains(':'));

        let twelve_hour = HomeScreen::new(false).clock_line();
        assert!(twelve_hour.ends_with("AM") || twelve_hour.ends_with("PM"));
    }
}
