//! Settings screen: an overlay panel with device toggles.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::ui::ViewLifecycle;

/// Result of a key press on the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing to do.
    None,
    /// Dismiss the overlay and return home.
    Close,
}

struct SettingsEntry {
    label: &'static str,
    enabled: bool,
}

/// The settings overlay.
///
/// Toggles live only in the screen; nothing here feeds back into the
/// navigation shell.
pub struct SettingsScreen {
    entries: Vec<SettingsEntry>,
    selected: usize,
}

impl SettingsScreen {
    /// Creates the settings screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![
                SettingsEntry {
                    label: "Metric units",
                    enabled: true,
                },
                SettingsEntry {
                    label: "Quiet alerts",
                    enabled: false,
                },
                SettingsEntry {
                    label: "Auto night mode",
                    enabled: true,
                },
            ],
            selected: 0,
        }
    }

    /// Currently selected entry index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the entry at `index` is enabled.
    #[must_use]
    pub fn is_enabled(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|e| e.enabled)
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> SettingsAction {
        match key.code {
            KeyCode::Esc => return SettingsAction::Close,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = self.entries.get_mut(self.selected) {
                    entry.enabled = !entry.enabled;
                }
            }
            _ => {}
        }

        SettingsAction::None
    }

    /// The overlay panel rectangle within `area`.
    ///
    /// Shared between rendering and pointer hit-testing, so a press lands
    /// inside the panel exactly when it is drawn there.
    #[must_use]
    pub fn panel_rect(area: Rect) -> Rect {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(11),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(46),
            Constraint::Fill(1),
        ]);
        let [_, panel, _] = horizontal.areas(center);
        panel
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifecycle for SettingsScreen {
    fn on_show(&mut self) {
        self.selected = 0;
    }
}

impl Widget for &SettingsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let backdrop = Paragraph::new(Line::styled(
            "click outside the panel to close",
            Style::default().fg(Color::DarkGray),
        ));
        backdrop.render(
            Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1),
            buf,
        );

        let panel = SettingsScreen::panel_rect(area);
        Clear.render(panel, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Settings ");
        let inner = block.inner(panel);
        block.render(panel, buf);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [header_area, _, list_area, footer_area] = rows.areas(inner);

        Paragraph::new("Device").render(header_area, buf);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let checkbox = if entry.enabled { "[x]" } else { "[ ]" };
                let line = Line::from(vec![
                    Span::styled(checkbox, Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::raw(entry.label),
                ]);
                if i == self.selected {
                    line.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    line
                }
            })
            .collect();
        Paragraph::new(lines).render(list_area, buf);

        let footer = Line::from(vec![
            Span::styled("Up/Down: Select", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Space: Toggle", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: Close", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(footer).render(footer_area, buf);
    }
}
