//! Onboarding screen: the first-run welcome and terms flow.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::presentation::ui::ViewLifecycle;

/// Result of a key press on the onboarding view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAction {
    /// Nothing to do.
    None,
    /// The user accepted on the final page.
    Accept,
    /// The user declined; the application should exit.
    Decline,
}

struct OnboardingPage {
    title: &'static str,
    body: &'static str,
}

const PAGES: &[OnboardingPage] = &[
    OnboardingPage {
        title: "Welcome",
        body: "cabview keeps an eye on the road with you. It shows a live \
               dashboard while you drive and stays out of your way the rest \
               of the time.",
    },
    OnboardingPage {
        title: "The display",
        body: "The screen goes dark after a short stretch of inactivity. Tap \
               anywhere or move the pointer to bring it back; that touch \
               never reaches the controls underneath.",
    },
    OnboardingPage {
        title: "Before you drive",
        body: "Keep your eyes on the road. cabview is an aid, not a driver. \
               Accept to continue, or decline to exit.",
    },
];

/// The first-run onboarding overlay.
pub struct OnboardingScreen {
    page: usize,
    intro_effect: Effect,
    intro_finished: bool,
    pending_duration: Duration,
}

impl OnboardingScreen {
    /// Creates the onboarding screen on its first page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 0,
            intro_effect: Self::intro(),
            intro_finished: false,
            pending_duration: Duration::ZERO,
        }
    }

    fn intro() -> Effect {
        fx::coalesce((800, Interpolation::CircOut))
    }

    /// Current page index.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Accumulates animation time until the next render.
    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> OnboardingAction {
        let last = PAGES.len() - 1;
        match key.code {
            KeyCode::Esc => return OnboardingAction::Decline,
            KeyCode::Enter => {
                if self.page == last {
                    return OnboardingAction::Accept;
                }
                self.page += 1;
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                if self.page < last {
                    self.page += 1;
                }
            }
            KeyCode::Left | KeyCode::Backspace => {
                self.page = self.page.saturating_sub(1);
            }
            _ => {}
        }

        OnboardingAction::None
    }

    /// Handles a tap on the card: advances the flow, accepting on the last
    /// page.
    pub fn handle_press(&mut self) -> OnboardingAction {
        if self.page == PAGES.len() - 1 {
            return OnboardingAction::Accept;
        }
        self.page += 1;
        OnboardingAction::None
    }

    /// The onboarding card rectangle within `area`.
    ///
    /// Shared between rendering and pointer hit-testing.
    #[must_use]
    pub fn card_rect(area: Rect) -> Rect {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(58),
            Constraint::Fill(1),
        ]);
        let [_, card, _] = horizontal.areas(center);
        card
    }

    fn progress_dots(&self) -> Line<'static> {
        let spans: Vec<Span> = (0..PAGES.len())
            .map(|i| {
                if i == self.page {
                    Span::styled("● ", Style::default().fg(Color::Yellow))
                } else {
                    Span::styled("○ ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        Line::from(spans).centered()
    }
}

impl Default for OnboardingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifecycle for OnboardingScreen {
    fn on_show(&mut self) {
        self.page = 0;
        self.intro_effect = Self::intro();
        self.intro_finished = false;
    }
}

impl Widget for &mut OnboardingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = OnboardingScreen::card_rect(area);
        Clear.render(card, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Welcome to cabview ");
        let inner = block.inner(card);
        block.render(card, buf);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let [title_area, _, body_area, dots_area, footer_area] = rows.areas(inner);

        let page = &PAGES[self.page];

        Paragraph::new(Line::styled(
            page.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .render(title_area, buf);

        Paragraph::new(page.body)
            .wrap(Wrap { trim: true })
            .render(body_area, buf);

        Paragraph::new(self.progress_dots()).render(dots_area, buf);

        let footer = if self.page == PAGES.len() - 1 {
            Line::from(vec![
                Span::styled("Enter: Accept", Style::default().fg(Color::Green)),
                Span::raw(" | "),
                Span::styled("Esc: Decline", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![
                Span::styled("Enter: Next", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Esc: Decline", Style::default().fg(Color::DarkGray)),
            ])
        };
        Paragraph::new(footer).render(footer_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if !self.intro_finished {
            let overflow = self.intro_effect.process(duration.into(), buf, card);
            if overflow.is_some() {
                self.intro_finished = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_pages_forward_then_accepts() {
        let mut screen = OnboardingScreen::new();

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), OnboardingAction::None);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), OnboardingAction::None);
        assert_eq!(screen.page(), 2);

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            OnboardingAction::Accept
        );
    }

    #[test]
    fn test_arrow_paging_clamps_at_both_ends() {
        let mut screen = OnboardingScreen::new();

        screen.handle_key(key(KeyCode::Left));
        assert_eq!(screen.page(), 0);

        for _ in 0..5 {
            screen.handle_key(key(KeyCode::Right));
        }
        assert_eq!(screen.page(), PAGES.len() - 1);
    }

    #[test]
    fn test_tap_advances_then_accepts() {
        let mut screen = OnboardingScreen::new();

        assert_eq!(screen.handle_press(), OnboardingAction::None);
        assert_eq!(screen.handle_press(), OnboardingAction::None);
        assert_eq!(screen.page(), 2);

        assert_eq!(screen.handle_press(), OnboardingAction::Accept);
    }

    #[test]
    fn test_esc_declines_on_any_page() {
        let mut screen = OnboardingScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc)),
            OnboardingAction::Decline
        );

        screen.handle_key(key(KeyCode::Right));
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc)),
            OnboardingAction::Decline
        );
    }

    #[test]
    fn test_show_restarts_the_flow() {
        let mut screen = OnboardingScreen::new();
        screen.handle_key(key(KeyCode::Right));
        screen.intro_finished = true;

        screen.on_show();

        assert_eq!(screen.page(), 0);
        assert!(!screen.intro_finished);
    }

    #[test]
    fn test_card_rect_stays_inside_the_area() {
        let area = Rect::new(0, 0, 120, 40);
        let card = OnboardingScreen::card_rect(area);

        assert!(card.x > area.x);
        assert!(card.y > area.y);
        assert!(card.right() < area.right());
        assert!(card.bottom() < area.bottom());
    }
}
