//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEventKind};
use futures_util::StreamExt;
use ratatui::layout::Rect;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::NavigationShell;
use crate::domain::input::{EventDisposition, EventFilter};
use crate::domain::ports::{DeviceMonitor, OnboardingStore};
use crate::domain::view::{OnboardingStatus, ViewChange, ViewCommand, ViewId, ViewSlot};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::device::InteractionMonitor;
use crate::presentation::events;
use crate::presentation::ui::{
    HomeAction, HomeScreen, OnboardingAction, OnboardingScreen, SettingsAction, SettingsScreen,
    ViewLifecycle,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);
const DISPLAY_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Top-level application: hosts the event loop, the three views, and the
/// navigation shell that arbitrates between them.
pub struct App {
    shell: NavigationShell,
    monitor: Arc<InteractionMonitor>,
    home: HomeScreen,
    settings: SettingsScreen,
    onboarding: OnboardingScreen,
    viewport: Rect,
    running: bool,
}

impl App {
    /// Creates the application with its collaborators injected.
    #[must_use]
    pub fn new(
        config: &AppConfig,
        monitor: Arc<InteractionMonitor>,
        store: Arc<dyn OnboardingStore>,
        onboarding: OnboardingStatus,
    ) -> Self {
        let device: Arc<dyn DeviceMonitor> = monitor.clone();
        let shell = NavigationShell::new(onboarding, crate::TERMS_VERSION, device, store);

        Self {
            shell,
            monitor,
            home: HomeScreen::new(config.display.clock_24h),
            settings: SettingsScreen::new(),
            onboarding: OnboardingScreen::new(),
            viewport: Rect::ZERO,
            running: true,
        }
    }

    /// Runs the UI until the user quits.
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);
        let mut display_poll_interval = interval(DISPLAY_POLL_INTERVAL);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(Ok(event)) = terminal_events.next() => {
                    self.handle_terminal_event(&event);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.shell.active_view() == ViewSlot::Onboarding {
                        self.onboarding.tick(ANIMATION_TICK_RATE);
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                _ = display_poll_interval.tick() => {
                    if self.monitor.poll() {
                        debug!("Display blanked");
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }
            if events::is_quit_event(key) {
                self.running = false;
                return;
            }
        }

        let active = self.shell.active_view().view();
        let raw = events::map_event(event, active, self.active_surface());

        let before = self.shell.active_view();
        let disposition = self.shell.filter_event(&raw);
        let after = self.shell.active_view();
        if before != after {
            self.apply_change(ViewChange {
                from: before,
                to: after,
            });
        }

        if disposition == EventDisposition::Forward {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.dispatch_key(*key),
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                self.dispatch_press();
            }
            _ => {}
        }
    }

    fn dispatch_key(&mut self, key: KeyEvent) {
        match self.shell.active_view() {
            ViewSlot::Home => match self.home.handle_key(key) {
                HomeAction::OpenSettings => {
                    if let Some(change) = self.shell.open_settings() {
                        self.apply_change(change);
                    }
                }
                HomeAction::Quit => self.running = false,
                HomeAction::None => {}
            },
            ViewSlot::Settings => match self.settings.handle_key(key) {
                SettingsAction::Close => {
                    if let Some(change) = self.shell.close_settings() {
                        self.apply_change(change);
                    }
                }
                SettingsAction::None => {}
            },
            ViewSlot::Onboarding => {
                let action = self.onboarding.handle_key(key);
                self.apply_onboarding_action(action);
            }
        }
    }

    fn dispatch_press(&mut self) {
        // Forwarded presses land inside the active view's surface. Only
        // onboarding has a tap affordance.
        if self.shell.active_view() == ViewSlot::Onboarding {
            let action = self.onboarding.handle_press();
            self.apply_onboarding_action(action);
        }
    }

    fn apply_onboarding_action(&mut self, action: OnboardingAction) {
        match action {
            OnboardingAction::Accept => {
                if let Some(change) = self.shell.complete_onboarding() {
                    self.apply_change(change);
                }
            }
            OnboardingAction::Decline => {
                info!("Onboarding declined; exiting");
                self.running = false;
            }
            OnboardingAction::None => {}
        }
    }

    /// Hit-test surface of the active view. `None` means full-bleed.
    fn active_surface(&self) -> Option<Rect> {
        match self.shell.active_view() {
            ViewSlot::Home => None,
            ViewSlot::Settings => Some(SettingsScreen::panel_rect(self.viewport)),
            ViewSlot::Onboarding => Some(OnboardingScreen::card_rect(self.viewport)),
        }
    }

    fn apply_change(&mut self, change: ViewChange) {
        debug!(from = ?change.from, to = ?change.to, "Applying view change");
        for (id, command) in change.to.visibility() {
            match command {
                ViewCommand::Show => self.view_mut(id).on_show(),
                ViewCommand::Hide => {
                    if id == change.from.view() {
                        self.view_mut(id).on_hide();
                    }
                }
            }
        }
    }

    fn view_mut(&mut self, id: ViewId) -> &mut dyn ViewLifecycle {
        match id {
            ViewId::Home => &mut self.home,
            ViewId::Settings => &mut self.settings,
            ViewId::Onboarding => &mut self.onboarding,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        self.viewport = frame.area();

        // A blanked display renders nothing; the next press or move wakes it.
        if !self.monitor.is_awake() {
            return;
        }

        match self.shell.active_view() {
            ViewSlot::Home => frame.render_widget(&self.home, frame.area()),
            ViewSlot::Settings => frame.render_widget(&self.settings, frame.area()),
            ViewSlot::Onboarding => frame.render_widget(&mut self.onboarding, frame.area()),
        }
    }
}
