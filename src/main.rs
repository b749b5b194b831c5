use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cabview::domain::ports::OnboardingStore;
use cabview::domain::view::OnboardingStatus;
use cabview::infrastructure::{
    AppConfig, CliArgs, ConfigStore, InteractionMonitor, TomlOnboardingStore,
};
use cabview::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

async fn create_app() -> Result<(App, AppConfig)> {
    let args = CliArgs::parse();
    let reset_onboarding = args.reset_onboarding;

    let config_store = ConfigStore::new()?;
    let mut config = config_store.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = cabview::VERSION, "Starting cabview");

    let onboarding_store = Arc::new(TomlOnboardingStore::new());
    if reset_onboarding {
        onboarding_store.reset().await?;
        info!("Onboarding record cleared");
    }

    let onboarding = match onboarding_store.is_complete(cabview::TERMS_VERSION).await {
        Ok(true) => OnboardingStatus::Complete,
        Ok(false) => OnboardingStatus::Pending,
        Err(e) => {
            warn!(error = %e, "Could not read onboarding record; running onboarding");
            OnboardingStatus::Pending
        }
    };

    let monitor = Arc::new(InteractionMonitor::new(Duration::from_secs(
        config.display.screen_timeout_secs,
    )));

    let app = App::new(&config, monitor, onboarding_store, onboarding);

    Ok((app, config))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (app, config) = create_app().await?;

    let mut terminal = ratatui::init();
    if config.mouse {
        let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture);
    }

    let result = app.run(&mut terminal).await;

    if config.mouse {
        let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
    }
    ratatui::restore();

    result
}
