use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use flag_core::model::QuizSettings;
use services::Clock;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Core(#[from] flag_core::Error),
}

/// Guess the Flag: tap the flag of the named country.
#[derive(Debug, Parser)]
#[command(name = "guess-the-flag", version)]
struct Args {
    /// Rounds per game
    #[arg(long, env = "GUESS_ROUNDS", default_value_t = QuizSettings::DEFAULT_ROUNDS)]
    rounds: u32,

    /// Flags offered per round
    #[arg(
        long,
        env = "GUESS_OPTIONS",
        default_value_t = QuizSettings::DEFAULT_OPTIONS_PER_ROUND
    )]
    options: usize,

    /// Fixed RNG seed, for replaying the same questions
    #[arg(long, env = "GUESS_SEED")]
    seed: Option<u64>,

    /// Log filter directive; falls back to RUST_LOG, then `info`
    #[arg(long = "log", env = "GUESS_LOG")]
    log: Option<String>,
}

impl Args {
    fn settings(&self) -> Result<QuizSettings, flag_core::Error> {
        Ok(QuizSettings::new(self.rounds, self.options)?)
    }
}

struct DesktopApp {
    settings: QuizSettings,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn quiz_settings(&self) -> QuizSettings {
        self.settings
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }
}

fn log_filter(directive: Option<&str>) -> EnvFilter {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    };
    filter.unwrap_or_else(|| EnvFilter::new("info"))
}

fn init_logging(directive: Option<&str>) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(log_filter(directive))
        .with_target(true)
        .try_init();
    if let Err(err) = result {
        // The game still works without logs.
        eprintln!("logging disabled: {err}");
    }
}

fn run(args: Args) -> Result<(), StartupError> {
    init_logging(args.log.as_deref());
    let settings = args.settings()?;

    info!(
        target: "app",
        rounds = settings.rounds(),
        options = settings.options_per_round(),
        seeded = args.seed.is_some(),
        "launching"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings,
        seed: args.seed,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Guess the Flag")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
