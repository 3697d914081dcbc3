use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use fit_core::model::{ThemeId, WorkoutId};
use services::{
    AiWorkoutService, AppServices, BuilderService, CatalogService, Clock, MeasurementService,
    NoticeQueue, NutritionService, ServicesConfig, SessionFlowService, SettingsStore,
    SummaryService,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTheme { raw: String },
    InvalidWorkout { raw: String },
    InvalidDelay { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTheme { raw } => write!(f, "invalid --theme value: {raw}"),
            ArgsError::InvalidWorkout { raw } => write!(f, "invalid --workout value: {raw}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --ai-delay-ms value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    initial_workout: Option<WorkoutId>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn sessions(&self) -> Arc<SessionFlowService> {
        self.services.sessions()
    }

    fn summaries(&self) -> Arc<SummaryService> {
        self.services.summaries()
    }

    fn nutrition(&self) -> Arc<NutritionService> {
        self.services.nutrition()
    }

    fn settings(&self) -> Arc<SettingsStore> {
        self.services.settings()
    }

    fn ai_workouts(&self) -> Arc<AiWorkoutService> {
        self.services.ai_workouts()
    }

    fn builder(&self) -> Arc<BuilderService> {
        self.services.builder()
    }

    fn measurements(&self) -> Arc<MeasurementService> {
        self.services.measurements()
    }

    fn notices(&self) -> NoticeQueue {
        self.services.notices()
    }

    fn initial_workout(&self) -> Option<WorkoutId> {
        self.initial_workout.clone()
    }
}

#[derive(Debug)]
struct Args {
    theme: Option<ThemeId>,
    workout: Option<WorkoutId>,
    ai_delay: Option<Duration>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--theme <id>] [--workout <id>] [--ai-delay-ms <n>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --theme <id>         start with a built-in theme, e.g. electric-blue");
    eprintln!("  --workout <id>       open a catalogue workout on launch");
    eprintln!("  --ai-delay-ms <n>    simulated AI generation latency");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FIT_THEME, FIT_AI_DELAY_MS, RUST_LOG");
}

fn parse_theme(raw: String) -> Result<ThemeId, ArgsError> {
    ThemeId::new(raw.trim()).map_err(|_| ArgsError::InvalidTheme { raw })
}

fn parse_delay(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidDelay { raw })
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut theme = std::env::var("FIT_THEME").ok().map(parse_theme).transpose()?;
        let mut ai_delay = std::env::var("FIT_AI_DELAY_MS")
            .ok()
            .map(parse_delay)
            .transpose()?;
        let mut workout = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--theme" => {
                    theme = Some(parse_theme(require_value(args, "--theme")?)?);
                }
                "--workout" => {
                    let value = require_value(args, "--workout")?;
                    let parsed = WorkoutId::new(value.trim())
                        .map_err(|_| ArgsError::InvalidWorkout { raw: value.clone() })?;
                    workout = Some(parsed);
                }
                "--ai-delay-ms" => {
                    ai_delay = Some(parse_delay(require_value(args, "--ai-delay-ms")?)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            theme,
            workout,
            ai_delay,
        })
    }

    fn services_config(&self) -> ServicesConfig {
        let mut config = ServicesConfig {
            theme: self.theme.clone(),
            ..ServicesConfig::default()
        };
        if let Some(delay) = self.ai_delay {
            config.ai_delay = delay;
        }
        config
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // `ui` is the only subcommand and also the default.
    match argv.first().map(String::as_str) {
        Some("ui") => {
            argv.remove(0);
        }
        Some(first) if !first.starts_with('-') => {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            return Err(ArgsError::UnknownArg(first.to_string()).into());
        }
        _ => {}
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    tracing::debug!(?parsed, "launch arguments");

    let services = AppServices::new(Clock::default_clock(), parsed.services_config())?;
    if let Some(workout) = &parsed.workout {
        if services.catalog().workout(workout).is_err() {
            return Err(ArgsError::InvalidWorkout {
                raw: workout.to_string(),
            }
            .into());
        }
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        initial_workout: parsed.workout,
    });
    let context = build_app_context(&app);

    // Some tao setups default to always-on-top; keep it a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("FitTrack")
            .with_inner_size(LogicalSize::new(1280.0, 860.0))
            .with_always_on_top(false),
    );

    tracing::info!("launching desktop window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
