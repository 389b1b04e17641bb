use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use companion_core::timer::TimerConfig;
use services::{HistoryService, QuizGenService};
use storage::sqlite::SqliteSnapshots;
use ui::{App, UiApp, build_app_context};
use ui::platform::{DesktopNotifier, NotifierRef};

mod logging;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidDuration { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidDuration { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (want seconds > 0)")
            }
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
    quiz_gen: Arc<QuizGenService>,
    history: Arc<HistoryService>,
    timer_config: TimerConfig,
}

impl UiApp for DesktopApp {
    fn quiz_gen(&self) -> Arc<QuizGenService> {
        Arc::clone(&self.quiz_gen)
    }

    fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }

    fn timer_config(&self) -> TimerConfig {
        self.timer_config
    }

    fn notifier(&self) -> NotifierRef {
        Arc::new(DesktopNotifier)
    }
}

struct Args {
    db_url: String,
    timer_config: TimerConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--work-secs <n>] [--break-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:companion.sqlite3");
    eprintln!("  --work-secs 1500");
    eprintln!("  --break-secs 300");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COMPANION_DB_URL, COMPANION_WORK_SECS, COMPANION_BREAK_SECS");
    eprintln!("  COMPANION_AI_API_KEY, COMPANION_AI_BASE_URL, COMPANION_AI_MODEL");
}

fn duration_from_env(var: &str) -> Option<u32> {
    std::env::var(var)
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|secs| *secs > 0)
}

fn parse_duration(value: &str, flag: &'static str) -> Result<u32, ArgsError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| ArgsError::InvalidDuration {
            flag,
            raw: value.to_string(),
        })
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("COMPANION_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://companion.sqlite3".into(), normalize_sqlite_url);
        let mut work_secs =
            duration_from_env("COMPANION_WORK_SECS").unwrap_or(companion_core::timer::DEFAULT_WORK_SECS);
        let mut break_secs = duration_from_env("COMPANION_BREAK_SECS")
            .unwrap_or(companion_core::timer::DEFAULT_BREAK_SECS);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--work-secs" => {
                    let value = require_value(args, "--work-secs")?;
                    work_secs = parse_duration(&value, "--work-secs")?;
                }
                "--break-secs" => {
                    let value = require_value(args, "--break-secs")?;
                    break_secs = parse_duration(&value, "--break-secs")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        // Durations were individually checked non-zero above.
        let timer_config = TimerConfig::new(work_secs, break_secs)
            .unwrap_or_default();

        Ok(Self {
            db_url,
            timer_config,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let snapshots = SqliteSnapshots::connect(&parsed.db_url).await?;
    snapshots.migrate().await?;

    let quiz_gen = Arc::new(QuizGenService::from_env());
    let history = Arc::new(HistoryService::new(Arc::new(snapshots)));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_gen,
        history,
        timer_config: parsed.timer_config,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Companion")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    logging::init();
    if let Err(err) = run().await {
        eprintln!("companion failed to start: {err}");
        std::process::exit(1);
    }
}
