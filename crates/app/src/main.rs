use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuizCatalog;
use quiz_core::model::QuizSettings;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt, prelude::*};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestionSecs { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestionSecs { raw } => {
                write!(f, "invalid --question-secs value: {raw}")
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
    catalog: Arc<QuizCatalog>,
    settings: QuizSettings,
    initial_fragment: String,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<QuizCatalog> {
        Arc::clone(&self.catalog)
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn initial_fragment(&self) -> String {
        self.initial_fragment.clone()
    }
}

#[derive(Debug)]
struct Args {
    route: String,
    catalog: Option<PathBuf>,
    question_secs: Option<u32>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--route <fragment>] [--catalog <path>] [--question-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --route          (empty, opens on #welcome)");
    eprintln!("  --catalog        built-in quizzes");
    eprintln!("  --question-secs  30 (1-59)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_ROUTE, QUIZ_CATALOG, QUIZ_QUESTION_SECS, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_from(args, |key| std::env::var(key).ok())
    }

    /// Flags win over the `QUIZ_*` variables looked up through `env`.
    fn parse_from(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut route = env("QUIZ_ROUTE").unwrap_or_default();
        let mut catalog = env("QUIZ_CATALOG").map(PathBuf::from);
        let mut question_secs = env("QUIZ_QUESTION_SECS")
            .map(parse_question_secs)
            .transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--route" => route = require_value(args, "--route")?,
                "--catalog" => catalog = Some(PathBuf::from(require_value(args, "--catalog")?)),
                "--question-secs" => {
                    let value = require_value(args, "--question-secs")?;
                    question_secs = Some(parse_question_secs(value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            route: normalize_fragment(&route),
            catalog,
            question_secs,
        })
    }
}

fn parse_question_secs(raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidQuestionSecs { raw })
}

/// Accepts `quiz`, `#quiz` or an empty string.
fn normalize_fragment(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('#');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("#{trimmed}")
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<QuizCatalog, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(QuizCatalog::builtin());
    };
    let raw = std::fs::read_to_string(path)?;
    let catalog = QuizCatalog::from_json(&raw)?;
    info!(path = %path.display(), quizzes = catalog.len(), "loaded quiz catalog");
    Ok(catalog)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = load_catalog(parsed.catalog.as_ref())?;
    let settings = match parsed.question_secs {
        Some(secs) => QuizSettings::default().with_question_secs(secs)?,
        None => QuizSettings::default(),
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog: Arc::new(catalog),
        settings,
        initial_fragment: parsed.route,
    });
    let context = build_app_context(&app)?;
    info!(
        route = context.initial_fragment(),
        question_secs = settings.question_secs(),
        "launching quiz window"
    );

    // tao may open always-on-top on macOS dev builds.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(log_fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with_env(args: &[&str], vars: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse_from(&mut iter, |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        })
    }

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        parse_with_env(args, &[])
    }

    #[test]
    fn fragment_is_normalized() {
        assert_eq!(normalize_fragment("quiz"), "#quiz");
        assert_eq!(normalize_fragment("#result"), "#result");
        assert_eq!(normalize_fragment("  "), "");
    }

    #[test]
    fn parses_flags() {
        let args = parse(&["--route", "choose-quiz", "--question-secs", "15"]).unwrap();
        assert_eq!(args.route, "#choose-quiz");
        assert_eq!(args.question_secs, Some(15));
    }

    #[test]
    fn rejects_unknown_and_incomplete_flags() {
        assert!(matches!(
            parse(&["--bogus"]),
            Err(ArgsError::UnknownArg(arg)) if arg == "--bogus"
        ));
        assert!(matches!(
            parse(&["--route"]),
            Err(ArgsError::MissingValue { flag: "--route" })
        ));
        assert!(matches!(
            parse(&["--question-secs", "soon"]),
            Err(ArgsError::InvalidQuestionSecs { .. })
        ));
    }

    #[test]
    fn env_supplies_defaults_and_flags_override() {
        let vars = [("QUIZ_ROUTE", "result"), ("QUIZ_QUESTION_SECS", "20")];
        let args = parse_with_env(&[], &vars).unwrap();
        assert_eq!(args.route, "#result");
        assert_eq!(args.question_secs, Some(20));

        let args = parse_with_env(&["--question-secs", "5"], &vars).unwrap();
        assert_eq!(args.question_secs, Some(5));
    }

    #[test]
    fn malformed_env_value_is_rejected() {
        assert!(matches!(
            parse_with_env(&[], &[("QUIZ_QUESTION_SECS", "lots")]),
            Err(ArgsError::InvalidQuestionSecs { raw }) if raw == "lots"
        ));
    }
}
