//! Terminal host: command-line arguments and the line protocol read from stdin.
//!
//! Every line is either a draft or a `:command`. Plain text replaces the draft;
//! a line starting with `::` is a draft that begins with a literal colon.
//! Row numbers in commands are the `[N]` labels printed next to each entry.

use clap::Parser;
use diarist::error::{DiaristError, Result};
use diarist::router::{InputEvent, Key, KeyPress, RouteOutcome};
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;

pub const HOME_ENV: &str = "DIARIST_HOME";

pub const HELP: &str = "\
Type a line to set the draft, then:
  :save                      store the draft (also :enter)
  :delete N                  delete entry [N] after confirming
  :swipe N START END         swipe entry [N] from START to END
  :yes | :no | :esc | :outside   answer an open confirmation
  :theme                     toggle light/dark
  :list                      show all entries
  :help                      this text
  :quit                      leave";

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "diarist", version = get_version())]
#[command(about = "A journal that writes right-to-left when your words do", long_about = None)]
pub struct Cli {
    /// Where entries and settings are kept (defaults to $DIARIST_HOME, then the platform data dir)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Picks the data directory: the flag, then `$DIARIST_HOME`, then the platform default.
pub fn resolve_data_dir(flag: Option<PathBuf>, home_env: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(home) = home_env.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "diarist", "diarist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DiaristError::Config("could not determine a data directory".to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(InputEvent),
    List,
    Help,
    Quit,
    Nothing,
    Invalid(String),
}

pub fn parse_line(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Command::Nothing;
    }
    if let Some(rest) = line.strip_prefix("::") {
        return Command::Event(InputEvent::TextChanged(format!(":{}", rest)));
    }
    let Some(command) = line.strip_prefix(':') else {
        return Command::Event(InputEvent::TextChanged(line.to_string()));
    };

    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let event = match (name, args.as_slice()) {
        ("save", []) => InputEvent::SaveClicked,
        ("enter", []) => InputEvent::KeyDown(KeyPress::ctrl(Key::Enter)),
        ("delete" | "rm", [row]) => match parse_row(row) {
            Ok(row) => InputEvent::DeleteClicked { row },
            Err(msg) => return Command::Invalid(msg),
        },
        ("swipe", [row, start, end]) => {
            let row = match parse_row(row) {
                Ok(row) => row,
                Err(msg) => return Command::Invalid(msg),
            };
            match (start.parse::<f64>(), end.parse::<f64>()) {
                (Ok(start_x), Ok(end_x)) => InputEvent::Swipe {
                    start_x,
                    end_x,
                    row: Some(row),
                },
                _ => return Command::Invalid(format!("Invalid swipe coordinates: {} {}", start, end)),
            }
        }
        ("theme", []) => InputEvent::ThemeToggled,
        ("yes" | "y", []) => InputEvent::ConfirmClicked,
        ("no" | "n", []) => InputEvent::CancelClicked,
        ("esc", []) => InputEvent::KeyDown(KeyPress::plain(Key::Escape)),
        ("outside", []) => InputEvent::OverlayClicked { on_backdrop: true },
        ("list" | "ls", []) => return Command::List,
        ("help" | "h", []) => return Command::Help,
        ("quit" | "q", []) => return Command::Quit,
        _ => return Command::Invalid(format!("Unknown command: {}  (try :help)", line)),
    };
    Command::Event(event)
}

fn parse_row(raw: &str) -> std::result::Result<usize, String> {
    match raw.trim_start_matches('[').trim_end_matches(']').parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("Invalid entry number: {}", raw)),
    }
}

/// A line for the user about outcomes the view does not already show.
pub fn describe(outcome: &RouteOutcome) -> Option<String> {
    match outcome {
        RouteOutcome::SaveSkipped => Some("Nothing to save: the draft is empty.".to_string()),
        RouteOutcome::ConfirmationBusy => {
            Some("Answer the open confirmation first (:yes or :no).".to_string())
        }
        RouteOutcome::DeleteNotFound { position } => {
            Some(format!("Entry {} no longer exists.", position + 1))
        }
        RouteOutcome::Cancelled => Some("Kept.".to_string()),
        RouteOutcome::Failed(err) => Some(format!("Error: {}", err)),
        _ => None,
    }
}
