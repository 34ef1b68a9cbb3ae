mod app;
mod command;
mod config;
mod consts;
mod game;
mod settings;
mod ui;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

const USAGE: &str = "\
Usage: rocksnake [<options>]

Steer the snake around the grid with the arrow keys (or hjkl, or wasd).
Eat food to grow; every bite puts another rock on the grid.

Options:
  -c, --config <path>   Read configuration from the given file
      --log-file <path> Write diagnostic logs to the given file
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run { config, log_file })
    }

    fn run(self) -> ExitCode {
        match self {
            Cli::Run { config, log_file } => {
                let r = play(config.as_deref(), log_file.as_deref());
                exit_status(r)
            }
            Cli::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Cli::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(cli) => cli.run(),
        Err(e) => {
            eprintln!("rocksnake: {e}");
            eprint!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn exit_status(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rocksnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn play(config: Option<&Path>, log_file: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = log_file {
        init_logging(path)?;
    }
    let settings = Config::load_or_default(config)
        .context("failed to load configuration")?
        .settings();
    tracing::info!(?settings, "Starting game");
    let game = Game::new(settings);
    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(game).run(terminal));
    let _ = crossterm::execute!(io::stdout(), DisableFocusChange);
    ratatui::restore();
    match r {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r.context("terminal I/O failed"),
    }
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Build the log filter from `RUST_LOG`-style directives, logging at `info`
/// and above when none are given
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            Cli::Run {
                config: None,
                log_file: None
            }
        );
    }

    #[test]
    fn all_args() {
        assert_eq!(
            parse(&["--config", "snake.toml", "--log-file=snake.log"]).unwrap(),
            Cli::Run {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("snake.log")),
            }
        );
    }

    #[test]
    fn short_config() {
        assert_eq!(
            parse(&["-c", "snake.toml"]).unwrap(),
            Cli::Run {
                config: Some(PathBuf::from("snake.toml")),
                log_file: None,
            }
        );
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse(&["--help"]).unwrap(), Cli::Help);
        assert_eq!(parse(&["-V"]).unwrap(), Cli::Version);
    }

    #[rstest]
    #[case("", "info", LevelFilter::INFO)]
    #[case("debug", "debug", LevelFilter::DEBUG)]
    #[case("trace", "trace", LevelFilter::TRACE)]
    #[case("warn", "warn", LevelFilter::WARN)]
    #[case("rocksnake=debug", "rocksnake=debug", LevelFilter::DEBUG)]
    fn test_log_filter(#[case] directives: &str, #[case] shown: &str, #[case] max: LevelFilter) {
        let filter = log_filter(directives);
        assert_eq!(filter.to_string(), shown);
        assert_eq!(filter.max_level_hint(), Some(max));
    }

    #[test]
    fn failure_exits_2() {
        assert_eq!(exit_status(Ok(())), ExitCode::SUCCESS);
        assert_eq!(
            exit_status(Err(anyhow::anyhow!("terminal I/O failed"))),
            ExitCode::from(2)
        );
    }

    #[test]
    fn unknown_arg() {
        assert!(parse(&["--speed", "9"]).is_err());
        assert!(parse(&["extra"]).is_err());
        assert!(parse(&["--config"]).is_err());
    }
}
