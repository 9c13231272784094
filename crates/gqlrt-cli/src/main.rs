mod cli;
mod command;
mod commands;
mod file_discovery;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::CommandResult;
pub(crate) use command::RunnableCommand;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::Level;

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    let (log_level, warning) = resolve_log_level(cli.verbose, std::env::var("LOG_LEVEL").ok().as_deref());
    setup_logger(log_level, warning);

    match cli.cmd.take() {
        Some(command) => command.run(cli).await.emit(),
        None => match cli.run_default().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            },
        },
    }
}

/// Picks the max log level from `-v` flags first, then `LOG_LEVEL`.
///
/// An unrecognized `LOG_LEVEL` falls back to the default and yields a
/// warning to log once the subscriber is up.
fn resolve_log_level(verbose: u8, env_val: Option<&str>) -> (Level, Option<String>) {
    match verbose {
        0 => (),
        1 => return (Level::DEBUG, None),
        _ => return (Level::TRACE, None),
    }

    let Some(env_val) = env_val.map(str::trim) else {
        return (DEFAULT_LOG_LEVEL, None);
    };
    if env_val.eq_ignore_ascii_case("verbose") {
        return (Level::DEBUG, None);
    }
    match Level::from_str(env_val) {
        Ok(level) => (level, None),
        Err(_) => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{env_val}`")),
        ),
    }
}

fn setup_logger(log_level: Level, warning: Option<String>) {
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::DEFAULT_LOG_LEVEL;
    use super::resolve_log_level;
    use tracing::Level;

    #[test]
    fn verbose_flags_win_over_the_environment() {
        assert_eq!(resolve_log_level(1, Some("error")), (Level::DEBUG, None));
        assert_eq!(resolve_log_level(3, None), (Level::TRACE, None));
    }

    #[test]
    fn log_level_env_is_case_insensitive() {
        assert_eq!(resolve_log_level(0, Some(" Warn ")), (Level::WARN, None));
        assert_eq!(resolve_log_level(0, Some("VERBOSE")), (Level::DEBUG, None));
        assert_eq!(resolve_log_level(0, None), (DEFAULT_LOG_LEVEL, None));
    }

    #[test]
    fn unknown_log_level_falls_back_with_a_warning() {
        let (level, warning) = resolve_log_level(0, Some("loud"));
        assert_eq!(level, DEFAULT_LOG_LEVEL);
        assert_eq!(warning.as_deref(), Some("Invalid `LOG_LEVEL` environment variable value: `loud`"));
    }
}
