use crate::Cli;
use std::process::ExitCode;

/// A subcommand that can be run to completion against the parsed [`Cli`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

/// What a finished command reports back to `main`.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub output: CommandOutput,
}

#[derive(Debug)]
pub(crate) enum CommandOutput {
    Stdout(String),
    Stderr(String),
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            output: CommandOutput::Stderr(fmt_args.to_string()),
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            output: CommandOutput::Stdout(fmt_args.to_string()),
        }
    }

    /// Writes the output to its stream and hands back the exit code.
    pub fn emit(self) -> ExitCode {
        match self.output {
            CommandOutput::Stdout(text) => println!("{text}"),
            CommandOutput::Stderr(text) => eprintln!("{text}"),
        }
        self.exit_code
    }
}

#[cfg(test)]
mod tests {
    use super::CommandOutput;
    use super::CommandResult;

    #[test]
    fn stdout_results_succeed() {
        let result = CommandResult::stdout(format_args!("{} files", 3));
        assert!(matches!(result.output, CommandOutput::Stdout(ref text) if text == "3 files"));
    }

    #[test]
    fn stderr_results_fail() {
        let result = CommandResult::stderr(format_args!("bad"));
        assert!(matches!(result.output, CommandOutput::Stderr(ref text) if text == "bad"));
    }
}
