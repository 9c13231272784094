mod check;
mod print;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use print::PrintCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlrt")]
pub(crate) enum CommandEnum {
    /// Syntax-check documents in parallel; exits non-zero if any fail.
    Check(Box<CheckCmd>),

    /// Reformat a single document with the canonical printer.
    Print(Box<PrintCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
        }
    }
}
