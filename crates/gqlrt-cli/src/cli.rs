use crate::commands;
use clap::CommandFactory;

#[derive(clap::Parser, Debug)]
#[command(
    name = "gqlrt",
    version,
    about = "Syntax checker and canonical printer for the gqlrt GraphQL runtime.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    /// Raise log detail: `-v` for DEBUG, `-vv` for TRACE. Wins over `LOG_LEVEL`.
    #[arg(
        action=clap::ArgAction::Count,
        global=true,
        long,
        short='v',
    )]
    pub verbose: u8,
}

impl Cli {
    /// With no subcommand there is nothing to do but describe the tool.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
