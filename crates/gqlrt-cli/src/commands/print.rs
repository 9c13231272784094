use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use gqlrt_parser::ParseOptions;
use gqlrt_parser::Source;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Document to reformat. The canonical text goes to stdout.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

impl PrintCmd {
    fn print(&self) -> anyhow::Result<String> {
        let body = std::fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {:#?}", self.file_path))?;
        let source = Source::with_name(body, self.file_path.display().to_string());
        let document = gqlrt_parser::parse(source, ParseOptions::no_location())?;
        log::debug!("Parsed {} definitions.", document.definitions.len());
        Ok(gqlrt_parser::print(&document))
    }
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.print() {
            Ok(printed) => CommandResult::stdout(format_args!("{printed}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
