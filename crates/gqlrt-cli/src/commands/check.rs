use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::file_discovery;
use crate::output_utils;
use gqlrt_parser::ParseOptions;
use gqlrt_parser::Source;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Comma-separated extensions that mark a file as GraphQL while \
             walking a directory. A lone file path is parsed whatever its extension.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Documents to parse. A directory is walked recursively and \
             every file with a matching extension is parsed.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// Why one file failed to check.
#[derive(Debug)]
enum FileFailure {
    Read(std::io::Error),
    Syntax(gqlrt_parser::SyntaxError),
}

#[derive(Debug, Default)]
struct FileSummary {
    operations: usize,
    fragments: usize,
    type_system_definitions: usize,
}

fn check_file(path: &PathBuf) -> Result<FileSummary, FileFailure> {
    let body = std::fs::read_to_string(path).map_err(FileFailure::Read)?;
    let source = Source::with_name(body, path.display().to_string());
    let document = gqlrt_parser::parse(source, ParseOptions::default())
        .map_err(FileFailure::Syntax)?;

    let operations = document.operations().count();
    let fragments = document.fragments().count();
    Ok(FileSummary {
        operations,
        fragments,
        type_system_definitions: document.definitions.len() - operations - fragments,
    })
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let exts = file_discovery::normalize_exts(&self.graphql_file_exts);
        let discovered = match file_discovery::discover(&self.file_or_dir_paths, &exts) {
            Ok(discovered) => discovered,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let results: Vec<(&PathBuf, Result<FileSummary, FileFailure>)> =
            discovered.graphql_files
                .par_iter()
                .map(|path| (path, check_file(path)))
                .collect();

        let mut summary = FileSummary::default();
        let mut failures = vec![];
        for (path, result) in results {
            match result {
                Ok(file_summary) => {
                    log::trace!("Checked {path:#?}: {file_summary:?}.");
                    summary.operations += file_summary.operations;
                    summary.fragments += file_summary.fragments;
                    summary.type_system_definitions += file_summary.type_system_definitions;
                },
                Err(FileFailure::Read(err)) => {
                    failures.push(format!("Failed to read {path:#?}: {err}"));
                },
                Err(FileFailure::Syntax(err)) => failures.push(err.to_string()),
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} of {} GraphQL files failed to parse:\n\n{}",
                output_utils::RED_X,
                failures.len(),
                discovered.graphql_files.len(),
                failures.join("\n\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} operations.\n",
                "  * Found {} fragments.\n",
                "  * Found {} type system definitions.",
            ),
            output_utils::GREEN_CHECK,
            discovered.graphql_files.len(),
            discovered.num_skipped,
            summary.operations,
            summary.fragments,
            summary.type_system_definitions,
        ))
    }
}
