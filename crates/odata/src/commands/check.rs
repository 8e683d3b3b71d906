use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::LiteralRule;
use crate::RunnableCommand;
use libodata_parser::LiteralParseError;
use libodata_parser::parse_complete;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "odata".to_string(),
            "txt".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    literal_file_exts: Vec<String>,

    #[arg(
        default_value_t=LiteralRule::Primitive,
        help="Grammar rule each line must match in full.",
        long,
        value_enum,
    )]
    rule: LiteralRule,

    #[arg(
        help="Paths to one or more files, or directories containing files, \
             with one literal per line.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// A line that is not a complete literal of the checked rule.
#[derive(Debug, PartialEq)]
pub(crate) struct LineFailure {
    /// 1-based.
    pub line: usize,
    pub error: LiteralParseError,
}

/// The outcome of checking one file's contents.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct SourceReport {
    pub num_literals: usize,
    pub failures: Vec<LineFailure>,
}

/// Yields the 1-based number and bytes of each non-empty line of
/// `source`, with any trailing `\r` removed.
pub(crate) fn literal_lines(source: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    source
        .split(|&byte| byte == b'\n')
        .enumerate()
        .map(|(index, line)| (index + 1, line.strip_suffix(b"\r").unwrap_or(line)))
        .filter(|(_, line)| !line.is_empty())
}

/// Checks every literal line of `source` against `rule`.
pub(crate) fn check_source(source: &[u8], rule: LiteralRule) -> SourceReport {
    let recognizer = rule.recognizer();
    let mut report = SourceReport::default();
    for (line, literal) in literal_lines(source) {
        report.num_literals += 1;
        if let Err(error) = parse_complete(literal, recognizer) {
            log::trace!("Line {line} is not a complete literal: {error}.");
            report.failures.push(LineFailure { line, error });
        }
    }
    report
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        // Normalize the set of file extensions to filter with
        let literal_file_exts: HashSet<String> =
            self.literal_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        let has_literal_ext = path.extension()
                            .map(|ext| ext.to_string_lossy())
                            .is_some_and(|ext| literal_file_exts.contains(ext.as_ref()));
                        if has_literal_ext {
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file argument is checked whatever its extension.
        let single_file_arg = match self.file_or_dir_paths.as_slice() {
            [path] if file_paths.is_empty() && path.is_file() => Some(path.clone()),
            _ => None,
        };
        if let Some(first_arg_path) = single_file_arg {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --literal-file-exts ({}).",
                literal_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = num_skipped_files.saturating_sub(1);
            file_paths.push(first_arg_path);
        }

        log::debug!(
            "Found {} files to check against the `{:?}` rule.",
            file_paths.len(),
            self.rule,
        );

        let mut num_literals = 0;
        let mut failures = vec![];
        for file_path in &file_paths {
            match check_file(file_path, self.rule) {
                Ok(report) => {
                    num_literals += report.num_literals;
                    failures.extend(report.failures.into_iter().map(|failure| {
                        format!("{}:{}: {}", file_path.display(), failure.line, failure.error)
                    }));
                },
                Err(e) => errors.push(format!("{}: {e}", file_path.display())),
            }
        }

        if !errors.is_empty() || !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} of {} literals failed to check ({} I/O errors):\n{}",
                output_utils::RED_X,
                failures.len(),
                num_literals,
                errors.len(),
                errors.iter()
                    .chain(failures.iter())
                    .map(|line| format!("  * {line}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All literals checked successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} files with other extensions.\n",
                "  * Checked {} literals.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            num_literals,
        ))
    }
}

fn check_file(path: &Path, rule: LiteralRule) -> std::io::Result<SourceReport> {
    let source = std::fs::read(path)?;
    let report = check_source(&source, rule);
    log::debug!(
        "Checked {} literals in {path:#?}: {} failed.",
        report.num_literals,
        report.failures.len(),
    );
    Ok(report)
}
