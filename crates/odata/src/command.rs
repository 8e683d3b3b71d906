use crate::Cli;
use crate::CommandResult;

/// A subcommand that runs to completion and reports its outcome as
/// output text plus an exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
