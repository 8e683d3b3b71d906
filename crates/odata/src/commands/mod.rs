mod check;
mod inspect;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use inspect::InspectCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "odata")]
pub(crate) enum CommandEnum {
    /// Check that every line of the given files is a complete literal.
    Check(Box<CheckCmd>),
    /// Show the token recognized for a single literal.
    Inspect(Box<InspectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Inspect(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
