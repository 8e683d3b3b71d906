use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::LiteralRule;
use crate::RunnableCommand;
use libodata_parser::parse_complete;
use libodata_parser::recognizer::first_match_named;

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[arg(
        help="Print the token as JSON instead of the debug form.",
        long,
    )]
    json: bool,

    #[arg(
        default_value_t=LiteralRule::Primitive,
        help="Grammar rule the literal must match in full.",
        long,
        value_enum,
    )]
    rule: LiteralRule,

    #[arg(
        help="The literal text, exactly as it appears in a URI.",
        name="LITERAL",
    )]
    literal: String,
}

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = self.literal.as_bytes();
        let token = match parse_complete(source, self.rule.recognizer()) {
            Ok(token) => token,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} `{}` is not a `{:?}` literal: {e}",
                output_utils::RED_X,
                self.literal,
                self.rule,
            )),
        };

        if let Some((alternative, _)) = first_match_named(source, 0, self.rule.alternatives()) {
            log::debug!("Matched by the `{alternative}` alternative.");
        }

        if self.json {
            return match serde_json::to_string_pretty(&token) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize the token: {e}",
                    output_utils::RED_X,
                )),
            };
        }

        CommandResult::stdout(format_args!(
            "{} {:?} [{}, {}):\n{token:#?}",
            output_utils::GREEN_CHECK,
            self.rule,
            token.start(),
            token.next(),
        ))
    }
}
