use async_trait::async_trait;
use smithing_core::text::color::NamedColor;
use smithing_core::text::TextComponent;

use crate::command::args::arg_command::CommandTreeArgumentConsumer;
use crate::command::args::{ConsumedArgs, FindArg};
use crate::command::dispatcher::CommandError;
use crate::command::tree::CommandTree;
use crate::command::tree_builder::argument;
use crate::command::{CommandExecutor, CommandSender};
use crate::server::Server;

const NAMES: [&str; 3] = ["help", "h", "?"];

const DESCRIPTION: &str = "Print a help message.";

const ARG_COMMAND: &str = "command";

fn describe(tree: &CommandTree) -> TextComponent {
    let mut message = TextComponent::text(format!("/{}", tree.names.join(", /")))
        .color_named(NamedColor::Gold)
        .add_child(TextComponent::text(" - ").color_named(NamedColor::Yellow))
        .add_child(TextComponent::text(tree.description).color_named(NamedColor::White));

    for usage in tree.usages() {
        message = message
            .add_child(TextComponent::text("\n    Usage: ").color_named(NamedColor::Yellow))
            .add_child(TextComponent::text(usage).color_named(NamedColor::White));
    }
    message
}

struct CommandHelpExecutor;

#[async_trait]
impl CommandExecutor for CommandHelpExecutor {
    async fn execute<'a>(
        &self,
        sender: &mut CommandSender<'a>,
        server: &Server,
        args: &ConsumedArgs,
    ) -> Result<(), CommandError> {
        let name = CommandTreeArgumentConsumer::find_arg(args, ARG_COMMAND)?;
        let message = describe(server.command_dispatcher.get_tree(name)?);

        sender.send_message(message).await;

        Ok(())
    }
}

struct BaseHelpExecutor;

#[async_trait]
impl CommandExecutor for BaseHelpExecutor {
    async fn execute<'a>(
        &self,
        sender: &mut CommandSender<'a>,
        server: &Server,
        _args: &ConsumedArgs,
    ) -> Result<(), CommandError> {
        let header = TextComponent::text("-------- Help --------").color_named(NamedColor::Yellow);
        let messages: Vec<TextComponent> = server
            .command_dispatcher
            .trees()
            .into_iter()
            .map(describe)
            .collect();

        sender.send_message(header).await;
        for message in messages {
            sender.send_message(message).await;
        }

        Ok(())
    }
}

pub fn init_command_tree() -> CommandTree {
    CommandTree::new(NAMES, DESCRIPTION)
        .with_child(
            argument(ARG_COMMAND, &CommandTreeArgumentConsumer).execute(&CommandHelpExecutor),
        )
        .execute(&BaseHelpExecutor)
}

#[cfg(test)]
mod tests {
    use crate::command::tests::run;
    use crate::server::tests::server;

    #[tokio::test]
    async fn lists_every_command() {
        let server = server("help-all", "");
        let output = run(&server, "help").await;
        assert_eq!(output.len(), 4);
        assert!(output[1].starts_with("/help, /h, /? - Print a help message."));
        assert!(output[2].starts_with("/smithing, /nexosmithing - "));
        assert!(output[3].starts_with("/stop - Stop the server."));
    }

    #[tokio::test]
    async fn describes_one_command_by_alias() {
        let server = server("help-one", "");
        let output = run(&server, "? nexosmithing").await;
        assert_eq!(output.len(), 1);
        assert!(output[0].contains("Usage: /smithing preview <template> <base> <addition>"));

        let output = run(&server, "help smelt").await;
        assert!(output[0].starts_with("Invalid Syntax."));
    }
}
