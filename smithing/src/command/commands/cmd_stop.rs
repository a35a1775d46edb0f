use async_trait::async_trait;
use smithing_core::text::color::NamedColor;
use smithing_core::text::TextComponent;

use crate::command::args::ConsumedArgs;
use crate::command::tree::CommandTree;
use crate::command::tree_builder::require;
use crate::command::{CommandError, CommandExecutor, CommandSender};
use crate::server::Server;

const NAMES: [&str; 1] = ["stop"];

const DESCRIPTION: &str = "Stop the server.";

struct StopExecutor;

#[async_trait]
impl CommandExecutor for StopExecutor {
    async fn execute<'a>(
        &self,
        sender: &mut CommandSender<'a>,
        _server: &Server,
        _args: &ConsumedArgs,
    ) -> Result<(), CommandError> {
        sender
            .send_message(TextComponent::text("Stopping Server").color_named(NamedColor::Red))
            .await;

        std::process::exit(0)
    }
}

pub fn init_command_tree() -> CommandTree {
    CommandTree::new(NAMES, DESCRIPTION)
        .with_child(require(|sender| sender.is_console()).execute(&StopExecutor))
}
