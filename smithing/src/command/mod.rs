use std::fmt;

use crate::command::dispatcher::CommandDispatcher;
use crate::server::Server;
use args::ConsumedArgs;
use async_trait::async_trait;
use commands::{cmd_help, cmd_smithing, cmd_stop};
use dispatcher::CommandError;
use smithing_core::text::TextComponent;

pub mod args;
mod commands;
pub mod dispatcher;
pub mod tree;
pub mod tree_builder;
mod tree_format;

pub enum CommandSender<'a> {
    Console,
    /// Collects plain text output, one entry per message.
    Capture(&'a tokio::sync::Mutex<Vec<String>>),
}

impl fmt::Display for CommandSender<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            CommandSender::Console => "Server",
            CommandSender::Capture(_) => "Capture",
        })
    }
}

impl CommandSender<'_> {
    pub async fn send_message(&self, text: TextComponent) {
        match self {
            CommandSender::Console => log::info!("{}", text.to_pretty_console()),
            CommandSender::Capture(output) => output.lock().await.push(text.plain()),
        }
    }

    #[must_use]
    pub const fn is_console(&self) -> bool {
        matches!(self, CommandSender::Console)
    }
}

#[must_use]
pub fn default_dispatcher() -> CommandDispatcher {
    let mut dispatcher = CommandDispatcher::default();

    dispatcher.register(cmd_smithing::init_command_tree());
    dispatcher.register(cmd_help::init_command_tree());
    dispatcher.register(cmd_stop::init_command_tree());

    dispatcher
}

#[async_trait]
pub trait CommandExecutor: Sync {
    async fn execute<'a>(
        &self,
        sender: &mut CommandSender<'a>,
        server: &Server,
        args: &ConsumedArgs,
    ) -> Result<(), CommandError>;
}

#[cfg(test)]
pub(crate) mod tests {
    use tokio::sync::Mutex;

    use super::*;

    /// Runs `cmd` and returns every message sent back.
    pub(crate) async fn run(server: &Server, cmd: &str) -> Vec<String> {
        let output = Mutex::new(Vec::new());
        let mut sender = CommandSender::Capture(&output);
        server
            .command_dispatcher
            .handle_command(&mut sender, server, cmd)
            .await;
        output.into_inner()
    }

    #[test]
    fn usage_lists_every_path() {
        let tree = cmd_smithing::init_command_tree();
        assert_eq!(
            tree.usages(),
            [
                "/smithing reload",
                "/smithing list",
                "/smithing preview <template> <base> <addition>",
            ]
        );
    }

    #[tokio::test]
    async fn unknown_and_empty_commands() {
        let server = crate::server::tests::server("unknown-command", "");
        assert_eq!(run(&server, "smelt").await, ["Unknown command: smelt"]);
        assert_eq!(run(&server, "   ").await, ["Empty Command"]);
    }

    #[tokio::test]
    async fn invalid_syntax_shows_usage() {
        let server = crate::server::tests::server("invalid-syntax", "");
        let output = run(&server, "smithing forge").await;
        assert_eq!(output.len(), 1);
        assert!(output[0].starts_with("Invalid Syntax. Usage: /smithing reload"));
    }

    #[tokio::test]
    async fn stop_is_console_only() {
        let server = crate::server::tests::server("stop", "");
        assert_eq!(run(&server, "stop").await, ["Invalid Syntax. Usage: /stop"]);
    }
}
