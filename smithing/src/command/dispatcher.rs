use smithing_core::text::color::NamedColor;
use smithing_core::text::TextComponent;

use super::args::ConsumedArgs;

use crate::command::dispatcher::CommandError::{
    GeneralCommandIssue, InvalidConsumption, InvalidRequirement, OtherSmithing,
};
use crate::command::tree::{Command, CommandTree, NodeType, RawArgs};
use crate::command::CommandSender;
use crate::error::SmithingError;
use crate::server::Server;
use std::collections::HashMap;

#[derive(Debug)]
pub enum CommandError {
    /// A previously consumed argument could not be read back. Only happens when a
    /// consumer and its executor disagree.
    InvalidConsumption(Option<String>),

    /// Return this if a condition that a [`NodeType::Require`] should ensure is not met.
    InvalidRequirement,

    OtherSmithing(Box<dyn SmithingError>),

    GeneralCommandIssue(String),
}

impl CommandError {
    pub fn into_string_or_smithing_error(
        self,
        cmd: &str,
    ) -> Result<String, Box<dyn SmithingError>> {
        match self {
            InvalidConsumption(s) => {
                log::error!(
                    "Error while parsing command \"{cmd}\": {s:?} was consumed, but couldn't be parsed"
                );
                Ok("Internal Error (See logs for details)".into())
            }
            InvalidRequirement => {
                log::error!(
                    "Error while parsing command \"{cmd}\": a requirement that was expected was not met."
                );
                Ok("Internal Error (See logs for details)".into())
            }
            GeneralCommandIssue(s) => Ok(s),
            OtherSmithing(e) => Err(e),
        }
    }
}

impl<E: SmithingError + 'static> From<E> for CommandError {
    fn from(error: E) -> Self {
        OtherSmithing(error.into())
    }
}

/// Stores registered [`CommandTree`]s and dispatches commands to them.
#[derive(Default)]
pub struct CommandDispatcher {
    pub(crate) commands: HashMap<&'static str, Command>,
}

impl CommandDispatcher {
    pub async fn handle_command(&self, sender: &mut CommandSender<'_>, server: &Server, cmd: &str) {
        log::debug!("{sender} issued command: {}", cmd.trim());
        if let Err(e) = self.dispatch(sender, server, cmd).await {
            match e.into_string_or_smithing_error(cmd) {
                Ok(err) => {
                    sender
                        .send_message(TextComponent::text(err).color_named(NamedColor::Red))
                        .await;
                }
                Err(smithing_error) => {
                    smithing_error.log();
                    sender
                        .send_message(
                            TextComponent::text(
                                "Unknown internal error occurred while running command. Please see server log",
                            )
                            .color_named(NamedColor::Red),
                        )
                        .await;
                }
            }
        }
    }

    /// Execute a command using its corresponding [`CommandTree`].
    pub(crate) async fn dispatch(
        &self,
        src: &mut CommandSender<'_>,
        server: &Server,
        cmd: &str,
    ) -> Result<(), CommandError> {
        let mut parts = cmd.split_whitespace();
        let key = parts
            .next()
            .ok_or(GeneralCommandIssue("Empty Command".to_string()))?;
        let raw_args: Vec<&str> = parts.rev().collect();

        let tree = self.get_tree(key)?;

        // try paths until fitting path is found
        for path in tree.iter_paths() {
            if Self::try_is_fitting_path(src, server, &path, tree, &mut raw_args.clone()).await? {
                return Ok(());
            }
        }
        Err(GeneralCommandIssue(format!("Invalid Syntax. Usage: {tree}")))
    }

    pub(crate) fn get_tree(&self, key: &str) -> Result<&CommandTree, CommandError> {
        let command = self
            .commands
            .get(key)
            .ok_or(GeneralCommandIssue(format!("Unknown command: {key}")))?;

        match command {
            Command::Tree(tree) => Ok(tree),
            Command::Alias(target) => {
                let Some(Command::Tree(tree)) = self.commands.get(target) else {
                    log::error!("Error while parsing command alias \"{key}\": pointing to \"{target}\" which is not a valid tree");
                    return Err(GeneralCommandIssue(
                        "Internal Error (See logs for details)".into(),
                    ));
                };
                Ok(tree)
            }
        }
    }

    /// Registered trees, without aliases, sorted by primary name.
    pub(crate) fn trees(&self) -> Vec<&CommandTree> {
        let mut trees: Vec<&CommandTree> = self
            .commands
            .values()
            .filter_map(|cmd| match cmd {
                Command::Tree(tree) => Some(tree),
                Command::Alias(_) => None,
            })
            .collect();
        trees.sort_by(|a, b| a.names[0].cmp(b.names[0]));
        trees
    }

    async fn try_is_fitting_path(
        src: &mut CommandSender<'_>,
        server: &Server,
        path: &[usize],
        tree: &CommandTree,
        raw_args: &mut RawArgs<'_>,
    ) -> Result<bool, CommandError> {
        let mut parsed_args: ConsumedArgs = HashMap::new();

        for node in path.iter().map(|&i| &tree.nodes[i]) {
            match node.node_type {
                NodeType::ExecuteLeaf { executor } => {
                    return if raw_args.is_empty() {
                        executor.execute(src, server, &parsed_args).await?;
                        Ok(true)
                    } else {
                        Ok(false)
                    };
                }
                NodeType::Literal { string } => {
                    if raw_args.pop() != Some(string) {
                        return Ok(false);
                    }
                }
                NodeType::Argument { consumer, name } => {
                    match consumer.consume(src, server, raw_args).await {
                        Some(consumed) => {
                            parsed_args.insert(name, consumed);
                        }
                        None => return Ok(false),
                    }
                }
                NodeType::Require { predicate } => {
                    if !predicate(src) {
                        return Ok(false);
                    }
                }
            }
        }

        Ok(false)
    }

    /// Register a command with the dispatcher.
    pub(crate) fn register(&mut self, tree: CommandTree) {
        let mut names = tree.names.iter();

        let Some(&primary_name) = names.next() else {
            log::error!("Refusing to register a command without a name");
            return;
        };

        for &name in names {
            self.commands.insert(name, Command::Alias(primary_name));
        }

        self.commands.insert(primary_name, Command::Tree(tree));
    }
}
