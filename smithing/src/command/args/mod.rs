use std::collections::HashMap;

use async_trait::async_trait;
use smithing_world::item::ItemStack;

use crate::server::Server;

use super::{dispatcher::CommandError, tree::RawArgs, CommandSender};

pub(crate) mod arg_command;
pub(crate) mod arg_item;

/// see [`crate::command::tree_builder::argument`]
#[async_trait]
pub trait ArgumentConsumer: Sync {
    async fn consume<'a>(
        &self,
        sender: &CommandSender<'_>,
        server: &Server,
        args: &mut RawArgs<'a>,
    ) -> Option<Arg>;
}

#[derive(Clone, Debug)]
pub enum Arg {
    /// Primary name of a registered command.
    Command(&'static str),
    /// `None` for an explicitly empty slot, `Err` carries the token that did not resolve.
    Item(Result<Option<ItemStack>, String>),
}

/// see [`crate::command::tree_builder::argument`] and [`crate::command::tree::CommandTree::execute`]
pub type ConsumedArgs = HashMap<&'static str, Arg>;

pub(crate) trait FindArg<'a> {
    type Data;

    fn find_arg(args: &'a ConsumedArgs, name: &str) -> Result<Self::Data, CommandError>;
}
