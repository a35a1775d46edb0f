use async_trait::async_trait;

use crate::{
    command::{dispatcher::CommandError, tree::RawArgs, CommandSender},
    server::Server,
};

use super::{Arg, ArgumentConsumer, ConsumedArgs, FindArg};

pub(crate) struct CommandTreeArgumentConsumer;

#[async_trait]
impl ArgumentConsumer for CommandTreeArgumentConsumer {
    async fn consume<'a>(
        &self,
        _sender: &CommandSender<'_>,
        server: &Server,
        args: &mut RawArgs<'a>,
    ) -> Option<Arg> {
        let s = args.pop()?;

        server
            .command_dispatcher
            .get_tree(s)
            .ok()
            .map(|tree| Arg::Command(tree.names[0]))
    }
}

impl<'a> FindArg<'a> for CommandTreeArgumentConsumer {
    type Data = &'static str;

    fn find_arg(args: &'a ConsumedArgs, name: &str) -> Result<Self::Data, CommandError> {
        match args.get(name) {
            Some(Arg::Command(command)) => Ok(*command),
            _ => Err(CommandError::InvalidConsumption(Some(name.to_string()))),
        }
    }
}
