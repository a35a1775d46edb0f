use async_trait::async_trait;
use smithing_world::item::ItemStack;

use crate::{command::dispatcher::CommandError, server::Server};

use super::{
    super::{
        args::{ArgumentConsumer, RawArgs},
        CommandSender,
    },
    Arg, ConsumedArgs, FindArg,
};

/// Marks an empty slot.
pub(crate) const EMPTY_SLOT: &str = "-";

/// One item token: `nexo:<id>`, a vanilla item name or [`EMPTY_SLOT`].
pub(crate) struct ItemArgumentConsumer;

#[async_trait]
impl ArgumentConsumer for ItemArgumentConsumer {
    async fn consume<'a>(
        &self,
        _sender: &CommandSender<'_>,
        server: &Server,
        args: &mut RawArgs<'a>,
    ) -> Option<Arg> {
        let s = args.pop()?;

        if s == EMPTY_SLOT {
            return Some(Arg::Item(Ok(None)));
        }

        Some(Arg::Item(server.resolve_item(s).map(Some).ok_or_else(|| s.to_string())))
    }
}

impl<'a> FindArg<'a> for ItemArgumentConsumer {
    type Data = Result<Option<&'a ItemStack>, &'a str>;

    fn find_arg(args: &'a ConsumedArgs, name: &str) -> Result<Self::Data, CommandError> {
        match args.get(name) {
            Some(Arg::Item(item)) => Ok(item.as_ref().map(Option::as_ref).map_err(String::as_str)),
            _ => Err(CommandError::InvalidConsumption(Some(name.to_string()))),
        }
    }
}
