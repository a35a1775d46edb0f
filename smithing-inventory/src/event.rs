use smithing_world::item::ItemStack;

use crate::SmithingInventory;

/// Fired while a player arranges items in a smithing table, before anything is taken.
///
/// Listeners may set [`PrepareSmithingEvent::result`]. Leaving it untouched passes the
/// event through with whatever result it already had.
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareSmithingEvent {
    pub inventory: SmithingInventory,
    pub result: Option<ItemStack>,
}

impl PrepareSmithingEvent {
    #[must_use]
    pub const fn new(inventory: SmithingInventory) -> Self {
        Self {
            inventory,
            result: None,
        }
    }
}
