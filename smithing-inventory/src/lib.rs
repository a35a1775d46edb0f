use smithing_world::item::ItemStack;

pub use error::InventoryError;
pub use event::PrepareSmithingEvent;
pub use smithing::{find_matching_recipe, merge_result, SmithingTable};

mod error;
mod event;
mod smithing;

pub trait Container {
    const SLOTS: usize;

    fn item(&self, slot: usize) -> Result<Option<&ItemStack>, InventoryError>;

    fn set_item(
        &mut self,
        slot: usize,
        item: Option<ItemStack>,
    ) -> Result<Option<ItemStack>, InventoryError>;
}

/// The input slots of a smithing table. The result slot is not part of the inventory,
/// see [`PrepareSmithingEvent`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SmithingInventory {
    slots: [Option<ItemStack>; 3],
}

impl SmithingInventory {
    pub const TEMPLATE_SLOT: usize = 0;
    pub const BASE_SLOT: usize = 1;
    pub const ADDITION_SLOT: usize = 2;

    #[must_use]
    pub fn new(
        template: Option<ItemStack>,
        base: Option<ItemStack>,
        addition: Option<ItemStack>,
    ) -> Self {
        Self {
            slots: [template, base, addition],
        }
    }

    #[must_use]
    pub fn template(&self) -> Option<&ItemStack> {
        self.slots[Self::TEMPLATE_SLOT].as_ref()
    }

    #[must_use]
    pub fn base(&self) -> Option<&ItemStack> {
        self.slots[Self::BASE_SLOT].as_ref()
    }

    #[must_use]
    pub fn addition(&self) -> Option<&ItemStack> {
        self.slots[Self::ADDITION_SLOT].as_ref()
    }
}

impl Container for SmithingInventory {
    const SLOTS: usize = 3;

    fn item(&self, slot: usize) -> Result<Option<&ItemStack>, InventoryError> {
        self.slots
            .get(slot)
            .map(Option::as_ref)
            .ok_or(InventoryError::InvalidSlot(slot))
    }

    /// Returns what was in the slot before.
    fn set_item(
        &mut self,
        slot: usize,
        item: Option<ItemStack>,
    ) -> Result<Option<ItemStack>, InventoryError> {
        let current = self
            .slots
            .get_mut(slot)
            .ok_or(InventoryError::InvalidSlot(slot))?;
        Ok(std::mem::replace(current, item))
    }
}
