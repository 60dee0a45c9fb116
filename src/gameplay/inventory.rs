//! Item inventory: named stacks in a fixed number of slots.

use bevy::prelude::*;

// === Constants ===

/// Slot count for a default inventory.
pub const DEFAULT_MAX_SLOTS: usize = 20;

// === Components ===

/// One slot's contents.
#[derive(Debug, Clone, PartialEq, Eq, Reflect)]
pub struct ItemStack {
    pub name: String,
    pub quantity: u32,
}

/// Items carried by an entity. Slots hold one item name each.
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Inventory {
    items: Vec<ItemStack>,
    pub max_slots: usize,
    /// When `false`, an item that is already held cannot be added again.
    pub allow_duplicates: bool,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SLOTS, true)
    }
}

impl Inventory {
    #[must_use]
    pub const fn new(max_slots: usize, allow_duplicates: bool) -> Self {
        Self {
            items: Vec::new(),
            max_slots,
            allow_duplicates,
        }
    }

    /// Adds `quantity` of `name`. Held items stack in their slot; new items
    /// need a free slot. Returns `false` and changes nothing if refused.
    pub fn add(&mut self, name: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        let allow_duplicates = self.allow_duplicates;
        if let Some(stack) = self.stack_mut(name) {
            if !allow_duplicates {
                return false;
            }
            stack.quantity = stack.quantity.saturating_add(quantity);
            return true;
        }
        if self.is_full() {
            return false;
        }
        self.items.push(ItemStack {
            name: name.to_owned(),
            quantity,
        });
        true
    }

    /// Removes `quantity` of `name`, freeing the slot when it empties.
    /// Returns `false` and changes nothing if fewer are held.
    pub fn remove(&mut self, name: &str, quantity: u32) -> bool {
        let Some(index) = self.items.iter().position(|stack| stack.name == name) else {
            return false;
        };
        let stack = &mut self.items[index];
        if stack.quantity < quantity {
            return false;
        }
        stack.quantity -= quantity;
        if stack.quantity == 0 {
            self.items.remove(index);
        }
        true
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.items.iter().any(|stack| stack.name == name)
    }

    /// Quantity held of `name`, zero if absent.
    #[must_use]
    pub fn quantity(&self, name: &str) -> u32 {
        self.items
            .iter()
            .find(|stack| stack.name == name)
            .map_or(0, |stack| stack.quantity)
    }

    /// Occupied slots in the order they were filled.
    #[must_use]
    pub fn items(&self) -> &[ItemStack] {
        &self.items
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_slots
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn stack_mut(&mut self, name: &str) -> Option<&mut ItemStack> {
        self.items.iter_mut().find(|stack| stack.name == name)
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ItemStack>().register_type::<Inventory>();
}
