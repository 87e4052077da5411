//! Default in-memory item collection.

use crate::model::{Item, ItemDefinition};
use crate::traits::ItemCollection;

/// Children held in display order.
#[derive(Debug, Clone, Default)]
pub struct Items {
    children: Vec<Item>,
}

impl Items {
    /// Build items from authored definitions; `index` is the authored position.
    pub fn from_definitions(definitions: &[ItemDefinition]) -> Self {
        Self {
            children: definitions
                .iter()
                .enumerate()
                .map(|(index, def)| Item::new(index, def))
                .collect(),
        }
    }
}

impl ItemCollection for Items {
    fn children(&self) -> &[Item] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Item] {
        &mut self.children
    }

    fn set_children(&mut self, items: Vec<Item>) {
        self.children = items;
    }

    fn toggle_active(&mut self, index: usize, active: bool) {
        if let Some(item) = self.children.iter_mut().find(|i| i.index == index) {
            item.is_active = active;
        }
    }

    fn reset_active_items(&mut self) {
        for item in &mut self.children {
            item.is_active = false;
        }
    }
}
