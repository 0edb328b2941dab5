//! # Cart
//!
//! In-memory cart bookkeeping. The store is synchronous and has no clock: each
//! mutation returns a [`CartEvent`] and the owner decides what to do with the
//! notice text (see [`NoticeBoard`](crate::notice::NoticeBoard)).
//!
//! Invariants:
//! - at most one entry per product id,
//! - every visible entry has `quantity >= 1`,
//! - entries keep the order in which they were first added,
//! - [`CartStore::count`] is always derived from the entries.

use crate::model::{CartEntry, Product, ProductId};

/// What a successful cart mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// `quantity` is the entry's quantity after the add.
    Added { name: String, quantity: u32 },
    /// `quantity` is what is left; 0 means the entry was deleted.
    Removed { name: String, quantity: u32 },
}

impl CartEvent {
    /// The transient notice shown to the shopper.
    pub fn notice(&self) -> String {
        match self {
            CartEvent::Added { name, .. } => format!("{name} added to cart"),
            CartEvent::Removed { name, .. } => format!("{name} removed from cart"),
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            CartEvent::Added { quantity, .. } | CartEvent::Removed { quantity, .. } => *quantity,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CartStore {
    entries: Vec<CartEntry>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`, inserting a new entry at the end if the
    /// product is not in the cart yet.
    pub fn add(&mut self, product: &Product) -> CartEvent {
        let quantity = match self.position(&product.id) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity += 1;
                entry.quantity
            }
            None => {
                self.entries.push(CartEntry {
                    product: product.clone(),
                    quantity: 1,
                });
                1
            }
        };
        CartEvent::Added {
            name: product.name.clone(),
            quantity,
        }
    }

    /// Removes one unit of the product. Returns `None` and leaves the cart
    /// untouched when the product is not in the cart.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartEvent> {
        let index = self.position(id)?;
        let entry = &mut self.entries[index];
        if entry.quantity > 1 {
            entry.quantity -= 1;
            return Some(CartEvent::Removed {
                name: entry.product.name.clone(),
                quantity: entry.quantity,
            });
        }

        // Vec::remove keeps the remaining entries in insertion order
        let entry = self.entries.remove(index);
        Some(CartEvent::Removed {
            name: entry.product.name,
            quantity: 0,
        })
    }

    /// Total number of units across all entries.
    pub fn count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.position(id)
            .map(|index| self.entries[index].quantity)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.entries.iter().position(|e| &e.product.id == id)
    }
}
