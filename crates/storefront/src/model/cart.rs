use crate::model::Product;
use serde::{Deserialize, Serialize};

/// One line of the cart: a product and how many of it were added.
///
/// `quantity` is at least 1 for every entry a [`CartStore`](crate::cart::CartStore)
/// exposes; an entry is removed the moment it would drop to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}
