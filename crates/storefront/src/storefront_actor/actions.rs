use crate::model::{Category, ProductId};

/// Mutations the storefront accepts. One variant per control on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontAction {
    /// The "add" button on a product card.
    AddToCart(ProductId),
    /// The "−" button on a cart line. Unknown ids are ignored.
    RemoveFromCart(ProductId),
    /// A category button, or `None` for no filter.
    SelectCategory(Option<Category>),
    /// The "✕ CLEAR" control.
    ClearCategory,
    SetMenuOpen(bool),
    SetCartOpen(bool),
    SetLoginOpen(bool),
}

/// The cart after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartChange {
    /// Quantity of the touched entry afterwards; 0 when it was deleted.
    pub quantity: u32,
    pub cart_count: u32,
}

/// Result of a [`StorefrontAction`]. Variants mirror the action one to one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontActionResult {
    AddToCart(CartChange),
    /// `None` when the product was not in the cart.
    RemoveFromCart(Option<CartChange>),
    /// The active filter after the change.
    SelectCategory(Option<Category>),
    ClearCategory(()),
    SetMenuOpen(bool),
    SetCartOpen(bool),
    SetLoginOpen(bool),
}
