use crate::model::{CartEntry, Category, Product};
use serde::{Deserialize, Serialize};

/// Open/closed flags for the page chrome. Purely cosmetic: nothing is
/// authenticated behind `login_open`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFlags {
    pub menu_open: bool,
    pub cart_open: bool,
    pub login_open: bool,
}

/// Everything the rendering layer needs to draw one frame of the page.
///
/// Published by the storefront actor after every change; see
/// [`Storefront::view`](crate::storefront_actor::Storefront::view).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StorefrontView {
    pub selected_category: Option<Category>,
    pub filtered: Vec<Product>,
    pub featured: Vec<Product>,
    pub cart: Vec<CartEntry>,
    pub cart_count: u32,
    pub notice: Option<String>,
    pub ui: UiFlags,
}
