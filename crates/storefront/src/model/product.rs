/// Represents a product in the catalog.
///
/// Products are static seed data: created once when the catalog is loaded and
/// never mutated afterwards. `price` is a pre-formatted display label (for
/// example `"₹99"`) and never takes part in arithmetic.
///
/// See [`CatalogStore`](crate::catalog::CatalogStore) for how products are
/// filtered and [`CartStore`](crate::cart::CartStore) for how they are counted.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products, e.g. `BU-01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed set of catalog categories, in the order the category buttons
/// are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CLOTHES")]
    Clothes,
    #[serde(rename = "DECORATIVE ITEMS")]
    DecorativeItems,
    #[serde(rename = "COOL GADGETS")]
    CoolGadgets,
    #[serde(rename = "BUDGET ITEMS")]
    BudgetItems,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Clothes,
        Category::DecorativeItems,
        Category::CoolGadgets,
        Category::BudgetItems,
    ];

    /// The button label, which is also the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Category::Clothes => "CLOTHES",
            Category::DecorativeItems => "DECORATIVE ITEMS",
            Category::CoolGadgets => "COOL GADGETS",
            Category::BudgetItems => "BUDGET ITEMS",
        }
    }

    /// Parses a button label. Surrounding whitespace and ASCII case are
    /// ignored; anything else unrecognized yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    /// `None` marks a featured item, which never shows up in a category filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_link: Option<String>,
}

impl Product {
    /// Creates an uncategorized Product with no image or purchase link.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the catalog
    /// * `name` - Display name, also used in cart notices
    /// * `price` - Pre-formatted price label
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price: price.into(),
            category: None,
            img: String::new(),
            buy_link: None,
        }
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    pub fn with_buy_link(mut self, link: impl Into<String>) -> Self {
        self.buy_link = Some(link.into());
        self
    }

    pub fn is_featured(&self) -> bool {
        self.category.is_none()
    }
}
