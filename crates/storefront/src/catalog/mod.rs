//! # Catalog
//!
//! The static product list and the active category filter.
//!
//! The page shows no catalog products until a category is chosen, so
//! [`CatalogStore::filtered`] is empty while the filter is `None`. Selecting
//! a category replaces the filter; re-selecting the active one keeps it. The
//! only way back to `None` is the explicit clear control
//! ([`CatalogStore::clear_category`]) or selecting `None` directly.
//!
//! Featured items carry no category and are served separately by
//! [`CatalogStore::featured`].

pub mod error;

pub use error::*;

use crate::model::{Category, Product, ProductId};
use std::collections::HashSet;
use tracing::debug;

/// The catalog bundled with the crate.
pub const SEED_CATALOG: &str = include_str!("seed.json");

#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    selected: Option<Category>,
}

impl CatalogStore {
    /// Builds a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        debug!(size = products.len(), "Catalog loaded");
        Ok(Self {
            products,
            selected: None,
        })
    }

    /// Parses a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The bundled seed catalog.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json(SEED_CATALOG)
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.selected = category;
    }

    pub fn clear_category(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<Category> {
        self.selected
    }

    /// Products in the active category, in catalog order. Empty when no
    /// category is selected.
    pub fn filtered(&self) -> impl Iterator<Item = &Product> + '_ {
        in_category(&self.products, self.selected)
    }

    /// Same as [`filtered`](Self::filtered) but driven by a raw button label.
    /// An unrecognized label matches nothing.
    pub fn filtered_by_label<'a>(&'a self, label: &str) -> impl Iterator<Item = &'a Product> + 'a {
        in_category(&self.products, Category::from_label(label))
    }

    /// The full, unfiltered product list.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// The curated items that carry no category.
    pub fn featured(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(|p| p.is_featured())
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The category buttons, in display order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }
}

fn in_category(
    products: &[Product],
    category: Option<Category>,
) -> impl Iterator<Item = &Product> + '_ {
    products
        .iter()
        .filter(move |p| category.is_some() && p.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        products.map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_initial_filter_is_empty() {
        let catalog = CatalogStore::seeded().unwrap();
        assert_eq!(catalog.selected(), None);
        assert_eq!(catalog.filtered().count(), 0);
    }

    #[test]
    fn test_select_clothes_then_clear() {
        let mut catalog = CatalogStore::seeded().unwrap();

        catalog.set_category(Some(Category::Clothes));
        assert_eq!(ids(catalog.filtered()), ["CL-01", "CL-02", "CL-03"]);

        catalog.set_category(None);
        assert_eq!(catalog.filtered().count(), 0);
    }

    #[test]
    fn test_filtered_is_ordered_subset_of_all() {
        let mut catalog = CatalogStore::seeded().unwrap();

        for category in Category::ALL {
            catalog.set_category(Some(category));
            let expected: Vec<&str> = catalog
                .all()
                .iter()
                .filter(|p| p.category == Some(category))
                .map(|p| p.id.as_str())
                .collect();
            assert!(!expected.is_empty(), "{category} has no seeded products");
            assert_eq!(ids(catalog.filtered()), expected);
        }
    }

    #[test]
    fn test_reselecting_does_not_toggle() {
        let mut catalog = CatalogStore::seeded().unwrap();

        catalog.set_category(Some(Category::BudgetItems));
        catalog.set_category(Some(Category::BudgetItems));
        assert_eq!(catalog.selected(), Some(Category::BudgetItems));

        catalog.clear_category();
        assert_eq!(catalog.selected(), None);
    }

    #[test]
    fn test_unknown_label_matches_nothing() {
        let catalog = CatalogStore::seeded().unwrap();
        assert_eq!(catalog.filtered_by_label("LIGHTING").count(), 0);
        assert_eq!(ids(catalog.filtered_by_label("budget items")), ["BU-01", "BU-02"]);
    }

    #[test]
    fn test_featured_items_have_no_category() {
        let catalog = CatalogStore::seeded().unwrap();
        assert_eq!(
            ids(catalog.featured()),
            ["PC-01", "PC-02", "PC-03", "PC-04"]
        );
        assert!(catalog.featured().all(|p| p.buy_link.is_some()));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = CatalogStore::new(vec![
            Product::new("BU-01", "Phone Stand", "₹99"),
            Product::new("BU-01", "Other Stand", "₹89"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id.as_str() == "BU-01"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = CatalogStore::from_json(r#"[{"id": "X"}]"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = CatalogStore::seeded().unwrap();
        let stand = catalog.get(&ProductId::from("BU-01")).unwrap();
        assert_eq!(stand.name, "Phone Stand");
        assert_eq!(stand.price, "₹99");
        assert!(catalog.get(&ProductId::from("NONEXISTENT")).is_none());
    }
}
