//! Product store - owns the mutable catalog for the lifetime of a session.
//!
//! The store is constructed once at startup from the loaded catalog and is
//! the single owner of product state; every component that reads or mutates
//! products goes through it. The constructor captures an opening-stock
//! snapshot, before any mutation, so a session reset can restore it later.

use crate::core::product::Product;
use std::collections::HashMap;

/// Owned, ordered collection of products plus the opening-stock snapshot.
#[derive(Debug)]
pub struct ProductStore {
    products: Vec<Product>,
    opening_stock: HashMap<u32, u32>,
}

impl ProductStore {
    /// Creates a store from the loaded catalog, capturing each product's
    /// opening stock for later reset.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let opening_stock = products.iter().map(|p| (p.id, p.stock)).collect();
        Self {
            products,
            opening_stock,
        }
    }

    /// Looks up a product by id, returning `None` if the id is unknown.
    #[must_use]
    pub fn get(&self, product_id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Mutable lookup for the stock mutator. Unknown ids yield `None`.
    pub(crate) fn get_mut(&mut self, product_id: u32) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == product_id)
    }

    /// All products in stable catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Restores every product's stock to its opening value.
    pub fn reset(&mut self) {
        for product in &mut self.products {
            if let Some(&opening) = self.opening_stock.get(&product.id) {
                product.stock = opening;
            }
        }
    }
}
