//! Search - case-insensitive substring filtering over the catalog.

use crate::core::product::Product;

/// Filters products whose name or SKU contains `query`, case-insensitively.
///
/// An empty query matches every product; a query that matches nothing yields
/// an empty list (the display layer shows a placeholder, not an error).
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.sku.to_lowercase().contains(&needle)
        })
        .collect()
}
