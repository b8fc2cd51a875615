//! Product record and stock status derivation.
//!
//! A product is created once at startup from the catalog and only its stock
//! level changes afterwards. Availability status is never stored; it is
//! derived from the stock count on demand so it can never drift out of date.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock level below which a product counts as low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A single catalog product.
///
/// `stock` is the only field that changes during a session; everything else
/// is immutable after catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, immutable product identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Stock-keeping unit code
    pub sku: String,
    /// Unit price in minor currency units (paise)
    pub price: u32,
    /// Units currently available
    pub stock: u32,
}

impl Product {
    /// Derives the availability status from the current stock level.
    #[must_use]
    pub const fn status(&self) -> StockStatus {
        StockStatus::from_stock(self.stock)
    }

    /// Total value held in this product: price times units in stock, in paise.
    #[must_use]
    pub const fn inventory_value(&self) -> u64 {
        self.price as u64 * self.stock as u64
    }
}

/// Derived availability classification of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// No units available
    Out,
    /// Fewer than [`LOW_STOCK_THRESHOLD`] units available
    Low,
    /// Comfortably stocked
    Ok,
}

impl StockStatus {
    /// Classifies a stock count.
    ///
    /// Zero is `Out`, anything below [`LOW_STOCK_THRESHOLD`] is `Low`,
    /// everything else is `Ok`.
    #[must_use]
    pub const fn from_stock(stock: u32) -> Self {
        if stock == 0 {
            Self::Out
        } else if stock < LOW_STOCK_THRESHOLD {
            Self::Low
        } else {
            Self::Ok
        }
    }

    /// Badge text shown next to a product card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Out => "Out",
            Self::Low => "Low stock",
            Self::Ok => "In stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(StockStatus::from_stock(0), StockStatus::Out);
        assert_eq!(StockStatus::from_stock(1), StockStatus::Low);
        assert_eq!(StockStatus::from_stock(9), StockStatus::Low);
        assert_eq!(StockStatus::from_stock(10), StockStatus::Ok);
        assert_eq!(StockStatus::from_stock(420), StockStatus::Ok);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(StockStatus::Out.label(), "Out");
        assert_eq!(StockStatus::Low.label(), "Low stock");
        assert_eq!(StockStatus::Ok.label(), "In stock");
    }

    #[test]
    fn test_product_status_tracks_stock() {
        let mut product = Product {
            id: 1,
            name: "Blue T-shirt".to_string(),
            sku: "BT-001".to_string(),
            price: 29_900,
            stock: 24,
        };
        assert_eq!(product.status(), StockStatus::Ok);

        product.stock = 6;
        assert_eq!(product.status(), StockStatus::Low);

        product.stock = 0;
        assert_eq!(product.status(), StockStatus::Out);
    }

    #[test]
    fn test_inventory_value_is_price_times_stock() {
        let product = Product {
            id: 3,
            name: "Ceramic Mug".to_string(),
            sku: "MUG-12".to_string(),
            price: 19_900,
            stock: 120,
        };
        assert_eq!(product.inventory_value(), 19_900 * 120);
    }

    #[test]
    fn test_inventory_value_does_not_overflow_u32() {
        let product = Product {
            id: 7,
            name: "Bulk Pallet".to_string(),
            sku: "BP-01".to_string(),
            price: u32::MAX,
            stock: 1000,
        };
        assert_eq!(product.inventory_value(), u64::from(u32::MAX) * 1000);
    }
}
