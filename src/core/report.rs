//! Report generation for the dashboard panels.
//!
//! This module derives the summary totals and low-stock alerts from the
//! current catalog state and provides currency formatting for display. All
//! functions are pure and return structured data that the shell layer
//! formats, so the same computations back every panel without drift.

use crate::core::product::{LOW_STOCK_THRESHOLD, Product};

/// Stock level below which a product appears in the low-stock alert panel.
pub const LOW_STOCK_ALERT_THRESHOLD: u32 = 50;

/// Maximum number of products the low-stock alert panel displays.
pub const LOW_STOCK_PANEL_LIMIT: usize = 3;

/// Derived totals shown on the summary cards and quick stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    /// Total number of products in the catalog
    pub product_count: usize,
    /// Number of products with stock below [`LOW_STOCK_THRESHOLD`]
    pub low_stock_count: usize,
    /// Total inventory value in paise: Σ(price × stock) over all products
    pub inventory_value: u64,
}

/// Computes the summary totals from the current catalog state.
#[must_use]
pub fn summarize(products: &[Product]) -> InventorySummary {
    InventorySummary {
        product_count: products.len(),
        low_stock_count: products
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .count(),
        inventory_value: inventory_value(products),
    }
}

/// Total inventory value in paise: Σ(price × stock) over all products.
#[must_use]
pub fn inventory_value(products: &[Product]) -> u64 {
    products.iter().map(Product::inventory_value).sum()
}

/// Products needing attention: stock below [`LOW_STOCK_ALERT_THRESHOLD`],
/// ascending by stock, capped at [`LOW_STOCK_PANEL_LIMIT`].
///
/// Ties keep catalog order (the sort is stable).
#[must_use]
pub fn low_stock_alerts(products: &[Product]) -> Vec<Product> {
    let mut alerts: Vec<Product> = products
        .iter()
        .filter(|p| p.stock < LOW_STOCK_ALERT_THRESHOLD)
        .cloned()
        .collect();
    alerts.sort_by_key(|p| p.stock);
    alerts.truncate(LOW_STOCK_PANEL_LIMIT);
    alerts
}

/// Formats an amount of paise as whole rupees with Indian digit grouping.
///
/// Rounds to the nearest rupee and groups the last three digits, then pairs:
/// `12_345_600` paise becomes `"₹1,23,456"`.
#[must_use]
pub fn format_currency(paise: u64) -> String {
    let rupees = (paise + 50) / 100;
    format!("₹{}", group_digits_indian(rupees))
}

/// Indian digit grouping: last group of three, then groups of two.
fn group_digits_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail.to_string()];
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair.to_string());
        head = rest;
    }
    groups.push(head.to_string());
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_products;

    #[test]
    fn test_summarize_default_catalog() {
        let products = sample_products();
        let summary = summarize(&products);

        assert_eq!(summary.product_count, 6);
        // Wireless Mouse (6) and Phone Charger (0)
        assert_eq!(summary.low_stock_count, 2);
        // 299*24 + 899*6 + 199*120 + 399*0 + 69*420 + 1599*14 rupees, in paise
        assert_eq!(summary.inventory_value, 87_816 * 100);
    }

    #[test]
    fn test_inventory_value_matches_independent_recomputation() {
        let mut products = sample_products();
        products[0].stock += 5;
        products[3].stock = 2;

        let expected: u64 = products
            .iter()
            .map(|p| u64::from(p.price) * u64::from(p.stock))
            .sum();
        assert_eq!(inventory_value(&products), expected);
    }

    #[test]
    fn test_low_stock_alerts_sorted_ascending_and_capped() {
        let products = sample_products();
        let alerts = low_stock_alerts(&products);

        // Below 50: Charger (0), Mouse (6), Earbuds (14), T-shirt (24);
        // the cap of three drops the T-shirt.
        assert_eq!(alerts.len(), LOW_STOCK_PANEL_LIMIT);
        let names: Vec<&str> = alerts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Phone Charger", "Wireless Mouse", "Wireless Earbuds"]
        );

        let stocks: Vec<u32> = alerts.iter().map(|p| p.stock).collect();
        let mut sorted = stocks.clone();
        sorted.sort_unstable();
        assert_eq!(stocks, sorted);
        assert!(stocks.iter().all(|&s| s < LOW_STOCK_ALERT_THRESHOLD));
    }

    #[test]
    fn test_low_stock_alerts_empty_when_everything_is_stocked() {
        let mut products = sample_products();
        for p in &mut products {
            p.stock = 100;
        }
        assert!(low_stock_alerts(&products).is_empty());
    }

    #[test]
    fn test_format_currency_whole_rupees() {
        assert_eq!(format_currency(29_900), "₹299");
        assert_eq!(format_currency(0), "₹0");
        assert_eq!(format_currency(351_200), "₹3,512");
    }

    #[test]
    fn test_format_currency_indian_grouping() {
        assert_eq!(format_currency(12_345_600), "₹1,23,456");
        assert_eq!(format_currency(8_781_600), "₹87,816");
        assert_eq!(format_currency(1_234_567_800), "₹1,23,45,678");
    }

    #[test]
    fn test_format_currency_rounds_to_nearest_rupee() {
        assert_eq!(format_currency(29_949), "₹299");
        assert_eq!(format_currency(29_950), "₹300");
    }
}
