//! Terminal panels - renders each dashboard surface as plain text.
//!
//! The layout mirrors the dashboard: product cards up top, then the summary,
//! low-stock, and activity panels. Nothing here holds state; every render is
//! driven entirely by the values the synchronizer pushes in.

use crate::core::{
    activity::ActivityEntry,
    product::Product,
    report::{InventorySummary, format_currency},
    sync::DashboardSurfaces,
};

/// Renders the dashboard surfaces to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSurfaces;

impl TerminalSurfaces {
    /// Creates the terminal surfaces.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DashboardSurfaces for TerminalSurfaces {
    fn show_products(&mut self, products: &[Product]) {
        println!();
        if products.is_empty() {
            println!("No products found");
            return;
        }
        for product in products {
            println!(
                "  #{:<3} {:<17} SKU {:<8} {:>8}  {:>4} available  [{}]",
                product.id,
                product.name,
                product.sku,
                format_currency(u64::from(product.price)),
                product.stock,
                product.status()
            );
        }
    }

    fn show_summary(&mut self, summary: &InventorySummary) {
        println!();
        println!("Summary");
        println!("  Products: {}", summary.product_count);
        println!("  Low stock: {}", summary.low_stock_count);
        println!(
            "  Inventory value: {}",
            format_currency(summary.inventory_value)
        );
    }

    fn show_low_stock(&mut self, products: &[Product]) {
        println!();
        println!("Low stock alerts");
        if products.is_empty() {
            println!("  (none)");
            return;
        }
        for product in products {
            println!(
                "  {:<17} SKU {:<8} {:>4}",
                product.name, product.sku, product.stock
            );
        }
    }

    fn show_activity(&mut self, entries: &[ActivityEntry]) {
        println!();
        println!("Recent activity");
        if entries.is_empty() {
            println!("  (no activity yet)");
            return;
        }
        for entry in entries {
            println!("  {}  {}", entry.time, entry.description);
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}
