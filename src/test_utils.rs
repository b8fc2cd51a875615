//! Shared test utilities for `Stockdeck`.
//!
//! This module provides common helpers for seeding sample stores and a
//! recording surfaces double that captures every pushed frame so tests can
//! assert on exactly what the synchronizer rendered.

use crate::{
    config::catalog,
    core::{
        activity::ActivityEntry,
        dashboard::Dashboard,
        product::Product,
        report::InventorySummary,
        store::ProductStore,
        sync::DashboardSurfaces,
    },
};

/// The built-in six-product catalog, used as the standard fixture.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    catalog::default_catalog()
}

/// Creates a store seeded with the sample catalog.
#[must_use]
pub fn sample_store() -> ProductStore {
    ProductStore::new(sample_products())
}

/// Surfaces double that records every pushed frame instead of rendering.
#[derive(Debug, Default)]
pub struct RecordingSurfaces {
    /// Product-card frames in push order
    pub product_frames: Vec<Vec<Product>>,
    /// Summary values in push order
    pub summaries: Vec<InventorySummary>,
    /// Low-stock panel frames in push order
    pub low_stock_frames: Vec<Vec<Product>>,
    /// Activity panel frames in push order
    pub activity_frames: Vec<Vec<ActivityEntry>>,
    /// Every ephemeral notice shown
    pub notices: Vec<String>,
}

impl DashboardSurfaces for RecordingSurfaces {
    fn show_products(&mut self, products: &[Product]) {
        self.product_frames.push(products.to_vec());
    }

    fn show_summary(&mut self, summary: &InventorySummary) {
        self.summaries.push(summary.clone());
    }

    fn show_low_stock(&mut self, products: &[Product]) {
        self.low_stock_frames.push(products.to_vec());
    }

    fn show_activity(&mut self, entries: &[ActivityEntry]) {
        self.activity_frames.push(entries.to_vec());
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Creates a dashboard over the sample store with recording surfaces and the
/// default seller list.
#[must_use]
pub fn sample_dashboard() -> Dashboard<RecordingSurfaces> {
    Dashboard::new(
        sample_store(),
        catalog::default_sellers(),
        RecordingSurfaces::default(),
    )
}
