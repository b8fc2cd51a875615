//! Dashboard controller - owns the store, activity log, and render surfaces.
//!
//! This is the single entry point the frontend talks to. Every state-changing
//! operation follows the same shape: mutate the store, record an activity
//! entry, run one full synchronizer pass, then show an ephemeral notice.

use crate::core::{
    activity::ActivityLog,
    product::{LOW_STOCK_THRESHOLD, Product},
    search,
    stock::{self, StockAdjustment},
    store::ProductStore,
    sync::{self, DashboardSurfaces},
};
use tracing::info;

/// Owns all session state and exposes the dashboard operations.
#[derive(Debug)]
pub struct Dashboard<S: DashboardSurfaces> {
    store: ProductStore,
    activity: ActivityLog,
    sellers: Vec<String>,
    surfaces: S,
}

impl<S: DashboardSurfaces> Dashboard<S> {
    /// Creates a dashboard over a freshly seeded store.
    ///
    /// Call [`Dashboard::refresh`] afterwards to draw the initial panels.
    pub fn new(store: ProductStore, sellers: Vec<String>, surfaces: S) -> Self {
        Self {
            store,
            activity: ActivityLog::new(),
            sellers,
            surfaces,
        }
    }

    /// Runs one full synchronizer pass over every panel.
    pub fn refresh(&mut self) {
        sync::refresh_all(&self.store, &self.activity, &mut self.surfaces);
    }

    /// Adds units to a product's stock. `amount` defaults to 5.
    ///
    /// Unknown ids are a silent no-op returning `None`; otherwise the panels
    /// are resynchronized and the adjustment is returned.
    pub fn increase(&mut self, product_id: u32, amount: Option<u32>) -> Option<StockAdjustment> {
        let adjustment = stock::increase(&mut self.store, product_id, amount)?;
        self.activity.record(format!(
            "+{} units received ({})",
            adjustment.units_applied, adjustment.product_name
        ));
        self.refresh();
        self.surfaces.notify(&format!(
            "✅ Added {} units to {}",
            adjustment.units_applied, adjustment.product_name
        ));
        Some(adjustment)
    }

    /// Removes units from a product's stock, clamping at zero. `amount`
    /// defaults to 5.
    ///
    /// The activity entry and notice name the units actually removed, so a
    /// product at stock 3 logs "-3", not "-5".
    pub fn decrease(&mut self, product_id: u32, amount: Option<u32>) -> Option<StockAdjustment> {
        let adjustment = stock::decrease(&mut self.store, product_id, amount)?;
        self.activity.record(format!(
            "-{} units allocated ({})",
            adjustment.units_applied, adjustment.product_name
        ));
        self.refresh();
        self.surfaces.notify(&format!(
            "✅ Removed {} units from {}",
            adjustment.units_applied, adjustment.product_name
        ));
        Some(adjustment)
    }

    /// Filters the catalog by name or SKU and shows the matching cards.
    ///
    /// Returns the matches so the caller can inspect them; an empty result is
    /// rendered as a placeholder by the surfaces, not treated as an error.
    pub fn filter(&mut self, query: &str) -> Vec<Product> {
        let matches: Vec<Product> = search::filter_products(self.store.all(), query)
            .into_iter()
            .cloned()
            .collect();
        self.surfaces.show_products(&matches);
        matches
    }

    /// Restores every product's stock to its opening value.
    pub fn reset(&mut self) {
        self.store.reset();
        info!("stocks reset to opening values");
        self.activity.record("Reset stocks from settings");
        self.refresh();
        self.surfaces.notify("⚙️ Stocks reset to default");
    }

    /// Looks up a single product for the detail view. Unknown ids yield
    /// `None`, never an error.
    #[must_use]
    pub fn product_detail(&self, product_id: u32) -> Option<&Product> {
        self.store.get(product_id)
    }

    /// Re-shows the full product grid.
    pub fn show_products(&mut self) {
        let products: Vec<Product> = self.store.all().to_vec();
        self.surfaces.show_products(&products);
        self.surfaces.notify("📦 Showing products");
    }

    /// Shows only the products that are low on or out of stock.
    pub fn highlight_low_stock(&mut self) {
        let low: Vec<Product> = self
            .store
            .all()
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .cloned()
            .collect();
        self.surfaces.show_products(&low);
        self.surfaces.notify("⚠️ Highlighting low stock items");
    }

    /// Lists the configured sellers and records the lookup.
    pub fn show_sellers(&mut self) {
        let listing = self.sellers.join(", ");
        self.surfaces.notify(&format!("Sellers: {listing}"));
        self.activity.record("Viewed sellers list");
        self.surfaces.show_activity(self.activity.recent());
    }

    /// Read access to the store, for panels and tests.
    #[must_use]
    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    /// Read access to the activity log, for panels and tests.
    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Read access to the surfaces, for tests.
    #[must_use]
    pub fn surfaces(&self) -> &S {
        &self.surfaces
    }
}
