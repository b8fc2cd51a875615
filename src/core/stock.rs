//! Stock mutation - bounded increase and decrease of a single product's stock.
//!
//! Both operations treat an unknown product id as a silent no-op and report
//! what actually happened through a [`StockAdjustment`] record, so callers can
//! log the units genuinely applied rather than the units requested (removing
//! 5 from a product with 3 in stock removes 3, and the log says so).

use crate::core::{
    product::StockStatus,
    store::ProductStore,
};
use tracing::debug;

/// Units added or removed when no explicit amount is given.
pub const DEFAULT_ADJUST_UNITS: u32 = 5;

/// Outcome of a single stock mutation, for logging and notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAdjustment {
    /// Id of the product that was adjusted
    pub product_id: u32,
    /// Name of the product that was adjusted
    pub product_name: String,
    /// Stock level before the adjustment
    pub old_stock: u32,
    /// Stock level after the adjustment
    pub new_stock: u32,
    /// Units actually added or removed (may be less than requested)
    pub units_applied: u32,
    /// Availability status after the adjustment
    pub status: StockStatus,
}

/// Adds units to a product's stock.
///
/// `amount` defaults to [`DEFAULT_ADJUST_UNITS`] when not given. An unknown
/// product id is a no-op and returns `None`. The addition saturates at
/// `u32::MAX` rather than overflowing.
pub fn increase(
    store: &mut ProductStore,
    product_id: u32,
    amount: Option<u32>,
) -> Option<StockAdjustment> {
    let units = amount.unwrap_or(DEFAULT_ADJUST_UNITS);
    let Some(product) = store.get_mut(product_id) else {
        debug!(product_id, "increase ignored: unknown product id");
        return None;
    };

    let old_stock = product.stock;
    product.stock = old_stock.saturating_add(units);

    Some(StockAdjustment {
        product_id,
        product_name: product.name.clone(),
        old_stock,
        new_stock: product.stock,
        units_applied: product.stock - old_stock,
        status: product.status(),
    })
}

/// Removes units from a product's stock, clamping at zero.
///
/// `amount` defaults to [`DEFAULT_ADJUST_UNITS`] when not given. An unknown
/// product id is a no-op and returns `None`. `units_applied` carries the
/// units actually removed, which is `min(amount, stock)`.
pub fn decrease(
    store: &mut ProductStore,
    product_id: u32,
    amount: Option<u32>,
) -> Option<StockAdjustment> {
    let units = amount.unwrap_or(DEFAULT_ADJUST_UNITS);
    let Some(product) = store.get_mut(product_id) else {
        debug!(product_id, "decrease ignored: unknown product id");
        return None;
    };

    let old_stock = product.stock;
    let removed = units.min(old_stock);
    product.stock = old_stock - removed;

    Some(StockAdjustment {
        product_id,
        product_name: product.name.clone(),
        old_stock,
        new_stock: product.stock,
        units_applied: removed,
        status: product.status(),
    })
}
