//! View synchronization - brings every dashboard surface back into agreement
//! with store state.
//!
//! The core never renders anything itself; it pushes structured values
//! through the [`DashboardSurfaces`] trait and lets the frontend decide how
//! to draw them. A full pass recomputes every stock-dependent display from
//! scratch, so it is idempotent: running it twice with unchanged state
//! produces identical output. The pass is always invoked explicitly after a
//! mutation, never implicitly by the store.

use crate::core::{
    activity::{ActivityEntry, ActivityLog},
    product::Product,
    report::{self, InventorySummary},
    store::ProductStore,
};

/// Render boundary between the core and a display frontend.
///
/// Implementations write each pushed value to whatever display surface backs
/// it: terminal panels in the shell, recorded frames in tests.
pub trait DashboardSurfaces {
    /// Renders the product cards, one per product, including status badges.
    fn show_products(&mut self, products: &[Product]);

    /// Renders the summary totals (product count, low-stock count, value).
    fn show_summary(&mut self, summary: &InventorySummary);

    /// Renders the low-stock alert panel rows.
    fn show_low_stock(&mut self, products: &[Product]);

    /// Renders the activity panel entries, most recent first.
    fn show_activity(&mut self, entries: &[ActivityEntry]);

    /// Shows an ephemeral one-line notice; carries no state.
    fn notify(&mut self, message: &str);
}

/// Recomputes every stock-dependent display and pushes it to the surfaces.
pub fn refresh_all(
    store: &ProductStore,
    activity: &ActivityLog,
    surfaces: &mut impl DashboardSurfaces,
) {
    surfaces.show_products(store.all());
    surfaces.show_summary(&report::summarize(store.all()));
    surfaces.show_low_stock(&report::low_stock_alerts(store.all()));
    surfaces.show_activity(activity.recent());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RecordingSurfaces, sample_store};

    #[test]
    fn test_refresh_pushes_every_surface_once() {
        let store = sample_store();
        let mut activity = ActivityLog::new();
        activity.record("something happened");
        let mut surfaces = RecordingSurfaces::default();

        refresh_all(&store, &activity, &mut surfaces);

        assert_eq!(surfaces.product_frames.len(), 1);
        assert_eq!(surfaces.summaries.len(), 1);
        assert_eq!(surfaces.low_stock_frames.len(), 1);
        assert_eq!(surfaces.activity_frames.len(), 1);
        assert!(surfaces.notices.is_empty());
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let store = sample_store();
        let activity = ActivityLog::new();
        let mut surfaces = RecordingSurfaces::default();

        refresh_all(&store, &activity, &mut surfaces);
        refresh_all(&store, &activity, &mut surfaces);

        assert_eq!(surfaces.product_frames[0], surfaces.product_frames[1]);
        assert_eq!(surfaces.summaries[0], surfaces.summaries[1]);
        assert_eq!(surfaces.low_stock_frames[0], surfaces.low_stock_frames[1]);
        assert_eq!(surfaces.activity_frames[0], surfaces.activity_frames[1]);
    }

    #[test]
    fn test_refresh_reflects_current_store_state() {
        let mut store = sample_store();
        let activity = ActivityLog::new();
        let mut surfaces = RecordingSurfaces::default();

        refresh_all(&store, &activity, &mut surfaces);
        let _ = crate::core::stock::decrease(&mut store, 2, Some(6));
        refresh_all(&store, &activity, &mut surfaces);

        let first = &surfaces.summaries[0];
        let second = &surfaces.summaries[1];
        assert_eq!(
            second.inventory_value,
            first.inventory_value - u64::from(store.get(2).map_or(0, |p| p.price)) * 6
        );
    }
}
