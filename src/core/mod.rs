/// Activity log - timestamped, most-recent-first record of dashboard actions
pub mod activity;
/// Dashboard controller - owns the store, log, and render surfaces
pub mod dashboard;
/// Product record and stock status derivation
pub mod product;
/// Reporting - summary totals, low-stock alerts, currency formatting
pub mod report;
/// Search - case-insensitive catalog filtering
pub mod search;
/// Stock mutation - bounded increase and decrease operations
pub mod stock;
/// Product store - owned catalog plus the opening-stock snapshot
pub mod store;
/// View synchronization - pushes store state into every dashboard surface
pub mod sync;
