//! Product catalog loading from config.toml
//!
//! This module loads the product catalog that seeds the in-memory store at
//! startup. A catalog file is optional: when none is present, a built-in
//! default catalog (and seller list) is used, so the dashboard always starts
//! with something to show.

use crate::{
    core::product::Product,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Products seeded into the store at startup
    pub products: Vec<Product>,
    /// Seller names shown by the sellers listing
    #[serde(default)]
    pub sellers: Vec<String>,
}

/// Loads the catalog configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Validates a loaded catalog before it seeds the store.
///
/// # Errors
/// Returns an error if the catalog is empty, a product id appears twice, or
/// a product has a blank name or SKU. Ids must be unique for the whole
/// session since every lookup and mutation is keyed on them.
pub fn validate(config: &Config) -> Result<()> {
    if config.products.is_empty() {
        return Err(Error::Catalog {
            message: "Catalog contains no products".to_string(),
        });
    }

    let mut seen_ids = std::collections::HashSet::new();
    for product in &config.products {
        if !seen_ids.insert(product.id) {
            return Err(Error::Catalog {
                message: format!("Duplicate product id: {}", product.id),
            });
        }
        if product.name.trim().is_empty() {
            return Err(Error::Catalog {
                message: format!("Product {} has an empty name", product.id),
            });
        }
        if product.sku.trim().is_empty() {
            return Err(Error::Catalog {
                message: format!("Product {} has an empty SKU", product.id),
            });
        }
    }

    Ok(())
}

/// Loads and validates the catalog file at `path`, falling back to the
/// built-in catalog when the file does not exist.
///
/// # Errors
/// Returns an error if a file is present but unreadable, unparsable, or
/// fails validation. A missing file is not an error.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        let config = load_config(path)?;
        validate(&config)?;
        info!(path = %path.display(), products = config.products.len(), "Loaded catalog file.");
        Ok(config)
    } else {
        info!(path = %path.display(), "No catalog file found, using built-in catalog.");
        Ok(Config {
            products: default_catalog(),
            sellers: default_sellers(),
        })
    }
}

/// The built-in six-product catalog. Prices are in paise.
#[must_use]
pub fn default_catalog() -> Vec<Product> {
    let entries: [(u32, &str, &str, u32, u32); 6] = [
        (1, "Blue T-shirt", "BT-001", 29_900, 24),
        (2, "Wireless Mouse", "MOU-203", 89_900, 6),
        (3, "Ceramic Mug", "MUG-12", 19_900, 120),
        (4, "Phone Charger", "CHG-04", 39_900, 0),
        (5, "Spiral Notebook", "NB-99", 6_900, 420),
        (6, "Wireless Earbuds", "EB-66", 159_900, 14),
    ];

    entries
        .into_iter()
        .map(|(id, name, sku, price, stock)| Product {
            id,
            name: name.to_string(),
            sku: sku.to_string(),
            price,
            stock,
        })
        .collect()
}

/// The built-in seller list used when the catalog file provides none.
#[must_use]
pub fn default_sellers() -> Vec<String> {
    ["Vikash", "Rahul", "Anu"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
