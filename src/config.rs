//! Shop configuration
//!
//! Everything has a default, so an empty JSON object is a valid config.

use crate::checkout::CheckoutPolicy;
use crate::error::{Error, Result};
use crate::filter::{FilterEvaluator, PriceRange};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopConfig {
    /// Full price range of the filter slider
    pub price_bounds: PriceRange,
    pub checkout: CheckoutPolicy,
    /// Items suggested per category in the design panel
    pub recommendations_per_category: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            price_bounds: PriceRange::default(),
            checkout: CheckoutPolicy::default(),
            recommendations_per_category: 2,
        }
    }
}

impl ShopConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ShopConfig = serde_json::from_str(json)
            .map_err(|e| Error::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.price_bounds.min > self.price_bounds.max {
            return Err(Error::Configuration(format!(
                "price bounds {} are inverted",
                self.price_bounds
            )));
        }
        if self.checkout.tax_rate < Decimal::ZERO || self.checkout.tax_rate > Decimal::ONE {
            return Err(Error::Configuration(format!(
                "tax rate {} outside 0..=1",
                self.checkout.tax_rate
            )));
        }
        if self.recommendations_per_category == 0 {
            return Err(Error::Configuration(
                "recommendationsPerCategory must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn filter_evaluator(&self) -> FilterEvaluator {
        FilterEvaluator::new(self.price_bounds)
    }
}
