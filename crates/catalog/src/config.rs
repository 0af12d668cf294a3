//! Catalog configuration.

use serde::{Deserialize, Serialize};

use greenline_core::DomainError;

use crate::error::CatalogError;
use crate::flavor::FlavorOrder;

/// Tunables for catalog rendering.
///
/// The default carries the built-in Cannacrispy flavor table. Deployments can
/// replace it with a JSON document of the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default = "default_flavor_orders")]
    pub flavor_orders: Vec<FlavorOrder>,
}

fn default_flavor_orders() -> Vec<FlavorOrder> {
    vec![FlavorOrder::cannacrispy()]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            flavor_orders: default_flavor_orders(),
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig =
            serde_json::from_str(json).map_err(|e| CatalogError::payload("catalog config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// At most one flavor table per product line.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (i, order) in self.flavor_orders.iter().enumerate() {
            let line = order.product_line();
            if self.flavor_orders[..i].iter().any(|o| o.applies_to(line)) {
                return Err(DomainError::validation(format!(
                    "more than one flavor order for '{line}'"
                )));
            }
        }
        Ok(())
    }

    pub fn flavor_order_for(&self, line: &str) -> Option<&FlavorOrder> {
        self.flavor_orders.iter().find(|o| o.applies_to(line))
    }
}
