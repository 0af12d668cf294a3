//! Grouping a flat product list into the rendered catalog.

use std::collections::HashMap;

use crate::config::CatalogConfig;
use crate::flavor::FlavorOrder;
use crate::product::{Product, ProductLine};
use crate::sequence::{sequence, Sequenced};

/// Products per product line, in display order.
///
/// Every product line passed to [`group`] is a key, even without products.
pub type GroupedCatalog = Sequenced<Vec<Product>>;

/// Group `products` by product line using the default configuration.
pub fn group(products: &[Product], lines: &[ProductLine]) -> GroupedCatalog {
    group_with(products, lines, &CatalogConfig::default())
}

/// Group `products` by product line.
///
/// Products keep their input order within a line, except on lines with a
/// configured flavor order, which are stable-sorted by flavor. Products whose
/// line is not in `lines`, or who carry no product line at all, are dropped
/// from the result.
pub fn group_with(
    products: &[Product],
    lines: &[ProductLine],
    config: &CatalogConfig,
) -> GroupedCatalog {
    let mut buckets: HashMap<String, Vec<Product>> = HashMap::new();
    let mut unassigned = 0usize;
    for product in products {
        let Some(line) = product.line_name() else {
            unassigned += 1;
            continue;
        };
        buckets
            .entry(line.to_string())
            .or_default()
            .push(product.clone());
    }
    if unassigned > 0 {
        tracing::debug!(unassigned, "dropping products without a product line");
    }

    for order in &config.flavor_orders {
        apply_flavor_order(&mut buckets, order);
    }

    let catalog = sequence(buckets, lines);
    tracing::debug!(
        products = products.len(),
        lines = catalog.len(),
        "grouped catalog"
    );
    catalog
}

fn apply_flavor_order(buckets: &mut HashMap<String, Vec<Product>>, order: &FlavorOrder) {
    if let Some(bucket) = buckets.get_mut(order.product_line()) {
        let sorted = order.sort_by_flavor(bucket);
        *bucket = sorted;
    }
}
