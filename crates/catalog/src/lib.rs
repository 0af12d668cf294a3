//! Catalog domain module.
//!
//! Deterministic logic behind the catalog views: grouping products by product
//! line, ordering product lines for display, manual flavor ordering and form
//! field derivation. No IO, no HTTP, no storage.

pub mod config;
pub mod error;
pub mod fields;
pub mod flavor;
pub mod grouping;
pub mod product;
pub mod sequence;

pub use config::CatalogConfig;
pub use error::CatalogError;
pub use fields::build_fields;
pub use flavor::{FlavorLabel, FlavorNamed, FlavorOrder, Rank, CANNACRISPY, UNRANKED};
pub use grouping::{group, group_with, GroupedCatalog};
pub use product::{
    active_lines, parse_product_lines, parse_products, EmbeddedProductLine, FieldDescriptor,
    PricingStructure, Product, ProductLine, ProductLineRef,
};
pub use sequence::{sequence, Sequenced};
