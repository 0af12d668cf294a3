//! Product and product-line records as delivered by the remote API.
//!
//! These are explicit schemas validated at deserialization time, so the rest
//! of the crate never guards against missing fields ad hoc.

use serde::{Deserialize, Deserializer, Serialize};

use greenline_core::{DomainError, RecordId, ValueObject};

use crate::error::CatalogError;
use crate::flavor::{FlavorLabel, FlavorNamed};

/// Product-line reference carried by a product.
///
/// The API either embeds the product-line document or sends its name.
/// A `null` or absent reference is `Missing`; such products never match a
/// product line and are dropped from grouped views like any orphan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductLineRef {
    Embedded(EmbeddedProductLine),
    Name(String),
    #[default]
    Missing,
}

impl ProductLineRef {
    /// Name used as the grouping key.
    pub fn name(&self) -> Option<&str> {
        match self {
            ProductLineRef::Embedded(line) => Some(&line.name),
            ProductLineRef::Name(name) => Some(name),
            ProductLineRef::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ProductLineRef::Missing)
    }
}

impl From<&str> for ProductLineRef {
    fn from(value: &str) -> Self {
        ProductLineRef::Name(value.to_string())
    }
}

/// Embedded product-line document (only the name matters here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedProductLine {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
}

/// Catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "ProductLineRef::is_missing")]
    pub product_line: ProductLineRef,
    /// Flavor/variant label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_product_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_name: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, product_line: impl Into<ProductLineRef>) -> Self {
        Self {
            id: None,
            name: name.into(),
            product_line: product_line.into(),
            sub_product_line: None,
            flavor_name: None,
        }
    }

    pub fn with_sub_product_line(mut self, label: impl Into<String>) -> Self {
        self.sub_product_line = Some(label.into());
        self
    }

    pub fn with_flavor_name(mut self, flavor: impl Into<String>) -> Self {
        self.flavor_name = Some(flavor.into());
        self
    }

    pub fn line_name(&self) -> Option<&str> {
        self.product_line.name()
    }
}

impl FlavorLabel for Product {
    fn flavor_label(&self) -> Option<&str> {
        self.sub_product_line.as_deref()
    }
}

impl FlavorNamed for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn flavor_name(&self) -> Option<&str> {
        self.flavor_name.as_deref()
    }
}

/// Pricing inputs a product line asks for.
///
/// Tagged by `type` on the wire. Unknown tags are rejected at parse time
/// instead of producing an empty field list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PricingStructure {
    #[default]
    Simple,
    #[serde(rename_all = "camelCase")]
    MultiType {
        #[serde(default)]
        type_labels: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Variants {
        #[serde(default)]
        variant_labels: Vec<String>,
    },
}

/// Form field descriptor (custom product-line fields and derived pricing fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            placeholder: placeholder.into(),
        }
    }
}

impl ValueObject for FieldDescriptor {}

/// Product line (catalog category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    /// Rendering position; not required to be contiguous or unique.
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_order: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pricing_structure: PricingStructure,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// `_id` values are informational here: blank or non-string ids become `None`.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|id| RecordId::new(id).ok()))
}

/// `null` falls back to the same default as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductLine {
    pub fn new(name: impl Into<String>, display_order: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            display_order,
            pricing_structure: PricingStructure::default(),
            fields: Vec::new(),
            active: true,
        }
    }

    pub fn with_pricing(mut self, pricing: PricingStructure) -> Self {
        self.pricing_structure = pricing;
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDescriptor>) -> Self {
        self.fields = fields;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Keep only the product lines that should be rendered.
pub fn active_lines(lines: &[ProductLine]) -> Vec<ProductLine> {
    lines.iter().filter(|l| l.active).cloned().collect()
}

/// Parse the API's product-line list.
pub fn parse_product_lines(json: &str) -> Result<Vec<ProductLine>, CatalogError> {
    let lines: Vec<ProductLine> =
        serde_json::from_str(json).map_err(|e| CatalogError::payload("product line", e))?;

    if let Some(blank) = lines.iter().position(|l| l.name.trim().is_empty()) {
        return Err(
            DomainError::validation(format!("product line #{blank} has an empty name")).into(),
        );
    }

    Ok(lines)
}

/// Parse the API's flat product list.
pub fn parse_products(json: &str) -> Result<Vec<Product>, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::payload("product", e))
}
