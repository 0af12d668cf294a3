//! Form fields for a product line's product editor.

use crate::product::{FieldDescriptor, PricingStructure, ProductLine};

/// Fields shown when editing a product of `line`.
///
/// The line's own custom fields come first, verbatim, followed by the pricing
/// inputs its [`PricingStructure`] asks for. No line selected means no fields.
pub fn build_fields(line: Option<&ProductLine>) -> Vec<FieldDescriptor> {
    let Some(line) = line else {
        return Vec::new();
    };

    let mut fields = line.fields.clone();
    fields.extend(pricing_fields(&line.pricing_structure));
    fields
}

fn pricing_fields(pricing: &PricingStructure) -> Vec<FieldDescriptor> {
    match pricing {
        PricingStructure::Simple => vec![
            FieldDescriptor::new("price", "Price", "e.g. 25.00"),
            FieldDescriptor::new("discountPrice", "Discount Price", "e.g. 20.00"),
            FieldDescriptor::new("priceDescription", "Price Description", "e.g. per case of 12"),
            FieldDescriptor::new("discountDescription", "Discount Description", "e.g. 10+ cases"),
        ],
        PricingStructure::MultiType { type_labels } => type_labels
            .iter()
            .flat_map(|label| {
                let title = title_case(label);
                [
                    FieldDescriptor::new(
                        format!("{label}Units"),
                        format!("{title} Units"),
                        format!("Units of {label}"),
                    ),
                    FieldDescriptor::new(
                        format!("{label}Discount"),
                        format!("{title} Discount"),
                        format!("Discount on {label}"),
                    ),
                ]
            })
            .collect(),
        PricingStructure::Variants { variant_labels } => variant_labels
            .iter()
            .flat_map(|label| {
                let token = variant_token(label);
                [
                    FieldDescriptor::new(
                        format!("p{token}"),
                        format!("{label} Price"),
                        format!("Price for {label}"),
                    ),
                    FieldDescriptor::new(
                        format!("dp{token}"),
                        format!("{label} Discount Price"),
                        format!("Discount price for {label}"),
                    ),
                ]
            })
            .collect(),
    }
}

/// "100 Mg" -> "100mg"
fn variant_token(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn title_case(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
