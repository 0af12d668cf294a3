//! Manual flavor ordering.
//!
//! Some product lines follow an external SKU numbering scheme, so their items
//! are listed in a fixed flavor order instead of alphabetically. Labels the
//! table does not know sort after every known one and keep their relative
//! input order.

use serde::{Deserialize, Serialize};

use greenline_core::{DomainError, DomainResult, ValueObject};

/// Product line that ships with a manual flavor order.
pub const CANNACRISPY: &str = "Cannacrispy";

/// Sort key of an unranked label. Every flavor table is shorter than this.
pub const UNRANKED: usize = 999;

const CANNACRISPY_FLAVORS: [&str; 6] = [
    "Original",
    "Chocolate",
    "Peanut Butter",
    "Fruity Pebbles",
    "Cookies & Cream",
    "Strawberry",
];

/// Position of a label in a flavor table. Lower sorts earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Known(usize),
    Unranked,
}

impl Rank {
    pub fn sort_key(self) -> usize {
        match self {
            Rank::Known(index) => index,
            Rank::Unranked => UNRANKED,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Rank::Known(_))
    }
}

/// Item carrying a direct flavor/variant label.
pub trait FlavorLabel {
    fn flavor_label(&self) -> Option<&str>;
}

/// Item whose flavor may only be embedded in its free-text name.
pub trait FlavorNamed {
    fn name(&self) -> &str;

    /// Explicit flavor attribute, preferred over name matching when present.
    fn flavor_name(&self) -> Option<&str> {
        None
    }
}

/// Ordered canonical flavor names for exactly one product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFlavorOrder")]
pub struct FlavorOrder {
    product_line: String,
    flavors: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFlavorOrder {
    product_line: String,
    flavors: Vec<String>,
}

impl TryFrom<RawFlavorOrder> for FlavorOrder {
    type Error = DomainError;

    fn try_from(raw: RawFlavorOrder) -> Result<Self, Self::Error> {
        FlavorOrder::new(raw.product_line, raw.flavors)
    }
}

impl ValueObject for FlavorOrder {}

impl Default for FlavorOrder {
    fn default() -> Self {
        Self::cannacrispy()
    }
}

impl FlavorOrder {
    /// Build a validated flavor table.
    ///
    /// Flavor names must be non-blank and unique, and the table must stay
    /// shorter than [`UNRANKED`].
    pub fn new(
        product_line: impl Into<String>,
        flavors: impl IntoIterator<Item = impl Into<String>>,
    ) -> DomainResult<Self> {
        let product_line = product_line.into();
        if product_line.trim().is_empty() {
            return Err(DomainError::validation("flavor order needs a product line"));
        }

        let flavors: Vec<String> = flavors.into_iter().map(Into::into).collect();
        if flavors.len() >= UNRANKED {
            return Err(DomainError::validation(format!(
                "flavor order for '{product_line}' has {} entries (max {})",
                flavors.len(),
                UNRANKED - 1
            )));
        }

        for (i, flavor) in flavors.iter().enumerate() {
            if flavor.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "flavor #{i} of '{product_line}' is empty"
                )));
            }
            if flavors[..i].contains(flavor) {
                return Err(DomainError::validation(format!(
                    "flavor '{flavor}' is listed twice for '{product_line}'"
                )));
            }
        }

        Ok(Self {
            product_line,
            flavors,
        })
    }

    /// The built-in Cannacrispy table.
    pub fn cannacrispy() -> Self {
        Self {
            product_line: CANNACRISPY.to_string(),
            flavors: CANNACRISPY_FLAVORS.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn product_line(&self) -> &str {
        &self.product_line
    }

    pub fn flavors(&self) -> &[String] {
        &self.flavors
    }

    /// Whether this table applies to `line` (exact, case-sensitive).
    pub fn applies_to(&self, line: &str) -> bool {
        self.product_line == line
    }

    /// Rank of a label: its index on an exact, case-sensitive match.
    pub fn rank_of(&self, label: Option<&str>) -> Rank {
        label
            .and_then(|label| self.flavors.iter().position(|f| f == label))
            .map_or(Rank::Unranked, Rank::Known)
    }

    /// First canonical flavor (in table order) contained in `name`, ignoring case.
    pub fn flavor_in_name(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.flavors
            .iter()
            .find(|f| name.contains(&f.to_lowercase()))
            .map(String::as_str)
    }

    /// Stable sort by the items' direct flavor label. The input is not touched.
    pub fn sort_by_flavor<T>(&self, items: &[T]) -> Vec<T>
    where
        T: FlavorLabel + Clone,
    {
        self.sorted_by(items, |item| self.rank_of(item.flavor_label()))
    }

    /// Stable sort resolving each label from `flavor_name`, then from the name.
    pub fn sort_by_flavor_name<T>(&self, items: &[T]) -> Vec<T>
    where
        T: FlavorNamed + Clone,
    {
        self.sorted_by(items, |item| {
            let label = item
                .flavor_name()
                .or_else(|| self.flavor_in_name(item.name()));
            self.rank_of(label)
        })
    }

    fn sorted_by<T, F>(&self, items: &[T], rank: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T) -> Rank,
    {
        let mut ranked: Vec<(Rank, &T)> = items.iter().map(|item| (rank(item), item)).collect();
        // `sort_by_key` is stable: equal ranks keep input order.
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked.into_iter().map(|(_, item)| item.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        name: &'static str,
        label: Option<&'static str>,
        flavor: Option<&'static str>,
    }

    fn labelled(name: &'static str, label: Option<&'static str>) -> Item {
        Item {
            name,
            label,
            flavor: None,
        }
    }

    impl FlavorLabel for Item {
        fn flavor_label(&self) -> Option<&str> {
            self.label
        }
    }

    impl FlavorNamed for Item {
        fn name(&self) -> &str {
            self.name
        }

        fn flavor_name(&self) -> Option<&str> {
            self.flavor
        }
    }

    fn names(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.name).collect()
    }

    #[test]
    fn rank_of_known_label_is_its_index() {
        let order = FlavorOrder::cannacrispy();
        assert_eq!(order.rank_of(Some("Original")), Rank::Known(0));
        assert_eq!(order.rank_of(Some("Strawberry")), Rank::Known(5));
    }

    #[test]
    fn rank_of_unknown_or_missing_label_is_unranked() {
        let order = FlavorOrder::cannacrispy();
        assert_eq!(order.rank_of(None), Rank::Unranked);
        assert_eq!(order.rank_of(Some("Mango")), Rank::Unranked);
        // Exact match only.
        assert_eq!(order.rank_of(Some("original")), Rank::Unranked);
        assert_eq!(order.rank_of(Some("Mango")).sort_key(), UNRANKED);
    }

    #[test]
    fn unranked_sorts_after_every_known_rank() {
        let order = FlavorOrder::cannacrispy();
        let last = Rank::Known(order.flavors().len() - 1);
        assert!(last < Rank::Unranked);
        assert!(last.sort_key() < Rank::Unranked.sort_key());
        assert!(!Rank::Unranked.is_known());
    }

    #[test]
    fn sort_by_flavor_keeps_unmatched_items_in_input_order() {
        let order = FlavorOrder::cannacrispy();
        let items = vec![
            labelled("A", None),
            labelled("B", Some("Mango")),
            labelled("C", Some("Original")),
        ];

        let sorted = order.sort_by_flavor(&items);
        assert_eq!(names(&sorted), vec!["C", "A", "B"]);
        // Input untouched.
        assert_eq!(names(&items), vec!["A", "B", "C"]);
    }

    #[test]
    fn sort_by_flavor_orders_by_table_position() {
        let order = FlavorOrder::cannacrispy();
        let items = vec![
            labelled("S", Some("Strawberry")),
            labelled("X", Some("Unknown")),
            labelled("C", Some("Chocolate")),
            labelled("O", Some("Original")),
        ];

        assert_eq!(names(&order.sort_by_flavor(&items)), vec!["O", "C", "S", "X"]);
    }

    #[test]
    fn sort_by_flavor_name_prefers_explicit_flavor() {
        let order = FlavorOrder::cannacrispy();
        let items = vec![
            Item {
                name: "Cannacrispy Original 100mg",
                label: None,
                flavor: Some("Strawberry"),
            },
            Item {
                name: "Cannacrispy Chocolate 100mg",
                label: None,
                flavor: None,
            },
        ];

        let sorted = order.sort_by_flavor_name(&items);
        assert_eq!(
            names(&sorted),
            vec!["Cannacrispy Chocolate 100mg", "Cannacrispy Original 100mg"]
        );
    }

    #[test]
    fn unknown_explicit_flavor_does_not_fall_back_to_name() {
        let order = FlavorOrder::cannacrispy();
        let items = vec![
            Item {
                name: "Cannacrispy Original Mango",
                label: None,
                flavor: Some("Mango"),
            },
            labelled("Cannacrispy Strawberry", None),
        ];

        let sorted = order.sort_by_flavor_name(&items);
        assert_eq!(
            names(&sorted),
            vec!["Cannacrispy Strawberry", "Cannacrispy Original Mango"]
        );
    }

    #[test]
    fn sort_by_flavor_name_matches_name_case_insensitively() {
        let order = FlavorOrder::cannacrispy();
        let items = vec![
            labelled("mystery bar", None),
            labelled("STRAWBERRY crisp", None),
            labelled("cookies & cream crisp", None),
            labelled("peanut butter crisp", None),
        ];

        let sorted = order.sort_by_flavor_name(&items);
        assert_eq!(
            names(&sorted),
            vec![
                "peanut butter crisp",
                "cookies & cream crisp",
                "STRAWBERRY crisp",
                "mystery bar",
            ]
        );
    }

    #[test]
    fn flavor_in_name_takes_first_table_entry() {
        let order = FlavorOrder::new("Bars", ["Chocolate", "Chocolate Mint"]).unwrap();
        assert_eq!(order.flavor_in_name("Chocolate Mint Bar"), Some("Chocolate"));
        assert_eq!(order.flavor_in_name("Vanilla Bar"), None);
    }

    #[test]
    fn new_rejects_invalid_tables() {
        assert!(matches!(
            FlavorOrder::new("", ["Original"]),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            FlavorOrder::new("Bars", ["Original", " "]),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            FlavorOrder::new("Bars", ["Original", "Original"]),
            Err(DomainError::Validation(_))
        ));

        let too_many: Vec<String> = (0..UNRANKED).map(|i| format!("flavor-{i}")).collect();
        assert!(matches!(
            FlavorOrder::new("Bars", too_many),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn flavor_order_deserializes_through_validation() {
        let order: FlavorOrder = serde_json::from_str(
            r#"{"productLine": "Bars", "flavors": ["Mint", "Lime"]}"#,
        )
        .unwrap();
        assert_eq!(order.product_line(), "Bars");
        assert_eq!(order.rank_of(Some("Lime")), Rank::Known(1));

        let dup = serde_json::from_str::<FlavorOrder>(
            r#"{"productLine": "Bars", "flavors": ["Mint", "Mint"]}"#,
        );
        assert!(dup.is_err());
    }

    #[test]
    fn applies_to_is_case_sensitive() {
        let order = FlavorOrder::default();
        assert!(order.applies_to("Cannacrispy"));
        assert!(!order.applies_to("cannacrispy"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn label_strategy() -> impl Strategy<Value = Option<&'static str>> {
            prop::option::of(prop::sample::select(vec![
                "Original",
                "Chocolate",
                "Peanut Butter",
                "Fruity Pebbles",
                "Cookies & Cream",
                "Strawberry",
                "Mango",
                "Blue Razz",
            ]))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: sorting twice equals sorting once.
            #[test]
            fn sort_by_flavor_is_idempotent(
                labels in prop::collection::vec(label_strategy(), 0..20),
            ) {
                let order = FlavorOrder::cannacrispy();
                let items: Vec<Item> = labels.into_iter().map(|l| labelled("x", l)).collect();

                let once = order.sort_by_flavor(&items);
                let twice = order.sort_by_flavor(&once);
                prop_assert_eq!(once, twice);
            }

            /// Property: ranks are non-decreasing and equal ranks keep input order.
            #[test]
            fn sort_by_flavor_is_stable(labels in prop::collection::vec(label_strategy(), 0..20)) {
                let order = FlavorOrder::cannacrispy();
                let items: Vec<(usize, Option<&'static str>)> =
                    labels.into_iter().enumerate().collect();

                #[derive(Clone)]
                struct Tagged(usize, Option<&'static str>);
                impl FlavorLabel for Tagged {
                    fn flavor_label(&self) -> Option<&str> {
                        self.1
                    }
                }

                let tagged: Vec<Tagged> = items.iter().map(|(i, l)| Tagged(*i, *l)).collect();
                let sorted = order.sort_by_flavor(&tagged);
                prop_assert_eq!(sorted.len(), tagged.len());

                for pair in sorted.windows(2) {
                    let (a, b) = (order.rank_of(pair[0].1), order.rank_of(pair[1].1));
                    prop_assert!(a <= b);
                    if a == b {
                        prop_assert!(pair[0].0 < pair[1].0);
                    }
                }
            }
        }
    }
}
