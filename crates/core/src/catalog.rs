//! Catalog filter/sort engine.
//!
//! Turns the full product collection into the visible, ordered set shown on
//! the storefront grid and the admin inventory table:
//!
//! 1. keep products in the selected category (or all of them),
//! 2. keep products whose name contains the search term, ignoring case,
//! 3. stable-sort by the requested field and direction.
//!
//! An empty result is a valid outcome, not an error.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Category, Product};
use crate::types::{CategoryId, ParseError};

/// Label used when a product references a category that no longer exists.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Query-string sentinel selecting every category.
pub const ALL_CATEGORIES: &str = "all";

/// Which categories the catalog view shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    /// Parse a query-string selector. Missing, empty and `all` select everything.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") => Self::All,
            Some(s) if s.eq_ignore_ascii_case(ALL_CATEGORIES) => Self::All,
            Some(s) => Self::Only(CategoryId::new(s)),
        }
    }

    /// Whether the product belongs to the selection.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => &product.category == id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(id) => write!(f, "{id}"),
        }
    }
}

/// Sortable column of the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    /// Sorted by the category's display name, not its id.
    Category,
    Price,
    Stock,
}

impl SortField {
    /// Query-string key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::Stock => "stock",
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "price" => Ok(Self::Price),
            "stock" => Ok(Self::Stock),
            _ => Err(ParseError::new("sort field", s)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Query-string key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseError::new("sort direction", s)),
        }
    }
}

/// A sort column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on a field.
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Next sort after the user clicks a column header.
    ///
    /// Clicking the active column flips its direction; clicking any other
    /// column starts ascending.
    #[must_use]
    pub fn toggle(current: Option<Self>, field: SortField) -> Self {
        match current {
            Some(spec) if spec.field == field => Self {
                field,
                direction: spec.direction.flipped(),
            },
            _ => Self::ascending(field),
        }
    }
}

impl Default for SortSpec {
    /// The inventory table opens sorted by name, ascending.
    fn default() -> Self {
        Self::ascending(SortField::Name)
    }
}

/// Everything that shapes a catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: Option<SortSpec>,
}

/// Display name for a category id, or [`UNCATEGORIZED_LABEL`] if unknown.
#[must_use]
pub fn category_label<'a>(categories: &'a [Category], id: &CategoryId) -> &'a str {
    categories
        .iter()
        .find(|c| &c.id == id)
        .map_or(UNCATEGORIZED_LABEL, |c| c.name.as_str())
}

/// Case-insensitive substring match on the product name. Empty terms match.
#[must_use]
pub fn matches_search(product: &Product, term: &str) -> bool {
    term.is_empty() || product.name.to_lowercase().contains(&term.to_lowercase())
}

/// Keep products in the selected category, preserving input order.
#[must_use]
pub fn filter_by_category<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Stable-sort products in place. Ties keep their relative order in both
/// directions.
pub fn sort_products(products: &mut [&Product], categories: &[Category], spec: SortSpec) {
    products.sort_by(|a, b| spec.direction.apply(compare(a, b, categories, spec.field)));
}

fn compare(a: &Product, b: &Product, categories: &[Category], field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Category => {
            category_label(categories, &a.category).cmp(category_label(categories, &b.category))
        }
        SortField::Price => a.price.cmp(&b.price),
        SortField::Stock => a.stock.cmp(&b.stock),
    }
}

/// Run the full pipeline: category filter, search filter, optional sort.
#[must_use]
pub fn apply<'a>(
    products: &'a [Product],
    categories: &[Category],
    query: &CatalogQuery,
) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|p| query.category.matches(p) && matches_search(p, &query.search))
        .collect();

    if let Some(spec) = query.sort {
        sort_products(&mut visible, categories, spec);
    }

    visible
}

/// Products flagged for promotional placement.
#[must_use]
pub fn featured(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.featured).collect()
}

/// Other products in the same category, for the product-details view.
#[must_use]
pub fn related<'a>(products: &'a [Product], product: &Product) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{CurrencyCode, ProductId};

    fn product(id: &str, name: &str, category: &str, price: i64, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: CategoryId::new(category),
            price: Decimal::new(price, 0),
            currency: CurrencyCode::NGN,
            image: String::new(),
            stock,
            featured: false,
            description: String::new(),
        }
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            icon: String::new(),
            count: 0,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("p1", "V6 Cylinder Head", "1", 150_000, 12),
            product("p2", "Brembo Sport Pads", "2", 45_000, 50),
            product("p3", "Coilover Suspension", "3", 285_000, 8),
            product("p4", "Adaptive LED Kit", "4", 15_000, 100),
            product("p5", "Aerodynamic Grille", "5", 32_000, 15),
        ]
    }

    fn categories() -> Vec<Category> {
        vec![
            category("1", "Powertrain"),
            category("2", "Braking"),
            category("3", "Chassis"),
            category("4", "Illumination"),
            category("5", "Aerodynamics"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_filter_all_twice_is_identity() {
        let products = catalog();
        let once = filter_by_category(&products, &CategoryFilter::All);
        let owned: Vec<Product> = once.into_iter().cloned().collect();
        let twice = filter_by_category(&owned, &CategoryFilter::All);
        assert_eq!(ids(&twice), vec!["p1", "p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn test_filter_by_specific_category() {
        let products = catalog();
        let braking = filter_by_category(&products, &CategoryFilter::Only(CategoryId::new("2")));
        assert_eq!(ids(&braking), vec!["p2"]);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let products = catalog();
        let none = filter_by_category(&products, &CategoryFilter::Only(CategoryId::new("99")));
        assert!(none.is_empty());
    }

    #[test]
    fn test_category_filter_from_param() {
        assert_eq!(CategoryFilter::from_param(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("ALL")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_param(Some("3")),
            CategoryFilter::Only(CategoryId::new("3"))
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = catalog();
        for term in ["brembo", "BREMBO", "BrEmBo"] {
            let query = CatalogQuery {
                search: term.to_string(),
                ..CatalogQuery::default()
            };
            let found = apply(&products, &categories(), &query);
            assert_eq!(ids(&found), vec!["p2"], "term {term}");
        }
    }

    #[test]
    fn test_empty_search_matches_all() {
        let products = catalog();
        let found = apply(&products, &categories(), &CatalogQuery::default());
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn test_search_and_category_combine() {
        let products = catalog();
        let query = CatalogQuery {
            category: CategoryFilter::Only(CategoryId::new("5")),
            search: "a".to_string(),
            sort: None,
        };
        assert_eq!(ids(&apply(&products, &categories(), &query)), vec!["p5"]);
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let products = vec![
            product("a", "A", "1", 10, 5),
            product("b", "B", "1", 5, 20),
        ];
        let mut asc_query = CatalogQuery {
            sort: Some(SortSpec::ascending(SortField::Price)),
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&apply(&products, &[], &asc_query)), vec!["b", "a"]);

        asc_query.sort = Some(SortSpec {
            field: SortField::Price,
            direction: SortDirection::Desc,
        });
        assert_eq!(ids(&apply(&products, &[], &asc_query)), vec!["a", "b"]);
    }

    #[test]
    fn test_descending_is_reversed_ascending_without_ties() {
        let products = catalog();
        let cats = categories();
        for field in [SortField::Name, SortField::Category, SortField::Price, SortField::Stock] {
            let mut asc: Vec<&Product> = products.iter().collect();
            sort_products(&mut asc, &cats, SortSpec::ascending(field));
            let mut desc: Vec<&Product> = products.iter().collect();
            sort_products(
                &mut desc,
                &cats,
                SortSpec {
                    field,
                    direction: SortDirection::Desc,
                },
            );
            asc.reverse();
            assert_eq!(ids(&asc), ids(&desc), "field {field:?}");
        }
    }

    #[test]
    fn test_sort_by_category_uses_display_name() {
        let products = catalog();
        let mut sorted: Vec<&Product> = products.iter().collect();
        sort_products(&mut sorted, &categories(), SortSpec::ascending(SortField::Category));
        // Aerodynamics, Braking, Chassis, Illumination, Powertrain
        assert_eq!(ids(&sorted), vec!["p5", "p2", "p3", "p4", "p1"]);
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let products = vec![
            product("x", "Same", "1", 100, 1),
            product("y", "Same", "1", 100, 1),
            product("z", "Same", "1", 100, 1),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let mut sorted: Vec<&Product> = products.iter().collect();
            sort_products(
                &mut sorted,
                &[],
                SortSpec {
                    field: SortField::Price,
                    direction,
                },
            );
            assert_eq!(ids(&sorted), vec!["x", "y", "z"]);
        }
    }

    #[test]
    fn test_orphaned_category_uses_placeholder() {
        let cats = categories();
        assert_eq!(category_label(&cats, &CategoryId::new("42")), UNCATEGORIZED_LABEL);
        assert_eq!(category_label(&cats, &CategoryId::new("2")), "Braking");

        let products = vec![
            product("orphan", "Orphan", "42", 1, 1),
            product("p4", "LED", "4", 1, 1),
        ];
        let mut sorted: Vec<&Product> = products.iter().collect();
        sort_products(&mut sorted, &cats, SortSpec::ascending(SortField::Category));
        // "Illumination" < "Uncategorized"
        assert_eq!(ids(&sorted), vec!["p4", "orphan"]);
    }

    #[test]
    fn test_toggle_same_field_flips_direction() {
        let first = SortSpec::toggle(None, SortField::Price);
        assert_eq!(first, SortSpec::ascending(SortField::Price));

        let second = SortSpec::toggle(Some(first), SortField::Price);
        assert_eq!(second.direction, SortDirection::Desc);

        let third = SortSpec::toggle(Some(second), SortField::Price);
        assert_eq!(third.direction, SortDirection::Asc);
    }

    #[test]
    fn test_toggle_new_field_resets_to_ascending() {
        let current = SortSpec {
            field: SortField::Price,
            direction: SortDirection::Desc,
        };
        let next = SortSpec::toggle(Some(current), SortField::Stock);
        assert_eq!(next, SortSpec::ascending(SortField::Stock));
    }

    #[test]
    fn test_default_sort_is_name_ascending() {
        assert_eq!(SortSpec::default(), SortSpec::ascending(SortField::Name));
    }

    #[test]
    fn test_sort_field_and_direction_parse() {
        assert_eq!("Price".parse::<SortField>().unwrap(), SortField::Price);
        assert!("color".parse::<SortField>().is_err());
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_related_excludes_self() {
        let mut products = catalog();
        products.push(product("p6", "Turbo Manifold", "1", 90_000, 3));
        let head = products[0].clone();
        assert_eq!(ids(&related(&products, &head)), vec!["p6"]);
    }

    #[test]
    fn test_featured() {
        let mut products = catalog();
        products[1].featured = true;
        products[3].featured = true;
        assert_eq!(ids(&featured(&products)), vec!["p2", "p4"]);
    }
}
