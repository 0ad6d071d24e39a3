//! Catalog listing.

use comxstore_core::catalog::{self, CatalogQuery, CategoryFilter, SortDirection, SortField, SortSpec};
use comxstore_server::mock::seed;

use super::{CommandError, print_json};

/// Build the query from command-line arguments.
fn query(
    category: Option<&str>,
    search: &str,
    sort: Option<&str>,
    desc: bool,
) -> Result<CatalogQuery, CommandError> {
    let sort = sort
        .map(str::parse::<SortField>)
        .transpose()?
        .map(|field| SortSpec {
            field,
            direction: if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        });
    Ok(CatalogQuery {
        category: CategoryFilter::from_param(category),
        search: search.trim().to_string(),
        sort,
    })
}

/// Print the filtered, sorted catalog.
///
/// # Errors
///
/// Returns an error for an unknown sort column.
#[allow(clippy::print_stdout)]
pub fn list(
    category: Option<&str>,
    search: &str,
    sort: Option<&str>,
    desc: bool,
    json: bool,
) -> Result<(), CommandError> {
    let query = query(category, search, sort, desc)?;
    let products = seed::products();
    let categories = seed::categories();
    let rows = catalog::apply(&products, &categories, &query);
    tracing::debug!(count = rows.len(), "Catalog rows");

    if json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No products match.");
        return Ok(());
    }
    println!(
        "{:<4} {:<22} {:<14} {:>16} {:>6} {}",
        "ID", "NAME", "CATEGORY", "PRICE", "STOCK", "FEATURED"
    );
    for product in rows {
        println!(
            "{:<4} {:<22} {:<14} {:>16} {:>6} {}",
            product.id,
            product.name,
            catalog::category_label(&categories, &product.category),
            product.price().display(),
            product.stock,
            if product.featured { "yes" } else { "" }
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_desc_applies_to_sort() {
        let query = query(None, "", Some("price"), true).unwrap();
        assert_eq!(
            query.sort,
            Some(SortSpec {
                field: SortField::Price,
                direction: SortDirection::Desc,
            })
        );
    }

    #[test]
    fn test_no_sort_keeps_catalog_order() {
        let query = query(Some("all"), "  ", None, false).unwrap();
        assert_eq!(query.category, CategoryFilter::All);
        assert!(query.search.is_empty());
        assert!(query.sort.is_none());
    }

    #[test]
    fn test_unknown_sort_column() {
        assert!(matches!(
            query(None, "", Some("weight"), false),
            Err(CommandError::Parse(_))
        ));
    }
}
