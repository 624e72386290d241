//! Search filter types.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A predicate over catalog products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by category.
    Category(CategoryId),
    /// Full-text match against name, SKU, and description.
    Text(String),
    /// Only show in-stock items.
    InStock,
    /// Filter by price range (inclusive bounds).
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Filter by certification label (e.g., "EN 397").
    Certification(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a text filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a certification filter.
    pub fn certification(label: impl Into<String>) -> Self {
        Filter::Certification(label.into())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(id) => &product.category_id == id,
            Filter::Text(query) => {
                let query = query.to_lowercase();
                product.name.to_lowercase().contains(&query)
                    || product.sku.to_lowercase().contains(&query)
                    || product
                        .description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(&query))
                        .unwrap_or(false)
            }
            Filter::InStock => product.in_stock,
            Filter::PriceRange { min, max } => {
                if let Some(min) = min {
                    if product.price.currency != min.currency
                        || product.price.amount_cents < min.amount_cents
                    {
                        return false;
                    }
                }
                if let Some(max) = max {
                    if product.price.currency != max.currency
                        || product.price.amount_cents > max.amount_cents
                    {
                        return false;
                    }
                }
                true
            }
            Filter::Certification(label) => product
                .certifications
                .iter()
                .any(|c| c.eq_ignore_ascii_case(label)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn hard_hat() -> Product {
        Product::new(
            "HH-01",
            "SafeGear Hard Hat",
            "safegear-hard-hat",
            Money::new(85000, Currency::KES),
        )
        .with_category(CategoryId::new("head"), "Head Protection")
        .with_certification("EN 397")
        .with_stock(40)
    }

    #[test]
    fn test_text_filter() {
        let product = hard_hat().with_description("Vented shell for site work");
        assert!(Filter::text("hard hat").matches(&product));
        assert!(Filter::text("HH-01").matches(&product));
        assert!(Filter::text("vented").matches(&product));
        assert!(!Filter::text("respirator").matches(&product));
    }

    #[test]
    fn test_category_filter() {
        let product = hard_hat();
        assert!(Filter::category("head").matches(&product));
        assert!(!Filter::category("footwear").matches(&product));
    }

    #[test]
    fn test_in_stock_filter() {
        let product = hard_hat();
        assert!(Filter::in_stock().matches(&product));

        let sold_out = hard_hat().with_stock(0);
        assert!(!Filter::in_stock().matches(&sold_out));
    }

    #[test]
    fn test_price_range_filter() {
        let product = hard_hat(); // KSh 850.00

        let in_range = Filter::price_range(
            Some(Money::new(50000, Currency::KES)),
            Some(Money::new(100000, Currency::KES)),
        );
        assert!(in_range.matches(&product));

        let too_low = Filter::price_range(Some(Money::new(100000, Currency::KES)), None);
        assert!(!too_low.matches(&product));
    }

    #[test]
    fn test_certification_filter() {
        let product = hard_hat();
        assert!(Filter::certification("en 397").matches(&product));
        assert!(!Filter::certification("ANSI Z87.1").matches(&product));
    }
}
