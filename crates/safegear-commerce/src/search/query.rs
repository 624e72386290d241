//! Search query over an in-memory product list.

use crate::catalog::Product;
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Keep the catalog's own ordering.
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by newest first.
    Newest,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::Newest => "Newest",
        }
    }
}

/// A search query: filters applied conjunctively, then a sort.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    /// Filters to apply; a product must pass all of them.
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
}

impl SearchQuery {
    /// Create an empty query matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text filter.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.is_empty() {
            self.filters.push(Filter::Text(query));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query over a product list, returning matching references
    /// in sorted order.
    pub fn run<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut results: Vec<&Product> = products
            .iter()
            .filter(|p| self.filters.iter().all(|f| f.matches(p)))
            .collect();

        match self.sort {
            SortOption::Relevance => {}
            SortOption::PriceAsc => {
                results.sort_by_key(|p| p.price.amount_cents);
            }
            SortOption::PriceDesc => {
                results.sort_by_key(|p| std::cmp::Reverse(p.price.amount_cents));
            }
            SortOption::NameAsc => {
                results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            SortOption::Newest => {
                results.sort_by_key(|p| std::cmp::Reverse(p.created_at));
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;
    use crate::money::{Currency, Money};

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(
                "HH-01",
                "Hard Hat",
                "hard-hat",
                Money::new(85000, Currency::KES),
            )
            .with_category(CategoryId::new("head"), "Head Protection")
            .with_stock(40),
            Product::new(
                "BT-02",
                "Steel-Toe Boots",
                "steel-toe-boots",
                Money::new(450000, Currency::KES),
            )
            .with_category(CategoryId::new("footwear"), "Footwear")
            .with_stock(8),
            Product::new(
                "GL-04",
                "Nitrile Gloves",
                "nitrile-gloves",
                Money::new(20000, Currency::KES),
            )
            .with_category(CategoryId::new("hands"), "Hand Protection")
            .with_stock(0),
        ]
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let products = catalog();
        let results = SearchQuery::new().run(&products);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let products = catalog();
        let results = SearchQuery::new()
            .with_query("glove")
            .with_filter(Filter::in_stock())
            .run(&products);
        // Gloves match the text but are out of stock
        assert!(results.is_empty());
    }

    #[test]
    fn test_sort_by_price() {
        let products = catalog();
        let results = SearchQuery::new()
            .with_sort(SortOption::PriceAsc)
            .run(&products);

        let skus: Vec<&str> = results.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["GL-04", "HH-01", "BT-02"]);
    }

    #[test]
    fn test_sort_by_name() {
        let products = catalog();
        let results = SearchQuery::new()
            .with_sort(SortOption::NameAsc)
            .run(&products);

        assert_eq!(results[0].sku, "HH-01");
        assert_eq!(results[1].sku, "GL-04");
        assert_eq!(results[2].sku, "BT-02");
    }

    #[test]
    fn test_relevance_keeps_input_order() {
        let products = catalog();
        let results = SearchQuery::new().with_filter(Filter::in_stock()).run(&products);

        let skus: Vec<&str> = results.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["HH-01", "BT-02"]);
    }
}
