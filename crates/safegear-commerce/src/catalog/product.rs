//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product in the PPE catalog.
///
/// Carries everything the storefront shows on a product card: pricing,
/// certification labels (e.g. "EN 397", "ANSI Z87.1"), a free-form spec
/// map (material/size/color), and a stock snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Category display name (denormalized for listings).
    pub category: String,
    /// Full description.
    pub description: Option<String>,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Safety certification labels.
    pub certifications: Vec<String>,
    /// Free-form specification map (material, size, color, ...).
    pub specs: BTreeMap<String, String>,
    /// Current selling price.
    pub price: Money,
    /// Previous price, shown struck through when discounted.
    pub old_price: Option<Money>,
    /// Whether the product is currently purchasable.
    pub in_stock: bool,
    /// Units on hand.
    pub stock_count: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::generate(),
            sku: sku.into(),
            name: name.into(),
            slug: slug.into(),
            category_id: CategoryId::new("uncategorized"),
            category: "Uncategorized".to_string(),
            description: None,
            image_url: None,
            certifications: Vec::new(),
            specs: BTreeMap::new(),
            price,
            old_price: None,
            in_stock: true,
            stock_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Assign the product to a category.
    pub fn with_category(mut self, id: CategoryId, name: impl Into<String>) -> Self {
        self.category_id = id;
        self.category = name.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the primary image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Add a certification label.
    pub fn with_certification(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !self.certifications.contains(&label) {
            self.certifications.push(label);
        }
        self
    }

    /// Add a spec entry (e.g. "material" -> "HDPE").
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specs.insert(key.into(), value.into());
        self
    }

    /// Set the compare-at price shown struck through.
    pub fn with_old_price(mut self, old_price: Money) -> Self {
        self.old_price = Some(old_price);
        self
    }

    /// Set the stock level; zero marks the product out of stock.
    pub fn with_stock(mut self, count: i64) -> Self {
        self.stock_count = count.max(0);
        self.in_stock = self.stock_count > 0;
        self
    }

    /// Update the stock level in place.
    pub fn set_stock(&mut self, count: i64) {
        self.stock_count = count.max(0);
        self.in_stock = self.stock_count > 0;
        self.updated_at = Utc::now();
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.in_stock
    }

    /// Check if this product is discounted (has a higher old price).
    pub fn is_on_sale(&self) -> bool {
        self.old_price
            .map(|old| old.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.old_price.and_then(|old| {
            if old.amount_cents > self.price.amount_cents {
                let savings = old.amount_cents - self.price.amount_cents;
                Some((savings as f64 / old.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }
}
