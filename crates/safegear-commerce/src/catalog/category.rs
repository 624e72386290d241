//! Category types for product organization.
//!
//! The PPE catalog uses a flat category list (head protection, eye
//! protection, and so on), so there is no hierarchy here.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name (e.g., "Head Protection").
    pub name: String,
    /// URL-friendly slug, derived from the name.
    pub slug: String,
    /// Category description.
    pub description: Option<String>,
    /// Category image URL.
    pub image_url: Option<String>,
}

impl Category {
    /// Create a new category; the slug is derived from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id: CategoryId::generate(),
            name,
            slug,
            description: None,
            image_url: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Lowercase a name into a URL-friendly slug.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug() {
        let cat = Category::new("Head Protection");
        assert_eq!(cat.name, "Head Protection");
        assert_eq!(cat.slug, "head-protection");
    }

    #[test]
    fn test_category_slug_squashes_punctuation() {
        let cat = Category::new("Gloves & Hand Protection!");
        assert_eq!(cat.slug, "gloves-hand-protection");
    }

    #[test]
    fn test_category_builder() {
        let cat = Category::new("Eye Protection")
            .with_description("Goggles and face shields")
            .with_image("https://img.example/eye.jpg");

        assert!(cat.description.is_some());
        assert!(cat.image_url.is_some());
    }
}
