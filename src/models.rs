use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Classification tag attached to every product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

/// A category token that names no member of [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid category")]
pub struct InvalidCategory(pub String);

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// Canonical uppercase name, as stored and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }

    /// Case-insensitive lookup used for query-string tokens. Surrounding
    /// whitespace is not stripped.
    pub fn lookup(name: &str) -> Result<Self, InvalidCategory> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidCategory(name.to_string()))
    }
}

/// Exact match on the canonical uppercase name.
impl FromStr for Category {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored product, identified by its store-assigned `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub category: Category,
}

/// Product fields before the store has assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub category: Category,
}

impl NewProduct {
    pub fn with_id(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            available: self.available,
            category: self.category,
        }
    }
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            available: product.available,
            category: product.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Category::lookup("food"), Ok(Category::Food));
        assert_eq!(Category::lookup("Tools"), Ok(Category::Tools));
        assert_eq!(Category::lookup("HOUSEWARES"), Ok(Category::Housewares));
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        let err = Category::lookup("toys").unwrap_err();
        assert_eq!(err, InvalidCategory("toys".to_string()));
        assert!(Category::lookup("").is_err());
        assert!(Category::lookup(" food ").is_err());
    }

    #[test]
    fn from_str_requires_canonical_name() {
        assert_eq!("CLOTHS".parse::<Category>(), Ok(Category::Cloths));
        assert!("cloths".parse::<Category>().is_err());
    }

    #[test]
    fn every_member_round_trips_through_its_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
            assert_eq!(category.to_string(), category.as_str());
        }
    }
}
