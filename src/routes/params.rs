use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::{Category, InvalidCategory};

/// Tokens accepted as `true` for the `available` query parameter, compared
/// case-insensitively. Anything else means `false`.
pub const TRUTHY_TOKENS: [&str; 3] = ["true", "yes", "1"];

/// Query string accepted by `GET /products`. Empty values count as absent.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Exact product name; takes precedence over every other parameter.
    pub name: Option<String>,
    /// Category name, case-insensitive; used when `name` is absent.
    pub category: Option<String>,
    /// `true`, `yes` or `1` select available products, any other value
    /// unavailable ones; used when `name` and `category` are absent.
    pub available: Option<String>,
}

/// The single search strategy applied to a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    Name(String),
    Category(Category),
    Available(bool),
    All,
}

impl ProductQuery {
    /// Builds the query from raw key/value pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "category" => &mut query.category,
                "available" => &mut query.available,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Picks one filter in the order `name`, `category`, `available`, then
    /// everything. Parameters after the first present one are ignored.
    pub fn resolve(&self) -> Result<ProductFilter, InvalidCategory> {
        if let Some(name) = present(&self.name) {
            return Ok(ProductFilter::Name(name.to_string()));
        }
        if let Some(category) = present(&self.category) {
            return Category::lookup(category).map(ProductFilter::Category);
        }
        if let Some(available) = present(&self.available) {
            return Ok(ProductFilter::Available(parse_available(available)));
        }
        Ok(ProductFilter::All)
    }
}

pub fn parse_available(token: &str) -> bool {
    let token = token.to_ascii_lowercase();
    TRUTHY_TOKENS.contains(&token.as_str())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
