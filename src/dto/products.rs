use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::{Category, NewProduct, Product};

/// JSON shape of a product as exchanged over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub category: Category,
}

/// Request body for create and update. Any `id` in the body is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeserializationError {
    #[error("Invalid JSON body: {0}")]
    Malformed(String),

    #[error("Invalid product: body must be a JSON object")]
    NotAnObject,

    #[error("Invalid product: missing {0}")]
    MissingField(&'static str),

    #[error("Invalid type for {field}: expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Invalid attribute: {0}")]
    InvalidCategory(String),
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            available: product.available,
            category: product.category,
        }
    }
}

pub fn serialize(product: &Product) -> ProductRecord {
    ProductRecord::from(product)
}

/// Parses a raw request body and validates it into product fields.
pub fn deserialize_body(body: &[u8]) -> Result<NewProduct, DeserializationError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| DeserializationError::Malformed(err.to_string()))?;
    deserialize(&value)
}

/// Validates a wire record. Every field is required and must carry its exact
/// JSON type; `available` must be a literal boolean. `category` must be the
/// canonical uppercase member name (`"FOOD"`, not `"food"`).
pub fn deserialize(value: &Value) -> Result<NewProduct, DeserializationError> {
    let record = value.as_object().ok_or(DeserializationError::NotAnObject)?;

    let name = string_field(record, "name")?;
    if name.is_empty() {
        return Err(DeserializationError::InvalidValue {
            field: "name",
            reason: "must not be empty",
        });
    }
    let description = string_field(record, "description")?;

    let price = field(record, "price")?
        .as_f64()
        .ok_or(DeserializationError::WrongType {
            field: "price",
            expected: "number",
        })?;
    if !price.is_finite() || price < 0.0 {
        return Err(DeserializationError::InvalidValue {
            field: "price",
            reason: "must be a non-negative number",
        });
    }

    let available = field(record, "available")?
        .as_bool()
        .ok_or(DeserializationError::WrongType {
            field: "available",
            expected: "boolean",
        })?;

    let category = string_field(record, "category")?;
    let category = category
        .parse::<Category>()
        .map_err(|_| DeserializationError::InvalidCategory(category))?;

    Ok(NewProduct {
        name,
        description,
        price,
        available,
        category,
    })
}

fn field<'a>(
    record: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Value, DeserializationError> {
    match record.get(key) {
        Some(Value::Null) | None => Err(DeserializationError::MissingField(key)),
        Some(value) => Ok(value),
    }
}

fn string_field(
    record: &Map<String, Value>,
    key: &'static str,
) -> Result<String, DeserializationError> {
    field(record, key)?
        .as_str()
        .map(str::to_string)
        .ok_or(DeserializationError::WrongType {
            field: key,
            expected: "string",
        })
}
