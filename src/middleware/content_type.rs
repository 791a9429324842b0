use axum::http::{HeaderMap, header::CONTENT_TYPE};

use crate::error::{AppError, AppResult};

pub const JSON: &str = "application/json";

/// Rejects a mutating request unless its `Content-Type` is exactly `expected`.
/// Parameters such as `; charset=utf-8` are not accepted.
pub fn check_content_type(headers: &HeaderMap, expected: &'static str) -> AppResult<()> {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        tracing::error!("No Content-Type specified.");
        return Err(AppError::UnsupportedMediaType(expected));
    };

    if value.as_bytes() == expected.as_bytes() {
        return Ok(());
    }

    tracing::error!(content_type = ?value, "Invalid Content-Type");
    Err(AppError::UnsupportedMediaType(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn exact_json_is_accepted() {
        assert!(check_content_type(&headers("application/json"), JSON).is_ok());
    }

    #[test]
    fn missing_header_is_rejected() {
        let result = check_content_type(&HeaderMap::new(), JSON);
        assert!(matches!(result, Err(AppError::UnsupportedMediaType(JSON))));
    }

    #[test]
    fn other_media_types_are_rejected() {
        for value in ["text/html", "application/json; charset=utf-8", "APPLICATION/JSON"] {
            let result = check_content_type(&headers(value), JSON);
            assert!(
                matches!(result, Err(AppError::UnsupportedMediaType(_))),
                "{value} should be rejected"
            );
        }
    }
}
