//! CORS Layer
//!
//! Builds the CORS policy from a comma-separated origin list.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a CORS layer
///
/// `None` (or a list with no parseable origin) allows any origin.
/// Credentials are never allowed: auth travels in the `Authorization`
/// header, not in cookies.
pub fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let allowed_origins = origins.map(parse_origins).unwrap_or_default();

    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed_origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}

/// Split and parse an origin list, skipping blanks and invalid entries
pub fn parse_origins(origins: &str) -> Vec<HeaderValue> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("http://localhost:5173, https://blog.example.com,,");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:5173");
        assert_eq!(origins[1], "https://blog.example.com");
    }

    #[test]
    fn test_parse_origins_skips_invalid() {
        let origins = parse_origins("http://ok.example.com,bad\norigin");
        assert_eq!(origins.len(), 1);
    }
}
