use std::time::Duration;

use axum::http::{header::HeaderName, request::Parts, HeaderValue, Method};
use configs::CorsConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::StartupError;

/// Build the CORS layer from `[cors]`. Origins are matched with
/// `CorsConfig::origin_allowed`, so `https://*` admits every https origin.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    let methods = cfg
        .allowed_methods
        .iter()
        .map(|m| {
            Method::from_bytes(m.trim().to_ascii_uppercase().as_bytes())
                .map_err(|_| StartupError::InvalidConfig(format!("invalid CORS method `{m}`")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let allowed_headers = parse_headers(&cfg.allowed_headers)?;
    let exposed_headers = parse_headers(&cfg.exposed_headers)?;

    let policy = cfg.clone();
    let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _parts: &Parts| {
        origin.to_str().map(|o| policy.origin_allowed(o)).unwrap_or(false)
    });

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(methods)
        .allow_headers(allowed_headers)
        .expose_headers(exposed_headers)
        .allow_credentials(cfg.allow_credentials)
        .max_age(Duration::from_secs(cfg.max_age_secs)))
}

fn parse_headers(names: &[String]) -> Result<Vec<HeaderName>, StartupError> {
    names
        .iter()
        .map(|h| {
            HeaderName::from_bytes(h.trim().as_bytes())
                .map_err(|_| StartupError::InvalidConfig(format!("invalid CORS header `{h}`")))
        })
        .collect()
}
