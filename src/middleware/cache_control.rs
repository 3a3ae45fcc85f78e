use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use log::warn;

/// To be used with endpoints that are a pure function of their query
pub type LongCacheControlMiddleware = CacheControlMiddleware<3600>;
/// To be used with endpoints that answer a single user action
pub type ShortCacheControlMiddleware = CacheControlMiddleware<10>;

#[derive(Copy, Clone)]
pub struct CacheControlMiddleware<const MAX_AGE: u32>;

impl<const MAX_AGE: u32> CacheControlMiddleware<MAX_AGE> {
    pub async fn handler(request: Request, next: Next) -> Response {
        let mut response = next.run(request).await;

        // errors depend on the input being fixed, never let them stick
        if response.status().is_client_error() || response.status().is_server_error() {
            response
                .headers_mut()
                .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
            return response;
        }

        match HeaderValue::from_str(&format!("public, max-age={}", MAX_AGE)) {
            Ok(value) => {
                response.headers_mut().insert(header::CACHE_CONTROL, value);
            }
            Err(e) => warn!("Failed to build cache header: {}", e),
        }
        response
    }
}
