use axum::{http::Method, Router};
use tower::{limit::ConcurrencyLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, state::State};

pub mod pagination;

const MAX_CONCURRENT_REQUESTS: usize = 1024;

pub fn routes() -> Router<State> {
    Router::new().nest("/pagination", pagination::routes())
}

/// The whole service: versioned routes plus the shared layers.
pub fn app(state: State) -> Router {
    Router::new()
        .nest("/api/v1", routes())
        .fallback(|| async { AppError::not_found() })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET]),
                )
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS)),
        )
        .with_state(state)
}
