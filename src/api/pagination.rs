use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Json, Router,
};
use log::debug;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::AppError,
    jump::{is_offered, parse_jump},
    middleware::{LongCacheControlMiddleware, ShortCacheControlMiddleware},
    navigation::NavigationTargets,
    state::State as AppState,
    types::{Pagination, PaginationState},
    window::PageWindow,
};

pub fn routes() -> Router<AppState> {
    let jump = Router::new()
        .route("/jump", get(jump))
        .route_layer(middleware::from_fn(ShortCacheControlMiddleware::handler));

    Router::new()
        .route("/window", get(window))
        .route("/controls", get(controls))
        .route_layer(middleware::from_fn(LongCacheControlMiddleware::handler))
        .merge(jump)
}

#[derive(Deserialize)]
pub struct WindowQuery {
    pub current_page: Option<u32>,
    pub total_pages: u32,
    pub max_visible: Option<u32>,
}

pub async fn window(
    Query(query): Query<WindowQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let window = match query.max_visible {
        Some(max_visible) => PageWindow::new(max_visible).map_err(AppError::bad_request)?,
        None => state.window,
    };
    let total_pages = query.total_pages;
    let current_page = query.current_page.unwrap_or(1).clamp(1, total_pages.max(1));
    debug!(
        "Computing {}-wide window for page {} of {}",
        window.max_visible(),
        current_page,
        total_pages
    );

    Ok(Json(json!({
        "current_page": current_page,
        "total_pages": total_pages,
        "max_visible": window.max_visible(),
        "data": window.compute(current_page, total_pages),
    })))
}

/// Display switches of the controls view; the paging itself comes in as [`Pagination`].
#[derive(Deserialize)]
pub struct ControlsQuery {
    pub loading: Option<bool>,
    pub show_items_per_page: Option<bool>,
    pub show_jump_to_page: Option<bool>,
}

pub async fn controls(
    Query(pagination): Query<Pagination>,
    Query(query): Query<ControlsQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let current = PaginationState::clamped(
        pagination.page(),
        pagination.per_page(state.default_items_per_page),
        pagination.total(),
    )
    .map_err(AppError::bad_request)?;
    let loading = query.loading.unwrap_or(false);
    let show_items_per_page = query.show_items_per_page.unwrap_or(true);
    let show_jump_to_page = query.show_jump_to_page.unwrap_or(true);

    Ok(Json(json!({
        "pagination": current,
        "data": {
            "visible": current.is_control_visible(show_items_per_page),
            "page_controls": current.shows_page_controls(),
            "summary": {
                "start": current.start_item(),
                "end": current.end_item(),
                "total": current.total_items,
            },
            "labels": state.window.compute(current.current_page, current.total_pages),
            "navigation": NavigationTargets::new(&current, loading),
            "jump_to_page": is_offered(
                show_jump_to_page,
                current.total_pages,
                state.jump_to_page_threshold,
            ),
            "show_items_per_page": show_items_per_page,
            "items_per_page_options": state.items_per_page_options,
            "loading": loading,
        },
    })))
}

#[derive(Deserialize)]
pub struct JumpQuery {
    pub input: String,
    pub total_pages: u32,
}

pub async fn jump(Query(query): Query<JumpQuery>) -> Result<Json<Value>, AppError> {
    let page = parse_jump(&query.input, query.total_pages).map_err(AppError::bad_request)?;
    Ok(Json(json!({
        "data": {
            "page": page,
        },
    })))
}
