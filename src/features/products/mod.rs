pub mod model;
pub mod service;
pub mod view;

use crate::AppState;
use crate::domain::CategoryQuery;
use crate::error::AppError;
use axum::{
    Json, Router,
    extract::{Path, State},
    response::Html,
    routing::get,
};
use model::CategoryPage;

pub fn products_router() -> Router<AppState> {
    Router::new()
        .route("/category/{category}", get(category_page_handler))
        .route("/api/products/{category}", get(category_json_handler))
}

async fn category_page_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Html<String>, AppError> {
    let page = state.catalog.load_page(CategoryQuery::new(category)).await?;
    let html = state.renderer.render(&page)?;

    Ok(Html(html))
}

async fn category_json_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryPage>, AppError> {
    let page = state.catalog.load_page(CategoryQuery::new(category)).await?;

    Ok(Json(page))
}
