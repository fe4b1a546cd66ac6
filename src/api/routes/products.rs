//! Catalog Routes
//!
//! - GET /api/v1/products - Products for the selection control
//! - GET /api/v1/recommendations/:product - One lookup without a channel

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ProductListResponse, RecommendationResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/products
pub async fn list_products(State(state): State<Arc<AppState>>) -> Json<ProductListResponse> {
    Json(ProductListResponse {
        products: state.catalog.products().to_vec(),
    })
}

/// GET /api/v1/recommendations/:product
///
/// Unlike the channel, which answers `[]`, an unknown product is a 404 here.
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Path(product): Path<String>,
) -> ApiResult<Json<RecommendationResponse>> {
    if !state.catalog.contains(&product) {
        return Err(ApiError::NotFound(format!("Product '{}'", product)));
    }

    let recommendations = state.catalog.recommend(&product).into_inner();

    Ok(Json(RecommendationResponse {
        product,
        recommendations,
    }))
}
