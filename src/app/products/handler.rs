//! 产品处理器

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use super::model::Product;
use crate::app::AppState;
use crate::core::error::CoreError;
use crate::core::extract::{ApiJson, ApiPath};

/// 资源根路径
pub const PRODUCTS_PATH: &str = "/api/products";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(PRODUCTS_PATH, get(list_products).post(create_product))
        .route(
            "/api/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.get(id).await?;
    Ok(Json(product))
}

/// 201，`Location` 指向列表端点并带上新记录的标识符
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Product>,
) -> Result<impl IntoResponse, CoreError> {
    let product = state.product_service.create(payload).await?;
    let location = format!("{}?id={}", PRODUCTS_PATH, product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<Product>,
) -> Result<StatusCode, CoreError> {
    state.product_service.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, CoreError> {
    state.product_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
