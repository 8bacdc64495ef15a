//! HTTP handlers for Products API

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Map, Value};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::extractors::ProductId;
use crate::models::{Product, ProductEnvelope, ProductRequest, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_product,
        get_product,
        update_product,
        patch_product,
        delete_product,
    ),
    components(schemas(Product, ProductRequest, UpdateProduct, ProductEnvelope)),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
///
/// Request bodies are read whole with no size cap.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_product::<R>))
        .route(
            "/{id}",
            get(get_product::<R>)
                .put(update_product::<R>)
                .patch(patch_product::<R>)
                .delete(delete_product::<R>),
        )
        .layer(DefaultBodyLimit::disable())
        .with_state(shared_service)
}

/// Decode a create/full-update body.
///
/// Key presence is checked on the raw JSON object before any value is
/// interpreted, so a missing key is reported even when other values are bad.
fn decode_full_body(body: &[u8]) -> ProductResult<ProductRequest> {
    let fields: Map<String, Value> = serde_json::from_slice(body)?;

    if let Some(missing) = ProductRequest::REQUIRED_FIELDS
        .iter()
        .find(|field| {
            let key: &str = field.as_ref();
            !fields.contains_key(key)
        })
    {
        return Err(ProductError::MalformedBody(format!(
            "key {} does not exist",
            missing
        )));
    }

    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = ProductEnvelope),
        (status = 400, description = "Malformed body, missing or invalid field, duplicate code", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    body: Result<Bytes, BytesRejection>,
) -> ProductResult<impl IntoResponse> {
    let mut product = decode_full_body(&body?)?.into_product(0);
    service.save(&mut product).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductEnvelope::new("Product created successfully", product)),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found successfully", body = ProductEnvelope),
        (status = 400, description = "Invalid id", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductId(id): ProductId,
) -> ProductResult<Json<ProductEnvelope>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(ProductEnvelope::new("Product found successfully", product)))
}

/// Replace every mutable field of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductEnvelope),
        (status = 400, description = "Invalid id, malformed body, missing or invalid field, duplicate code", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductId(id): ProductId,
    body: Result<Bytes, BytesRejection>,
) -> ProductResult<Json<ProductEnvelope>> {
    let product = decode_full_body(&body?)?.into_product(id);
    service.update(&product).await?;

    Ok(Json(ProductEnvelope::new(
        "Product updated successfully",
        product,
    )))
}

/// Update only the fields present in the body
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductEnvelope),
        (status = 400, description = "Invalid id, malformed body, invalid field, duplicate code", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    )
)]
async fn patch_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductId(id): ProductId,
    body: Result<Bytes, BytesRejection>,
) -> ProductResult<Json<ProductEnvelope>> {
    let mut product = service.get_by_id(id).await?;

    let update: UpdateProduct = serde_json::from_slice(&body?)?;
    product.apply_update(update);
    service.update(&product).await?;

    Ok(Json(ProductEnvelope::new(
        "Product updated successfully",
        product,
    )))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid id", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductId(id): ProductId,
) -> ProductResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok((StatusCode::OK, "Product deleted successfully"))
}
