use crate::middleware::{ValidatedJson, ValidatedJsonList, auth_middleware};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::DynOrderLineService,
    domain::requests::{CreateOrderLineRequest, UpdateOrderLineRequest},
    domain::responses::{ApiResponse, OrderLineResponse},
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/v1/order_lines",
    tag = "OrderLine",
    security(("bearer_auth" = [])),
    request_body = Vec<CreateOrderLineRequest>,
    responses(
        (status = 201, description = "Order lines created", body = ApiResponse<Vec<OrderLineResponse>>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_order_lines(
    Extension(service): Extension<DynOrderLineService>,
    ValidatedJsonList(body): ValidatedJsonList<CreateOrderLineRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order_lines(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/order_lines/{id}",
    tag = "OrderLine",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order line ID")),
    responses(
        (status = 200, description = "Order line details", body = ApiResponse<OrderLineResponse>),
        (status = 404, description = "Order line not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_order_line(
    Extension(service): Extension<DynOrderLineService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/v1/order_lines/{id}",
    tag = "OrderLine",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order line ID")),
    request_body = UpdateOrderLineRequest,
    responses(
        (status = 200, description = "Order line updated", body = ApiResponse<OrderLineResponse>),
        (status = 404, description = "Order line not found"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_order_line(
    Extension(service): Extension<DynOrderLineService>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateOrderLineRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_order_line(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/order_lines/{id}",
    tag = "OrderLine",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order line ID")),
    responses(
        (status = 204, description = "Order line deleted"),
        (status = 404, description = "Order line not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn delete_order_line(
    Extension(service): Extension<DynOrderLineService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_order_line(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn order_line_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/order_lines", post(create_order_lines))
        .route("/api/v1/order_lines/{id}", get(get_order_line))
        .route("/api/v1/order_lines/{id}", put(update_order_line))
        .route("/api/v1/order_lines/{id}", delete(delete_order_line))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_line_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
