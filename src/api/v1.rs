use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::api::production_plan;

pub fn router() -> Router {
    Router::new()
        .route("/productionplan", post(production_plan::production_plan))
        .route("/healthz", get(healthz))
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
