//! Toll calculation REST API handler

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{debug, info};

use super::dto::{CalculateTollRequest, TollFeeResponse};
use crate::application::TollFeeService;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

#[derive(Clone)]
pub struct TollAppState {
    pub service: Arc<TollFeeService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/toll/calculate",
    tag = "Toll",
    request_body = CalculateTollRequest,
    responses(
        (status = 200, description = "Calculated toll fee", body = ApiResponse<TollFeeResponse>),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Invalid request data")
    )
)]
pub async fn calculate_toll(
    State(state): State<TollAppState>,
    ValidatedJson(req): ValidatedJson<CalculateTollRequest>,
) -> Json<ApiResponse<TollFeeResponse>> {
    debug!(
        "Calculating toll fee for {} with {} passages",
        req.vehicle_type,
        req.passages.len()
    );

    let fee = state
        .service
        .calculate_toll_fee(&req.vehicle_type, req.passages)
        .await;

    info!("Calculated toll fee {} for {}", fee, req.vehicle_type);

    Json(ApiResponse::success(TollFeeResponse { fee }))
}
