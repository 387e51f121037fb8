//! Read-only fee schedule and exemption REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{TollFeeDto, TollFreeDateDto, TollFreeVehicleDto};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;

#[derive(Clone)]
pub struct FeesAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/fees",
    tag = "Fees",
    responses(
        (status = 200, description = "Fee schedule", body = ApiResponse<Vec<TollFeeDto>>)
    )
)]
pub async fn list_toll_fees(
    State(state): State<FeesAppState>,
) -> Result<Json<ApiResponse<Vec<TollFeeDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.toll_fees().find_all().await {
        Ok(entries) => {
            let dtos: Vec<TollFeeDto> = entries.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(dtos)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to list fees: {}", e))),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/fees/toll-free-dates",
    tag = "Fees",
    responses(
        (status = 200, description = "Active toll-free date ranges", body = ApiResponse<Vec<TollFreeDateDto>>)
    )
)]
pub async fn list_toll_free_dates(
    State(state): State<FeesAppState>,
) -> Result<Json<ApiResponse<Vec<TollFreeDateDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.toll_free_dates().find_active().await {
        Ok(ranges) => {
            let dtos: Vec<TollFreeDateDto> = ranges.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(dtos)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to list toll free dates: {}",
                e
            ))),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/fees/toll-free-vehicles",
    tag = "Fees",
    responses(
        (status = 200, description = "Exempt vehicle classes", body = ApiResponse<Vec<TollFreeVehicleDto>>)
    )
)]
pub async fn list_toll_free_vehicles(
    State(state): State<FeesAppState>,
) -> Result<Json<ApiResponse<Vec<TollFreeVehicleDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.toll_free_vehicles().find_all().await {
        Ok(vehicles) => {
            let mut dtos: Vec<TollFreeVehicleDto> =
                vehicles.into_values().map(Into::into).collect();
            dtos.sort_by(|a, b| a.vehicle_type.cmp(&b.vehicle_type));
            Ok(Json(ApiResponse::success(dtos)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to list toll free vehicles: {}",
                e
            ))),
        )),
    }
}
