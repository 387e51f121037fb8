//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::TollFeeService;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{fees, health, toll};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Toll
        toll::handlers::calculate_toll,
        // Fees
        fees::handlers::list_toll_fees,
        fees::handlers::list_toll_free_dates,
        fees::handlers::list_toll_free_vehicles,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Health
            health::handlers::HealthResponse,
            // Toll
            toll::dto::CalculateTollRequest,
            toll::dto::TollFeeResponse,
            // Fees
            fees::dto::TollFeeDto,
            fees::dto::TollFreeDateDto,
            fees::dto::TollFreeVehicleDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Toll", description = "Toll fee calculation for vehicle passages"),
        (name = "Fees", description = "Fee schedule and exemption data"),
    ),
    info(
        title = "Tollgate Toll Fee API",
        version = "1.0.0",
        description = "REST API for calculating road-toll charges",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    service: Arc<TollFeeService>,
    repos: Arc<dyn RepositoryProvider>,
) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let toll_routes = Router::new()
        .route("/calculate", post(toll::handlers::calculate_toll))
        .with_state(toll::TollAppState { service });

    let fees_routes = Router::new()
        .route("/", get(fees::handlers::list_toll_fees))
        .route(
            "/toll-free-dates",
            get(fees::handlers::list_toll_free_dates),
        )
        .route(
            "/toll-free-vehicles",
            get(fees::handlers::list_toll_free_vehicles),
        )
        .with_state(fees::FeesAppState { repos });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::handlers::health_check))
        // Toll calculation
        .nest("/api/v1/toll", toll_routes)
        // Fee schedule & exemptions
        .nest("/api/v1/fees", fees_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
