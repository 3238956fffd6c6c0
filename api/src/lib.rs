//! Dispatching Dashboard API
//!
//! Ticket queue, closure scoring and engineer leaderboard for a support
//! dispatch dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      DISPATCHING DASHBOARD API                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         REST API                                 │   │
//! │  │   /api/queue | /api/leaderboard | /api/close_ticket | OpenAPI    │   │
//! │  └──────────────────────────────┬──────────────────────────────────┘   │
//! │                                 │                                       │
//! │  ┌──────────────────────────────▼──────────────────────────────────┐   │
//! │  │                       TICKET SERVICE                             │   │
//! │  │   Points Lookup | Close & Archive | Leaderboard Aggregation      │   │
//! │  └──────────────────────────────┬──────────────────────────────────┘   │
//! │                                 │                                       │
//! │  ┌──────────────────────────────▼──────────────────────────────────┐   │
//! │  │                  TICKET REPOSITORY (in-memory)                   │   │
//! │  │   Skill Groups | Resources | Virtual Queue | Archive             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod service;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::DispatchConfig;
pub use error::ApiError;
pub use models::*;
pub use repository::{InMemoryTicketRepository, RepositoryError, TicketRepository};
pub use service::{ServiceError, TicketService};

/// API state
#[derive(Clone)]
pub struct ApiState {
    /// API version
    pub version: String,
    /// Ticket business logic, owns the repository handle
    pub service: Arc<TicketService>,
}

impl ApiState {
    pub fn new(service: Arc<TicketService>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").into(),
            service,
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dispatching Dashboard API",
        version = "1.0.0",
        description = "Support ticket queue, closure scoring and engineer leaderboard",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::health_check,
        routes::health::index,
        routes::queue::get_queue,
        routes::queue::get_archive,
        routes::leaderboard::get_leaderboard,
        routes::tickets::close_ticket,
        routes::tickets::simulate_closure,
        routes::directory::list_skill_groups,
        routes::directory::list_resources,
        routes::directory::list_resource_skill_groups,
    ),
    components(
        schemas(
            ErrorResponse,
            SkillGroup, Resource, ResourceSkillGroup,
            VirtualQueueTicket, ArchivedTicket, LeaderboardEntry,
            CloseTicketRequest, CloseTicketResponse, SimulateClosureResponse,
            QueueResponse, ArchiveResponse, LeaderboardResponse,
            SkillGroupsResponse, ResourcesResponse, ResourceSkillGroupsResponse,
            routes::health::HealthResponse, routes::health::StatusResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "queue", description = "Virtual queue and archive"),
        (name = "tickets", description = "Ticket closure"),
        (name = "leaderboard", description = "Engineer ranking"),
        (name = "directory", description = "Skill groups and engineers")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(routes::health::index))
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

fn api_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .merge(routes::queue::router())
        .merge(routes::leaderboard::router())
        .merge(routes::tickets::router())
        .merge(routes::directory::router())
}
