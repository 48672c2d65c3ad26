//! API router.
//!
//! Returns a composable `Router` with all endpoints nested under
//! `/api/`. The API is browser-facing and unauthenticated (the hosted
//! app has no real authentication); CORS is the only layer.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router.
pub fn api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/chat/start", post(endpoints::chat::start))
        .route("/chat/message", post(endpoints::chat::message))
        .route("/chat/reset", post(endpoints::chat::reset))
        .route("/chat/:id/transcript", get(endpoints::chat::transcript))
        .route("/results", get(endpoints::results::latest))
        .route(
            "/appointments",
            post(endpoints::appointments::book).get(endpoints::appointments::list),
        )
        .route("/appointments/:id", delete(endpoints::appointments::cancel))
        .route("/dashboard/patient", get(endpoints::dashboard::patient))
        .route("/dashboard/doctor", get(endpoints::dashboard::doctor))
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(CorsLayer::permissive())
}
