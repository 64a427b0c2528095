use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Path prefix of every social-dock endpoint.
pub const BASE_PATH: &str = "/social-dock/v1";

pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let api = Router::new()
        .route(
            "/settings",
            get(handlers::get_settings)
                .put(handlers::put_settings)
                .post(handlers::post_settings_form)
                .delete(handlers::delete_settings),
        )
        .route("/catalog", get(handlers::get_catalog))
        .route("/contrast", get(handlers::get_contrast))
        .route("/widget", get(handlers::get_widget))
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http());

    router.nest(BASE_PATH, api)
}
