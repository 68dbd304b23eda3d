use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/availability",
            post(handlers::availability::publish_availability),
        )
        .route(
            "/availability/:professor_id",
            get(handlers::availability::list_availability),
        )
}
