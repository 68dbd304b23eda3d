use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/appointments", post(handlers::appointment::book_appointment))
        .route("/appointments", get(handlers::appointment::list_my_appointments))
        .route(
            "/appointments/:appointment_id",
            delete(handlers::appointment::cancel_appointment),
        )
}
