//! # Availability Handlers
//!
//! Professors publish availability slots; any authenticated caller can list
//! a professor's open slots. Publishing is append-only: the same label can
//! be offered more than once and each publish creates an independent slot
//! record.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use officehours_core::{
    errors::BookingError,
    models::{
        slot::{PublishSlotRequest, SlotResponse},
        user::Role,
    },
};

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn publish_availability(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
    Json(payload): Json<PublishSlotRequest>,
) -> Result<(StatusCode, Json<SlotResponse>), AppError> {
    // Only professors own availability
    if caller.role != Role::Professor {
        return Err(AppError(BookingError::Authorization(
            "Only professors can publish availability".to_string(),
        )));
    }

    let db_slot = officehours_db::repositories::slot::create_slot(
        &state.db_pool,
        caller.id,
        &payload.time_slot,
    )
    .await
    .map_err(BookingError::Database)?;

    let response = SlotResponse {
        id: db_slot.id,
        professor_id: db_slot.professor_id,
        time_slot: db_slot.time_slot,
        booked: db_slot.booked,
        created_at: db_slot.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn list_availability(
    State(state): State<Arc<ApiState>>,
    _caller: AuthUser,
    Path(professor_id): Path<Uuid>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let slots = officehours_db::repositories::slot::get_open_slots_by_professor(
        &state.db_pool,
        professor_id,
    )
    .await
    .map_err(BookingError::Database)?;

    let response = slots
        .into_iter()
        .map(|slot| SlotResponse {
            id: slot.id,
            professor_id: slot.professor_id,
            time_slot: slot.time_slot,
            booked: slot.booked,
            created_at: slot.created_at,
        })
        .collect();

    Ok(Json(response))
}
