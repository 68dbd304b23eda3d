//! # Appointment Handlers
//!
//! Booking, cancellation, and the caller's appointment listing.
//!
//! ## Booking
//!
//! Booking claims the slot with a single conditional update: one free slot
//! matching (professor_id, time_slot) has its booked flag flipped, and the
//! appointment row is inserted only when the claim returned a row. Two
//! concurrent requests for the last free slot therefore cannot both
//! succeed; the loser sees no free slot and gets a 404.
//!
//! ## Cancellation
//!
//! Cancellation is restricted to the appointment's owning professor. It
//! frees every slot matching (professor_id, time_slot) — the appointment
//! stores the label, not a slot id, so duplicate publishes of the same
//! label are all released together — then deletes the appointment record.

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
        appointment::{AppointmentResponse, BookAppointmentRequest},
        user::Role,
    },
};

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
    Json(payload): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    // Only students book appointments
    if caller.role != Role::Student {
        return Err(AppError(BookingError::Authorization(
            "Only students can book appointments".to_string(),
        )));
    }

    // Atomic claim: flips booked on exactly one matching free slot, or none
    let claimed = officehours_db::repositories::slot::claim_slot(
        &state.db_pool,
        payload.professor_id,
        &payload.time_slot,
    )
    .await
    .map_err(BookingError::Database)?;

    let slot = claimed.ok_or_else(|| {
        BookingError::NotFound(format!(
            "No available slot '{}' for professor {}",
            payload.time_slot, payload.professor_id
        ))
    })?;

    let db_appointment = officehours_db::repositories::appointment::create_appointment(
        &state.db_pool,
        caller.id,
        slot.professor_id,
        &slot.time_slot,
    )
    .await
    .map_err(BookingError::Database)?;

    let response = AppointmentResponse {
        id: db_appointment.id,
        student_id: db_appointment.student_id,
        professor_id: db_appointment.professor_id,
        time_slot: db_appointment.time_slot,
        created_at: db_appointment.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
    Path(appointment_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let db_appointment = officehours_db::repositories::appointment::get_appointment_by_id(
        &state.db_pool,
        appointment_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::NotFound(format!("Appointment {} not found", appointment_id))
    })?;

    // Cancellation is owned by the professor side of the appointment
    if caller.id != db_appointment.professor_id {
        return Err(AppError(BookingError::Authorization(
            "Only the owning professor can cancel this appointment".to_string(),
        )));
    }

    officehours_db::repositories::slot::release_slots(
        &state.db_pool,
        db_appointment.professor_id,
        &db_appointment.time_slot,
    )
    .await
    .map_err(BookingError::Database)?;

    officehours_db::repositories::appointment::delete_appointment(&state.db_pool, appointment_id)
        .await
        .map_err(BookingError::Database)?;

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_my_appointments(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    // Filtered to the caller as student; professors see an empty list
    let appointments = officehours_db::repositories::appointment::get_appointments_by_student(
        &state.db_pool,
        caller.id,
    )
    .await
    .map_err(BookingError::Database)?;

    let response = appointments
        .into_iter()
        .map(|appointment| AppointmentResponse {
            id: appointment.id,
            student_id: appointment.student_id,
            professor_id: appointment.professor_id,
            time_slot: appointment.time_slot,
            created_at: appointment.created_at,
        })
        .collect();

    Ok(Json(response))
}
