use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A confirmed pairing of one student and one booked slot. The time-slot
/// label is copied from the slot at booking time rather than referenced by
/// key, so cancellation matches slots by (professor_id, time_slot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub professor_id: Uuid,
    pub time_slot: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub professor_id: Uuid,
    pub time_slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub professor_id: Uuid,
    pub time_slot: String,
    pub created_at: DateTime<Utc>,
}
