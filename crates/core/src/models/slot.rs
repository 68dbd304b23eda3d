use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A professor-owned availability slot. The label is an opaque string; the
/// service applies no calendar validation and a label is only meaningful in
/// combination with its professor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub professor_id: Uuid,
    pub time_slot: String,
    pub booked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishSlotRequest {
    pub time_slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: Uuid,
    pub professor_id: Uuid,
    pub time_slot: String,
    pub booked: bool,
    pub created_at: DateTime<Utc>,
}
