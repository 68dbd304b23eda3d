use crate::models::DbAvailabilitySlot;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_slot(
    pool: &Pool<Postgres>,
    professor_id: Uuid,
    time_slot: &str,
) -> Result<DbAvailabilitySlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating availability slot: id={}, professor_id={}, time_slot={}",
        id,
        professor_id,
        time_slot
    );

    let slot = sqlx::query_as::<_, DbAvailabilitySlot>(
        r#"
        INSERT INTO availability_slots (id, professor_id, time_slot, booked, created_at)
        VALUES ($1, $2, $3, FALSE, $4)
        RETURNING id, professor_id, time_slot, booked, created_at
        "#,
    )
    .bind(id)
    .bind(professor_id)
    .bind(time_slot)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(slot)
}

pub async fn get_open_slots_by_professor(
    pool: &Pool<Postgres>,
    professor_id: Uuid,
) -> Result<Vec<DbAvailabilitySlot>> {
    let slots = sqlx::query_as::<_, DbAvailabilitySlot>(
        r#"
        SELECT id, professor_id, time_slot, booked, created_at
        FROM availability_slots
        WHERE professor_id = $1 AND booked = FALSE
        "#,
    )
    .bind(professor_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// Statement used by [`claim_slot`]. The subselect locks the candidate row
/// (skipping rows another claimer already holds) and the outer update
/// repeats the `booked = FALSE` guard: after a concurrent commit the row is
/// re-evaluated against the outer qual only, so without the repeated guard
/// a second claimer would flip TRUE to TRUE and also get the row back.
const CLAIM_SLOT_SQL: &str = r#"
        UPDATE availability_slots
        SET booked = TRUE
        WHERE id = (
            SELECT id FROM availability_slots
            WHERE professor_id = $1 AND time_slot = $2 AND booked = FALSE
            LIMIT 1
            FOR UPDATE SKIP LOCKED
        )
        AND booked = FALSE
        RETURNING id, professor_id, time_slot, booked, created_at
        "#;

/// Atomically claims one free slot matching (professor_id, time_slot) by
/// flipping its booked flag. Returns the claimed row, or `None` when no free
/// slot matched. The single guarded update is what prevents two concurrent
/// booking requests from both claiming the same slot.
pub async fn claim_slot(
    pool: &Pool<Postgres>,
    professor_id: Uuid,
    time_slot: &str,
) -> Result<Option<DbAvailabilitySlot>> {
    tracing::debug!(
        "Claiming slot: professor_id={}, time_slot={}",
        professor_id,
        time_slot
    );

    let slot = sqlx::query_as::<_, DbAvailabilitySlot>(CLAIM_SLOT_SQL)
        .bind(professor_id)
        .bind(time_slot)
        .fetch_optional(pool)
        .await?;

    Ok(slot)
}

/// Frees every slot matching (professor_id, time_slot). Cancellation matches
/// by label rather than by slot id, so duplicate publishes of the same label
/// are all released together.
pub async fn release_slots(
    pool: &Pool<Postgres>,
    professor_id: Uuid,
    time_slot: &str,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE availability_slots
        SET booked = FALSE
        WHERE professor_id = $1 AND time_slot = $2
        "#,
    )
    .bind(professor_id)
    .bind(time_slot)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
