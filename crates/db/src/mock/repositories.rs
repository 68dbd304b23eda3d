use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAppointment, DbAvailabilitySlot, DbUser};

// Mock repositories for testing
mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            username: &'static str,
            password_hash: &'static str,
            role: &'static str,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_username(
            &self,
            username: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;
    }
}

mock! {
    pub SlotRepo {
        pub async fn create_slot(
            &self,
            professor_id: Uuid,
            time_slot: &'static str,
        ) -> eyre::Result<DbAvailabilitySlot>;

        pub async fn get_open_slots_by_professor(
            &self,
            professor_id: Uuid,
        ) -> eyre::Result<Vec<DbAvailabilitySlot>>;

        pub async fn claim_slot(
            &self,
            professor_id: Uuid,
            time_slot: &'static str,
        ) -> eyre::Result<Option<DbAvailabilitySlot>>;

        pub async fn release_slots(
            &self,
            professor_id: Uuid,
            time_slot: &'static str,
        ) -> eyre::Result<u64>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn create_appointment(
            &self,
            student_id: Uuid,
            professor_id: Uuid,
            time_slot: &'static str,
        ) -> eyre::Result<DbAppointment>;

        pub async fn get_appointment_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn get_appointments_by_student(
            &self,
            student_id: Uuid,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn delete_appointment(
            &self,
            id: Uuid,
        ) -> eyre::Result<()>;
    }
}
