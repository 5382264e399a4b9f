//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::appointment::{Appointment, NewAppointment, UpdateAppointment};
use crate::domain::consultant::{Consultant, NewConsultant, UpdateConsultant};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AppointmentListQuery, AppointmentReader, AppointmentWriter, ConsultantListQuery,
    ConsultantReader, ConsultantWriter,
};

mock! {
    pub Repository {}

    impl ConsultantReader for Repository {
        fn get_consultant_by_id(&self, id: i32) -> RepositoryResult<Option<Consultant>>;
        fn list_consultants(&self, query: ConsultantListQuery) -> RepositoryResult<Vec<Consultant>>;
    }

    impl ConsultantWriter for Repository {
        fn create_consultant(&self, new_consultant: &NewConsultant) -> RepositoryResult<Consultant>;
        fn update_consultant(
            &self,
            consultant_id: i32,
            updates: &UpdateConsultant,
        ) -> RepositoryResult<Consultant>;
        fn delete_consultant(&self, consultant_id: i32) -> RepositoryResult<()>;
    }

    impl AppointmentReader for Repository {
        fn get_appointment_by_id(&self, id: i32) -> RepositoryResult<Option<Appointment>>;
        fn list_appointments(&self, query: AppointmentListQuery) -> RepositoryResult<Vec<Appointment>>;
        fn count_appointments_by_consultant(&self, consultant_id: i32) -> RepositoryResult<i64>;
    }

    impl AppointmentWriter for Repository {
        fn create_appointment(&self, new_appointment: &NewAppointment) -> RepositoryResult<Appointment>;
        fn update_appointment(
            &self,
            appointment_id: i32,
            updates: &UpdateAppointment,
        ) -> RepositoryResult<Appointment>;
        fn delete_appointment(&self, appointment_id: i32) -> RepositoryResult<()>;
    }
}
