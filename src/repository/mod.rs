use chrono::NaiveDate;

use crate::db::{DbPool, get_connection};
use crate::domain::appointment::{Appointment, NewAppointment, UpdateAppointment};
use crate::domain::consultant::{Consultant, NewConsultant, UpdateConsultant};
use crate::repository::errors::RepositoryResult;

pub mod appointment;
pub mod consultant;
pub mod errors;
#[cfg(test)]
pub mod mock;

/// Page size used by every paged listing.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ConsultantListQuery {
    /// Substring matched against the name or the rate rendered as text.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ConsultantListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentListQuery {
    /// Inclusive lower bound on the appointment start date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the appointment end date.
    pub end_date: Option<NaiveDate>,
    pub consultant_id: Option<i32>,
    pub pagination: Option<Pagination>,
}

impl AppointmentListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn consultant_id(mut self, id: i32) -> Self {
        self.consultant_id = Some(id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ConsultantReader {
    fn get_consultant_by_id(&self, id: i32) -> RepositoryResult<Option<Consultant>>;
    fn list_consultants(&self, query: ConsultantListQuery) -> RepositoryResult<Vec<Consultant>>;
}

pub trait ConsultantWriter {
    fn create_consultant(&self, new_consultant: &NewConsultant) -> RepositoryResult<Consultant>;
    fn update_consultant(
        &self,
        consultant_id: i32,
        updates: &UpdateConsultant,
    ) -> RepositoryResult<Consultant>;
    fn delete_consultant(&self, consultant_id: i32) -> RepositoryResult<()>;
}

pub trait AppointmentReader {
    fn get_appointment_by_id(&self, id: i32) -> RepositoryResult<Option<Appointment>>;
    fn list_appointments(&self, query: AppointmentListQuery) -> RepositoryResult<Vec<Appointment>>;
    fn count_appointments_by_consultant(&self, consultant_id: i32) -> RepositoryResult<i64>;
}

pub trait AppointmentWriter {
    fn create_appointment(&self, new_appointment: &NewAppointment)
    -> RepositoryResult<Appointment>;
    fn update_appointment(
        &self,
        appointment_id: i32,
        updates: &UpdateAppointment,
    ) -> RepositoryResult<Appointment>;
    fn delete_appointment(&self, appointment_id: i32) -> RepositoryResult<()>;
}

/// Diesel implementation of the repository traits, shared across handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
