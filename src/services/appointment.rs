use validator::Validate;

use crate::domain::appointment::{Appointment, NewAppointment, UpdateAppointment};
use crate::domain::billing::{self, BilledAppointment, BillingStatement};
use crate::forms::appointment::{
    CreateAppointmentForm, SearchAppointmentsParams, UpdateAppointmentForm,
};
use crate::repository::errors::RepositoryError;
use crate::repository::{
    AppointmentListQuery, AppointmentReader, AppointmentWriter, ConsultantReader,
    DEFAULT_ITEMS_PER_PAGE,
};
use crate::services::{ServiceError, ServiceResult};

/// Creates an appointment after resolving the referenced consultant.
pub fn create_appointment<R>(repo: &R, form: CreateAppointmentForm) -> ServiceResult<Appointment>
where
    R: ConsultantReader + AppointmentWriter + ?Sized,
{
    form.validate().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::from(err)
    })?;

    let new_appointment = NewAppointment::try_from(&form)?;

    if repo
        .get_consultant_by_id(new_appointment.consultant_id)?
        .is_none()
    {
        return Err(ServiceError::ConsultantNotFound);
    }

    Ok(repo.create_appointment(&new_appointment)?)
}

/// Applies a sparse update after validating every supplied field, so a bad
/// field aborts the whole request before anything is written.
pub fn update_appointment<R>(repo: &R, form: UpdateAppointmentForm) -> ServiceResult<Appointment>
where
    R: ConsultantReader + AppointmentReader + AppointmentWriter + ?Sized,
{
    form.validate().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::from(err)
    })?;

    let updates = UpdateAppointment::try_from(&form)?;

    let existing = repo
        .get_appointment_by_id(form.id)?
        .ok_or(ServiceError::NotFound)?;

    if let Some(consultant_id) = updates.consultant_id
        && repo.get_consultant_by_id(consultant_id)?.is_none()
    {
        return Err(ServiceError::ConsultantNotFound);
    }

    if updates.is_empty() {
        return Ok(existing);
    }

    Ok(repo.update_appointment(form.id, &updates)?)
}

/// Deletes by id. Deleting an id with no record is a silent success.
pub fn delete_appointment<R>(repo: &R, appointment_id: i32) -> ServiceResult<()>
where
    R: AppointmentWriter + ?Sized,
{
    Ok(repo.delete_appointment(appointment_id)?)
}

/// Billed search: filters, pages, then derives the billing figures for each
/// appointment on the page plus the page-level sum.
pub fn search_appointments<R>(
    repo: &R,
    params: SearchAppointmentsParams,
) -> ServiceResult<BillingStatement>
where
    R: ConsultantReader + AppointmentReader + ?Sized,
{
    let filters = AppointmentListQuery::try_from(&params)?;

    let page = params.page.unwrap_or(1);
    if page < 1 {
        return Err(ServiceError::InvalidPage);
    }

    if let Some(consultant_id) = filters.consultant_id
        && repo.get_consultant_by_id(consultant_id)?.is_none()
    {
        return Err(ServiceError::ConsultantNotFound);
    }

    let appointments =
        repo.list_appointments(filters.paginate(page as usize, DEFAULT_ITEMS_PER_PAGE))?;

    let mut statement = BillingStatement::default();
    for appointment in appointments {
        // The FK plus the create/update checks make a missing consultant
        // unreachable through this API; hitting one means the store is
        // inconsistent, which is not a user-recoverable condition.
        let consultant = repo
            .get_consultant_by_id(appointment.consultant_id)?
            .ok_or_else(|| {
                RepositoryError::Unexpected(format!(
                    "appointment {} references missing consultant {}",
                    appointment.id, appointment.consultant_id
                ))
            })?;

        let seconds = billing::worked_seconds(&appointment);
        statement.push(BilledAppointment {
            worked_duration: billing::format_clock_span(seconds),
            billed_amount: billing::billed_amount(seconds, consultant.hourly_rate),
            appointment,
        });
    }

    Ok(statement)
}
