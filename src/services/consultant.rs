use validator::Validate;

use crate::domain::consultant::{Consultant, NewConsultant, UpdateConsultant};
use crate::forms::consultant::{
    CreateConsultantForm, SearchConsultantsParams, UpdateConsultantForm,
};
use crate::repository::{
    AppointmentReader, ConsultantListQuery, ConsultantReader, ConsultantWriter,
    DEFAULT_ITEMS_PER_PAGE,
};
use crate::services::{ServiceError, ServiceResult};

/// Creates a consultant; the hourly rate defaults to 0.0 when absent.
pub fn create_consultant<R>(repo: &R, form: CreateConsultantForm) -> ServiceResult<Consultant>
where
    R: ConsultantWriter + ?Sized,
{
    form.validate().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::from(err)
    })?;

    let new_consultant = NewConsultant::try_from(&form)?;
    Ok(repo.create_consultant(&new_consultant)?)
}

/// Applies a sparse update: fields absent from the form stay untouched.
pub fn update_consultant<R>(repo: &R, form: UpdateConsultantForm) -> ServiceResult<Consultant>
where
    R: ConsultantReader + ConsultantWriter + ?Sized,
{
    form.validate().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::from(err)
    })?;

    let updates = UpdateConsultant::try_from(&form)?;

    let existing = repo
        .get_consultant_by_id(form.id)?
        .ok_or(ServiceError::NotFound)?;

    if updates.is_empty() {
        return Ok(existing);
    }

    Ok(repo.update_consultant(form.id, &updates)?)
}

/// Deletes a consultant unless an appointment still references it.
/// Deleting an id with no record (and no dependents) is a silent success.
pub fn delete_consultant<R>(repo: &R, consultant_id: i32) -> ServiceResult<()>
where
    R: AppointmentReader + ConsultantWriter + ?Sized,
{
    if repo.count_appointments_by_consultant(consultant_id)? > 0 {
        return Err(ServiceError::HasDependents);
    }

    Ok(repo.delete_consultant(consultant_id)?)
}

/// Returns one page of consultants; an empty query lists everyone, anything
/// else substring-matches the name or the rate rendered as text.
pub fn search_consultants<R>(
    repo: &R,
    params: SearchConsultantsParams,
) -> ServiceResult<Vec<Consultant>>
where
    R: ConsultantReader + ?Sized,
{
    let page = params.page.unwrap_or(1);
    if page < 1 {
        return Err(ServiceError::InvalidPage);
    }

    let mut query = ConsultantListQuery::new().paginate(page as usize, DEFAULT_ITEMS_PER_PAGE);

    let search = params
        .query
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(term) = search {
        query = query.search(term);
    }

    Ok(repo.list_consultants(query)?)
}
