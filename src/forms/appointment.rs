use serde::Deserialize;
use validator::Validate;

use crate::domain::appointment::{NewAppointment, UpdateAppointment};
use crate::domain::types::{TypeConstraintError, parse_date, parse_time};
use crate::repository::AppointmentListQuery;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /compromisso`. All fields are required.
pub struct CreateAppointmentForm {
    pub consultant_id: i32,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub break_duration: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `PUT /compromisso`. Absent fields are not updated.
pub struct UpdateAppointmentForm {
    pub id: i32,
    pub consultant_id: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub break_duration: Option<String>,
}

#[derive(Debug, Deserialize)]
/// Query of `DELETE /compromisso`.
pub struct DeleteAppointmentParams {
    pub id: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Query of `GET /compromisso`.
pub struct SearchAppointmentsParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub consultant_id: Option<i32>,
    pub page: Option<i64>,
}

impl TryFrom<&CreateAppointmentForm> for NewAppointment {
    type Error = TypeConstraintError;

    fn try_from(form: &CreateAppointmentForm) -> Result<Self, Self::Error> {
        Ok(Self {
            consultant_id: form.consultant_id,
            start_date: parse_date(&form.start_date)?,
            end_date: parse_date(&form.end_date)?,
            start_time: parse_time(&form.start_time)?,
            end_time: parse_time(&form.end_time)?,
            break_duration: parse_time(&form.break_duration)?,
        })
    }
}

impl TryFrom<&UpdateAppointmentForm> for UpdateAppointment {
    type Error = TypeConstraintError;

    fn try_from(form: &UpdateAppointmentForm) -> Result<Self, Self::Error> {
        Ok(Self {
            consultant_id: form.consultant_id,
            start_date: form.start_date.as_deref().map(parse_date).transpose()?,
            end_date: form.end_date.as_deref().map(parse_date).transpose()?,
            start_time: form.start_time.as_deref().map(parse_time).transpose()?,
            end_time: form.end_time.as_deref().map(parse_time).transpose()?,
            break_duration: form.break_duration.as_deref().map(parse_time).transpose()?,
        })
    }
}

impl TryFrom<&SearchAppointmentsParams> for AppointmentListQuery {
    type Error = TypeConstraintError;

    /// Builds the filter set; pagination is applied by the service.
    fn try_from(params: &SearchAppointmentsParams) -> Result<Self, Self::Error> {
        let mut query = AppointmentListQuery::new();
        if let Some(date) = params.start_date.as_deref() {
            query = query.start_date(parse_date(date)?);
        }
        if let Some(date) = params.end_date.as_deref() {
            query = query.end_date(parse_date(date)?);
        }
        if let Some(consultant_id) = params.consultant_id {
            query = query.consultant_id(consultant_id);
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    #[test]
    fn create_form_parses_canonical_fields() {
        let form: CreateAppointmentForm = serde_json::from_str(
            r#"{
                "consultantId": 2,
                "startDate": "2024-08-01",
                "endDate": "2024-08-08",
                "startTime": "08:00",
                "endTime": "23:59",
                "breakDuration": "00:30"
            }"#,
        )
        .unwrap();
        let new_appointment = NewAppointment::try_from(&form).unwrap();
        assert_eq!(new_appointment.consultant_id, 2);
        assert_eq!(
            new_appointment.start_date,
            NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
        );
        assert_eq!(
            new_appointment.break_duration,
            NaiveTime::from_hms_opt(0, 30, 0).unwrap()
        );
    }

    #[test]
    fn create_form_rejects_malformed_date() {
        let form = CreateAppointmentForm {
            consultant_id: 2,
            start_date: "01/08/2024".to_string(),
            end_date: "2024-08-08".to_string(),
            start_time: "08:00".to_string(),
            end_time: "23:59".to_string(),
            break_duration: "00:30".to_string(),
        };
        assert_eq!(
            NewAppointment::try_from(&form),
            Err(TypeConstraintError::InvalidDate)
        );
    }

    #[test]
    fn update_form_maps_only_present_fields() {
        let form: UpdateAppointmentForm =
            serde_json::from_str(r#"{"id": 1, "endTime": "22:00"}"#).unwrap();
        let updates = UpdateAppointment::try_from(&form).unwrap();
        assert!(updates.consultant_id.is_none());
        assert!(updates.start_date.is_none());
        assert_eq!(
            updates.end_time,
            Some(NaiveTime::from_hms_opt(22, 0, 0).unwrap())
        );
    }

    #[test]
    fn search_params_build_conjunctive_filters() {
        let params = SearchAppointmentsParams {
            start_date: Some("2024-12-01".to_string()),
            end_date: None,
            consultant_id: Some(2),
            page: None,
        };
        let query = AppointmentListQuery::try_from(&params).unwrap();
        assert_eq!(
            query.start_date,
            Some(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
        );
        assert!(query.end_date.is_none());
        assert_eq!(query.consultant_id, Some(2));
    }
}
