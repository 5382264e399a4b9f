use serde::Deserialize;
use validator::Validate;

use crate::domain::consultant::{NewConsultant, UpdateConsultant};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /consultor`.
pub struct CreateConsultantForm {
    #[validate(length(min = 1))]
    pub name: String,
    /// Defaults to 0.0 when absent.
    #[validate(range(min = 0.0))]
    pub hourly_rate: Option<f64>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `PUT /consultor`. Absent fields are not updated.
pub struct UpdateConsultantForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub hourly_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
/// Query of `DELETE /consultor`.
pub struct DeleteConsultantParams {
    pub id: i32,
}

#[derive(Debug, Deserialize)]
/// Query of `GET /consultor`.
pub struct SearchConsultantsParams {
    pub query: Option<String>,
    pub page: Option<i64>,
}

impl TryFrom<&CreateConsultantForm> for NewConsultant {
    type Error = TypeConstraintError;

    fn try_from(form: &CreateConsultantForm) -> Result<Self, Self::Error> {
        NewConsultant::new(form.name.clone(), form.hourly_rate)
    }
}

impl TryFrom<&UpdateConsultantForm> for UpdateConsultant {
    type Error = TypeConstraintError;

    fn try_from(form: &UpdateConsultantForm) -> Result<Self, Self::Error> {
        UpdateConsultant::new(form.name.clone(), form.hourly_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_form_requires_name() {
        let form: CreateConsultantForm = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(form.validate().is_err());

        assert!(serde_json::from_str::<CreateConsultantForm>(r#"{"hourlyRate": 10.0}"#).is_err());
    }

    #[test]
    fn create_form_converts_with_default_rate() {
        let form: CreateConsultantForm = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        let new_consultant = NewConsultant::try_from(&form).unwrap();
        assert_eq!(new_consultant.hourly_rate, 0.0);
    }

    #[test]
    fn update_form_keeps_absent_fields_absent() {
        let form: UpdateConsultantForm =
            serde_json::from_str(r#"{"id": 1, "hourlyRate": 37.5}"#).unwrap();
        let updates = UpdateConsultant::try_from(&form).unwrap();
        assert!(updates.name.is_none());
        assert_eq!(updates.hourly_rate, Some(37.5));
    }
}
