use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// A billable worker with an hourly rate.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Consultant {
    pub id: i32,
    pub name: String,
    pub hourly_rate: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewConsultant {
    pub name: String,
    pub hourly_rate: f64,
}

impl NewConsultant {
    /// Normalizes the name and applies the default rate for absent values.
    pub fn new(name: String, hourly_rate: Option<f64>) -> Result<Self, TypeConstraintError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let hourly_rate = hourly_rate.unwrap_or(0.0);
        if hourly_rate < 0.0 {
            return Err(TypeConstraintError::InvalidValue(
                "hourly rate cannot be negative".to_string(),
            ));
        }
        Ok(Self { name, hourly_rate })
    }
}

/// Sparse update: `None` fields are left untouched on the stored record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateConsultant {
    pub name: Option<String>,
    pub hourly_rate: Option<f64>,
}

impl UpdateConsultant {
    pub fn new(name: Option<String>, hourly_rate: Option<f64>) -> Result<Self, TypeConstraintError> {
        let name = match name {
            Some(value) => {
                let trimmed = value.trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Some(trimmed)
            }
            None => None,
        };
        if let Some(rate) = hourly_rate
            && rate < 0.0
        {
            return Err(TypeConstraintError::InvalidValue(
                "hourly rate cannot be negative".to_string(),
            ));
        }
        Ok(Self { name, hourly_rate })
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.hourly_rate.is_none()
    }
}
