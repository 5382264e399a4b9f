use diesel::prelude::*;

use crate::domain::consultant::{
    Consultant as DomainConsultant, NewConsultant as DomainNewConsultant,
    UpdateConsultant as DomainUpdateConsultant,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::consultants)]
/// Diesel model for [`crate::domain::consultant::Consultant`].
pub struct Consultant {
    pub id: i32,
    pub name: String,
    pub hourly_rate: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::consultants)]
/// Insertable form of [`Consultant`].
pub struct NewConsultant<'a> {
    pub name: &'a str,
    pub hourly_rate: f64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::consultants)]
/// Data used when updating a [`Consultant`] record. `None` fields are
/// omitted from the generated SET clause.
pub struct UpdateConsultant<'a> {
    pub name: Option<&'a str>,
    pub hourly_rate: Option<f64>,
}

impl From<Consultant> for DomainConsultant {
    fn from(consultant: Consultant) -> Self {
        Self {
            id: consultant.id,
            name: consultant.name,
            hourly_rate: consultant.hourly_rate,
        }
    }
}

impl<'a> From<&'a DomainNewConsultant> for NewConsultant<'a> {
    fn from(consultant: &'a DomainNewConsultant) -> Self {
        Self {
            name: consultant.name.as_str(),
            hourly_rate: consultant.hourly_rate,
        }
    }
}

impl<'a> From<&'a DomainUpdateConsultant> for UpdateConsultant<'a> {
    fn from(updates: &'a DomainUpdateConsultant) -> Self {
        Self {
            name: updates.name.as_deref(),
            hourly_rate: updates.hourly_rate,
        }
    }
}
