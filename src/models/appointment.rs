use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;

use crate::domain::appointment::{
    Appointment as DomainAppointment, NewAppointment as DomainNewAppointment,
    UpdateAppointment as DomainUpdateAppointment,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::appointments)]
/// Diesel model for [`crate::domain::appointment::Appointment`].
pub struct Appointment {
    pub id: i32,
    pub consultant_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_duration: NaiveTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::appointments)]
/// Insertable form of [`Appointment`].
pub struct NewAppointment {
    pub consultant_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_duration: NaiveTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::appointments)]
/// Data used when updating an [`Appointment`] record. `None` fields are
/// omitted from the generated SET clause.
pub struct UpdateAppointment {
    pub consultant_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_duration: Option<NaiveTime>,
}

impl From<Appointment> for DomainAppointment {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            consultant_id: appointment.consultant_id,
            start_date: appointment.start_date,
            end_date: appointment.end_date,
            start_time: appointment.start_time,
            end_time: appointment.end_time,
            break_duration: appointment.break_duration,
        }
    }
}

impl From<&DomainNewAppointment> for NewAppointment {
    fn from(appointment: &DomainNewAppointment) -> Self {
        Self {
            consultant_id: appointment.consultant_id,
            start_date: appointment.start_date,
            end_date: appointment.end_date,
            start_time: appointment.start_time,
            end_time: appointment.end_time,
            break_duration: appointment.break_duration,
        }
    }
}

impl From<&DomainUpdateAppointment> for UpdateAppointment {
    fn from(updates: &DomainUpdateAppointment) -> Self {
        Self {
            consultant_id: updates.consultant_id,
            start_date: updates.start_date,
            end_date: updates.end_date,
            start_time: updates.start_time,
            end_time: updates.end_time,
            break_duration: updates.break_duration,
        }
    }
}
