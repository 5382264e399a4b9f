use diesel::prelude::*;

use crate::domain::appointment::{Appointment, NewAppointment, UpdateAppointment};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AppointmentListQuery, AppointmentReader, AppointmentWriter, DieselRepository,
};

impl AppointmentReader for DieselRepository {
    fn get_appointment_by_id(&self, id: i32) -> RepositoryResult<Option<Appointment>> {
        use crate::models::appointment::Appointment as DbAppointment;
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        let appointment = appointments::table
            .find(id)
            .first::<DbAppointment>(&mut conn)
            .optional()?;

        Ok(appointment.map(Into::into))
    }

    fn list_appointments(&self, query: AppointmentListQuery) -> RepositoryResult<Vec<Appointment>> {
        use crate::models::appointment::Appointment as DbAppointment;
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        let mut stmt = appointments::table.into_boxed();

        if let Some(date) = query.start_date {
            stmt = stmt.filter(appointments::start_date.ge(date));
        }
        if let Some(date) = query.end_date {
            stmt = stmt.filter(appointments::end_date.le(date));
        }
        if let Some(consultant_id) = query.consultant_id {
            stmt = stmt.filter(appointments::consultant_id.eq(consultant_id));
        }

        stmt = stmt.order(appointments::id.asc());

        if let Some(pagination) = query.pagination {
            let per_page = pagination.per_page as i64;
            let page = pagination.page.max(1) as i64;
            stmt = stmt.limit(per_page).offset(per_page * (page - 1));
        }

        let items = stmt
            .load::<DbAppointment>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn count_appointments_by_consultant(&self, consultant_id: i32) -> RepositoryResult<i64> {
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        let total = appointments::table
            .filter(appointments::consultant_id.eq(consultant_id))
            .count()
            .get_result(&mut conn)?;

        Ok(total)
    }
}

impl AppointmentWriter for DieselRepository {
    fn create_appointment(
        &self,
        new_appointment: &NewAppointment,
    ) -> RepositoryResult<Appointment> {
        use crate::models::appointment::{
            Appointment as DbAppointment, NewAppointment as DbNewAppointment,
        };
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        let insertable: DbNewAppointment = new_appointment.into();
        let created = diesel::insert_into(appointments::table)
            .values(&insertable)
            .get_result::<DbAppointment>(&mut conn)?;

        Ok(created.into())
    }

    fn update_appointment(
        &self,
        appointment_id: i32,
        updates: &UpdateAppointment,
    ) -> RepositoryResult<Appointment> {
        use crate::models::appointment::{
            Appointment as DbAppointment, UpdateAppointment as DbUpdateAppointment,
        };
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateAppointment = updates.into();

        let updated = diesel::update(appointments::table.find(appointment_id))
            .set(&db_updates)
            .get_result::<DbAppointment>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_appointment(&self, appointment_id: i32) -> RepositoryResult<()> {
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        diesel::delete(appointments::table.find(appointment_id)).execute(&mut conn)?;
        Ok(())
    }
}
