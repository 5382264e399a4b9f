use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};

use crate::domain::consultant::{Consultant, NewConsultant, UpdateConsultant};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ConsultantListQuery, ConsultantReader, ConsultantWriter, DieselRepository};

impl ConsultantReader for DieselRepository {
    fn get_consultant_by_id(&self, id: i32) -> RepositoryResult<Option<Consultant>> {
        use crate::models::consultant::Consultant as DbConsultant;
        use crate::schema::consultants;

        let mut conn = self.conn()?;
        let consultant = consultants::table
            .find(id)
            .first::<DbConsultant>(&mut conn)
            .optional()?;

        Ok(consultant.map(Into::into))
    }

    fn list_consultants(&self, query: ConsultantListQuery) -> RepositoryResult<Vec<Consultant>> {
        use crate::models::consultant::Consultant as DbConsultant;
        use crate::schema::consultants;

        let mut conn = self.conn()?;
        let mut stmt = consultants::table.into_boxed();

        if let Some(term) = query.search {
            let pattern = format!("%{term}%");
            // The rate column is numeric but searchable as text, so the
            // pattern is matched against its SQL text rendering as well.
            stmt = stmt.filter(
                consultants::name.like(pattern.clone()).or(
                    sql::<Bool>("CAST(hourly_rate AS TEXT) LIKE ").bind::<Text, _>(pattern),
                ),
            );
        }

        stmt = stmt.order(consultants::id.asc());

        if let Some(pagination) = query.pagination {
            let per_page = pagination.per_page as i64;
            let page = pagination.page.max(1) as i64;
            stmt = stmt.limit(per_page).offset(per_page * (page - 1));
        }

        let items = stmt
            .load::<DbConsultant>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl ConsultantWriter for DieselRepository {
    fn create_consultant(&self, new_consultant: &NewConsultant) -> RepositoryResult<Consultant> {
        use crate::models::consultant::{Consultant as DbConsultant, NewConsultant as DbNewConsultant};
        use crate::schema::consultants;

        let mut conn = self.conn()?;
        let insertable: DbNewConsultant = new_consultant.into();
        let created = diesel::insert_into(consultants::table)
            .values(&insertable)
            .get_result::<DbConsultant>(&mut conn)?;

        Ok(created.into())
    }

    fn update_consultant(
        &self,
        consultant_id: i32,
        updates: &UpdateConsultant,
    ) -> RepositoryResult<Consultant> {
        use crate::models::consultant::{
            Consultant as DbConsultant, UpdateConsultant as DbUpdateConsultant,
        };
        use crate::schema::consultants;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateConsultant = updates.into();

        let updated = diesel::update(consultants::table.find(consultant_id))
            .set(&db_updates)
            .get_result::<DbConsultant>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_consultant(&self, consultant_id: i32) -> RepositoryResult<()> {
        use crate::schema::consultants;

        let mut conn = self.conn()?;
        diesel::delete(consultants::table.find(consultant_id)).execute(&mut conn)?;
        Ok(())
    }
}
