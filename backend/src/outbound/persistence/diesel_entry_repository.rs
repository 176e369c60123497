//! PostgreSQL-backed `EntryRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntryRepository, EntryRepositoryError};
use crate::domain::{Entry, EntryId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EntryRecord, EntryRow};
use super::pool::DbPool;
use super::schema::entries;

/// Diesel-backed implementation of the entry repository port.
#[derive(Clone)]
pub struct DieselEntryRepository {
    pool: DbPool,
}

impl DieselEntryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn decode(row: EntryRow) -> Result<Entry, EntryRepositoryError> {
    row.into_entry()
        .map_err(|err| EntryRepositoryError::query(err.to_string()))
}

#[async_trait]
impl EntryRepository for DieselEntryRepository {
    async fn insert(&self, entry: &Entry) -> Result<(), EntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(entries::table)
            .values(EntryRecord::from(entry))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn update(&self, entry: &Entry) -> Result<bool, EntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changed = diesel::update(entries::table.find(entry.id().as_uuid()))
            .set(EntryRecord::from(entry))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(changed > 0)
    }

    async fn delete(&self, id: &EntryId) -> Result<bool, EntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(entries::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>, EntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = entries::table
            .find(id.as_uuid())
            .select(EntryRow::as_select())
            .first::<EntryRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(decode).transpose()
    }

    async fn list_by_date_desc(&self) -> Result<Vec<Entry>, EntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = entries::table
            .order((entries::entry_date.desc(), entries::created_at.desc()))
            .select(EntryRow::as_select())
            .load::<EntryRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(decode).collect()
    }
}
