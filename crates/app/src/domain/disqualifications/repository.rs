//! Disqualification record store gateway.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::{
    database::Db,
    domain::disqualifications::{
        delta::DeltaAt,
        models::{DisqualificationData, DisqualificationRecord},
    },
};

const GET_DISQUALIFICATION_SQL: &str = include_str!("sql/get_disqualification.sql");
const UPSERT_DISQUALIFICATION_SQL: &str = include_str!("sql/upsert_disqualification.sql");
const DELETE_DISQUALIFICATION_SQL: &str = include_str!("sql/delete_disqualification.sql");
const FIND_AT_OR_AFTER_DELTA_SQL: &str = include_str!("sql/find_at_or_after_delta.sql");

/// Get/put/delete access to the unified record collection, keyed by
/// officer id.
#[automock]
#[async_trait]
pub trait DisqualificationRepository: Send + Sync {
    /// Fetch the record stored against `officer_id`, if any.
    async fn find_by_id(
        &self,
        officer_id: &str,
    ) -> Result<Option<DisqualificationRecord>, sqlx::Error>;

    /// Insert the record, or overwrite whatever is stored against its
    /// officer id.
    async fn save(
        &self,
        record: &DisqualificationRecord,
    ) -> Result<DisqualificationRecord, sqlx::Error>;

    /// Remove the record stored against `officer_id`. Returns the number of
    /// rows removed.
    async fn delete_by_id(&self, officer_id: &str) -> Result<u64, sqlx::Error>;

    /// Records for `officer_id` whose stored delta is at or after
    /// `delta_at`. Used by the staleness guard; a non-empty result means the
    /// incoming delta has already been applied or superseded.
    async fn find_with_delta_at_ge(
        &self,
        officer_id: &str,
        delta_at: &DeltaAt,
    ) -> Result<Vec<DisqualificationRecord>, sqlx::Error>;
}

/// Postgres-backed record store.
#[derive(Debug, Clone)]
pub struct PgDisqualificationRepository {
    db: Db,
}

impl PgDisqualificationRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DisqualificationRepository for PgDisqualificationRepository {
    async fn find_by_id(
        &self,
        officer_id: &str,
    ) -> Result<Option<DisqualificationRecord>, sqlx::Error> {
        query_as::<Postgres, DisqualificationRecord>(GET_DISQUALIFICATION_SQL)
            .bind(officer_id)
            .fetch_optional(self.db.pool())
            .await
    }

    async fn save(
        &self,
        record: &DisqualificationRecord,
    ) -> Result<DisqualificationRecord, sqlx::Error> {
        query_as::<Postgres, DisqualificationRecord>(UPSERT_DISQUALIFICATION_SQL)
            .bind(&record.officer_id)
            .bind(record.delta_at.as_str())
            .bind(SqlxTimestamp::from(record.created_at))
            .bind(SqlxTimestamp::from(record.updated_at))
            .bind(record.officer_id_raw.as_deref())
            .bind(Json(&record.data))
            .fetch_one(self.db.pool())
            .await
    }

    async fn delete_by_id(&self, officer_id: &str) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_DISQUALIFICATION_SQL)
            .bind(officer_id)
            .execute(self.db.pool())
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn find_with_delta_at_ge(
        &self,
        officer_id: &str,
        delta_at: &DeltaAt,
    ) -> Result<Vec<DisqualificationRecord>, sqlx::Error> {
        query_as::<Postgres, DisqualificationRecord>(FIND_AT_OR_AFTER_DELTA_SQL)
            .bind(officer_id)
            .bind(delta_at.as_str())
            .fetch_all(self.db.pool())
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for DisqualificationRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(data): Json<DisqualificationData> = row.try_get("data")?;

        Ok(Self {
            officer_id: row.try_get("officer_id")?,
            delta_at: DeltaAt::new(row.try_get::<String, _>("delta_at")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            officer_id_raw: row.try_get("officer_id_raw")?,
            data,
        })
    }
}
