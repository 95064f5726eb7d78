//! Local persistence: one table per entity kind, keyed by entity id, with the
//! record stored as JSON.

use serde::{de::DeserializeOwned, Serialize};
use sqlx::SqlitePool;

use crate::error::{Error, Result};
use crate::models::assessment::Assessment;
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::models::{EntityId, Record};
use crate::seed::Seed;
use crate::store::EntityStore;

fn table_for(kind: &str) -> Result<&'static str> {
    match kind {
        "job" => Ok("jobs"),
        "candidate" => Ok("candidates"),
        "assessment" => Ok("assessments"),
        other => Err(Error::Internal(format!("no table for entity kind '{}'", other))),
    }
}

fn to_key(id: EntityId) -> Result<i64> {
    i64::try_from(id).map_err(|_| Error::Internal(format!("id {} does not fit in sqlite", id)))
}

#[derive(Clone)]
pub struct EntityRepository {
    pool: SqlitePool,
}

impl EntityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert<T: Record + Serialize>(&self, record: &T) -> Result<()> {
        let table = table_for(T::KIND)?;
        let body = serde_json::to_string(record)?;
        let statement = format!(
            "INSERT INTO {} (id, body) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET body = excluded.body",
            table
        );
        sqlx::query(&statement)
            .bind(to_key(record.id())?)
            .bind(body)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete<T: Record>(&self, id: EntityId) -> Result<()> {
        let table = table_for(T::KIND)?;
        let statement = format!("DELETE FROM {} WHERE id = ?1", table);
        sqlx::query(&statement)
            .bind(to_key(id)?)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn load_kind<T: Record + DeserializeOwned>(&self) -> Result<Vec<T>> {
        let table = table_for(T::KIND)?;
        let statement = format!("SELECT body FROM {} ORDER BY id", table);
        let rows = sqlx::query_scalar::<_, String>(&statement)
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|body| serde_json::from_str(body).map_err(Error::from))
            .collect()
    }

    pub async fn load(&self) -> Result<Seed> {
        Ok(Seed {
            jobs: self.load_kind::<Job>().await?,
            candidates: self.load_kind::<Candidate>().await?,
            assessments: self.load_kind::<Assessment>().await?,
        })
    }

    pub async fn save_all(&self, store: &EntityStore) -> Result<()> {
        for job in store.jobs.as_slice() {
            self.upsert(job).await?;
        }
        for candidate in store.candidates.as_slice() {
            self.upsert(candidate).await?;
        }
        for assessment in store.assessments.as_slice() {
            self.upsert(assessment).await?;
        }
        Ok(())
    }
}

/// Optional write-through to the local database.
///
/// A failed write is logged and otherwise ignored: the in-memory store has
/// already changed and stays the source of truth for the session.
#[derive(Clone, Default)]
pub struct Persistence {
    repository: Option<EntityRepository>,
}

impl Persistence {
    pub fn disabled() -> Self {
        Self { repository: None }
    }

    pub fn new(repository: EntityRepository) -> Self {
        Self {
            repository: Some(repository),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.repository.is_some()
    }

    pub fn repository(&self) -> Option<&EntityRepository> {
        self.repository.as_ref()
    }

    pub async fn upsert<T: Record + Serialize>(&self, record: &T) {
        if let Some(repository) = &self.repository {
            if let Err(e) = repository.upsert(record).await {
                tracing::error!(
                    entity = T::KIND,
                    id = record.id(),
                    error = ?e,
                    "failed to persist record"
                );
            }
        }
    }

    pub async fn delete<T: Record>(&self, id: EntityId) {
        if let Some(repository) = &self.repository {
            if let Err(e) = repository.delete::<T>(id).await {
                tracing::error!(
                    entity = T::KIND,
                    id,
                    error = ?e,
                    "failed to delete persisted record"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::pool::{create_pool, run_migrations};

    async fn repository() -> EntityRepository {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        EntityRepository::new(pool)
    }

    #[tokio::test]
    async fn round_trips_the_demo_seed() {
        let repo = repository().await;
        let mut store = EntityStore::new();
        store.seed_if_empty(Seed::demo());
        repo.save_all(&store).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.jobs, store.jobs.as_slice());
        assert_eq!(loaded.candidates, store.candidates.as_slice());
        assert_eq!(loaded.assessments, store.assessments.as_slice());
    }

    #[tokio::test]
    async fn upsert_replaces_and_delete_removes() {
        let repo = repository().await;
        let mut job = Seed::demo().jobs.remove(0);
        repo.upsert(&job).await.unwrap();
        job.title = "Staff Frontend Developer".into();
        repo.upsert(&job).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.jobs, vec![job.clone()]);

        repo.delete::<Job>(job.id).await.unwrap();
        assert!(repo.load().await.unwrap().jobs.is_empty());
    }
}
