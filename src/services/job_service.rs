use crate::database::repository::Persistence;
use crate::dto::job_dto::{CreateJobPayload, JobListQuery, JobPatch};
use crate::error::Result;
use crate::models::job::Job;
use crate::models::EntityId;
use crate::query::{select, JobFilter};
use crate::services::network::SimulatedNetwork;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct JobService {
    store: SharedStore,
    network: SimulatedNetwork,
    persistence: Persistence,
}

impl JobService {
    pub fn new(store: SharedStore, network: SimulatedNetwork, persistence: Persistence) -> Self {
        Self {
            store,
            network,
            persistence,
        }
    }

    pub async fn list(&self, query: &JobListQuery) -> Vec<Job> {
        let filter = JobFilter::from(query);
        let store = self.store.read().await;
        select(store.jobs.as_slice(), &filter)
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Job> {
        let store = self.store.read().await;
        store.jobs.get(id).cloned()
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        self.network.round_trip("create job").await?;
        let mut store = self.store.write().await;
        let job = store.jobs.insert(payload.into_job());
        self.persistence.upsert(&job).await;
        drop(store);
        tracing::info!(id = job.id, title = %job.title, "job created");
        Ok(job)
    }

    pub async fn update(&self, id: EntityId, patch: JobPatch) -> Result<Job> {
        self.network.round_trip("update job").await?;
        // The guard is held through the write-through so the database sees
        // updates in the same order as the store.
        let mut store = self.store.write().await;
        let job = store.jobs.update(id, patch).map_err(|e| {
            tracing::warn!(id, "update of unknown job");
            e
        })?;
        self.persistence.upsert(&job).await;
        drop(store);
        tracing::info!(id, archived = job.archived, "job updated");
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::pool::{create_pool, run_migrations};
    use crate::database::repository::EntityRepository;
    use crate::seed::Seed;
    use crate::store::EntityStore;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn overlapping_updates_persist_in_store_order() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repository = EntityRepository::new(pool);

        let mut store = EntityStore::new();
        store.seed_if_empty(Seed::demo());
        repository.save_all(&store).await.unwrap();
        let store = store.shared();

        let service = JobService::new(
            store.clone(),
            SimulatedNetwork::reliable(),
            Persistence::new(repository.clone()),
        );

        let handles: Vec<_> = (0..32)
            .map(|n| {
                let service = service.clone();
                tokio::spawn(async move {
                    let patch = JobPatch {
                        title: Some(format!("Frontend Developer rev {}", n)),
                        ..Default::default()
                    };
                    service.update(1, patch).await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let persisted = repository.load().await.unwrap();
        let store = store.read().await;
        assert_eq!(persisted.jobs, store.jobs.as_slice());
    }
}
