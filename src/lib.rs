pub mod board;
pub mod client;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod query;
pub mod routes;
pub mod runtime;
pub mod seed;
pub mod services;
pub mod store;

use crate::config::Config;
use crate::database::repository::Persistence;
use crate::services::{
    assessment_service::AssessmentService, candidate_service::CandidateService,
    job_service::JobService, network::SimulatedNetwork,
};
use crate::store::{EntityStore, SharedStore};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub network: SimulatedNetwork,
    pub job_service: JobService,
    pub candidate_service: CandidateService,
    pub assessment_service: AssessmentService,
}

impl AppState {
    pub fn new(config: &Config, store: SharedStore, persistence: Persistence) -> Self {
        let network = SimulatedNetwork::new(config.network.clone());

        let job_service = JobService::new(store.clone(), network.clone(), persistence.clone());
        let candidate_service = CandidateService::new(
            store.clone(),
            network.clone(),
            persistence.clone(),
            config.candidate_page_size,
        );
        let assessment_service =
            AssessmentService::new(store.clone(), network.clone(), persistence);

        Self {
            store,
            network,
            job_service,
            candidate_service,
            assessment_service,
        }
    }

    /// Memory-only state around an already populated store.
    pub fn in_memory(config: &Config, store: EntityStore) -> Self {
        Self::new(config, store.shared(), Persistence::disabled())
    }
}
