use std::net::SocketAddr;

use talentflow_backend::{
    config::{get_config, init_config},
    database::{
        pool::{create_pool, run_migrations},
        repository::{EntityRepository, Persistence},
    },
    routes,
    seed::Seed,
    store::EntityStore,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    init_config()?;
    let config = get_config()?;

    let mut store = EntityStore::new();
    let persistence = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            run_migrations(&pool).await?;
            let repository = EntityRepository::new(pool);
            store.restore(repository.load().await?);
            info!(
                jobs = store.jobs.len(),
                candidates = store.candidates.len(),
                assessments = store.assessments.len(),
                "restored entities from local database"
            );
            Persistence::new(repository)
        }
        None => Persistence::disabled(),
    };

    if let Some(seed) = Seed::for_profile(config.seed_profile) {
        if store.seed_if_empty(seed) {
            info!(profile = ?config.seed_profile, "seeded entity store");
            if let Some(repository) = persistence.repository() {
                repository.save_all(&store).await?;
            }
        }
    }

    let app_state = AppState::new(config, store.shared(), persistence);

    let app = routes::api_router(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!(
        latency_min_ms = config.network.latency_min_ms,
        latency_max_ms = config.network.latency_max_ms,
        failure_rate = config.network.failure_rate,
        "Server listening on {}",
        addr
    );
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
