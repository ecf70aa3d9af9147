use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_feedback::{FeedbackService, MongoFeedbackRepository};
use domain_videos::{MongoVideoRepository, VideoService};
use feedback_api::{api, config::Config, graphql::build_schema, state::AppState};
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        database = config.mongodb.database(),
        "Connecting to MongoDB"
    );

    // No retry: a failed connection ends the process.
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb)
        .await
        .inspect_err(|e| error!("MongoDB connection failed: {}", e))?;

    let db = mongo_client.database(config.mongodb.database());

    let feedback_repository = MongoFeedbackRepository::new(db.clone());
    feedback_repository.create_indexes().await?;

    let schema = build_schema(
        VideoService::new(MongoVideoRepository::new(db)),
        FeedbackService::new(feedback_repository),
    );

    let state = AppState {
        config,
        mongo_client,
    };

    let routes = api::routes(&state, schema).merge(health_router(state.config.app));
    let app = create_router(routes)?;

    info!("Starting feedback API with graceful shutdown (30s timeout)");

    let client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await?;

    info!("Feedback API shutdown complete");
    Ok(())
}
