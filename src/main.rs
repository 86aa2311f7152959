use gym_registry::config::{run_migrations, AppConfig, DatabaseConfig};
use gym_registry::grpc::{self, AppContext};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;

    let ctx = AppContext::new(pool, &config.jwt_secret);
    let addr = config.server_address().parse()?;

    info!(%addr, "gym-registry gRPC server listening");
    grpc::serve(ctx, addr).await
}
