use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_catalog::{
    build_app,
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    repository::{InMemoryProductRepository, PgProductRepository},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let state = match &config.database_url {
        Some(database_url) => {
            let orm = create_orm_conn(database_url).await?;
            run_migrations(&orm).await?;
            tracing::info!("using PostgreSQL product repository");
            AppState::new(PgProductRepository::new(orm))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory");
            AppState::new(InMemoryProductRepository::new())
        }
    };

    let app = build_app(state, &config);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!("listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
