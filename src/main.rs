use tokio::net::TcpListener;
use tracing::{error, info, warn};

use user_crud_server::{
    app::user::MemoryUserStore,
    build_app,
    infrastructure::{
        config::{Config, StoreKind},
        logger::Logger,
    },
};

#[cfg(feature = "database")]
use user_crud_server::{app::user::PgUserStore, infrastructure::database::DatabaseManager};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 不存在时忽略
    dotenv::dotenv().ok();
    Logger::init("info");

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let app = match config.store {
        StoreKind::Memory => {
            warn!("Using in-memory user store, data will not survive a restart");
            build_app(MemoryUserStore::new())
        }
        #[cfg(feature = "database")]
        StoreKind::Postgres => {
            let db = DatabaseManager::new(config.database_url()?, config.max_connections)
                .await
                .map_err(|e| {
                    error!("Failed to initialize database: {}", e);
                    e
                })?;
            build_app(PgUserStore::new(db.get_pool().clone()))
        }
        #[cfg(not(feature = "database"))]
        StoreKind::Postgres => {
            let e = user_crud_server::infrastructure::config::ConfigError::DatabaseFeatureDisabled;
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    let listener = TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;

    info!("User service running on http://{}", addr);
    info!("   GET    /api/user/:id  - Fetch one user");
    info!("   GET    /api/users     - Fetch all users");
    info!("   POST   /api/newuser   - Create user");
    info!("   PUT    /api/user/:id  - Update user");
    info!("   DELETE /api/user/:id  - Delete user");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
