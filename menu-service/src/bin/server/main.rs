use std::sync::Arc;

use auth::HashingCost;
use auth::PasswordHasher;
use auth::TokenService;
use menu_service::config::Config;
use menu_service::domain::authentication::service::Authenticator;
use menu_service::domain::category::service::CategoryService;
use menu_service::domain::food::service::FoodService;
use menu_service::domain::user::service::UserService;
use menu_service::inbound::http::router::create_router;
use menu_service::inbound::http::router::AppState;
use menu_service::outbound::database;
use menu_service::outbound::repositories::SqliteCategoryRepository;
use menu_service::outbound::repositories::SqliteFoodRepository;
use menu_service::outbound::repositories::SqliteUserRepository;
use menu_service::outbound::seed::SeedData;
use menu_service::outbound::seed::SeedOutcome;
use menu_service::outbound::seed::Seeder;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "menu-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        token_ttl_seconds = config.jwt.expiration_seconds,
        "Configuration loaded"
    );

    let pool = database::connect(&config.database).await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "sqlite",
        "Database connection pool created"
    );

    database::migrate(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let category_repository = Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let food_repository = Arc::new(SqliteFoodRepository::new(pool.clone()));

    if let Some(path) = &config.seed.path {
        let data = SeedData::from_file(path).await?;
        if Seeder::new(pool.clone()).seed(data).await? == SeedOutcome::Skipped {
            tracing::info!(path = %path, "Menu already populated, seeding skipped");
        }
    }

    let password_hasher = PasswordHasher::new(HashingCost::from(&config.password))?;
    let token_service = TokenService::new(config.jwt.secret.as_bytes());

    let state = AppState {
        user_service: Arc::new(UserService::new(
            Arc::clone(&user_repository),
            password_hasher.clone(),
        )),
        authenticator: Arc::new(Authenticator::new(
            user_repository,
            password_hasher,
            token_service,
            config.jwt.expiration_seconds,
        )?),
        category_service: Arc::new(CategoryService::new(category_repository)),
        food_service: Arc::new(FoodService::new(food_repository)),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
