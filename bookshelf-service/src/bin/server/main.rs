use std::sync::Arc;

use auth::Authenticator;
use bookshelf_service::config::Config;
use bookshelf_service::domain::book::service::BookService;
use bookshelf_service::domain::category::service::CategoryService;
use bookshelf_service::domain::user::service::AuthService;
use bookshelf_service::inbound::http::router::create_router;
use bookshelf_service::outbound::repositories::PostgresBookRepository;
use bookshelf_service::outbound::repositories::PostgresCategoryRepository;
use bookshelf_service::outbound::repositories::PostgresUserRepository;
use bookshelf_service::user::models::EmailAddress;
use bookshelf_service::user::models::UserName;
use bookshelf_service::user::ports::AuthServicePort;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "bookshelf-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pg_pool.clone()));
    let book_repository = Arc::new(PostgresBookRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&authenticator),
        config.jwt.expiration_hours,
    ));
    let category_service = Arc::new(CategoryService::new(Arc::clone(&category_repository)));
    let book_service = Arc::new(BookService::new(book_repository, category_repository));

    let admin_name = UserName::new(config.admin.name)?;
    let admin_email = EmailAddress::new(config.admin.email)?;
    auth_service
        .ensure_admin(admin_name, admin_email, &config.admin.password)
        .await?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_service,
        book_service,
        category_service,
        authenticator,
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
