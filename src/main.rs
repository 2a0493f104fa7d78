//! Biblioteca Server - Library Catalog System
//!
//! REST API server for library catalog and circulation management.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("biblioteca_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Biblioteca Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/health/db", get(api::health::database_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Users
        .route("/usuarios", get(api::users::list_users))
        .route("/usuarios", post(api::users::create_user))
        .route("/usuarios/:id", get(api::users::get_user))
        .route("/usuarios/:id", put(api::users::update_user))
        .route("/usuarios/:id", delete(api::users::delete_user))
        // Authors
        .route("/autores", get(api::authors::list_authors))
        .route("/autores", post(api::authors::create_author))
        .route("/autores/:id", get(api::authors::get_author))
        .route("/autores/:id", put(api::authors::update_author))
        .route("/autores/:id", delete(api::authors::delete_author))
        // Publishers
        .route("/editoriales", get(api::publishers::list_publishers))
        .route("/editoriales", post(api::publishers::create_publisher))
        .route("/editoriales/:id", get(api::publishers::get_publisher))
        .route("/editoriales/:id", put(api::publishers::update_publisher))
        .route("/editoriales/:id", delete(api::publishers::delete_publisher))
        // Categories
        .route("/categorias", get(api::categories::list_categories))
        .route("/categorias", post(api::categories::create_category))
        .route("/categorias/:id", get(api::categories::get_category))
        .route("/categorias/:id", put(api::categories::update_category))
        .route("/categorias/:id", delete(api::categories::delete_category))
        // Books
        .route("/libros", get(api::books::list_books))
        .route("/libros", post(api::books::create_book))
        .route("/libros/:id", get(api::books::get_book))
        .route("/libros/:id", put(api::books::update_book))
        .route("/libros/:id", delete(api::books::delete_book))
        // Magazines
        .route("/revistas", get(api::magazines::list_magazines))
        .route("/revistas", post(api::magazines::create_magazine))
        .route("/revistas/:id", get(api::magazines::get_magazine))
        .route("/revistas/:id", put(api::magazines::update_magazine))
        .route("/revistas/:id", delete(api::magazines::delete_magazine))
        // Newspapers
        .route("/periodicos", get(api::newspapers::list_newspapers))
        .route("/periodicos", post(api::newspapers::create_newspaper))
        .route("/periodicos/:id", get(api::newspapers::get_newspaper))
        .route("/periodicos/:id", put(api::newspapers::update_newspaper))
        .route("/periodicos/:id", delete(api::newspapers::delete_newspaper))
        // Items
        .route("/items", get(api::items::list_items))
        .route("/items", post(api::items::create_item))
        .route(
            "/items/por-material/:tipo/:material_id",
            get(api::items::list_items_by_material),
        )
        .route("/items/:id", get(api::items::get_item))
        .route("/items/:id", put(api::items::update_item))
        .route("/items/:id", delete(api::items::delete_item))
        // Loans
        .route("/prestamos", get(api::loans::list_loans))
        .route("/prestamos", post(api::loans::create_loan))
        .route("/prestamos/:id", get(api::loans::get_loan))
        .route("/prestamos/:id", put(api::loans::update_loan))
        .route("/prestamos/:id", delete(api::loans::delete_loan))
        .route("/prestamos/:id/devolver", post(api::loans::return_loan))
        // Fines
        .route("/multas", get(api::fines::list_fines))
        .route("/multas", post(api::fines::create_fine))
        .route("/multas/:id", get(api::fines::get_fine))
        .route("/multas/:id", put(api::fines::update_fine))
        .route("/multas/:id", delete(api::fines::delete_fine))
        .route("/multas/:id/pagar", post(api::fines::pay_fine))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api_routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
