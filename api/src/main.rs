//! iPriced API Server
//!
//! Pricing service for a home-cooking business: ingredient registry,
//! recipe costing with margin, customer orders, and unit conversion
//! utilities. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{JsonIngredientRepository, JsonOrderRepository, JsonRecipeRepository, JsonStore};
use app::{IngredientService, OrderService, RecipeService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ingredient_service: Arc<IngredientService<JsonIngredientRepository>>,
    pub recipe_service: Arc<RecipeService<JsonRecipeRepository, JsonIngredientRepository>>,
    pub order_service: Arc<OrderService<JsonOrderRepository>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router over the given state
pub fn build_router(state: AppState) -> Router {
    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Rate-limited routes (login)
    let rate_limited_routes = Router::new()
        .route("/login", post(handlers::login))
        .layer(GovernorLayer {
            config: governor_config,
        });

    Router::new()
        // Health check
        .route("/health", get(health))
        // Ingredients
        .route(
            "/ingredients",
            get(handlers::list_ingredients).post(handlers::create_ingredient),
        )
        .route("/ingredients/:id", delete(handlers::delete_ingredient))
        // Recipes
        .route(
            "/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route("/recipes/calculate", post(handlers::calculate_recipe))
        .route("/recipes/:id", delete(handlers::delete_recipe))
        // Orders
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/orders/:id/status", patch(handlers::update_order_status))
        .route("/orders/:id", delete(handlers::delete_order))
        // Converters
        .route("/convert/basic", post(handlers::convert_basic))
        .route("/convert/culinary", post(handlers::convert_culinary))
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ipriced_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting iPriced API...");

    // Load configuration
    let config = Config::from_env();

    // Load collections from the data directory
    let store = JsonStore::new(config.data_dir.clone());
    let ingredient_repo = Arc::new(JsonIngredientRepository::load(store.clone()).await);
    let recipe_repo = Arc::new(JsonRecipeRepository::load(store.clone()).await);
    let order_repo = Arc::new(JsonOrderRepository::load(store).await);

    // Create application services
    let ingredient_service = Arc::new(IngredientService::new(ingredient_repo.clone()));
    let recipe_service = Arc::new(RecipeService::new(recipe_repo, ingredient_repo));
    let order_service = Arc::new(OrderService::new(order_repo));

    // Create app state
    let state = AppState {
        ingredient_service,
        recipe_service,
        order_service,
        config,
    };

    let app = build_router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
