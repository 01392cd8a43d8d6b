//! Documentation of the Mergington High School activities API.
//!
//! Students browse extracurricular activities and sign up or unregister with
//! their school email.
//!
//!
//!
//! # Routes
//!
//! | Method | Path | Notes |
//! |---|---|---|
//! | GET | `/` | Redirects to the landing page |
//! | GET | `/activities` | Every activity keyed by name |
//! | POST | `/activities/{activity_name}/signup?email=` | Adds the email to the roster |
//! | DELETE | `/activities/{activity_name}/unregister?email=` | Removes the email from the roster |
//! | GET | `/static/*` | Landing page assets |
//!
//! Errors come back as `{"detail": "..."}`:
//! - 404 when the activity does not exist
//! - 400 for a non school email, a duplicate signup, or unregistering someone not on the roster
//! - 422 when the `email` query parameter is missing
//!
//!
//!
//! # Notes
//!
//! ## State
//! All activities live in memory and are reseeded on every start. There is no
//! database, a restart drops every signup made since the last start.
//!
//! The registry sits behind a single `RwLock`. Listing takes the read side,
//! signup and unregister hold the write side across both the duplicate check
//! and the mutation.
//!
//! ## Capacity
//! `max_participants` is shown to students but not enforced unless
//! `ENFORCE_CAPACITY=true`.
//!
//!
//!
//! # Setup
//!
//! Run from the `backend` directory so `static/` resolves.
//! ```sh
//! cargo run --bin mergington
//! ```
//!
//! Override the port or asset directory.
//! ```sh
//! cargo run --bin mergington -- --port 9000 --static-dir ./static
//! ```
//!
//! Environment
//! - `RUST_HOST`, default `0.0.0.0`
//! - `RUST_PORT`, default `8000`
//! - `STATIC_DIR`, default `static`
//! - `SCHOOL_DOMAIN`, default `mergington.edu`
//! - `ENFORCE_CAPACITY`, default `false`
//! - `RUST_LOG`, e.g. `RUST_LOG=mergington=info`
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{delete, get, post},
};

use signal::ctrl_c;
#[cfg(unix)]
use signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod registry;
pub mod routes;
pub mod seed;
pub mod state;
pub mod utils;

use config::Config;
use error::ServerError;
use routes::{activities_handler, root_handler, signup_handler, unregister_handler};
use state::AppState;

pub fn init_tracing() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(root_handler))
        .route("/activities", get(activities_handler))
        .route("/activities/{activity_name}/signup", post(signup_handler))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_handler),
        )
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), ServerError> {
    info!("Initializing state...");
    let state = AppState::new(config);

    info!("Starting server...");

    let address = state.config.address();
    let app = app(state);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            return std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
