use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::header::{HeaderName, HeaderValue, CONTENT_TYPE},
    http::Method,
    routing::get,
    Router,
};
use clap::Parser;
use dotenvy::dotenv;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use co_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use co_common::store::{RecordStore, DEFAULT_JOB_COUNT, DEFAULT_WORKER_COUNT};

pub mod auth;
pub mod error;
pub mod handlers;

use auth::AuthConfig;
use error::ApiError;
use handlers::{health, jobs, workers};

#[derive(Debug, Clone, Parser)]
#[command(name = "co-api", about = "Search API over the ConnectO dummy-data store")]
struct Cli {
    /// Server port
    #[arg(long, env = "CO_PORT", default_value_t = 3002)]
    port: u16,

    /// API key for X-API-Key authentication; open access when unset
    #[arg(long, env = "CO_API_KEY")]
    api_key: Option<String>,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "CO_CORS_ORIGINS", default_value = "http://localhost:3000")]
    cors_origins: String,

    /// Number of workers to generate at startup
    #[arg(long, env = "CO_WORKER_COUNT", default_value_t = DEFAULT_WORKER_COUNT)]
    worker_count: usize,

    /// Number of jobs to generate at startup
    #[arg(long, env = "CO_JOB_COUNT", default_value_t = DEFAULT_JOB_COUNT)]
    job_count: usize,

    /// Store seed; a random seed is drawn when unset
    #[arg(long, env = "CO_STORE_SEED")]
    seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl AppConfig {
    fn from_cli(cli: &Cli) -> Result<Self, ApiError> {
        let cors_origins = cli
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>();

        if cors_origins.iter().any(|origin| origin == "*") {
            return Err(ApiError::BadRequest(
                "CO_CORS_ORIGINS must list explicit origins".into(),
            ));
        }

        Ok(Self {
            port: cli.port,
            cors_origins,
            auth: AuthConfig {
                api_key: cli.api_key.clone(),
            },
        })
    }

    pub fn for_tests(auth: AuthConfig) -> Self {
        Self {
            port: 3002,
            cors_origins: vec!["http://localhost:3000".into()],
            auth,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub config: AppConfig,
}

pub type SharedState = Arc<AppState>;

impl axum::extract::FromRef<SharedState> for AuthConfig {
    fn from_ref(input: &SharedState) -> AuthConfig {
        input.config.auth.clone()
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-api-key")])
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api_routes = Router::new()
        .route("/workers/search", get(workers::search_workers))
        .route("/workers/:id", get(workers::get_worker))
        .route("/jobs/search", get(jobs::search_jobs))
        .route("/jobs/:id", get(jobs::get_job));

    Router::new()
        .route("/livez", get(health::livez))
        .route("/readyz", get(health::readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Seeded state for router tests; pass an API key to exercise auth.
pub fn test_state(api_key: Option<&str>) -> SharedState {
    let auth = AuthConfig {
        api_key: api_key.map(str::to_string),
    };

    Arc::new(AppState {
        store: Arc::new(RecordStore::seeded(42)),
        config: AppConfig::for_tests(auth),
    })
}

pub async fn run() -> Result<(), ApiError> {
    dotenv().ok();
    init_tracing_subscriber("co-api");
    install_tracing_panic_hook("co-api");

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    let store = RecordStore::generate(cli.worker_count, cli.job_count, seed);
    info!(
        workers = store.workers.len(),
        jobs = store.jobs.len(),
        seed,
        "record store generated"
    );

    let state = Arc::new(AppState {
        store: Arc::new(store),
        config: config.clone(),
    });

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let app = create_router(state);

    info!(%addr, auth = config.auth.api_key.is_some(), "co-api listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))
}
