//! Local preview server
//!
//! Serves the same `index.html` shell the export writes, the viewer package,
//! and a small read-only JSON API over the content.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path as UrlPath, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use wiki_web::{static_site, Page, PageSummary, Wiki};

/// Where the viewer package is mounted
pub const PKG_ROUTE: &str = "/pkg";

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built viewer package served under [`PKG_ROUTE`]
    pub pkg_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            pkg_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Shared handler state
pub struct SiteState {
    pub wiki: Wiki,
    index_html: String,
}

impl SiteState {
    pub fn new(wiki: Wiki) -> std::io::Result<Self> {
        let index_html = static_site::render_index(&wiki, PKG_ROUTE)?;
        Ok(Self { wiki, index_html })
    }
}

pub fn router(state: Arc<SiteState>, pkg_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/api/wiki", get(wiki_handler))
        .route("/api/search", get(search_handler))
        .route("/api/pages/{slug}", get(page_handler))
        .with_state(state);

    if let Some(dir) = pkg_dir {
        router = router.nest_service(PKG_ROUTE, ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http())
}

pub async fn serve(wiki: Wiki, config: ServerConfig) -> anyhow::Result<()> {
    if config.pkg_dir.is_none() {
        tracing::warn!("no --pkg-dir given; the page will stay on its loading notice");
    }

    let state = Arc::new(SiteState::new(wiki).context("failed to render index.html")?);
    let app = router(state, config.pkg_dir.as_deref());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "serving wiki");
    println!("Serving the wiki at http://{addr}/ (press Ctrl+C to stop)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn index_handler(State(state): State<Arc<SiteState>>) -> Html<String> {
    Html(state.index_html.clone())
}

async fn wiki_handler(State(state): State<Arc<SiteState>>) -> Json<Wiki> {
    Json(state.wiki.clone())
}

#[derive(serde::Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn search_handler(
    State(state): State<Arc<SiteState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<PageSummary>> {
    let results = state
        .wiki
        .search(&query.q)
        .into_iter()
        .map(PageSummary::from)
        .collect();
    Json(results)
}

async fn page_handler(
    State(state): State<Arc<SiteState>>,
    UrlPath(slug): UrlPath<String>,
) -> impl IntoResponse {
    match state.wiki.find_page(&slug) {
        Some(page) => (StatusCode::OK, Json(Some(page.clone()))),
        None => (StatusCode::NOT_FOUND, Json(None::<Page>)),
    }
}
