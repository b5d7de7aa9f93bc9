//! Development server with live reload and a view-model API

use anyhow::Result;
use axum::{
    body::Body,
    extract::{
        ws::{Message, WebSocket},
        Path, Query, State, WebSocketUpgrade,
    },
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tower_http::services::ServeDir;

use crate::content::{Catalog, Section};
use crate::view::{group_by_year_with_dividers, Listing, ViewState};
use crate::Folio;

/// Live reload script injected into HTML pages
const LIVE_RELOAD_SCRIPT: &str = r#"
<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        }
    };
    ws.onclose = function() {
        console.log('Live reload disconnected. Attempting to reconnect...');
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
</body>
"#;

/// The loaded site, replaced wholesale after each regeneration
struct Site {
    folio: Folio,
    catalog: Catalog,
}

/// Server state
struct ServerState {
    public_dir: PathBuf,
    site: RwLock<Site>,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

/// Start the development server over an already generated site
pub async fn start(
    folio: &Folio,
    catalog: Catalog,
    ip: &str,
    port: u16,
    watch: bool,
    open: bool,
) -> Result<()> {
    // Create broadcast channel for live reload notifications
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        public_dir: folio.public_dir.clone(),
        site: RwLock::new(Site {
            folio: folio.clone(),
            catalog,
        }),
        reload_tx,
        live_reload: watch,
    });

    let app = router(state.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("View API at {}/api/view/projects?tech=Rust&expanded=true", url);
    if watch {
        println!("Live reload enabled. Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    // Open browser if requested
    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    // Start file watcher if watch mode is enabled
    if watch {
        let folio = folio.clone();
        tokio::spawn(async move {
            if let Err(e) = watch_and_reload(folio, state).await {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/__livereload", get(livereload_handler))
        .route("/api/view/:section", get(view_handler))
        .route("/api/archive", get(archive_handler))
        .fallback(fallback_handler)
        .with_state(state)
}

/// Watch for file changes, regenerate and swap in the new record set
async fn watch_and_reload(folio: Folio, state: Arc<ServerState>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    // Create debouncer to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        move |result: DebounceEventResult| {
            let _ = tx.send(result);
        },
    )?;

    for dir in [&folio.content_dir, &folio.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = folio.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    while let Some(result) = rx.recv().await {
        let events = match result {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
                continue;
            }
        };

        // Filter out irrelevant events (like .git, .DS_Store, etc.)
        let relevant: Vec<_> = events
            .iter()
            .filter(|e| {
                let path_str = e.path.to_string_lossy();
                !path_str.contains(".git")
                    && !path_str.contains(".DS_Store")
                    && !path_str.ends_with('~')
            })
            .collect();

        if relevant.is_empty() {
            continue;
        }

        for event in &relevant {
            tracing::info!("File changed: {}", event.path.display());
        }

        tracing::info!("Regenerating...");
        let rebuilt = crate::commands::generate::reload(&folio).and_then(|folio| {
            let catalog = crate::commands::generate::build(&folio)?;
            Ok(Site { folio, catalog })
        });
        match rebuilt {
            Ok(site) => {
                *state.site.write().await = site;
                tracing::info!("Regenerated successfully");
                // Notify all connected clients to reload
                let _ = state.reload_tx.send(());
            }
            Err(e) => {
                tracing::error!("Generation failed: {:#}", e);
            }
        }
    }

    Ok(())
}

/// Query string of the view API: `?tech=Go,Rust&expanded=true`
#[derive(Debug, Default, Deserialize)]
struct ViewQuery {
    tech: Option<String>,
    #[serde(default)]
    expanded: bool,
}

impl ViewQuery {
    fn state(&self) -> ViewState {
        let tags = self
            .tech
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty());
        ViewState::new(tags, self.expanded)
    }
}

/// Recompute a section's view model for the requested state
async fn view_handler(
    State(state): State<Arc<ServerState>>,
    Path(section): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let section: Section = match section.parse() {
        Ok(section) => section,
        Err(e) => return (StatusCode::NOT_FOUND, e).into_response(),
    };

    let site = state.site.read().await;
    let listing = Listing::for_section(site.catalog.section(section), section);
    let view = listing.view(&query.state(), site.folio.config.display_limit(section));
    Json(view).into_response()
}

/// The certificate archive with its year dividers
async fn archive_handler(State(state): State<Arc<ServerState>>) -> Response {
    let site = state.site.read().await;
    let entries = group_by_year_with_dividers(&site.catalog.certificates);
    Json(entries).into_response()
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

/// Handle WebSocket connection for live reload
async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            // Wait for reload signal
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            // Handle incoming messages (ping/pong)
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Fallback handler that serves files and injects live reload script
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let path = request.uri().path();

    // Determine the file path
    let file_path = if path == "/" {
        state.public_dir.join("index.html")
    } else {
        let clean_path = path.trim_start_matches('/');
        let candidate = state.public_dir.join(clean_path);

        // If it's a directory, look for index.html
        if candidate.is_dir() {
            candidate.join("index.html")
        } else {
            candidate
        }
    };

    let is_html = file_path
        .extension()
        .map(|ext| ext == "html" || ext == "htm")
        .unwrap_or(false);

    if is_html && state.live_reload {
        match tokio::fs::read_to_string(&file_path).await {
            Ok(content) => Html(inject_live_reload(&content)).into_response(),
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    } else {
        // Serve static file using tower-http
        let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
        match service.try_call(request).await {
            Ok(response) => response.into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
        }
    }
}

/// Inject live reload script into HTML content
fn inject_live_reload(html: &str) -> String {
    if html.contains("</body>") {
        html.replacen("</body>", LIVE_RELOAD_SCRIPT, 1)
    } else {
        format!("{}{}", html, LIVE_RELOAD_SCRIPT)
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_query_state() {
        let query = ViewQuery {
            tech: Some("Go, Rust,,".to_string()),
            expanded: true,
        };
        let state = query.state();
        assert!(state.is_selected("Go"));
        assert!(state.is_selected("Rust"));
        assert_eq!(state.selected_tags.len(), 2);
        assert!(state.expanded);

        assert_eq!(ViewQuery::default().state(), ViewState::default());
    }

    #[test]
    fn test_inject_live_reload() {
        let html = inject_live_reload("<html><body><p>hi</p></body></html>");
        assert!(html.contains("__livereload"));
        assert!(html.ends_with("</html>"));
        assert_eq!(html.matches("</body>").count(), 1);

        assert!(inject_live_reload("<p>fragment</p>").contains("__livereload"));
    }
}
