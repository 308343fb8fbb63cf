//! Axum-based RPC server.
//!
//! Accepts JSON-RPC requests at `POST /webrpc`. Every call gets an HTTP 200
//! with a JSON-RPC envelope; failures are reported in-band.
//!
//! The gateway is synchronous, so each call runs on the blocking pool under
//! the configured deadline. A call that overruns it, or whose worker panics,
//! is answered with an internal error carrying the request's id.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::dispatch::RpcState;
use crate::envelope::{Request, Response};
use crate::error::{RpcError, ServerError};
use crate::RpcConfig;

/// Path the RPC endpoint is mounted at.
pub const RPC_PATH: &str = "/webrpc";

#[derive(Clone)]
struct AppState {
    rpc: Arc<RpcState>,
    timeout: Duration,
}

/// Build the router serving [`RPC_PATH`].
pub fn router(rpc: Arc<RpcState>, timeout: Duration, enable_cors: bool) -> Router {
    let app = Router::new()
        .route(RPC_PATH, post(rpc_handler))
        .with_state(AppState { rpc, timeout });
    if enable_cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

async fn rpc_handler(State(app): State<AppState>, body: Bytes) -> Json<Response> {
    let request = match Request::parse(&body) {
        Ok(request) => request,
        Err((id, e)) => return Json(Response::error(id, &e)),
    };
    let id = request.id.clone();
    let method = request.method.clone();

    let rpc = app.rpc.clone();
    let task = tokio::task::spawn_blocking(move || rpc.handle(&request));

    let response = match tokio::time::timeout(app.timeout, task).await {
        Ok(Ok(response)) => response,
        Ok(Err(join_err)) => {
            error!(method = %method, error = %join_err, "rpc worker failed");
            Response::error(id, &RpcError::internal(method, join_err))
        }
        Err(_) => {
            warn!(method = %method, timeout_ms = app.timeout.as_millis() as u64, "rpc deadline exceeded");
            Response::error(id, &RpcError::internal(method, "deadline exceeded"))
        }
    };
    Json(response)
}

/// The RPC server, configured with a bind address and shared state.
pub struct RpcServer {
    pub config: RpcConfig,
    pub state: Arc<RpcState>,
}

impl RpcServer {
    pub fn new(config: RpcConfig, state: RpcState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    pub fn router(&self) -> Router {
        router(
            self.state.clone(),
            self.config.request_timeout(),
            self.config.enable_cors,
        )
    }

    /// Serve until `shutdown` resolves.
    pub async fn serve_with_shutdown<F>(&self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let bind_err = |source| ServerError::Bind {
            addr: format!("{}:{}", self.config.host, self.config.port),
            source,
        };
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr())
            .await
            .map_err(bind_err)?;
        let addr = listener.local_addr().map_err(bind_err)?;
        info!("RPC server listening on {}", addr);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("RPC server stopped");
        Ok(())
    }

    /// Serve until Ctrl-C.
    pub async fn start(&self) -> Result<(), ServerError> {
        self.serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("failed to listen for shutdown signal: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await
    }
}
