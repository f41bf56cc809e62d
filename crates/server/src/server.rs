use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, patch, post, put},
};
use std::sync::Arc;

use crate::{akhrajat, sync, transactions, zones};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// The ledger operator behind a request.
///
/// The desktop shell injects the `x-operator` header after its own login;
/// the server only requires that it is present and non-empty.
#[derive(Clone, Debug)]
pub struct Operator(pub String);

async fn require_operator(mut request: Request, next: Next) -> Result<Response, StatusCode> {
    let operator = request
        .headers()
        .get("x-operator")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    let Some(operator) = operator else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    request.extensions_mut().insert(Operator(operator));
    Ok(next.run(request).await)
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/transactions",
            post(transactions::create).get(transactions::list),
        )
        .route(
            "/transactions/{id}",
            get(transactions::get)
                .patch(transactions::update)
                .delete(transactions::remove),
        )
        .route("/tickets/next", get(transactions::next_ticket))
        .route("/akhrajat", post(akhrajat::create))
        .route("/akhrajat/{id}", put(akhrajat::update))
        .route("/akhrajat/{id}", delete(akhrajat::remove))
        .route("/zones", post(zones::zone_new).get(zones::zone_list))
        .route("/zones/{name}", patch(zones::zone_rename))
        .route(
            "/sub-units",
            post(zones::sub_unit_new).get(zones::sub_unit_list),
        )
        .route("/sub-units/{name}", patch(zones::sub_unit_rename))
        .route("/sync/tombstones", get(sync::tombstones))
        .route("/sync/tombstones/acknowledge", post(sync::acknowledge))
        .route("/sync/pending", get(sync::pending))
        .route("/sync/mark-synced", post(sync::mark_synced))
        .route_layer(middleware::from_fn(require_operator))
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
