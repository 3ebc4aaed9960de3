use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
};

use engine::WalletService;

use crate::wallets;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub wallets: WalletService,
}

impl ServerState {
    pub fn new(wallets: WalletService) -> Self {
        Self { wallets }
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    tracing::info!(%method, %uri, status = response.status().as_u16(), "request handled");
    response
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/api/wallet",
            get(wallets::list)
                .post(wallets::create)
                .put(wallets::update),
        )
        .route(
            "/api/wallet/{id}",
            get(wallets::find_by_id).delete(wallets::delete),
        )
        .route("/api/wallet/wallets/{name}", get(wallets::find_by_name))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

pub async fn run_with_listener(
    service: WalletService,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(service))).await
}

pub fn spawn_with_listener(
    service: WalletService,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(service, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
