use std::net::SocketAddr;

use axum::{extract::Request, Router};
use hyper::body::Incoming;
use hyper_util::rt::TokioIo;
use tokio::{
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};
use tower::Service;

use crate::routes::healthcheck;

/// Address the probe listens on: every interface, port 8080.
pub const LISTEN_ADDRESS: &str = "0.0.0.0:8080";

/// Route table of the probe. Every request goes through the single target comparison in
/// `healthcheck`, whatever its method.
pub fn router() -> Router {
    Router::new().fallback(healthcheck)
}

/// Binds `service_address` and spawns the accept loop.
///
/// The loop never ends on its own; the returned handle only resolves if the task panics or
/// is aborted. The bound address is returned so callers binding port `0` learn the real port.
pub async fn run_server(service_address: &str) -> anyhow::Result<(JoinHandle<()>, SocketAddr)> {
    let router = router();

    tracing::debug!("bind server address {service_address} ...");
    let listener = TcpListener::bind(service_address).await?;
    // Now socket is open and clients can already connect to it.
    let addr = listener.local_addr()?;
    tracing::info!("listening on {addr}");

    let join_handle = tokio::spawn(accept_loop(listener, router));

    Ok((join_handle, addr))
}

async fn accept_loop(listener: TcpListener, router: Router) {
    loop {
        let (socket, remote_addr) = match listener.accept().await {
            Ok(stream) => stream,
            Err(e) => {
                tracing::error!("failed to accept connection: {e}");
                continue;
            }
        };

        tracing::debug!("connection from {remote_addr} accepted");

        let tower_service = router.clone();
        tokio::spawn(async move {
            handle_client(socket, remote_addr, tower_service).await;
        });
    }
}

async fn handle_client(socket: TcpStream, remote_addr: SocketAddr, tower_service: Router) {
    // Hyper has its own `AsyncRead` and `AsyncWrite` traits; `TokioIo` converts between them.
    let socket = TokioIo::new(socket);

    // `Router` is always ready, so `poll_ready` is skipped.
    let hyper_service = hyper::service::service_fn(move |request: Request<Incoming>| {
        tower_service.clone().call(request)
    });

    // Completes when the client closes the connection or on a protocol/TCP error.
    if let Err(err) = hyper::server::conn::http1::Builder::new()
        .serve_connection(socket, hyper_service)
        .await
    {
        tracing::debug!("failed to serve connection {remote_addr}: {err:#}");
    }

    tracing::debug!("client connection {remote_addr} closed");
}
