//! Serving with a bounded graceful shutdown

use std::{future::Future, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// Serve `app` until `signal` resolves, then give in-flight requests at most
/// `drain_timeout` to finish
///
/// Connections still open when the deadline passes are abandoned and the
/// function returns.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    drain_timeout: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let shutdown_started = Arc::new(Notify::new());
    let notify = Arc::clone(&shutdown_started);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        signal.await;
        info!("Waiting up to {:?} for connections to close...", drain_timeout);
        notify.notify_one();
    });

    tokio::select! {
        result = server.into_future() => result,
        () = async {
            shutdown_started.notified().await;
            tokio::time::sleep(drain_timeout).await;
        } => {
            warn!("Shutdown timeout elapsed, dropping open connections");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use axum::routing::get;
    use tokio::{
        io::AsyncWriteExt,
        net::TcpStream,
        sync::{mpsc, oneshot},
    };

    use super::*;

    #[tokio::test]
    async fn returns_when_signal_fires_and_nothing_is_in_flight() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve(
            listener,
            Router::new(),
            async move {
                let _ = rx.await;
            },
            Duration::from_secs(30),
        ));

        tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), handle).await;
        assert!(result.unwrap().unwrap().is_ok());
    }

    #[tokio::test]
    async fn stuck_request_does_not_outlive_the_drain_timeout() {
        let (started_tx, mut started_rx) = mpsc::channel::<()>(1);
        let app = Router::new().route(
            "/slow",
            get(move || {
                let started_tx = started_tx.clone();
                async move {
                    let _ = started_tx.send(()).await;
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (signal_tx, signal_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve(
            listener,
            app,
            async move {
                let _ = signal_rx.await;
            },
            Duration::from_millis(200),
        ));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /slow HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        started_rx.recv().await.unwrap();

        let begin = Instant::now();
        signal_tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(10), handle).await;

        assert!(result.unwrap().unwrap().is_ok());
        assert!(begin.elapsed() < Duration::from_secs(5));
        drop(stream);
    }
}
