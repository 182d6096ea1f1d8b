use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

const MAX_REQUEST_HEAD: usize = 8 * 1024;

/// Canned-response HTTP/1.1 server bound to an ephemeral local port.
pub(crate) struct TestServer {
    url: String,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Answers every request with `status` after sleeping for `delay`.
pub(crate) async fn spawn_status_server(
    status: u16,
    delay: Duration,
) -> std::io::Result<TestServer> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);

    let handle = tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let hits = Arc::clone(&server_hits);
            tokio::spawn(async move {
                drop(respond(stream, &hits, status, delay).await);
            });
        }
    });

    Ok(TestServer {
        url: format!("http://{}/", addr),
        hits,
        handle,
    })
}

/// Returns a URL on a local port nobody listens on.
pub(crate) async fn refused_url() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

async fn respond(
    mut stream: TcpStream,
    hits: &AtomicUsize,
    status: u16,
    delay: Duration,
) -> std::io::Result<()> {
    let mut head = Vec::new();
    let mut buffer = [0u8; 1024];
    loop {
        let read = stream.read(&mut buffer).await?;
        if read == 0 {
            return Ok(());
        }
        head.extend_from_slice(buffer.get(..read).unwrap_or_default());
        if head.windows(4).any(|window| window == b"\r\n\r\n") || head.len() >= MAX_REQUEST_HEAD
        {
            break;
        }
    }

    hits.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(delay).await;
    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        status
    );
    stream.write_all(response.as_bytes()).await?;
    stream.flush().await?;
    stream.shutdown().await
}
