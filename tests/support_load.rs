use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    hits: Arc<AtomicUsize>,
}

impl ServerHandle {
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server that answers every request with `status`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server(status: u16) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let hits = Arc::clone(&server_hits);
                    thread::spawn(move || handle_client(stream, status, &hits));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}/", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            hits,
        },
    ))
}

/// Like [`spawn_http_server`], but skips when sockets are not permitted.
///
/// # Errors
///
/// Returns an error for any other listener failure.
pub fn spawn_http_server_or_skip(status: u16) -> Result<Option<(String, ServerHandle)>, String> {
    match spawn_http_server(status) {
        Ok(result) => Ok(Some(result)),
        Err(err) if err.contains("Operation not permitted") => {
            eprintln!("Skipping e2e test: {}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn handle_client(mut stream: TcpStream, status: u16, hits: &AtomicUsize) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    hits.fetch_add(1, Ordering::SeqCst);
    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        status
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `load_tester` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_load_tester<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = load_tester_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("LOAD_TESTER_LOG")
        .env_remove("LOAD_TESTER_URL")
        .env_remove("LOAD_TESTER_NUMBER")
        .env_remove("LOAD_TESTER_CONCURRENCY")
        .output()
        .map_err(|err| format!("run load_tester failed: {}", err))
}

fn load_tester_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_load_tester").map_or_else(
        || Err("CARGO_BIN_EXE_load_tester missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
