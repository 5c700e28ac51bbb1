//! Local TCP peers standing in for a monitoring server.
//!
//! Each peer binds an ephemeral port on `127.0.0.1` and serves a single
//! connection from a background thread.
use std::io::{Read as _, Write as _};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rcgen::{generate_simple_self_signed, CertifiedKey};
use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::{ServerConfig, ServerConnection, StreamOwned};

use monitor_status_updater::config::Configuration;
use monitor_status_updater::request::StatusUpdateRequest;
use monitor_status_updater::status::ServiceStatus;

/// How long a peer keeps its connection open when nobody releases it.
const PEER_LIFETIME: Duration = Duration::from_secs(10);

pub struct Peer {
    pub addr: SocketAddr,
    release: Sender<()>,
}

impl Peer {
    /// A peer that accepts the connection and never answers.
    pub fn silent() -> Self {
        Self::spawn(|_stream| {})
    }

    /// A peer that answers to the TLS handshake with a plain HTTP response.
    pub fn plain_http() -> Self {
        Self::spawn(|stream| {
            let _ = stream.write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n");
            let _ = stream.flush();
        })
    }

    fn spawn(on_accept: impl FnOnce(&mut std::net::TcpStream) + Send + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("it should bind an ephemeral port");
        let addr = listener.local_addr().expect("it should have a local address");
        let (release, released) = mpsc::channel::<()>();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                on_accept(&mut stream);

                let _ = stream.set_read_timeout(Some(Duration::from_millis(100)));
                let mut buffer = [0u8; 1024];
                while released.recv_timeout(Duration::from_millis(50)).is_err() {
                    match stream.read(&mut buffer) {
                        Ok(0) => break,
                        _ => continue,
                    }
                }
            }
            drop(released);
        });

        // Bound the peer lifetime even if the test never releases it.
        let watchdog = release.clone();
        thread::spawn(move || {
            thread::sleep(PEER_LIFETIME);
            let _ = watchdog.send(());
        });

        Self { addr, release }
    }
}

impl Drop for Peer {
    fn drop(&mut self) {
        let _ = self.release.send(());
    }
}

/// The request received by a [`TlsPeer`].
pub struct ReceivedRequest {
    pub request_line: String,
    /// Header names are lower case.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ReceivedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A TLS server with a self-signed certificate that answers one request
/// with the given status line, e.g. `401 Unauthorized`.
pub struct TlsPeer {
    pub addr: SocketAddr,
    received: Receiver<ReceivedRequest>,
}

impl TlsPeer {
    pub fn answering(status_line: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("it should bind an ephemeral port");
        let addr = listener.local_addr().expect("it should have a local address");
        let config = self_signed_server_config();
        let (sender, received) = mpsc::channel();

        thread::spawn(move || {
            if let Ok((socket, _)) = listener.accept() {
                serve_one_request(socket, config, status_line, &sender);
            }
        });

        Self { addr, received }
    }

    /// The request the peer received, if the client got past the handshake.
    pub fn received_request(&self) -> Option<ReceivedRequest> {
        self.received.recv_timeout(Duration::from_secs(5)).ok()
    }
}

fn self_signed_server_config() -> Arc<ServerConfig> {
    let CertifiedKey { cert, key_pair } =
        generate_simple_self_signed(vec!["localhost".to_owned()]).expect("it should generate a self-signed certificate");
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der()));

    let config = ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .expect("the ring provider should support the default protocol versions")
        .with_no_client_auth()
        .with_single_cert(vec![cert.der().clone()], key)
        .expect("it should accept the self-signed certificate");

    Arc::new(config)
}

fn serve_one_request(socket: TcpStream, config: Arc<ServerConfig>, status_line: &str, sender: &Sender<ReceivedRequest>) {
    let _ = socket.set_read_timeout(Some(Duration::from_secs(5)));
    let Ok(connection) = ServerConnection::new(config) else {
        return;
    };
    let mut stream = StreamOwned::new(connection, socket);

    // A failed handshake (client rejecting the certificate) ends here.
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    let _ = sender.send(request);

    let response = format!("HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
    stream.conn.send_close_notify();
    let _ = stream.conn.complete_io(&mut stream.sock);
}

fn read_request(stream: &mut StreamOwned<ServerConnection, TcpStream>) -> Option<ReceivedRequest> {
    let mut data = Vec::new();
    let mut buffer = [0u8; 1024];

    let head_end = loop {
        if let Some(position) = data.windows(4).position(|window| window == b"\r\n\r\n") {
            break position;
        }
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            return None;
        }
        data.extend_from_slice(&buffer[..read]);
    };

    let head = String::from_utf8(data[..head_end].to_vec()).ok()?;
    let mut lines = head.split("\r\n");
    let request_line = lines.next()?.to_owned();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_owned()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(name, _)| name == "content-length")
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = data[head_end + 4..].to_vec();
    while body.len() < content_length {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            return None;
        }
        body.extend_from_slice(&buffer[..read]);
    }

    Some(ReceivedRequest {
        request_line,
        headers,
        body,
    })
}

/// A local port nothing listens on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("it should bind an ephemeral port");
    listener.local_addr().expect("it should have a local address").port()
}

pub fn local_config(port: u16) -> Configuration {
    let mut config = Configuration::new("127.0.0.1", "admin", "secret");
    config.port = port;
    config.timeout = Duration::from_secs(1);
    config
}

pub fn sample_request() -> StatusUpdateRequest {
    StatusUpdateRequest::new("srv1", "disk-check", ServiceStatus::Ok, "Disk OK")
}
