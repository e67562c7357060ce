//! HTTPS 监听
//!
//! 每个连接：TLS 握手（受读超时限制）→ hyper 自动协商 HTTP/1.1 或 HTTP/2。
//! 请求头读取受读超时限制，连接空闲超过空闲超时后优雅关闭。
//! 写超时由路由上的 `TimeoutLayer` 负责。

use axum::{extract::ConnectInfo, http::Request, Router};
use hyper::body::Incoming;
use hyper_util::{
    rt::{TokioExecutor, TokioIo, TokioTimer},
    server::conn::auto::Builder,
};
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;
use tokio_rustls::{
    rustls::{
        pki_types::{CertificateDer, PrivateKeyDer},
        ServerConfig,
    },
    TlsAcceptor,
};
use tower::ServiceExt;
use tracing::{debug, info};

use crate::config::constants::{IDLE_TIMEOUT, READ_TIMEOUT};
use crate::error::StartupError;

/// 连接级超时
#[derive(Clone, Copy, Debug)]
pub struct ConnectionTimeouts {
    /// TLS 握手与请求头读取
    pub read: Duration,
    /// 两个请求之间允许的最长空闲
    pub idle: Duration,
}

impl Default for ConnectionTimeouts {
    fn default() -> Self {
        Self {
            read: READ_TIMEOUT,
            idle: IDLE_TIMEOUT,
        }
    }
}

/// 从 PEM 文件加载证书链与私钥
pub fn load_tls_config(cert: &Path, key: &Path) -> Result<ServerConfig, StartupError> {
    let certs = load_certs(cert)?;
    let key = load_private_key(key)?;

    let mut config = ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .map_err(|e| StartupError::TlsConfig(e.to_string()))?;
    config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];
    Ok(config)
}

fn load_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>, StartupError> {
    let file = File::open(path).map_err(|source| StartupError::CertificateNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let certs = rustls_pemfile::certs(&mut BufReader::new(file))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StartupError::TlsConfig(format!("{}: {}", path.display(), e)))?;

    if certs.is_empty() {
        return Err(StartupError::TlsConfig(format!(
            "{}: no certificates found",
            path.display()
        )));
    }
    Ok(certs)
}

fn load_private_key(path: &Path) -> Result<PrivateKeyDer<'static>, StartupError> {
    let file = File::open(path).map_err(|source| StartupError::KeyNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    rustls_pemfile::private_key(&mut BufReader::new(file))
        .map_err(|e| StartupError::TlsConfig(format!("{}: {}", path.display(), e)))?
        .ok_or_else(|| {
            StartupError::TlsConfig(format!("{}: no private key found", path.display()))
        })
}

/// 绑定并阻塞服务，直到监听出错
pub async fn serve(
    app: Router,
    addr: SocketAddr,
    tls: ServerConfig,
    timeouts: ConnectionTimeouts,
) -> Result<(), StartupError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    info!(addr = %addr, "listening on https://{}", addr);

    serve_listener(listener, app, tls, timeouts).await
}

/// 在已绑定的监听上接受连接，accept 出错即返回
pub async fn serve_listener(
    listener: TcpListener,
    app: Router,
    tls: ServerConfig,
    timeouts: ConnectionTimeouts,
) -> Result<(), StartupError> {
    let acceptor = TlsAcceptor::from(Arc::new(tls));

    loop {
        let (stream, peer) = listener.accept().await.map_err(StartupError::Serve)?;
        let acceptor = acceptor.clone();
        let app = app.clone();
        tokio::spawn(async move {
            serve_connection(stream, peer, acceptor, app, timeouts).await;
        });
    }
}

async fn serve_connection(
    stream: TcpStream,
    peer: SocketAddr,
    acceptor: TlsAcceptor,
    app: Router,
    timeouts: ConnectionTimeouts,
) {
    let tls_stream = match tokio::time::timeout(timeouts.read, acceptor.accept(stream)).await {
        Ok(Ok(s)) => s,
        Ok(Err(e)) => {
            debug!(peer = %peer, error = %e, "TLS handshake failed");
            return;
        }
        Err(_) => {
            debug!(peer = %peer, "TLS handshake timed out");
            return;
        }
    };

    let activity = Arc::new(Notify::new());
    let request_activity = activity.clone();
    let service = hyper::service::service_fn(move |mut request: Request<Incoming>| {
        request_activity.notify_one();
        request.extensions_mut().insert(ConnectInfo(peer));
        app.clone().oneshot(request)
    });

    let mut builder = Builder::new(TokioExecutor::new());
    builder
        .http1()
        .timer(TokioTimer::new())
        .header_read_timeout(timeouts.read);

    let connection = builder.serve_connection(TokioIo::new(tls_stream), service);
    tokio::pin!(connection);

    let mut closing = false;
    loop {
        tokio::select! {
            result = connection.as_mut() => {
                if let Err(e) = result {
                    debug!(peer = %peer, error = %e, "Connection closed with error");
                }
                break;
            }
            _ = activity.notified() => {}
            _ = tokio::time::sleep(timeouts.idle), if !closing => {
                debug!(peer = %peer, "Closing idle connection");
                connection.as_mut().graceful_shutdown();
                closing = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let timeouts = ConnectionTimeouts::default();
        assert_eq!(timeouts.read, Duration::from_secs(10));
        assert_eq!(timeouts.idle, Duration::from_secs(60));
    }

    #[test]
    fn test_missing_certificate_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_tls_config(&dir.path().join("panel.crt"), &dir.path().join("panel.key"))
            .unwrap_err();
        assert!(matches!(err, StartupError::CertificateNotFound { .. }));
    }

    #[test]
    fn test_certificate_without_pem_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("panel.crt");
        let key = dir.path().join("panel.key");
        std::fs::write(&cert, "not a certificate").unwrap();
        std::fs::write(&key, "not a key").unwrap();

        let err = load_tls_config(&cert, &key).unwrap_err();
        assert!(matches!(err, StartupError::TlsConfig(_)));
    }

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("testdata/tls")
            .join(name)
    }

    fn connector() -> tokio_rustls::TlsConnector {
        use tokio_rustls::rustls::{ClientConfig, RootCertStore};

        let mut roots = RootCertStore::empty();
        let file = File::open(fixture("ca.crt")).unwrap();
        for cert in rustls_pemfile::certs(&mut BufReader::new(file)) {
            roots.add(cert.unwrap()).unwrap();
        }
        let config = ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();
        tokio_rustls::TlsConnector::from(Arc::new(config))
    }

    async fn spawn_server(timeouts: ConnectionTimeouts) -> SocketAddr {
        use axum::routing::get;

        let app = Router::new().route(
            "/peer",
            get(|ConnectInfo(peer): ConnectInfo<SocketAddr>| async move { peer.ip().to_string() }),
        );
        let tls = load_tls_config(&fixture("panel.crt"), &fixture("panel.key")).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve_listener(listener, app, tls, timeouts));
        addr
    }

    /// 读到对端关闭为止
    async fn read_until_closed<S>(stream: &mut S) -> String
    where
        S: tokio::io::AsyncRead + Unpin,
    {
        use tokio::io::AsyncReadExt;

        let mut received = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            match stream.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => received.extend_from_slice(&buf[..n]),
            }
        }
        String::from_utf8_lossy(&received).into_owned()
    }

    async fn tls_request(addr: SocketAddr, request: &str) -> tokio_rustls::client::TlsStream<TcpStream> {
        use tokio::io::AsyncWriteExt;
        use tokio_rustls::rustls::pki_types::ServerName;

        let tcp = TcpStream::connect(addr).await.unwrap();
        let mut stream = connector()
            .connect(ServerName::try_from("localhost").unwrap(), tcp)
            .await
            .unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();
        stream
    }

    #[test]
    fn test_loads_pem_fixture() {
        let config = load_tls_config(&fixture("panel.crt"), &fixture("panel.key")).unwrap();
        assert_eq!(
            config.alpn_protocols,
            vec![b"h2".to_vec(), b"http/1.1".to_vec()]
        );
    }

    #[tokio::test]
    async fn test_serves_https_with_peer_address() {
        let addr = spawn_server(ConnectionTimeouts::default()).await;

        let mut stream = tls_request(
            addr,
            "GET /peer HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;
        let response = tokio::time::timeout(Duration::from_secs(5), read_until_closed(&mut stream))
            .await
            .unwrap();

        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.ends_with("127.0.0.1"), "{response}");
    }

    #[tokio::test]
    async fn test_idle_connection_is_closed() {
        let addr = spawn_server(ConnectionTimeouts {
            read: Duration::from_secs(5),
            idle: Duration::from_millis(200),
        })
        .await;

        let mut stream = tls_request(addr, "GET /peer HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        let response = tokio::time::timeout(Duration::from_secs(3), read_until_closed(&mut stream))
            .await
            .expect("keep-alive connection should be closed after the idle timeout");

        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    }

    #[tokio::test]
    async fn test_stalled_handshake_is_dropped() {
        let addr = spawn_server(ConnectionTimeouts {
            read: Duration::from_millis(200),
            idle: Duration::from_secs(60),
        })
        .await;

        let mut tcp = TcpStream::connect(addr).await.unwrap();
        let received = tokio::time::timeout(Duration::from_secs(3), read_until_closed(&mut tcp))
            .await
            .expect("server should drop a client that never completes the handshake");

        assert!(received.is_empty());
    }
}
