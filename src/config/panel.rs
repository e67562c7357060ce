//! 启动配置校验
//!
//! 把命令行参数转换为校验过的运行配置，失败即 `StartupError`

use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use crate::config::cli::{PlainPanelArgs, TlsPanelArgs};
use crate::error::StartupError;

/// HTTP 面板运行配置
#[derive(Clone, Debug)]
pub struct PlainPanelConfig {
    /// 绝对路径，已确认存在
    pub web_dir: PathBuf,
    pub listen: SocketAddr,
}

impl PlainPanelConfig {
    pub fn from_args(args: &PlainPanelArgs) -> Result<Self, StartupError> {
        let web_dir = absolute(&args.web_dir)?;
        if !web_dir.exists() {
            return Err(StartupError::WebDirNotFound(web_dir));
        }

        Ok(Self {
            web_dir,
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, args.port)),
        })
    }
}

/// HTTPS 面板运行配置
#[derive(Clone, Debug)]
pub struct TlsPanelConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
    pub web_dir: PathBuf,
    pub listen: SocketAddr,
}

impl TlsPanelConfig {
    /// 证书与私钥必须存在；前端目录不做检查
    pub fn from_args(args: &TlsPanelArgs) -> Result<Self, StartupError> {
        std::fs::metadata(&args.cert).map_err(|source| StartupError::CertificateNotFound {
            path: args.cert.clone(),
            source,
        })?;
        std::fs::metadata(&args.key).map_err(|source| StartupError::KeyNotFound {
            path: args.key.clone(),
            source,
        })?;

        Ok(Self {
            cert: args.cert.clone(),
            key: args.key.clone(),
            web_dir: args.web.clone(),
            listen: parse_listen_addr(&args.addr)?,
        })
    }
}

/// 解析监听地址
///
/// 支持 `ip:port`、`[v6]:port`、`hostname:port` 以及省略 host 的 `:port`。
/// `:port` 只绑定 IPv4 的所有网卡；主机名取解析结果的第一个地址
pub fn parse_listen_addr(addr: &str) -> Result<SocketAddr, StartupError> {
    let invalid = || StartupError::InvalidListenAddr(addr.to_string());

    if let Some(port) = addr.strip_prefix(':') {
        let port: u16 = port.parse().map_err(|_| invalid())?;
        return Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)));
    }

    if let Ok(socket) = addr.parse() {
        return Ok(socket);
    }

    addr.to_socket_addrs()
        .map_err(|_| invalid())?
        .next()
        .ok_or_else(invalid)
}

fn absolute(path: &Path) -> Result<PathBuf, StartupError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|_| StartupError::WebDirNotFound(path.to_path_buf()))?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listen_addr_port_only() {
        let addr = parse_listen_addr(":8443").unwrap();
        assert_eq!(addr, "0.0.0.0:8443".parse().unwrap());
    }

    #[test]
    fn test_parse_listen_addr_full() {
        assert_eq!(
            parse_listen_addr("127.0.0.1:9000").unwrap(),
            "127.0.0.1:9000".parse().unwrap()
        );
        assert_eq!(
            parse_listen_addr("[::1]:9000").unwrap(),
            "[::1]:9000".parse().unwrap()
        );
    }

    #[test]
    fn test_parse_listen_addr_resolves_hostname() {
        let addr = parse_listen_addr("localhost:8443").unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8443);
    }

    #[test]
    fn test_parse_listen_addr_invalid() {
        assert!(matches!(
            parse_listen_addr("localhost"),
            Err(StartupError::InvalidListenAddr(_))
        ));
        assert!(parse_listen_addr(":http").is_err());
        assert!(parse_listen_addr(":70000").is_err());
    }

    #[test]
    fn test_plain_config_requires_web_dir() {
        let args = PlainPanelArgs {
            web_dir: PathBuf::from("/definitely/not/here/web"),
            port: 8080,
            log_level: "info".into(),
        };
        assert!(matches!(
            PlainPanelConfig::from_args(&args),
            Err(StartupError::WebDirNotFound(_))
        ));
    }

    #[test]
    fn test_plain_config_resolves_web_dir() {
        let dir = tempfile::tempdir().unwrap();
        let args = PlainPanelArgs {
            web_dir: dir.path().to_path_buf(),
            port: 8080,
            log_level: "info".into(),
        };

        let config = PlainPanelConfig::from_args(&args).unwrap();
        assert!(config.web_dir.is_absolute());
        assert_eq!(config.listen, "0.0.0.0:8080".parse().unwrap());
    }

    fn tls_args(dir: &Path) -> TlsPanelArgs {
        TlsPanelArgs {
            cert: dir.join("panel.crt"),
            key: dir.join("panel.key"),
            web: dir.join("web"),
            addr: ":8443".into(),
            log_level: "info".into(),
        }
    }

    #[test]
    fn test_tls_config_missing_cert() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("panel.key"), "key").unwrap();

        assert!(matches!(
            TlsPanelConfig::from_args(&tls_args(dir.path())),
            Err(StartupError::CertificateNotFound { .. })
        ));
    }

    #[test]
    fn test_tls_config_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("panel.crt"), "cert").unwrap();

        assert!(matches!(
            TlsPanelConfig::from_args(&tls_args(dir.path())),
            Err(StartupError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_tls_config_ok_without_web_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("panel.crt"), "cert").unwrap();
        std::fs::write(dir.path().join("panel.key"), "key").unwrap();

        let config = TlsPanelConfig::from_args(&tls_args(dir.path())).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8443".parse().unwrap());
        assert_eq!(config.web_dir, dir.path().join("web"));
    }
}
