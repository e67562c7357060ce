//! Reality Panel - 主机管理面板（HTTPS）
//!
//! Usage:
//! - Default: `reality-panel` (:8443, /opt/reality-panel/{certs,web})
//! - Custom: `reality-panel --addr 127.0.0.1:9443 --cert panel.crt --key panel.key --web ./web`

use clap::Parser;
use std::time::Instant;

use reality_panel::config::TlsPanelArgs;

#[tokio::main]
async fn main() {
    let started_at = Instant::now();
    let args = TlsPanelArgs::parse();
    reality_panel::init_tracing(&args.log_level);

    if let Err(e) = reality_panel::run_tls_panel(args, started_at).await {
        tracing::error!(error = %e, "Reality Panel failed");
        std::process::exit(1);
    }
}
