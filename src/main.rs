//! Init Panel - 主机管理面板（HTTP）
//!
//! Usage:
//! - Default: `init-panel` (port 80, ./web)
//! - Custom: `init-panel --port 8080 --web-dir /srv/panel/web`

use clap::Parser;
use std::time::Instant;

use reality_panel::config::PlainPanelArgs;

#[tokio::main]
async fn main() {
    let started_at = Instant::now();
    let args = PlainPanelArgs::parse();
    reality_panel::init_tracing(&args.log_level);

    if let Err(e) = reality_panel::run_plain_panel(args, started_at).await {
        tracing::error!(error = %e, "Init Panel failed");
        std::process::exit(1);
    }
}
