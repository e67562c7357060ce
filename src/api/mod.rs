//! API 模块
//!
//! 路由表与路由组装。两个面板各有一张显式路由表（方法、路径、handler），
//! 启动时构造一次，再转换为 axum `Router`。

pub mod cert;
pub mod config_file;
pub mod fail2ban;
pub mod firewall;
pub mod health;
pub mod logs;
pub mod reality;
pub mod response;
pub mod service;
pub mod system;
pub mod time;
pub mod traffic;
pub mod tuning;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    handler::Handler,
    http::{request::Parts, Method},
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::constants::WRITE_TIMEOUT;
use crate::error::{ApiError, ApiResult};
use crate::middleware::access_log;
use crate::state::PanelState;
use response::JsonResponse;

/// 路由表中的一项
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    handler: MethodRouter<PanelState>,
}

impl Route {
    /// GET 路由，HEAD 不随 GET 放行
    pub fn get<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, PanelState>,
        T: 'static,
    {
        Self {
            method: Method::GET,
            path,
            handler: get(handler).head(method_not_allowed),
        }
    }

    pub fn post<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, PanelState>,
        T: 'static,
    {
        Self {
            method: Method::POST,
            path,
            handler: post(handler),
        }
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// 路由表
///
/// 每个路径只能出现一次，且只声明一个方法
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// 已注册的 (方法, 路径)
    pub fn entries(&self) -> impl Iterator<Item = (&Method, &'static str)> + '_ {
        self.routes.iter().map(|r| (&r.method, r.path))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// 转换为 axum 路由，未声明的方法统一返回 405 错误信封
    pub fn into_router(self) -> Router<PanelState> {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, route| {
                router.route(route.path, route.handler.fallback(method_not_allowed))
            })
    }
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// HTTP 面板路由表
pub fn plain_panel_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::get("/api/system/info", system::system_info),
        Route::get("/api/service/status", service::service_status),
        Route::post("/api/service/restart", service::restart_service),
        Route::get("/api/logs/systemd", logs::systemd_logs),
        Route::get("/api/traffic/summary", traffic::traffic_summary),
        Route::get("/api/firewall/rules", firewall::firewall_rules),
        Route::get("/api/reality/config", reality::reality_config),
    ])
}

/// HTTPS 面板路由表
///
/// 除 ping 外全部为占位实现
pub fn tls_panel_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::get("/api/ping", health::ping),
        // Reality
        Route::get("/api/reality/info", reality::reality_info),
        Route::post("/api/reality/update", reality::update_reality),
        Route::post("/api/reality/reset-keys", reality::reset_keys),
        Route::post("/api/reality/restart", reality::restart_reality),
        // 流量
        Route::get("/api/traffic/info", traffic::traffic_info),
        Route::post("/api/traffic/reset", traffic::reset_traffic),
        // 系统
        Route::get("/api/system/info", system::system_overview),
        Route::post("/api/system/timezone", system::set_timezone),
        Route::post("/api/system/swap", system::set_swap),
        // 防火墙
        Route::get("/api/firewall/list", firewall::list_ports),
        Route::post("/api/firewall/open", firewall::open_port),
        Route::post("/api/firewall/close", firewall::close_port),
        // 服务
        Route::get("/api/service/status", service::singbox_status),
        Route::post("/api/service/restart", service::restart_singbox),
        // 配置文件
        Route::get("/api/config/view", config_file::view_config),
        Route::post("/api/config/save", config_file::save_config),
        // BBR / 网络优先级
        Route::get("/api/bbr/status", tuning::bbr_status),
        Route::post("/api/bbr/enable", tuning::enable_bbr),
        Route::get("/api/network/priority", tuning::network_priority),
        Route::post("/api/network/set", tuning::set_network_priority),
        // 时间同步
        Route::get("/api/time/status", time::time_status),
        Route::post("/api/time/sync", time::sync_time),
        // Fail2ban
        Route::get("/api/fail2ban/status", fail2ban::fail2ban_status),
        Route::get("/api/fail2ban/jails", fail2ban::list_jails),
        Route::post("/api/fail2ban/unban", fail2ban::unban_ip),
        // 日志
        Route::get("/api/logs/singbox", logs::singbox_logs),
        Route::get("/api/logs/fail2ban", logs::fail2ban_logs),
        // 证书
        Route::get("/api/cert/status", cert::cert_status),
    ])
}

/// HTTP 面板：API 路由 + 静态文件
pub fn plain_app(state: PanelState, web_dir: &Path) -> Router {
    plain_panel_routes()
        .into_router()
        .fallback_service(ServeDir::new(web_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTPS 面板：API 路由 + 静态文件 + 访问日志 + 写超时
pub fn tls_app(state: PanelState, web_dir: &Path) -> Router {
    let router = tls_panel_routes()
        .into_router()
        .fallback_service(ServeDir::new(web_dir));
    with_tls_layers(router, WRITE_TIMEOUT).with_state(state)
}

/// 超过 `write_timeout` 仍未完成的请求返回 408
fn with_tls_layers(router: Router<PanelState>, write_timeout: Duration) -> Router<PanelState> {
    router
        .layer(TimeoutLayer::new(write_timeout))
        .layer(middleware::from_fn(access_log))
        .layer(TraceLayer::new_for_http())
}

/// 携带目标服务名的查询参数
///
/// `name` 重复出现时取第一个值，其余参数忽略
#[derive(Debug, Default)]
pub struct NameQuery {
    pub name: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for NameQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        let name = pairs
            .into_iter()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value);
        Ok(Self { name })
    }
}

impl NameQuery {
    /// 取出非空的服务名，缺失时返回 400
    pub fn require(self) -> ApiResult<String> {
        self.name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::bad_request("missing service name"))
    }
}

/// 占位响应：固定内容，与输入无关
pub(crate) fn placeholder(endpoint: &'static str, body: Value) -> JsonResponse<Value> {
    tracing::debug!(endpoint, "Serving placeholder payload");
    JsonResponse::ok(body)
}

/// 占位的写操作：`{"success": true}`
pub(crate) fn placeholder_success(endpoint: &'static str) -> JsonResponse<Value> {
    placeholder(endpoint, serde_json::json!({ "success": true }))
}
