//! Mock API HTTP 伺服器
//!
//! 使用 axum 框架提供單一上傳端點

use crate::mock_api::config::MockServerConfig;
use crate::mock_api::handlers::{classify_audio, AppState};
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::error::Error;
use std::fmt;
use std::io;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// 伺服器錯誤
#[derive(Debug)]
pub enum ServerError {
    /// 無法綁定位址
    Bind(String, io::Error),
    /// 執行期間錯誤
    Serve(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Bind(addr, e) => write!(f, "Failed to bind {}: {}", addr, e),
            ServerError::Serve(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl Error for ServerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServerError::Bind(_, e) => Some(e),
            ServerError::Serve(e) => Some(e),
        }
    }
}

/// 建立路由
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS 設定：允許所有來源（開發用）
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/audio",
            post(classify_audio).layer(DefaultBodyLimit::disable()),
        )
        .layer(cors)
        .with_state(state)
}

/// 啟動 Mock API 伺服器
pub async fn start_api_server(config: MockServerConfig) -> Result<(), ServerError> {
    serve(AppState::new(config)).await
}

/// 以指定狀態啟動伺服器，直到發生錯誤才返回
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr = state.config.bind_addr();
    log::info!(
        "Labels {:?}, delay {} ms, upload field '{}'",
        state.config.labels.labels(),
        state.config.delay_ms,
        state.config.upload_field
    );

    let app = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ServerError::Bind(addr.clone(), e))?;
    log::info!("Mock classification API listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
