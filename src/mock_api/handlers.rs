//! Mock API 請求處理器

use crate::mock_api::classifier::{Delay, LabelPicker, RandomPicker, TokioDelay};
use crate::mock_api::config::MockServerConfig;
use crate::mock_api::types::{ClassificationResponse, ErrorResponse};
use crate::mock_api::upload::read_upload;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// 應用程式狀態，所有請求共用且不可變
#[derive(Clone)]
pub struct AppState {
    pub config: MockServerConfig,
    pub picker: Arc<dyn LabelPicker>,
    pub delay: Arc<dyn Delay>,
}

impl AppState {
    /// 使用隨機標籤與 tokio timer
    pub fn new(config: MockServerConfig) -> Self {
        Self::with_parts(config, Arc::new(RandomPicker), Arc::new(TokioDelay))
    }

    pub fn with_parts(
        config: MockServerConfig,
        picker: Arc<dyn LabelPicker>,
        delay: Arc<dyn Delay>,
    ) -> Self {
        Self {
            config,
            picker,
            delay,
        }
    }
}

fn missing_audio() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::missing_audio()),
    )
        .into_response()
}

/// POST /audio - 回傳隨機分類結果
pub async fn classify_audio(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(e) => {
            log::warn!("Rejected non-multipart request: {}", e);
            return missing_audio();
        }
    };

    let upload = match read_upload(multipart, &state.config.upload_field).await {
        Ok(parsed) => parsed.audio,
        Err(e) => {
            log::warn!("Failed to read multipart body: {}", e);
            None
        }
    };

    let Some(audio) = upload else {
        log::warn!(
            "Request without '{}' file field",
            state.config.upload_field
        );
        return missing_audio();
    };

    log::info!(
        "Received audio chunk: {} ({} bytes)",
        audio.file_name.as_deref().unwrap_or(""),
        audio.size
    );

    state.delay.wait(state.config.delay()).await;

    let classification = state.picker.pick(state.config.labels.labels());
    log::info!("Classification: {}", classification);

    (
        StatusCode::OK,
        Json(ClassificationResponse {
            classification: classification.to_string(),
        }),
    )
        .into_response()
}
