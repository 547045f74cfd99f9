//! Mock 分類 API 模組
//!
//! 提供 `POST /audio` 端點，讓前端在沒有真正模型的情況下
//! 上傳音訊片段並取得隨機分類結果。

pub mod api_server;
pub mod classifier;
pub mod config;
pub mod handlers;
pub mod types;
pub mod upload;
