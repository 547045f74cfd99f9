//! Vorify mock 分類伺服器
//!
//! 前端開發用的假分類端點，不做任何實際的音訊分析。

pub mod mock_api;

pub use mock_api::api_server::{start_api_server, ServerError};
pub use mock_api::config::MockServerConfig;
pub use mock_api::types::LabelSet;
