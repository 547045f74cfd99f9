//! Mock API 請求/回應類型定義

use serde::{Deserialize, Serialize};

/// 缺少上傳欄位時的錯誤訊息（前端依此字串判斷）
pub const MISSING_AUDIO_MESSAGE: &str = "No audio file in request";

/// 分類標籤集合
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabelSet {
    /// "Human" / "AI"
    #[default]
    TitleCase,
    /// "HUMAN" / "AI"
    UpperCase,
}

impl LabelSet {
    /// 取得兩個候選標籤
    pub fn labels(&self) -> &'static [&'static str; 2] {
        match self {
            LabelSet::TitleCase => &["Human", "AI"],
            LabelSet::UpperCase => &["HUMAN", "AI"],
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels().contains(&label)
    }
}

/// 分類回應
#[derive(Serialize, Deserialize, Debug)]
pub struct ClassificationResponse {
    /// 隨機選出的標籤
    pub classification: String,
}

/// 錯誤回應
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    /// 錯誤訊息
    pub error: String,
}

impl ErrorResponse {
    pub fn missing_audio() -> Self {
        Self {
            error: MISSING_AUDIO_MESSAGE.to_string(),
        }
    }
}
