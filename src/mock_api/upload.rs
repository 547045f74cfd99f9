//! multipart 上傳解析
//!
//! 只記錄上傳檔案的中繼資料，內容讀取後即丟棄

use axum::extract::multipart::{Multipart, MultipartError};

/// 收到的音訊檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUpload {
    /// 用戶端提供的檔名
    pub file_name: Option<String>,
    /// 用戶端提供的 Content-Type
    pub content_type: Option<String>,
    /// 內容長度（bytes）
    pub size: usize,
}

/// 解析後的請求
#[derive(Debug, Default)]
pub struct ParsedUpload {
    pub audio: Option<AudioUpload>,
}

/// 讀完整個 multipart body，取出名為 `field_name` 的檔案欄位
///
/// 沒有 filename 的同名欄位視為一般文字欄位，不算上傳檔案。
pub async fn read_upload(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<ParsedUpload, MultipartError> {
    let mut parsed = ParsedUpload::default();

    while let Some(field) = multipart.next_field().await? {
        let is_audio = parsed.audio.is_none()
            && field.name() == Some(field_name)
            && field.file_name().is_some();

        if !is_audio {
            field.bytes().await?;
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let size = field.bytes().await?.len();

        parsed.audio = Some(AudioUpload {
            file_name,
            content_type,
            size,
        });
    }

    Ok(parsed)
}
