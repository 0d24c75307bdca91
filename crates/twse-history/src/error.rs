//! 에러 타입 정의.

use std::path::PathBuf;
use thiserror::Error;

/// 파이프라인 전체를 중단시키는 치명적 오류.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// 후보 인코딩 중 어느 것으로도 디코딩할 수 없음
    #[error("Decode error: no candidate encoding could decode {}", .path.display())]
    Decode { path: PathBuf },

    /// 파일 시스템 오류 (디렉토리 없음, 권한 거부 등)
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 직렬화/역직렬화 오류
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정 오류
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HistoryError {
    /// 경로 정보를 포함한 I/O 에러 생성
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// 행 단위 필드 파싱 오류.
///
/// 해당 행만 건너뛰는 데 쓰이며 호출자에게 전파되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Format error: {message} ({raw:?})")]
pub struct FormatError {
    /// 원본 필드 값
    pub raw: String,
    /// 실패 사유
    pub message: String,
}

impl FormatError {
    pub fn new(raw: &str, message: impl Into<String>) -> Self {
        Self {
            raw: raw.to_string(),
            message: message.into(),
        }
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, HistoryError>;
