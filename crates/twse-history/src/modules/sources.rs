//! 원본 CSV 파일 탐색.

use crate::error::{HistoryError, Result};
use std::path::{Path, PathBuf};

/// CSV 확장자 (대소문자 구분)
pub const CSV_EXTENSION: &str = ".csv";

/// TWSE 리포트 파일 계열.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// 個股日成交資訊 (`STOCK_DAY_*.csv`)
    Daily,
    /// 個股年成交資訊 (`FMNPTK_*.csv`)
    Annual,
    /// 個股月成交資訊 (`FMSRFK_*.csv`)
    Monthly,
}

impl ReportKind {
    /// 파일명 접두어
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Daily => "STOCK_DAY_",
            Self::Annual => "FMNPTK_",
            Self::Monthly => "FMSRFK_",
        }
    }

    /// 파일명이 이 계열 패턴(`<prefix>*.csv`)에 맞는지
    pub fn matches(&self, file_name: &str) -> bool {
        matches_pattern(file_name, self.prefix())
    }

    /// 디렉토리에서 이 계열 파일을 파일명 순으로 나열
    pub fn list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        list_csv_files(dir, self.prefix())
    }
}

/// 접두어가 비어 있으면 숨김 파일(`.`으로 시작)은 제외한다.
fn matches_pattern(file_name: &str, prefix: &str) -> bool {
    if prefix.is_empty() && file_name.starts_with('.') {
        return false;
    }
    file_name.len() >= prefix.len() + CSV_EXTENSION.len()
        && file_name.starts_with(prefix)
        && file_name.ends_with(CSV_EXTENSION)
}

/// `dir` 바로 아래에서 `<prefix>*.csv` 파일을 파일명 순으로 반환.
///
/// 하위 디렉토리는 보지 않는다. 디렉토리가 없으면 I/O 에러.
pub fn list_csv_files(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| HistoryError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| HistoryError::io(dir, e))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if matches_pattern(name, prefix) && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
