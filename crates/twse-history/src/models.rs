//! 출력 JSON 문서 모델.
//!
//! 필드 선언 순서가 곧 JSON 키 순서다. 앱 쪽 디코더가 snake_case 키를 기대한다.

use crate::error::{HistoryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 일별 시세 레코드 (`STOCK_DAY_*.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// 거래일 (서기, `YYYY/MM/DD`)
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// 수정 종가. 배당 조정 소스가 없으므로 항상 `close`와 같다.
    pub adjust_close: f64,
    pub volume: u64,
}

/// 연간 요약 (`FMNPTK_*.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualSummary {
    /// 서기 연도
    pub year: String,
    pub volume: u64,
    pub amount: f64,
    pub trades: u64,
    pub high: f64,
    /// 원본 형식 그대로 (날짜 변환 없음)
    pub high_date: String,
    pub low: f64,
    pub low_date: String,
    pub average_close: f64,
}

/// 월간 요약 (`FMSRFK_*.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: String,
    /// 두 자리 월 (`01`..`12`)
    pub month: String,
    pub high: f64,
    pub low: f64,
    pub weighted_average: f64,
    pub trades: u64,
    pub amount: f64,
    pub volume: u64,
    pub turnover_rate: f64,
}

/// 종목별 히스토리 문서.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    /// 날짜 내림차순
    pub records: Vec<DailyRecord>,
    /// 예약 필드 (항상 비어 있음)
    pub dividends: Vec<serde_json::Value>,
    /// 연도 내림차순
    pub annual_summaries: Vec<AnnualSummary>,
    /// (연도, 월) 내림차순
    pub monthly_summaries: Vec<MonthlySummary>,
}

impl HistoryDocument {
    /// 4칸 들여쓰기 UTF-8 JSON으로 직렬화 (끝에 개행 포함).
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// 기록된 JSON 파일을 다시 읽어 들인다.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| HistoryError::io(path, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
