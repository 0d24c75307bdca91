//! TWSE CSV 내보내기 → 히스토리 JSON 변환기.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - CSV 인코딩 정규화 (Big5/CP950 → BOM 포함 UTF-8)
//! - 일별 시세, 연간 요약, 월간 요약 파싱 (민국 기년 → 서기)
//! - 종목별 히스토리 JSON 문서 생성

pub mod config;
pub mod encoding;
pub mod error;
pub mod models;
pub mod modules;
pub mod parse;
pub mod stats;

pub use config::{HistoryConfig, HistoryTarget};
pub use error::{FormatError, HistoryError, Result};
pub use models::{AnnualSummary, DailyRecord, HistoryDocument, MonthlySummary};
pub use stats::BuildStats;
