//! 빌드 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 디렉토리 하나에 대한 빌드 통계
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildStats {
    /// 종목 식별자 (예: "0050")
    pub security: String,
    /// 인코딩 변환으로 다시 쓴 파일 수
    pub normalized_files: usize,
    /// 읽은 일별 CSV 파일 수
    pub daily_files: usize,
    /// 기록된 일별 레코드 수
    pub records: usize,
    /// 연간 요약 수
    pub annual_summaries: usize,
    /// 월간 요약 수
    pub monthly_summaries: usize,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl BuildStats {
    /// 새 통계 객체 생성
    pub fn new(security: impl Into<String>) -> Self {
        Self {
            security: security.into(),
            ..Default::default()
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            security = %self.security,
            normalized_files = self.normalized_files,
            daily_files = self.daily_files,
            records = self.records,
            annual_summaries = self.annual_summaries,
            monthly_summaries = self.monthly_summaries,
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "빌드 완료"
        );
    }
}
