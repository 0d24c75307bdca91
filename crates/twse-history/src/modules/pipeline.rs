//! 종목별 빌드 파이프라인.

use super::history_json::{build_history_document, write_history_json};
use super::normalize::normalize_folder;
use super::sources::ReportKind;
use crate::config::HistoryTarget;
use crate::error::Result;
use crate::stats::BuildStats;
use std::time::Instant;

/// 대상 쌍을 순서대로 처리.
///
/// `normalize`가 켜져 있으면 각 디렉토리의 CSV를 먼저 정규화한다.
/// 치명적 오류가 나면 즉시 중단하며, 그 전에 처리된 대상의 출력은 남는다.
pub fn run_pipeline(targets: &[HistoryTarget], normalize: bool) -> Result<Vec<BuildStats>> {
    let mut all_stats = Vec::with_capacity(targets.len());

    for target in targets {
        let start = Instant::now();
        let mut stats = BuildStats::new(&target.security);

        if normalize {
            stats.normalized_files = normalize_folder(&target.csv_dir)?;
            tracing::info!(
                dir = %target.csv_dir.display(),
                converted = stats.normalized_files,
                "[normalize] utf-8-sig 변환 완료"
            );
        }

        stats.daily_files = ReportKind::Daily.list(&target.csv_dir)?.len();
        let document = build_history_document(&target.csv_dir)?;
        write_history_json(&document, &target.output_json)?;

        stats.records = document.records.len();
        stats.annual_summaries = document.annual_summaries.len();
        stats.monthly_summaries = document.monthly_summaries.len();
        stats.elapsed = start.elapsed();

        tracing::info!(
            output = %target.output_json.display(),
            records = stats.records,
            "[json] 레코드 기록 완료"
        );

        all_stats.push(stats);
    }

    Ok(all_stats)
}
