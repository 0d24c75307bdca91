//! 히스토리 JSON 문서 조립 및 기록.

use super::annual::parse_annual_summaries;
use super::daily::parse_daily_file;
use super::monthly::parse_monthly_summaries;
use super::sources::ReportKind;
use crate::error::{HistoryError, Result};
use crate::models::{DailyRecord, HistoryDocument};
use std::path::Path;
use tracing::debug;

/// 모든 일별 CSV 파일을 파일명 순으로 읽어 이어 붙인다 (정렬 전).
///
/// 날짜가 겹쳐도 중복 제거하지 않는다.
pub fn collect_daily_records(csv_dir: &Path) -> Result<Vec<DailyRecord>> {
    let mut records = Vec::new();
    for path in ReportKind::Daily.list(csv_dir)? {
        let parsed = parse_daily_file(&path)?;
        debug!(file = %path.display(), records = parsed.len(), "일별 파일 처리");
        records.extend(parsed);
    }
    Ok(records)
}

/// 날짜 내림차순 (안정 정렬)
pub fn sort_daily_records(records: &mut [DailyRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// 디렉토리의 CSV로 히스토리 문서를 만든다.
pub fn build_history_document(csv_dir: &Path) -> Result<HistoryDocument> {
    let mut records = collect_daily_records(csv_dir)?;
    let annual_summaries = parse_annual_summaries(csv_dir)?;
    let monthly_summaries = parse_monthly_summaries(csv_dir)?;

    sort_daily_records(&mut records);

    Ok(HistoryDocument {
        records,
        dividends: Vec::new(),
        annual_summaries,
        monthly_summaries,
    })
}

/// 문서를 JSON 파일로 기록. 대상 파일은 항상 덮어쓴다.
pub fn write_history_json(document: &HistoryDocument, output_json: &Path) -> Result<()> {
    let bytes = document.to_json_bytes()?;
    std::fs::write(output_json, bytes).map_err(|e| HistoryError::io(output_json, e))
}

/// `csv_dir`로 문서를 만들어 `output_json`에 기록하고 일별 레코드 수를 반환.
pub fn build_history_json(csv_dir: &Path, output_json: &Path) -> Result<usize> {
    let document = build_history_document(csv_dir)?;
    write_history_json(&document, output_json)?;
    Ok(document.records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, close: f64) -> DailyRecord {
        DailyRecord {
            date: date.to_string(),
            open: close,
            high: close,
            low: close,
            close,
            adjust_close: close,
            volume: 1,
        }
    }

    #[test]
    fn test_sort_daily_records_is_stable_descending() {
        let mut records = vec![
            record("2023/12/29", 1.0),
            record("2024/01/04", 2.0),
            record("2023/12/29", 3.0),
            record("2024/01/02", 4.0),
        ];
        sort_daily_records(&mut records);

        let keys: Vec<_> = records.iter().map(|r| (r.date.as_str(), r.close)).collect();
        assert_eq!(
            keys,
            vec![
                ("2024/01/04", 2.0),
                ("2024/01/02", 4.0),
                ("2023/12/29", 1.0),
                ("2023/12/29", 3.0),
            ]
        );
    }
}
