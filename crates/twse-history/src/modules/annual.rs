//! 연간 요약 파서 (`FMNPTK_*.csv`).
//!
//! 컬럼 구성: 年度, 成交股數, 成交金額, 成交筆數, 最高價, 日期, 最低價, 日期, 收盤平均價

use super::sources::ReportKind;
use crate::encoding::read_text_with_fallback;
use crate::error::Result;
use crate::models::AnnualSummary;
use crate::parse::{
    clean_text, collect_records, ensure_columns, parse_count, parse_number, required,
    roc_year_to_ad, RowOutcome, SkipReason,
};
use std::path::Path;
use tracing::{debug, info};

/// 연간 행의 최소 컬럼 수
pub const SUMMARY_MIN_COLUMNS: usize = 9;

/// 디렉토리의 연간 요약을 연도 내림차순으로 반환.
///
/// 파일명 순으로 첫 번째 `FMNPTK_*.csv`만 사용하고 나머지는 무시한다.
/// 파일이 없으면 빈 목록.
pub fn parse_annual_summaries(csv_dir: &Path) -> Result<Vec<AnnualSummary>> {
    let files = ReportKind::Annual.list(csv_dir)?;
    let Some(first) = files.first() else {
        debug!(dir = %csv_dir.display(), "연간 요약 파일 없음");
        return Ok(Vec::new());
    };

    if files.len() > 1 {
        info!(
            used = %first.display(),
            ignored = files.len() - 1,
            "연간 요약 파일이 여러 개입니다. 첫 번째 파일만 사용합니다"
        );
    }

    let mut summaries = parse_annual_file(first)?;
    sort_annual_summaries(&mut summaries);
    Ok(summaries)
}

/// 연간 요약 파일 하나를 파싱 (정렬하지 않음).
pub fn parse_annual_file(path: impl AsRef<Path>) -> Result<Vec<AnnualSummary>> {
    let path = path.as_ref();
    let text = read_text_with_fallback(path)?;
    Ok(collect_records(path, &text, parse_annual_row))
}

/// 연도 내림차순 (안정 정렬)
pub fn sort_annual_summaries(summaries: &mut [AnnualSummary]) {
    summaries.sort_by(|a, b| b.year.cmp(&a.year));
}

/// 데이터 행 하나를 [`AnnualSummary`]로 변환.
pub fn parse_annual_row(row: &[String]) -> RowOutcome<AnnualSummary> {
    build_annual_summary(row).into()
}

fn build_annual_summary(row: &[String]) -> std::result::Result<AnnualSummary, SkipReason> {
    ensure_columns(row, SUMMARY_MIN_COLUMNS)?;

    let year = roc_year_to_ad(&row[0])?;
    let volume = required(parse_count(&row[1])?, "volume")?;
    let amount = required(parse_number(&row[2])?, "amount")?;
    let trades = required(parse_count(&row[3])?, "trades")?;
    let high = required(parse_number(&row[4])?, "high")?;
    let high_date = clean_text(&row[5]);
    let low = required(parse_number(&row[6])?, "low")?;
    let low_date = clean_text(&row[7]);
    let average_close = required(parse_number(&row[8])?, "average_close")?;

    Ok(AnnualSummary {
        year,
        volume,
        amount,
        trades,
        high,
        high_date,
        low,
        low_date,
        average_close,
    })
}
