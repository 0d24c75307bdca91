//! 월간 요약 파서 (`FMSRFK_*.csv`).
//!
//! 컬럼 구성: 年度, 月份, 最高價, 最低價, 加權(A/B)平均價, 成交筆數, 成交金額, 成交股數, 週轉率(%)

use super::annual::SUMMARY_MIN_COLUMNS;
use super::sources::ReportKind;
use crate::encoding::read_text_with_fallback;
use crate::error::{FormatError, Result};
use crate::models::MonthlySummary;
use crate::parse::{
    clean_text, collect_records, ensure_columns, parse_count, parse_number, required,
    roc_year_to_ad, RowOutcome, SkipReason,
};
use std::path::Path;

/// 모든 월간 요약 파일을 파일명 순으로 읽어 (연도, 월) 내림차순으로 반환.
///
/// 정렬은 전체 파일을 읽은 뒤 한 번만 수행한다.
pub fn parse_monthly_summaries(csv_dir: &Path) -> Result<Vec<MonthlySummary>> {
    let mut summaries = Vec::new();
    for path in ReportKind::Monthly.list(csv_dir)? {
        summaries.extend(parse_monthly_file(&path)?);
    }

    sort_monthly_summaries(&mut summaries);
    Ok(summaries)
}

/// 월간 요약 파일 하나를 파싱 (정렬하지 않음).
pub fn parse_monthly_file(path: impl AsRef<Path>) -> Result<Vec<MonthlySummary>> {
    let path = path.as_ref();
    let text = read_text_with_fallback(path)?;
    Ok(collect_records(path, &text, parse_monthly_row))
}

/// (연도, 월) 내림차순 (안정 정렬)
pub fn sort_monthly_summaries(summaries: &mut [MonthlySummary]) {
    summaries.sort_by(|a, b| (&b.year, &b.month).cmp(&(&a.year, &a.month)));
}

/// 데이터 행 하나를 [`MonthlySummary`]로 변환.
pub fn parse_monthly_row(row: &[String]) -> RowOutcome<MonthlySummary> {
    build_monthly_summary(row).into()
}

/// `"1"` → `"01"`. 실수 표기는 허용하지 않는다.
fn parse_month(raw: &str) -> std::result::Result<String, FormatError> {
    let cleaned = clean_text(raw);
    let month: i64 = cleaned
        .trim()
        .parse()
        .map_err(|e| FormatError::new(raw, format!("invalid month: {}", e)))?;
    Ok(format!("{:02}", month))
}

fn build_monthly_summary(row: &[String]) -> std::result::Result<MonthlySummary, SkipReason> {
    ensure_columns(row, SUMMARY_MIN_COLUMNS)?;

    let year = roc_year_to_ad(&row[0])?;
    let month = parse_month(&row[1])?;
    let high = required(parse_number(&row[2])?, "high")?;
    let low = required(parse_number(&row[3])?, "low")?;
    let weighted_average = required(parse_number(&row[4])?, "weighted_average")?;
    let trades = required(parse_count(&row[5])?, "trades")?;
    let amount = required(parse_number(&row[6])?, "amount")?;
    let volume = required(parse_count(&row[7])?, "volume")?;
    let turnover_rate = required(parse_number(&row[8])?, "turnover_rate")?;

    Ok(MonthlySummary {
        year,
        month,
        high,
        low,
        weighted_average,
        trades,
        amount,
        volume,
        turnover_rate,
    })
}
