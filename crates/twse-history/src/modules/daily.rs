//! 일별 시세 파서 (`STOCK_DAY_*.csv`).
//!
//! 컬럼 구성: 日期, 成交股數, 成交金額, 開盤價, 最高價, 最低價, 收盤價, 漲跌價差, 成交筆數

use crate::encoding::read_text_with_fallback;
use crate::error::Result;
use crate::models::DailyRecord;
use crate::parse::{
    collect_records, ensure_columns, parse_count, parse_number, required, roc_to_ad_date,
    RowOutcome, SkipReason,
};
use std::path::Path;

/// 일별 행의 최소 컬럼 수
pub const DAILY_MIN_COLUMNS: usize = 7;

/// 일별 CSV 파일 하나를 파싱.
///
/// 잘못된 행은 조용히 버린다. 디코딩 실패와 I/O 오류만 에러로 반환.
pub fn parse_daily_file(path: impl AsRef<Path>) -> Result<Vec<DailyRecord>> {
    let path = path.as_ref();
    let text = read_text_with_fallback(path)?;
    Ok(collect_records(path, &text, parse_daily_row))
}

/// 데이터 행 하나를 [`DailyRecord`]로 변환.
pub fn parse_daily_row(row: &[String]) -> RowOutcome<DailyRecord> {
    build_daily_record(row).into()
}

fn build_daily_record(row: &[String]) -> std::result::Result<DailyRecord, SkipReason> {
    ensure_columns(row, DAILY_MIN_COLUMNS)?;

    let date = roc_to_ad_date(&row[0])?;
    let volume = required(parse_count(&row[1])?, "volume")?;
    let open = required(parse_number(&row[3])?, "open")?;
    let high = required(parse_number(&row[4])?, "high")?;
    let low = required(parse_number(&row[5])?, "low")?;
    let close = required(parse_number(&row[6])?, "close")?;

    Ok(DailyRecord {
        date,
        open,
        high,
        low,
        close,
        adjust_close: close,
        volume,
    })
}
