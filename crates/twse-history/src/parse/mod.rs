//! CSV 필드 파싱 기본 요소.

pub mod calendar;
pub mod numeric;
pub mod rows;

pub use calendar::{roc_to_ad_date, roc_year_to_ad};
pub use numeric::{parse_count, parse_number};
pub use rows::{
    collect_records, data_rows, ensure_columns, required, RowOutcome, SkipReason, HEADER_ROWS,
};

/// 앞뒤 공백과 따옴표 제거.
pub fn clean_text(raw: &str) -> String {
    raw.trim().replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  \"113/01/04\" "), "113/01/04");
        assert_eq!(clean_text("12月29日"), "12月29日");
    }
}
