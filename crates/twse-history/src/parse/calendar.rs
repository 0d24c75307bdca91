//! 민국(ROC) 기년 → 서기 변환.

use super::clean_text;
use crate::error::FormatError;

/// 민국 연도와 서기 연도의 차이.
pub const ROC_YEAR_OFFSET: i64 = 1911;

/// `"113/01/04"` → `"2024/01/04"`.
///
/// 정확히 세 개의 `/` 구분 요소가 있고 모두 정수여야 한다.
pub fn roc_to_ad_date(raw: &str) -> Result<String, FormatError> {
    let cleaned = clean_text(raw);
    let parts: Vec<&str> = cleaned.split('/').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(FormatError::new(raw, "unexpected date format"));
    };

    let ad_year = to_western_year(raw, parse_component(raw, year)?)?;
    let month = parse_component(raw, month)?;
    let day = parse_component(raw, day)?;

    Ok(format!("{:04}/{:02}/{:02}", ad_year, month, day))
}

/// `"113"` → `"2024"`.
pub fn roc_year_to_ad(raw: &str) -> Result<String, FormatError> {
    let cleaned = clean_text(raw);
    let year = parse_component(raw, &cleaned)?;
    Ok(to_western_year(raw, year)?.to_string())
}

fn to_western_year(raw: &str, roc_year: i64) -> Result<i64, FormatError> {
    roc_year
        .checked_add(ROC_YEAR_OFFSET)
        .ok_or_else(|| FormatError::new(raw, "year out of range"))
}

fn parse_component(raw: &str, component: &str) -> Result<i64, FormatError> {
    component
        .trim()
        .parse::<i64>()
        .map_err(|e| FormatError::new(raw, format!("non-numeric date component: {}", e)))
}
