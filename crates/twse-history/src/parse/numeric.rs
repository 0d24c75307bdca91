//! 로케일 형식 숫자 파싱.
//!
//! `"1,234"`처럼 천 단위 쉼표와 따옴표가 붙은 값을 다룬다.
//! 빈 값과 `--`는 "데이터 없음"으로 보고 `None`을 돌려준다 (0이 아님).

use crate::error::FormatError;

/// "데이터 없음" 자리표시자.
pub const PLACEHOLDER: &str = "--";

/// 공백·따옴표·천 단위 쉼표 제거.
fn clean_number(raw: &str) -> String {
    raw.trim().replace([',', '"'], "").trim().to_string()
}

/// 실수 필드 파싱.
///
/// * `Ok(None)` - 빈 값 또는 자리표시자
/// * `Err(_)` - 숫자가 아니거나 유한하지 않은 값
pub fn parse_number(raw: &str) -> Result<Option<f64>, FormatError> {
    let value = clean_number(raw);
    if value.is_empty() || value == PLACEHOLDER {
        return Ok(None);
    }

    let number: f64 = value
        .parse()
        .map_err(|e| FormatError::new(raw, format!("invalid number: {}", e)))?;

    if !number.is_finite() {
        return Err(FormatError::new(raw, "non-finite number"));
    }

    Ok(Some(number))
}

/// 정수(수량) 필드 파싱.
///
/// 실수로 파싱한 뒤 0 방향으로 절삭하므로 `"3.0"`도 허용된다.
/// 음수는 거래량/거래건수로 쓸 수 없으므로 오류.
pub fn parse_count(raw: &str) -> Result<Option<u64>, FormatError> {
    match parse_number(raw)? {
        None => Ok(None),
        Some(n) if n < 0.0 => Err(FormatError::new(raw, "negative count")),
        Some(n) if n >= u64::MAX as f64 => Err(FormatError::new(raw, "count out of range")),
        Some(n) => Ok(Some(n.trunc() as u64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1,234,567").unwrap(), Some(1234567.0));
        assert_eq!(parse_number("\"103.50\"").unwrap(), Some(103.5));
        assert_eq!(parse_number("  -0.35 ").unwrap(), Some(-0.35));
        assert_eq!(parse_number("\" 12 \"").unwrap(), Some(12.0));
    }

    #[test]
    fn test_absent_is_never_zero() {
        assert_eq!(parse_number("").unwrap(), None);
        assert_eq!(parse_number("   ").unwrap(), None);
        assert_eq!(parse_number("--").unwrap(), None);
        assert_eq!(parse_number("\"--\"").unwrap(), None);
        assert_eq!(parse_count("--").unwrap(), None);
        assert_eq!(parse_number("0").unwrap(), Some(0.0));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert!(parse_number("X").is_err());
        assert!(parse_number("12a").is_err());
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }

    #[test]
    fn test_parse_count_truncates() {
        assert_eq!(parse_count("3.0").unwrap(), Some(3));
        assert_eq!(parse_count("3.9").unwrap(), Some(3));
        assert_eq!(parse_count("\"1,234\"").unwrap(), Some(1234));
        assert!(parse_count("-5").is_err());

        let err = parse_count("1e20").unwrap_err();
        assert_eq!(err.message, "count out of range");
        assert_eq!(parse_count("1e15").unwrap(), Some(1_000_000_000_000_000));
    }

    #[test]
    fn test_reparse_is_stable() {
        for raw in ["1,234.5", "0.01", "98,765,432", "7"] {
            let first = parse_number(raw).unwrap().unwrap();
            let again = parse_number(&first.to_string()).unwrap().unwrap();
            assert_eq!(first, again);
        }
    }
}
