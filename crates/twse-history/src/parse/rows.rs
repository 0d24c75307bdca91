//! CSV 행 분리 및 행 단위 파싱 결과.
//!
//! TWSE 리포트는 첫 두 줄이 제목/헤더이므로 내용과 무관하게 고정 오프셋으로 건너뛴다.
//! 각 데이터 행은 [`RowOutcome`]으로 평가되고, 건너뛴 행은 사유와 함께 로그만 남긴다.

use crate::error::FormatError;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// 파일 앞쪽의 비데이터 행 수.
pub const HEADER_ROWS: usize = 2;

/// 행 하나를 해석한 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome<T> {
    Parsed(T),
    Skipped(SkipReason),
}

/// 행을 버린 사유.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// 컬럼 수 부족
    TooFewColumns { found: usize, required: usize },
    /// 필수 숫자 필드가 비어 있거나 자리표시자
    Absent { field: &'static str },
    /// 날짜/숫자 형식 오류
    Format(FormatError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewColumns { found, required } => {
                write!(f, "too few columns: {} < {}", found, required)
            }
            Self::Absent { field } => write!(f, "absent value: {}", field),
            Self::Format(e) => write!(f, "{}", e),
        }
    }
}

impl From<FormatError> for SkipReason {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

impl<T> From<Result<T, SkipReason>> for RowOutcome<T> {
    fn from(result: Result<T, SkipReason>) -> Self {
        match result {
            Ok(record) => Self::Parsed(record),
            Err(reason) => Self::Skipped(reason),
        }
    }
}

/// 최소 컬럼 수 확인.
pub fn ensure_columns(row: &[String], required: usize) -> Result<(), SkipReason> {
    if row.len() < required {
        return Err(SkipReason::TooFewColumns {
            found: row.len(),
            required,
        });
    }
    Ok(())
}

/// 데이터 없음(`None`)을 건너뛰기 사유로 변환.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, SkipReason> {
    value.ok_or(SkipReason::Absent { field })
}

/// 한 줄을 CSV 레코드 하나로 파싱 (따옴표 필드 지원).
fn parse_line(line: &str) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// 헤더 행을 제외한 데이터 행과 1부터 시작하는 줄 번호.
pub fn data_rows(text: &str) -> impl Iterator<Item = (usize, Vec<String>)> + '_ {
    text.lines()
        .enumerate()
        .skip(HEADER_ROWS)
        .map(|(idx, line)| (idx + 1, parse_line(line)))
}

/// 파일 텍스트의 모든 데이터 행을 평가해 성공한 레코드만 모은다.
pub fn collect_records<T>(
    path: &Path,
    text: &str,
    parse_row: impl Fn(&[String]) -> RowOutcome<T>,
) -> Vec<T> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line, row) in data_rows(text) {
        match parse_row(row.as_slice()) {
            RowOutcome::Parsed(record) => records.push(record),
            RowOutcome::Skipped(reason) => {
                skipped += 1;
                debug!(
                    file = %path.display(),
                    line = line,
                    reason = %reason,
                    "행 건너뜀"
                );
            }
        }
    }

    debug!(
        file = %path.display(),
        parsed = records.len(),
        skipped = skipped,
        "파일 파싱 완료"
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\"113年01月 0050 元大台灣50 各日成交資訊\"\n\
\"日期\",\"成交股數\",\"成交金額\"\n\
\" 113/01/04\",\"1,234\",\"5\"\n\
\n\
\"說明:\"\n";

    #[test]
    fn test_data_rows_skip_headers() {
        let rows: Vec<_> = data_rows(SAMPLE).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].0, 3);
        assert_eq!(rows[0].1, vec![" 113/01/04", "1,234", "5"]);
        // 빈 줄도 한 행으로 센다
        assert!(rows[1].1.is_empty());
        assert_eq!(rows[2].1, vec!["說明:"]);
    }

    #[test]
    fn test_headers_counted_by_position() {
        // 첫 줄이 비어 있어도 두 줄을 건너뛴다
        let text = "\nheader\na,b\n";
        let rows: Vec<_> = data_rows(text).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1, vec!["a", "b"]);
    }

    #[test]
    fn test_collect_records_filters_skips() {
        let parsed = collect_records(Path::new("sample.csv"), SAMPLE, |row| {
            RowOutcome::from(ensure_columns(row, 3).map(|_| row[0].clone()))
        });
        assert_eq!(parsed, vec![" 113/01/04".to_string()]);
    }

    #[test]
    fn test_skip_reasons() {
        let row = vec!["a".to_string()];
        assert_eq!(
            ensure_columns(&row, 7),
            Err(SkipReason::TooFewColumns {
                found: 1,
                required: 7
            })
        );
        assert_eq!(
            required::<f64>(None, "close"),
            Err(SkipReason::Absent { field: "close" })
        );
    }
}
