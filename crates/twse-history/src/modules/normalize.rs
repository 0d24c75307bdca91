//! 디렉토리 단위 CSV 인코딩 정규화.

use super::sources::list_csv_files;
use crate::encoding::normalize_csv_encoding;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// `csv_dir` 바로 아래의 모든 `*.csv`를 BOM 포함 UTF-8로 변환.
///
/// 파일을 제자리에서 덮어쓴다. 이미 정규화된 파일은 건드리지 않으며,
/// 실제로 다시 쓴 파일 수를 반환한다.
pub fn normalize_folder(csv_dir: &Path) -> Result<usize> {
    let mut converted = 0;
    for path in list_csv_files(csv_dir, "")? {
        if normalize_csv_encoding(&path)? {
            debug!(file = %path.display(), "인코딩 변환");
            converted += 1;
        }
    }
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::UTF8_BOM;

    #[test]
    fn test_normalize_folder_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        // Big5 "日期" + CRLF
        std::fs::write(
            dir.path().join("STOCK_DAY_202401.csv"),
            b"\xA4\xE9\xB4\xC1\r\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("FMSRFK_2024.csv"), "a,b\n").unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"\xFF").unwrap();

        assert_eq!(normalize_folder(dir.path()).unwrap(), 2);
        let first = std::fs::read(dir.path().join("STOCK_DAY_202401.csv")).unwrap();
        assert!(first.starts_with(UTF8_BOM));
        assert_eq!(&first[UTF8_BOM.len()..], "日期\n".as_bytes());

        assert_eq!(normalize_folder(dir.path()).unwrap(), 0);
        let second = std::fs::read(dir.path().join("STOCK_DAY_202401.csv")).unwrap();
        assert_eq!(first, second);
    }
}
