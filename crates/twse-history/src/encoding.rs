//! CSV 텍스트 인코딩 처리.
//!
//! TWSE 내보내기 파일은 받은 시기에 따라 UTF-8(BOM 유무)과 Big5(CP950)가 섞여 있다.
//! 고정된 우선순위로 엄격 디코딩을 시도하고, 처음 성공한 결과를 사용한다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use twse_history::encoding::{normalize_csv_encoding, read_text_with_fallback};
//!
//! let text = read_text_with_fallback("0050_history/STOCK_DAY_202401.csv")?;
//! let rewritten = normalize_csv_encoding("0050_history/STOCK_DAY_202401.csv")?;
//! ```

use crate::error::{HistoryError, Result};
use std::path::Path;
use tracing::{debug, trace};

/// UTF-8 바이트 순서 표식.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 디코딩 후보 인코딩.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// BOM 인식 UTF-8 (선두 BOM 제거)
    Utf8Sig,
    /// BOM을 문자로 유지하는 UTF-8
    Utf8,
    /// Big5 / CP950 (WHATWG Big5 테이블)
    Big5,
}

/// 읽기 시도 순서. 감지 알고리즘이 아니라 우선순위 목록이다.
pub const READ_ENCODINGS: [TextEncoding; 3] =
    [TextEncoding::Utf8Sig, TextEncoding::Utf8, TextEncoding::Big5];

impl TextEncoding {
    /// 로그용 이름
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8Sig => "utf-8-sig",
            Self::Utf8 => "utf-8",
            Self::Big5 => "big5",
        }
    }

    /// 엄격 디코딩. 잘못된 바이트 시퀀스가 하나라도 있으면 `None`.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        let decoded = match self {
            Self::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(body)
            }
            Self::Utf8 => {
                encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
            }
            Self::Big5 => {
                encoding_rs::BIG5.decode_without_bom_handling_and_without_replacement(bytes)
            }
        }?;

        Some(normalize_newlines(&decoded))
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 후보 인코딩을 순서대로 시도해 처음 성공한 결과를 반환.
pub fn decode_with_fallback(bytes: &[u8]) -> Option<(TextEncoding, String)> {
    READ_ENCODINGS.iter().find_map(|encoding| {
        let text = encoding.decode(bytes);
        trace!(encoding = %encoding, ok = text.is_some(), "디코딩 시도");
        text.map(|t| (*encoding, t))
    })
}

/// 파일을 읽어 텍스트로 디코딩.
///
/// 어떤 후보로도 디코딩되지 않으면 [`HistoryError::Decode`].
pub fn read_text_with_fallback(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| HistoryError::io(path, e))?;

    match decode_with_fallback(&bytes) {
        Some((encoding, text)) => {
            debug!(path = %path.display(), encoding = %encoding, "디코딩 완료");
            Ok(text)
        }
        None => Err(HistoryError::Decode {
            path: path.to_path_buf(),
        }),
    }
}

/// 정규 인코딩(BOM 포함 UTF-8)으로 인코딩.
pub fn encode_canonical(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + text.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(text.as_bytes());
    bytes
}

/// 파일을 정규 인코딩으로 다시 쓴다.
///
/// 결과 바이트가 현재 내용과 같으면 쓰지 않는다. 백업은 남기지 않는다.
/// 실제로 파일을 덮어썼으면 `true`.
pub fn normalize_csv_encoding(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let text = read_text_with_fallback(path)?;
    let current = std::fs::read(path).map_err(|e| HistoryError::io(path, e))?;
    let updated = encode_canonical(&text);

    if current == updated {
        return Ok(false);
    }

    std::fs::write(path, &updated).map_err(|e| HistoryError::io(path, e))?;
    Ok(true)
}

/// `\r\n`과 단독 `\r`을 `\n`으로 통일
fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// "台積電" (Big5)
    const BIG5_TSMC: &[u8] = b"\xA5\x78\xBF\x6E\xB9\x71";

    #[test]
    fn test_utf8_sig_strips_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("日期,成交股數".as_bytes());

        let (encoding, text) = decode_with_fallback(&bytes).unwrap();
        assert_eq!(encoding, TextEncoding::Utf8Sig);
        assert_eq!(text, "日期,成交股數");
    }

    #[test]
    fn test_big5_fallback() {
        let (encoding, text) = decode_with_fallback(BIG5_TSMC).unwrap();
        assert_eq!(encoding, TextEncoding::Big5);
        assert_eq!(text, "台積電");
    }

    #[test]
    fn test_undecodable_bytes() {
        // 0xFF는 UTF-8 선두 바이트도, Big5 선두 바이트도 아니다
        assert!(decode_with_fallback(b"\xFF\xFF\xFF").is_none());
    }

    #[test]
    fn test_newlines_normalized() {
        let (_, text) = decode_with_fallback(b"a\r\nb\rc\n").unwrap();
        assert_eq!(text, "a\nb\nc\n");
    }

    #[test]
    fn test_encode_canonical_prefixes_bom() {
        let bytes = encode_canonical("x");
        assert_eq!(bytes, b"\xEF\xBB\xBFx");
    }
}
