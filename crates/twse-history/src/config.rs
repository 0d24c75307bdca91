//! 환경변수 기반 설정 모듈.

use crate::error::{HistoryError, Result};
use std::path::{Path, PathBuf};

/// 기본 대상 종목 (元大台灣50, 台積電)
pub const DEFAULT_SECURITIES: [&str; 2] = ["0050", "2330"];

/// 기본 출력 하위 디렉토리 (앱 번들 리소스 위치)
pub const DEFAULT_OUTPUT_DIR: &str = "Compound Interest";

/// 전체 설정
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// 프로젝트 루트 (절대 경로)
    pub root: PathBuf,
    /// 대상 종목 식별자
    pub securities: Vec<String>,
    /// 루트 아래 JSON 출력 디렉토리
    pub output_dir: String,
    /// 빌드 전에 CSV 인코딩 정규화 실행 여부
    pub normalize: bool,
}

/// (원본 CSV 디렉토리, 출력 JSON 경로) 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTarget {
    pub security: String,
    pub csv_dir: PathBuf,
    pub output_json: PathBuf,
}

impl HistoryConfig {
    /// 환경변수에서 설정 로드 (`.env` 포함). 루트는 현재 디렉토리.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let root = std::env::current_dir().map_err(|e| HistoryError::io(".", e))?;
        Self::from_vars(root, |key| std::env::var(key).ok())
    }

    /// 조회 함수로부터 설정 구성
    pub fn from_vars(root: PathBuf, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let securities = match var("HISTORY_SECURITIES") {
            Some(list) => list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => DEFAULT_SECURITIES.iter().map(|s| s.to_string()).collect(),
        };

        let config = Self {
            root,
            securities,
            output_dir: var("HISTORY_OUTPUT_DIR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            normalize: var_bool(var("HISTORY_NORMALIZE"), false),
        };
        config.validate()?;
        Ok(config)
    }

    /// 루트 디렉토리 변경.
    ///
    /// 존재하는 경로는 `..`과 심볼릭 링크를 풀어 정규화한다. 아직 없는
    /// 경로는 현재 디렉토리 기준으로 절대화만 한다.
    pub fn with_root(mut self, root: &Path) -> Result<Self> {
        self.root = match std::fs::canonicalize(root) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if root.is_absolute() {
                    root.to_path_buf()
                } else {
                    std::env::current_dir()
                        .map_err(|e| HistoryError::io(".", e))?
                        .join(root)
                }
            }
            Err(e) => return Err(HistoryError::io(root, e)),
        };
        Ok(self)
    }

    /// 종목별 (CSV 디렉토리, JSON 경로) 쌍
    ///
    /// `<root>/<id>_history` → `<root>/<output_dir>/<id>_history.json`
    pub fn targets(&self) -> Vec<HistoryTarget> {
        self.securities
            .iter()
            .map(|security| HistoryTarget {
                security: security.clone(),
                csv_dir: self.root.join(format!("{}_history", security)),
                output_json: self
                    .root
                    .join(&self.output_dir)
                    .join(format!("{}_history.json", security)),
            })
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.securities.is_empty() {
            return Err(HistoryError::Config(
                "HISTORY_SECURITIES에 종목이 하나도 없습니다".to_string(),
            ));
        }
        Ok(())
    }
}

/// bool 값 파싱
fn var_bool(value: Option<String>, default: bool) -> bool {
    value.map(|v| v == "true" || v == "1").unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<HistoryConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HistoryConfig::from_vars(PathBuf::from("/project"), |key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_targets() {
        let config = config_from(&[]).unwrap();
        assert!(!config.normalize);

        let targets = config.targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].security, "0050");
        assert_eq!(targets[0].csv_dir, PathBuf::from("/project/0050_history"));
        assert_eq!(
            targets[0].output_json,
            PathBuf::from("/project/Compound Interest/0050_history.json")
        );
        assert_eq!(targets[1].csv_dir, PathBuf::from("/project/2330_history"));
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("HISTORY_SECURITIES", " 0056 , ,00878"),
            ("HISTORY_OUTPUT_DIR", "out"),
            ("HISTORY_NORMALIZE", "1"),
        ])
        .unwrap();

        assert_eq!(config.securities, vec!["0056", "00878"]);
        assert!(config.normalize);
        assert_eq!(
            config.targets()[1].output_json,
            PathBuf::from("/project/out/00878_history.json")
        );
    }

    #[test]
    fn test_empty_securities_rejected() {
        assert!(matches!(
            config_from(&[("HISTORY_SECURITIES", " , ")]),
            Err(HistoryError::Config(_))
        ));
    }

    #[test]
    fn test_with_missing_absolute_root() {
        let config = config_from(&[])
            .unwrap()
            .with_root(Path::new("/elsewhere/does-not-exist"))
            .unwrap();
        assert_eq!(config.root, PathBuf::from("/elsewhere/does-not-exist"));
    }

    #[test]
    fn test_with_root_resolves_parent_segments() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("scripts");
        std::fs::create_dir(&nested).unwrap();

        let config = config_from(&[])
            .unwrap()
            .with_root(&nested.join(".."))
            .unwrap();
        assert_eq!(config.root, std::fs::canonicalize(dir.path()).unwrap());
        assert!(config
            .root
            .components()
            .all(|c| c != std::path::Component::ParentDir));
    }
}
