//! TWSE 히스토리 JSON 빌더 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 현재 디렉토리 기준으로 0050, 2330 JSON 생성
//! twse-history
//!
//! # CSV 인코딩 정규화 후 생성
//! twse-history --normalize --root ~/Projects/CompoundInterest
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twse_history::{modules, HistoryConfig};

#[derive(Parser)]
#[command(name = "twse-history")]
#[command(about = "Normalize TWSE CSV encodings and build stock history JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// CSV 파일을 BOM 포함 UTF-8로 변환 (파일을 제자리에서 덮어씀)
    #[arg(long)]
    normalize: bool,

    /// 프로젝트 루트 (기본: 현재 디렉토리)
    #[arg(long)]
    root: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 로깅 초기화
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("twse_history={}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 설정 로드
    let mut config = HistoryConfig::from_env().context("Failed to load configuration")?;
    if let Some(root) = &cli.root {
        config = config.with_root(root)?;
    }
    if cli.normalize {
        config.normalize = true;
    }
    tracing::debug!(root = %config.root.display(), securities = ?config.securities, "설정 로드 완료");

    let stats = modules::run_pipeline(&config.targets(), config.normalize)
        .context("History build failed")?;
    for s in &stats {
        s.log_summary("히스토리 JSON 빌드");
    }

    Ok(())
}
