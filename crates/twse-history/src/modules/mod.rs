//! 파이프라인 단계 모듈.

pub mod annual;
pub mod daily;
pub mod history_json;
pub mod monthly;
pub mod normalize;
pub mod pipeline;
pub mod sources;

pub use annual::parse_annual_summaries;
pub use daily::parse_daily_file;
pub use history_json::{build_history_document, build_history_json, write_history_json};
pub use monthly::parse_monthly_summaries;
pub use normalize::normalize_folder;
pub use pipeline::run_pipeline;
pub use sources::ReportKind;
