//! Storage module for wordfreq
//!
//! - `json`: JSON - 설정 파일 로드 (글로벌 / 프로젝트)

mod json;

pub use json::{load_json_file, strip_json_comments, JsonStore, APP_DIR_NAME};
