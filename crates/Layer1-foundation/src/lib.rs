//! # wordfreq-foundation
//!
//! Foundation layer for wordfreq:
//! - Error: 공용 에러 타입 (`Error`, `Result`)
//! - Config: 통합 설정 (`WordFreqConfig`)
//! - Storage: JsonStore (글로벌 / 프로젝트 설정 파일)

pub mod config;
pub mod error;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{WordFreqConfig, CONFIG_FILE, DEFAULT_MAX_WORD_LEN};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::{load_json_file, strip_json_comments, JsonStore, APP_DIR_NAME};
