//! Config - 통합 설정 관리
//!
//! - `settings.rs` - WordFreqConfig (최대 단어 길이, verbose)

mod settings;

pub use settings::{WordFreqConfig, CONFIG_FILE, DEFAULT_MAX_WORD_LEN};
