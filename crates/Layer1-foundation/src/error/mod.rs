//! Error types for wordfreq
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// wordfreq 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 스캔 관련
    // ========================================================================
    /// 단어가 최대 길이를 넘음 - 실행 전체 중단
    #[error("Encountered word is too long; position {position} (max length {max_len})")]
    WordTooLong { position: u64, max_len: usize },

    // ========================================================================
    // 일반
    // ========================================================================
    /// API 호출 순서 오류 (예: 두 번째 scan, 성공 전 report)
    #[error("Invalid usage: {0}")]
    Usage(String),

    /// 일어나면 안 되는 내부 상태
    #[error("Internal error: {0}")]
    Internal(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// WordTooLong 에러 생성 헬퍼
    pub fn word_too_long(position: u64, max_len: usize) -> Self {
        Error::WordTooLong { position, max_len }
    }
}
