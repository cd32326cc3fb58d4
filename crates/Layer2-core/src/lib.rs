//! wordfreq-core: Core engine for wordfreq
//!
//! Layer2 - 단어 빈도 계산 레이어
//!
//! # 주요 모듈
//!
//! - `tokenizer`: 바이트 단위 스트리밍 토크나이저 (WordBuffer + 경계 판단)
//! - `dictionary`: 단어 → 카운트 이진 탐색 트리 (upsert, 전위/중위 순회)
//! - `report`: 최고 카운트 단어 조회 (`words_at_count`), 출력 포맷
//! - `scan`: 바이트 소스를 끝까지 읽어 트리와 running max를 채우는 루프
//!
//! # 사용 예시
//!
//! ```
//! use wordfreq_core::{scan_stream, WordFreqConfig};
//!
//! let counter = scan_stream("the Cat sat on the mat the cat ran".as_bytes(), &WordFreqConfig::new())?;
//! let report = counter.report()?;
//!
//! assert_eq!(report.highest_count, 3);
//! assert_eq!(report.words, vec!["the"]);
//! # Ok::<(), wordfreq_core::Error>(())
//! ```

// Core modules
pub mod dictionary;
pub mod report;
pub mod scan;
pub mod tokenizer;

// Re-exports: Dictionary
pub use dictionary::{Dictionary, InOrder, PreOrder, WordEntry};

// Re-exports: Report
pub use report::{words_at_count, FrequencyReport, TreeDump};

// Re-exports: Scan
pub use scan::{scan_stream, FailureKind, RunningMax, ScanState, WordCounter};

// Re-exports: Tokenizer
pub use tokenizer::{Tokenizer, WordBuffer};

// Re-exports: Foundation
pub use wordfreq_foundation::{Error, Result, WordFreqConfig};
