//! Frequency Report - 최다 등장 단어 조회 및 출력 포맷
//!
//! 출력 형식 (기존 도구와 동일):
//!
//! ```text
//! Word counts dictionary (tree):      <- verbose 전용 (TreeDump)
//!
//!  "the", 3
//!  |  "cat", 2
//!
//! Highest count: 3                    <- FrequencyReport
//! Words with highest count:
//! - the
//! ```

use crate::dictionary::Dictionary;
use std::fmt;

/// `target_count`와 카운트가 정확히 같은 단어들 (전위 순서)
pub fn words_at_count(dictionary: &Dictionary, target_count: u64) -> Vec<String> {
    let mut words = Vec::new();
    dictionary.for_each_matching(
        |count| count == target_count,
        |entry| words.push(entry.word().to_string()),
    );
    words
}

// ============================================================================
// FrequencyReport
// ============================================================================

/// 최종 결과: 최고 카운트와 그 카운트를 가진 단어들
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyReport {
    pub highest_count: u64,
    pub words: Vec<String>,
}

impl FrequencyReport {
    /// `highest_count`는 스캔 중 추적한 running max - 트리를 다시 훑어 계산하지 않음
    pub fn new(dictionary: &Dictionary, highest_count: u64) -> Self {
        Self {
            highest_count,
            words: words_at_count(dictionary, highest_count),
        }
    }
}

impl fmt::Display for FrequencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Highest count: {}", self.highest_count)?;
        writeln!(f, "Words with highest count:")?;
        for word in &self.words {
            writeln!(f, "- {}", word)?;
        }
        Ok(())
    }
}

// ============================================================================
// TreeDump (verbose)
// ============================================================================

/// 디버깅용 트리 전체 출력 - 안정된 포맷이 아님
pub struct TreeDump<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> TreeDump<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word counts dictionary (tree):")?;
        writeln!(f)?;
        for (depth, entry) in self.dictionary.pre_order() {
            for _ in 0..depth {
                f.write_str(" | ")?;
            }
            writeln!(f, " \"{}\", {}", entry.word(), entry.count())?;
        }
        Ok(())
    }
}
