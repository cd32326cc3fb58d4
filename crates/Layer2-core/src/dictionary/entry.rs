//! WordEntry - 트리 노드

use std::fmt;

/// 단어 하나와 등장 횟수
///
/// 왼쪽 서브트리의 모든 단어 < `word` < 오른쪽 서브트리의 모든 단어
pub struct WordEntry {
    pub(super) word: String,
    pub(super) count: u64,
    pub(super) left: Option<Box<WordEntry>>,
    pub(super) right: Option<Box<WordEntry>>,
}

impl WordEntry {
    pub(super) fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            count: 1,
            left: None,
            right: None,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn left(&self) -> Option<&WordEntry> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&WordEntry> {
        self.right.as_deref()
    }
}

// 자식은 출력하지 않음 (깊은 트리에서 재귀 방지)
impl fmt::Debug for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordEntry")
            .field("word", &self.word)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}
