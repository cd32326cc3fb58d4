//! Dictionary - 단어 → 등장 횟수 이진 탐색 트리
//!
//! 균형을 맞추지 않는 단순 BST. 트리 모양은 삽입 순서로만 결정됩니다.
//! 정렬된 입력에서는 깊이가 O(n)이 되므로 삽입, 순회, 해제 모두 재귀 없이 구현.

mod entry;
mod traverse;

pub use entry::WordEntry;
pub use traverse::{InOrder, PreOrder};

use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// 단어 빈도 트리
#[derive(Default)]
pub struct Dictionary {
    root: Option<Box<WordEntry>>,
    len: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 단어 삽입 또는 카운트 증가 - 갱신된 카운트 반환
    ///
    /// `word`는 이미 정규화(소문자)되어 있어야 함. 비교는 바이트 순서.
    pub fn upsert(&mut self, word: &str) -> u64 {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match word.cmp(node.word.as_str()) {
                Ordering::Equal => {
                    node.count += 1;
                    trace!(word, count = node.count, "incremented");
                    return node.count;
                }
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
            }
        }

        // 새 노드에서 탐색 종료
        *slot = Some(Box::new(WordEntry::new(word)));
        self.len += 1;
        trace!(word, "inserted");
        1
    }

    /// 단어의 현재 카운트 (정확히 일치하는 경우만)
    pub fn get(&self, word: &str) -> Option<u64> {
        let mut node = self.root.as_deref();
        while let Some(entry) = node {
            node = match word.cmp(entry.word()) {
                Ordering::Equal => return Some(entry.count()),
                Ordering::Less => entry.left(),
                Ordering::Greater => entry.right(),
            };
        }
        None
    }

    /// 서로 다른 단어 수 (= 노드 수)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&WordEntry> {
        self.root.as_deref()
    }

    /// 카운트가 `predicate`를 만족하는 모든 노드를 전위 순서로 방문
    pub fn for_each_matching<P, V>(&self, mut predicate: P, mut visit: V)
    where
        P: FnMut(u64) -> bool,
        V: FnMut(&WordEntry),
    {
        for (_, entry) in self.pre_order() {
            if predicate(entry.count()) {
                visit(entry);
            }
        }
    }

    /// 전위 순회 (node → left → right), 깊이 포함
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root())
    }

    /// 중위 순회 (단어 오름차순)
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }

    /// 트리 전체 해제 - 해제한 노드 수 반환
    ///
    /// 각 노드는 모든 자손이 해제된 뒤에 해제됨.
    pub fn clear(&mut self) -> usize {
        let mut pending: Vec<Box<WordEntry>> = self.root.take().into_iter().collect();
        let mut detached = Vec::with_capacity(self.len);

        // 자식을 떼어내면서 전위 순서로 수집
        while let Some(mut node) = pending.pop() {
            pending.extend(node.right.take());
            pending.extend(node.left.take());
            detached.push(node);
        }

        // 역 전위 순서 = 자손이 항상 조상보다 먼저
        let released = detached.len();
        while let Some(node) = detached.pop() {
            drop(node);
        }

        self.len = 0;
        released
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("len", &self.len)
            .field("root", &self.root().map(|r| r.word()))
            .finish_non_exhaustive()
    }
}

impl Drop for Dictionary {
    fn drop(&mut self) {
        self.clear();
    }
}
