//! 트리 순회 iterator
//!
//! 재귀 없이 명시적 스택으로 순회 - 정렬된 입력처럼 한쪽으로 깊은 트리에서도 안전

use super::entry::WordEntry;

/// 전위 순회 (노드 → 왼쪽 → 오른쪽), `(depth, entry)` 반환
///
/// 출력 순서는 트리 모양(= 삽입 순서)에 따라 결정됨. 알파벳 순이 아님.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a WordEntry)>,
}

impl<'a> PreOrder<'a> {
    pub(super) fn new(root: Option<&'a WordEntry>) -> Self {
        Self {
            stack: root.map(|node| (0, node)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a WordEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // 왼쪽을 먼저 꺼내도록 오른쪽부터 push
        if let Some(right) = node.right() {
            self.stack.push((depth + 1, right));
        }
        if let Some(left) = node.left() {
            self.stack.push((depth + 1, left));
        }
        Some((depth, node))
    }
}

/// 중위 순회 - 단어 오름차순
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    stack: Vec<&'a WordEntry>,
    next: Option<&'a WordEntry>,
}

impl<'a> InOrder<'a> {
    pub(super) fn new(root: Option<&'a WordEntry>) -> Self {
        Self {
            stack: Vec::new(),
            next: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a WordEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next {
            self.stack.push(node);
            self.next = node.left();
        }
        let node = self.stack.pop()?;
        self.next = node.right();
        Some(node)
    }
}
