//! WordBuffer - 현재 스캔 중인 단어 버퍼

/// 길이 제한이 있는 단어 버퍼
///
/// 한 번에 한 단어만 담으며, 단어가 완성되면 `take`로 비웁니다.
#[derive(Debug, Clone)]
pub struct WordBuffer {
    text: String,
    max_len: usize,
}

/// 버퍼가 가득 차서 문자를 추가할 수 없음
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferFull;

impl WordBuffer {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::with_capacity(max_len),
            max_len,
        }
    }

    /// 문자 추가 (추가 후 길이가 max_len을 넘으면 실패, 버퍼는 그대로)
    pub fn push(&mut self, c: char) -> Result<(), BufferFull> {
        if self.text.len() >= self.max_len {
            return Err(BufferFull);
        }
        self.text.push(c);
        Ok(())
    }

    /// 버퍼 내용을 꺼내고 비움
    pub fn take(&mut self) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }
        let word = std::mem::replace(&mut self.text, String::with_capacity(self.max_len));
        Some(word)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut buf = WordBuffer::new(3);
        assert!(buf.push('a').is_ok());
        assert!(buf.push('b').is_ok());
        assert!(buf.push('c').is_ok());
        assert_eq!(buf.push('d'), Err(BufferFull));
        // 실패해도 기존 내용 유지 (잘라내지 않음)
        assert_eq!(buf.take().as_deref(), Some("abc"));
    }

    #[test]
    fn test_take_resets() {
        let mut buf = WordBuffer::new(5);
        assert_eq!(buf.take(), None);

        buf.push('h').unwrap();
        buf.push('i').unwrap();
        assert_eq!(buf.take().as_deref(), Some("hi"));
        assert!(buf.is_empty());
    }
}
