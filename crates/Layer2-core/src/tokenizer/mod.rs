//! Tokenizer Module - 바이트 스트림 → 정규화된 단어
//!
//! 한 번에 한 바이트씩 받아서 단어 구성 문자인지 경계인지 판단합니다.
//!
//! | 입력 | 분류 |
//! |------|------|
//! | ASCII 영숫자 | 단어 문자 (소문자로 변환) |
//! | `-` (버퍼가 비어있지 않을 때) | 단어 문자 (그대로) |
//! | 그 외, `-` (버퍼가 비었을 때), 스트림 끝 | 경계 |
//!
//! ## 사용법
//!
//! ```
//! use wordfreq_core::tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::new(30);
//! let mut words = Vec::new();
//! for &b in b"Co-op -hello" {
//!     if let Some(word) = tokenizer.feed(Some(b)).unwrap() {
//!         words.push(word);
//!     }
//! }
//! words.extend(tokenizer.feed(None).unwrap());
//! assert_eq!(words, vec!["co-op", "hello"]);
//! ```

mod buffer;

pub use buffer::{BufferFull, WordBuffer};

use wordfreq_foundation::{Error, Result};

/// 스트리밍 토크나이저
#[derive(Debug, Clone)]
pub struct Tokenizer {
    buffer: WordBuffer,
    /// 지금까지 소비한 바이트 수
    position: u64,
}

impl Tokenizer {
    pub fn new(max_word_len: usize) -> Self {
        Self {
            buffer: WordBuffer::new(max_word_len),
            position: 0,
        }
    }

    /// 입력 단위 하나 처리
    ///
    /// `None`은 스트림 끝. 경계에서 버퍼가 비어있지 않으면 완성된 단어를 돌려줍니다.
    /// 단어가 최대 길이를 넘으면 `Error::WordTooLong` (위치는 문제 바이트의 0-based offset).
    pub fn feed(&mut self, unit: Option<u8>) -> Result<Option<String>> {
        let Some(byte) = unit else {
            return Ok(self.buffer.take());
        };

        let position = self.position;
        self.position += 1;

        match self.classify(byte) {
            Some(c) => {
                let max_len = self.buffer.max_len();
                self.buffer
                    .push(c)
                    .map_err(|BufferFull| Error::word_too_long(position, max_len))?;
                Ok(None)
            }
            None => Ok(self.buffer.take()),
        }
    }

    /// 단어 문자면 버퍼에 넣을 문자를, 경계면 None
    fn classify(&self, byte: u8) -> Option<char> {
        if byte.is_ascii_alphanumeric() {
            Some(byte.to_ascii_lowercase() as char)
        } else if byte == b'-' && !self.buffer.is_empty() {
            Some('-')
        } else {
            None
        }
    }

    /// 지금까지 소비한 바이트 수
    pub fn position(&self) -> u64 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str, max_len: usize) -> Result<Vec<String>> {
        let mut tokenizer = Tokenizer::new(max_len);
        let mut words = Vec::new();
        for &b in input.as_bytes() {
            words.extend(tokenizer.feed(Some(b))?);
        }
        words.extend(tokenizer.feed(None)?);
        Ok(words)
    }

    #[test]
    fn test_lowercases_words() {
        let words = tokenize("The Cat, THE cat.", 30).unwrap();
        assert_eq!(words, vec!["the", "cat", "the", "cat"]);
    }

    #[test]
    fn test_internal_hyphen_kept() {
        assert_eq!(tokenize("co-op", 30).unwrap(), vec!["co-op"]);
    }

    #[test]
    fn test_leading_hyphen_dropped() {
        assert_eq!(tokenize("-hello", 30).unwrap(), vec!["hello"]);
        assert_eq!(tokenize("--- x", 30).unwrap(), vec!["x"]);
    }

    #[test]
    fn test_hyphen_runs_preserved() {
        assert_eq!(tokenize("a--b", 30).unwrap(), vec!["a--b"]);
        // 끝에 붙은 하이픈도 단어의 일부
        assert_eq!(tokenize("re- do", 30).unwrap(), vec!["re-", "do"]);
    }

    #[test]
    fn test_digits_and_non_ascii_bytes() {
        assert_eq!(tokenize("abc123 4u", 30).unwrap(), vec!["abc123", "4u"]);
        // UTF-8 멀티바이트는 경계로 처리
        assert_eq!(tokenize("caf\u{e9}s", 30).unwrap(), vec!["caf", "s"]);
    }

    #[test]
    fn test_only_boundaries() {
        assert!(tokenize("", 30).unwrap().is_empty());
        assert!(tokenize(" \n\t.,;- ", 30).unwrap().is_empty());
    }

    #[test]
    fn test_end_of_stream_emits_once() {
        let mut tokenizer = Tokenizer::new(30);
        for &b in b"last" {
            assert_eq!(tokenizer.feed(Some(b)).unwrap(), None);
        }
        assert_eq!(tokenizer.feed(None).unwrap().as_deref(), Some("last"));
        assert_eq!(tokenizer.feed(None).unwrap(), None);
    }

    #[test]
    fn test_max_length_word_accepted() {
        let word = "x".repeat(30);
        assert_eq!(tokenize(&word, 30).unwrap(), vec![word]);
    }

    #[test]
    fn test_word_too_long() {
        let input = format!("ok {}", "y".repeat(31));
        match tokenize(&input, 30) {
            Err(Error::WordTooLong { position, max_len }) => {
                // "ok " 3바이트 + 31번째 문자 (index 30)
                assert_eq!(position, 33);
                assert_eq!(max_len, 30);
            }
            other => panic!("expected WordTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_hyphen_counts_towards_length() {
        assert!(tokenize("ab-", 3).is_ok());
        assert!(matches!(
            tokenize("ab-c", 3),
            Err(Error::WordTooLong { position: 3, .. })
        ));
    }

    #[test]
    fn test_position_tracking() {
        let mut tokenizer = Tokenizer::new(30);
        for &b in b"ab c" {
            tokenizer.feed(Some(b)).unwrap();
        }
        assert_eq!(tokenizer.position(), 4);
        assert_eq!(tokenizer.feed(None).unwrap().as_deref(), Some("c"));
        // 스트림 끝은 위치를 바꾸지 않음
        assert_eq!(tokenizer.position(), 4);
    }
}
