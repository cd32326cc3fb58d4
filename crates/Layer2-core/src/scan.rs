//! Scan - 바이트 소스 → 토크나이저 → 트리 구동 루프
//!
//! ```text
//! Idle ──scan()──▶ Scanning ──▶ Success
//!                      │
//!                      ├──▶ Failed(WordTooLong)
//!                      ├──▶ Failed(Io)
//!                      └──▶ Failed(Internal)
//! ```
//!
//! 실패 시 부분적으로 만들어진 트리는 `WordCounter`와 함께 해제됩니다.

use crate::dictionary::Dictionary;
use crate::report::FrequencyReport;
use crate::tokenizer::Tokenizer;
use std::io::{BufReader, Read};
use tracing::debug;
use wordfreq_foundation::{Error, Result, WordFreqConfig};

// ============================================================================
// 상태
// ============================================================================

/// 실패 원인
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    WordTooLong,
    Io,
    /// 스캔 루프에서 나올 수 없는 에러
    Internal,
}

impl FailureKind {
    /// 스캔 중 발생할 수 있는 에러만 대응, 그 외는 None
    pub fn of(err: &Error) -> Option<Self> {
        match err {
            Error::WordTooLong { .. } => Some(FailureKind::WordTooLong),
            Error::Io(_) => Some(FailureKind::Io),
            _ => None,
        }
    }
}

/// 실행 단위 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
    Success,
    Failed(FailureKind),
}

impl ScanState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanState::Success | ScanState::Failed(_))
    }
}

/// 스캔 중 관측한 최대 카운트 (단조 증가)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningMax(u64);

impl RunningMax {
    pub fn observe(&mut self, count: u64) {
        if count > self.0 {
            self.0 = count;
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

// ============================================================================
// WordCounter
// ============================================================================

/// 단일 실행용 카운터 - 토크나이저, 트리, running max를 소유
#[derive(Debug)]
pub struct WordCounter {
    tokenizer: Tokenizer,
    dictionary: Dictionary,
    running_max: RunningMax,
    words_seen: u64,
    state: ScanState,
}

impl WordCounter {
    pub fn new(max_word_len: usize) -> Self {
        Self {
            tokenizer: Tokenizer::new(max_word_len),
            dictionary: Dictionary::new(),
            running_max: RunningMax::default(),
            words_seen: 0,
            state: ScanState::Idle,
        }
    }

    pub fn from_config(config: &WordFreqConfig) -> Self {
        Self::new(config.max_word_length())
    }

    /// 스트림을 끝까지 읽어 카운트
    ///
    /// 한 바이트를 읽은 뒤 그 결과로만 내용/경계/끝을 판단.
    /// 스트림 끝은 토크나이저에 정확히 한 번 전달됨.
    pub fn scan<R: Read>(&mut self, reader: R) -> Result<()> {
        if self.state != ScanState::Idle {
            return Err(Error::Usage(format!(
                "scan already started (state: {:?})",
                self.state
            )));
        }
        self.transition(ScanState::Scanning);

        let mut bytes = BufReader::new(reader).bytes();
        loop {
            let unit = match bytes.next() {
                Some(Ok(byte)) => Some(byte),
                Some(Err(e)) => return Err(self.fail(Error::Io(e))),
                None => None,
            };

            if let Err(e) = self.feed(unit) {
                return Err(self.fail(e));
            }

            if unit.is_none() {
                break;
            }
        }

        self.transition(ScanState::Success);
        debug!(
            bytes = self.tokenizer.position(),
            words = self.words_seen,
            distinct = self.dictionary.len(),
            highest = self.running_max.get(),
            "scan finished"
        );
        Ok(())
    }

    fn feed(&mut self, unit: Option<u8>) -> Result<()> {
        if let Some(word) = self.tokenizer.feed(unit)? {
            let count = self.dictionary.upsert(&word);
            self.running_max.observe(count);
            self.words_seen += 1;
        }
        Ok(())
    }

    /// 실패 상태로 전이하고 호출자에게 돌려줄 에러 반환
    fn fail(&mut self, err: Error) -> Error {
        match FailureKind::of(&err) {
            Some(kind) => {
                self.transition(ScanState::Failed(kind));
                err
            }
            None => {
                self.transition(ScanState::Failed(FailureKind::Internal));
                Error::Internal(format!("unexpected error during scan: {}", err))
            }
        }
    }

    fn transition(&mut self, next: ScanState) {
        debug!("scan state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn highest_count(&self) -> u64 {
        self.running_max.get()
    }

    pub fn words_seen(&self) -> u64 {
        self.words_seen
    }

    /// 최고 카운트 단어 보고서 (스캔 성공 후에만)
    pub fn report(&self) -> Result<FrequencyReport> {
        match self.state {
            ScanState::Success => Ok(FrequencyReport::new(
                &self.dictionary,
                self.running_max.get(),
            )),
            state if state.is_terminal() => Err(Error::Usage(format!(
                "scan did not succeed (state: {:?})",
                state
            ))),
            state => Err(Error::Usage(format!(
                "scan has not finished (state: {:?})",
                state
            ))),
        }
    }
}

/// 편의 함수: 스트림을 스캔하고 완료된 카운터 반환
pub fn scan_stream<R: Read>(reader: R, config: &WordFreqConfig) -> Result<WordCounter> {
    let mut counter = WordCounter::from_config(config);
    counter.scan(reader)?;
    Ok(counter)
}
