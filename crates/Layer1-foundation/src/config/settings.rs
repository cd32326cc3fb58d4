//! WordFreq Config - 통합 설정
//!
//! 스캔에 필요한 설정(최대 단어 길이)과 출력 설정(verbose)을 관리합니다.
//! 로드 순서: 기본값 → 글로벌 → 프로젝트 → `--config` 파일 → CLI 플래그

use crate::storage::{load_json_file, JsonStore};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// 설정 파일명
pub const CONFIG_FILE: &str = "config.json";

/// 기본 최대 단어 길이
pub const DEFAULT_MAX_WORD_LEN: usize = 30;

// ============================================================================
// WordFreq Config
// ============================================================================

/// wordfreq 설정
///
/// 모든 필드는 Optional - 설정되지 않은 값은 다음 레이어로 넘어가고,
/// 최종적으로 accessor가 기본값을 돌려줍니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFreqConfig {
    /// 단어 최대 길이 (하이픈 포함)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_word_length: Option<usize>,

    /// 트리 전체 출력
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl WordFreqConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드
    ///
    /// 암묵적 레이어는 실패해도 건너뜁니다 (경고만 남김).
    pub fn load() -> Self {
        let mut config = Self::new();

        match JsonStore::global() {
            Ok(global) => config.merge_layer(&global, "global"),
            Err(e) => warn!("Skipping global config: {}", e),
        }

        match JsonStore::current_project() {
            Ok(project) => config.merge_layer(&project, "project"),
            Err(e) => warn!("Skipping project config: {}", e),
        }

        config
    }

    /// 특정 파일에서 로드 (실패 시 에러)
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = load_json_file(path)?;
        config.validate()?;
        info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    fn merge_layer(&mut self, store: &JsonStore, description: &str) {
        match store.load_optional::<WordFreqConfig>(CONFIG_FILE) {
            Ok(Some(layer)) => {
                info!(
                    "Loaded {} config from: {}",
                    description,
                    store.file_path(CONFIG_FILE).display()
                );
                self.merge(layer);
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to load {} config: {}", description, e),
        }
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: WordFreqConfig) {
        if other.max_word_length.is_some() {
            self.max_word_length = other.max_word_length;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn max_word_length(&self) -> usize {
        self.max_word_length.unwrap_or(DEFAULT_MAX_WORD_LEN)
    }

    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<()> {
        if self.max_word_length == Some(0) {
            return Err(Error::Config(
                "maxWordLength must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = Some(max_word_length);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }
}
