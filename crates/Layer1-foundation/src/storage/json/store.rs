//! JSON 파일 저장소

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 앱 디렉토리 이름 (글로벌: `<config_dir>/wordfreq`, 프로젝트: `.wordfreq`)
pub const APP_DIR_NAME: &str = "wordfreq";

/// JSON 설정 저장소
#[derive(Debug, Clone)]
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 글로벌 설정 (`<config_dir>/wordfreq/`)
    pub fn global() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Cannot find config directory".to_string()))?
            .join(APP_DIR_NAME);
        Ok(Self::new(dir))
    }

    /// 프로젝트 설정 (`.wordfreq/`)
    pub fn project(root: impl Into<PathBuf>) -> Self {
        Self::new(root.into().join(format!(".{}", APP_DIR_NAME)))
    }

    /// 현재 디렉토리 프로젝트 설정
    pub fn current_project() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::Config(format!("Cannot get current directory: {}", e)))?;
        Ok(Self::project(cwd))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// JSON 로드 (주석 허용)
    pub fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        load_json_file(&self.file_path(filename))
    }

    /// JSON 로드 (Optional)
    pub fn load_optional<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.file_path(filename);
        if !path.exists() {
            return Ok(None);
        }
        self.load(filename).map(Some)
    }
}

// ============================================================================
// 유틸리티 함수
// ============================================================================

/// 임의 경로의 JSON(C) 파일 로드
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    // JSONC 파일일 수 있음 (주석 제거)
    let content = strip_json_comments(&content);

    let value = serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
    debug!("Loaded JSON from {}", path.display());
    Ok(value)
}

/// 주석 제거기 상태
#[derive(Clone, Copy)]
enum Lexer {
    Code,
    /// 문자열 밖에서 `/` 하나를 본 상태 (아직 출력 안 함)
    Slash,
    Str,
    StrEscape,
    LineComment,
    BlockComment,
    /// 블록 주석 안에서 `*`를 본 상태
    BlockStar,
}

/// JSON 주석 제거 (// 및 /* */), 문자열 리터럴 안은 그대로
pub fn strip_json_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut state = Lexer::Code;

    for c in input.chars() {
        state = match (state, c) {
            (Lexer::Code, '/') => Lexer::Slash,
            (Lexer::Code, '"') => {
                out.push(c);
                Lexer::Str
            }
            (Lexer::Code, _) => {
                out.push(c);
                Lexer::Code
            }

            (Lexer::Slash, '/') => Lexer::LineComment,
            (Lexer::Slash, '*') => Lexer::BlockComment,
            (Lexer::Slash, _) => {
                out.push('/');
                out.push(c);
                if c == '"' {
                    Lexer::Str
                } else {
                    Lexer::Code
                }
            }

            (Lexer::Str, '\\') => {
                out.push(c);
                Lexer::StrEscape
            }
            (Lexer::Str, '"') => {
                out.push(c);
                Lexer::Code
            }
            (Lexer::Str, _) | (Lexer::StrEscape, _) => {
                out.push(c);
                Lexer::Str
            }

            (Lexer::LineComment, '\n') => {
                out.push(c);
                Lexer::Code
            }
            (Lexer::LineComment, _) => Lexer::LineComment,

            (Lexer::BlockComment, '*') | (Lexer::BlockStar, '*') => Lexer::BlockStar,
            (Lexer::BlockStar, '/') => Lexer::Code,
            (Lexer::BlockComment, _) | (Lexer::BlockStar, _) => Lexer::BlockComment,
        };
    }

    // 입력 끝의 외톨이 `/`
    if let Lexer::Slash = state {
        out.push('/');
    }
    out
}
