//! Non-interactive run: 파일 하나를 스캔하고 보고서 출력

use anyhow::Context;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use wordfreq_core::{scan_stream, TreeDump};
use wordfreq_foundation::WordFreqConfig;

/// 파일을 스캔하고 결과를 `out`에 씀
///
/// 스캔이 실패하면 아무것도 쓰지 않음 (부분 출력 없음).
pub fn run_once(
    path: &Path,
    config: &WordFreqConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let file = File::open(path)
        .with_context(|| format!("File cannot be opened: {}", path.display()))?;

    let counter = scan_stream(file, config)
        .with_context(|| format!("Failed to process {}", path.display()))?;
    let report = counter.report()?;

    tracing::info!(
        "Scanned {} words ({} distinct) from {}",
        counter.words_seen(),
        counter.dictionary().len(),
        path.display()
    );

    if config.verbose() {
        write!(out, "{}", TreeDump::new(counter.dictionary()))?;
    }
    write!(out, "{}", report)?;
    out.flush()?;

    Ok(())
}
