//! 扫描主流程：游标状态机 + 文件入口
//!
//! 游标只前进不回退：
//! - SEEKING：跳到下一个起始标签（memchr，与逐字节 +1 等价）
//! - PROBING：在 [cursor, cursor + max_len) 窗口内逐个尝试结束点
//! - EMITTED：产出候选，游标移到结束点之后
//! 窗口内无合格结束点时只前进 1 字节，窗口内部的起始标签仍可成为新起点。
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};

use crate::boundary::ClosingPoints;
use crate::error::ScanError;
use crate::options::{ReportFormat, ScanOptions, ScanStats};
use crate::report::{write_text_candidate, write_text_header, JsonArrayWriter};
use crate::score::Score;

/// 单个候选（借用缓冲区，不复制）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub offset: usize,
    pub bytes: &'a [u8],
    pub score: Score,
}

impl Candidate<'_> {
    /// 结束偏移（含）
    pub fn end(&self) -> usize {
        self.offset + self.bytes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// 惰性候选扫描器
pub struct CandidateScanner<'a> {
    buf: &'a [u8],
    min_len: usize,
    max_len: usize,
    min_density: f64,
    start_tag: u8,
    cursor: usize,
    stats: ScanStats,
}

impl<'a> CandidateScanner<'a> {
    pub fn new(buf: &'a [u8], opts: &ScanOptions) -> Result<Self, ScanError> {
        opts.validate()?;
        Ok(Self {
            buf,
            min_len: opts.min_len,
            max_len: opts.max_len,
            min_density: opts.min_density,
            start_tag: opts.start_tag,
            cursor: 0,
            stats: ScanStats { bytes_scanned: buf.len(), ..ScanStats::default() },
        })
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// 剩余空间仍能容纳一个最小长度的候选
    fn has_room(&self) -> bool {
        self.cursor + self.min_len <= self.buf.len()
    }

    /// 在 `start` 处探测窗口；拒绝某个结束点后继续向后找
    fn probe(&self, start: usize) -> Option<Candidate<'a>> {
        let buf = self.buf;
        for end in ClosingPoints::new(buf, start, self.min_len, self.max_len) {
            let bytes = &buf[start..=end];
            let score = Score::of(bytes);
            if score.passes(self.min_density) {
                return Some(Candidate { offset: start, bytes, score });
            }
            trace!(start, end, tag_bytes = score.tag_bytes, "closing point rejected by density");
        }
        None
    }
}

impl<'a> Iterator for CandidateScanner<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Candidate<'a>> {
        while self.has_room() {
            // SEEKING：起点不能晚于 len - min_len
            let last_start = self.buf.len() - self.min_len;
            match memchr::memchr(self.start_tag, &self.buf[self.cursor..=last_start]) {
                Some(skip) => self.cursor += skip,
                None => {
                    self.cursor = last_start + 1;
                    break;
                }
            }

            // PROBING
            let start = self.cursor;
            self.stats.starts_probed += 1;
            match self.probe(start) {
                Some(candidate) => {
                    // EMITTED
                    self.cursor = candidate.end() + 1;
                    self.stats.candidates_emitted += 1;
                    debug!(offset = candidate.offset, len = candidate.len(), tag_bytes = candidate.score.tag_bytes, "candidate");
                    return Some(candidate);
                }
                None => self.cursor = start + 1,
            }
        }
        None
    }
}

/// 扫描整个缓冲区并按偏移升序收集候选
pub fn scan_buffer<'a>(buf: &'a [u8], opts: &ScanOptions) -> Result<Vec<Candidate<'a>>, ScanError> {
    Ok(CandidateScanner::new(buf, opts)?.collect())
}

/// 读取文件、扫描并按 `opts.format` 把报告流式写入 `out`
/// - 参数校验与大小检查在读取文件之前完成
/// - I/O 错误原样上抛，附带文件路径
pub fn scan_file_and_write(path: &Path, out: &mut dyn Write, opts: &ScanOptions) -> Result<ScanStats> {
    opts.validate()?;
    if let Some(limit) = opts.max_file_size {
        let size = std::fs::metadata(path)
            .with_context(|| format!("stat {}", path.display()))?
            .len();
        if size > limit {
            return Err(ScanError::FileTooLarge { size, limit }.into());
        }
    }
    let buf = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;

    let mut scanner = CandidateScanner::new(&buf, opts)?;
    match opts.format {
        ReportFormat::Text => {
            write_text_header(out, path)?;
            for candidate in scanner.by_ref() {
                write_text_candidate(out, &candidate)?;
            }
        }
        ReportFormat::Json => {
            let mut json = JsonArrayWriter::begin(out)?;
            for candidate in scanner.by_ref() {
                json.write(&candidate)?;
            }
            json.finish()?;
        }
    }
    Ok(scanner.stats().clone())
}
