//! 边界查找：从起始标签出发，按 Collection 嵌套深度寻找候选结束点
//!
//! 规则：
//! - 深度从 0 开始；遇到 Collection（0xA1）+1，遇到 End Collection（0xC0）-1。
//! - 只在 End Collection 处判定：深度 <= 0 且区间长度 >= min_len 即为一个结束点。
//! - 深度允许为负（截取片段时常见的“多余”关闭标签），因此判定是 `<= 0` 而非 `== 0`。
//! - 窗口最多覆盖 max_len 个字节（到缓冲区末尾截断）。
use crate::tags::{COLLECTION, END_COLLECTION};

/// 窗口内所有合格结束点（按偏移升序、惰性产生）
///
/// 评分拒绝某个结束点后，调用方继续从同一个迭代器取下一个结束点，
/// 而不是放弃整个窗口。
pub struct ClosingPoints<'a> {
    buf: &'a [u8],
    start: usize,
    window_end: usize,
    min_len: usize,
    pos: usize,
    depth: isize,
}

impl<'a> ClosingPoints<'a> {
    /// `start` 超出缓冲区时得到空迭代器
    pub fn new(buf: &'a [u8], start: usize, min_len: usize, max_len: usize) -> Self {
        let window_end = start.saturating_add(max_len).min(buf.len());
        Self { buf, start, window_end, min_len, pos: start, depth: 0 }
    }
}

impl Iterator for ClosingPoints<'_> {
    /// 结束点的绝对偏移（含）
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pos < self.window_end {
            let at = self.pos;
            self.pos += 1;
            match self.buf[at] {
                COLLECTION => self.depth += 1,
                END_COLLECTION => {
                    self.depth -= 1;
                    if self.depth <= 0 && at - self.start + 1 >= self.min_len {
                        return Some(at);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

/// 最小的合格结束点；窗口内不存在时返回 None（“此处无候选”）
pub fn find_end(buf: &[u8], start: usize, min_len: usize, max_len: usize) -> Option<usize> {
    ClosingPoints::new(buf, start, min_len, max_len).next()
}
