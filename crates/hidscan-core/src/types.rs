//! 公共类型（对外暴露）
use serde::Serialize;

use crate::report::hex_dump;
use crate::scan::Candidate;
use crate::tags::TAG_SET;

/// JSON 报告中的单个元素
#[derive(Debug, Clone, Serialize)]
pub struct OutputItem {
    pub offset: usize,
    pub offset_hex: String,
    pub length: usize,
    pub score: usize,
    pub density: f64,
    pub hex: String,
    pub tags: Vec<TagCount>,
}

/// 某个已识别标签在候选中的出现次数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: &'static str,
    pub count: usize,
}

impl From<&Candidate<'_>> for OutputItem {
    fn from(c: &Candidate<'_>) -> Self {
        Self {
            offset: c.offset,
            offset_hex: format!("0x{:X}", c.offset),
            length: c.len(),
            score: c.score.tag_bytes,
            density: c.score.density(),
            hex: hex_dump(c.bytes),
            tags: TAG_SET
                .histogram(c.bytes)
                .into_iter()
                .map(|(tag, count)| TagCount { tag, count })
                .collect(),
        }
    }
}
