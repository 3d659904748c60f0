//! 报告输出（文本 / 流式 JSON 数组）
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use crate::scan::Candidate;
use crate::types::OutputItem;

/// 两位大写十六进制、空格分隔
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 { s.push(' '); }
        let _ = write!(s, "{b:02X}");
    }
    s
}

pub(crate) fn write_text_header(out: &mut dyn Write, path: &Path) -> io::Result<()> {
    writeln!(out, "Scanning {} for HID Report Descriptor candidates...", path.display())
}

/// `[Offset 0x..]`、十六进制转储、空行
pub(crate) fn write_text_candidate(out: &mut dyn Write, c: &Candidate<'_>) -> io::Result<()> {
    writeln!(out, "[Offset 0x{:X}]", c.offset)?;
    writeln!(out, "{}", hex_dump(c.bytes))?;
    writeln!(out)
}

/// 逐个写出元素的 JSON 数组，不在内存中攒整份结果
pub(crate) struct JsonArrayWriter<'w> {
    out: &'w mut dyn Write,
    first: bool,
}

impl<'w> JsonArrayWriter<'w> {
    pub(crate) fn begin(out: &'w mut dyn Write) -> io::Result<Self> {
        write!(out, "[")?;
        Ok(Self { out, first: true })
    }

    pub(crate) fn write(&mut self, c: &Candidate<'_>) -> anyhow::Result<()> {
        if !self.first { write!(self.out, ",")?; } else { self.first = false; }
        serde_json::to_writer(&mut *self.out, &OutputItem::from(c))?;
        Ok(())
    }

    pub(crate) fn finish(self) -> io::Result<()> {
        writeln!(self.out, "]")
    }
}
