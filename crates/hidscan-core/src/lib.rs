//! HID 报告描述符候选扫描库
//!
//! 设计要点：
//! - 在无格式标记的二进制（固件镜像、内存转储）中定位疑似 USB HID 报告描述符。
//! - 起点：起始标签（默认 Usage Page 0x05）；终点：按 Collection 嵌套深度回到 <= 0 的 End Collection。
//! - 评分：已识别标签字节的频率 / 长度 >= 阈值（默认 0.2）。这是启发式，不是解析器。
//! - 候选按偏移升序产出，互不重叠；同一输入重复扫描结果一致。

mod boundary;
mod error;
mod options;
mod report;
mod scan;
mod score;
mod tags;
mod types;

pub use boundary::{find_end, ClosingPoints};
pub use error::ScanError;
pub use options::{ReportFormat, ScanOptions, ScanStats, DEFAULT_MAX_LEN, DEFAULT_MIN_DENSITY, DEFAULT_MIN_LEN};
pub use report::hex_dump;
pub use scan::{scan_buffer, scan_file_and_write, Candidate, CandidateScanner};
pub use score::{is_plausible, Score};
pub use tags::{TagSet, COLLECTION, END_COLLECTION, KNOWN_TAGS, TAG_SET, USAGE_PAGE};
pub use types::{OutputItem, TagCount};
