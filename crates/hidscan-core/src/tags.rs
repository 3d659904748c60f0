//! HID 报告描述符标签集合（进程级常量，编译期构建，不可变）
//!
//! 只识别最常见的短条目前缀字节，不区分数据长度位以外的编码细节；
//! 这里是频率启发式的输入，不是描述符解析器。

/// Usage Page：默认的起始标签（描述符通常以它开头）
pub const USAGE_PAGE: u8 = 0x05;
pub const USAGE: u8 = 0x09;
/// Collection：嵌套深度 +1
pub const COLLECTION: u8 = 0xA1;
/// End Collection：嵌套深度 -1，也是唯一可能的候选结束点
pub const END_COLLECTION: u8 = 0xC0;
pub const LOGICAL_MINIMUM: u8 = 0x15;
pub const LOGICAL_MAXIMUM: u8 = 0x25;
pub const REPORT_SIZE: u8 = 0x75;
pub const REPORT_COUNT: u8 = 0x95;
pub const INPUT: u8 = 0x81;
pub const OUTPUT: u8 = 0x91;
pub const REPORT_ID: u8 = 0x85;

/// 已识别标签（字节值, 名称），顺序即 JSON 报告中直方图的顺序
pub const KNOWN_TAGS: [(u8, &str); 11] = [
    (USAGE_PAGE, "usage_page"),
    (USAGE, "usage"),
    (COLLECTION, "collection"),
    (END_COLLECTION, "end_collection"),
    (LOGICAL_MINIMUM, "logical_minimum"),
    (LOGICAL_MAXIMUM, "logical_maximum"),
    (REPORT_SIZE, "report_size"),
    (REPORT_COUNT, "report_count"),
    (INPUT, "input"),
    (OUTPUT, "output"),
    (REPORT_ID, "report_id"),
];

/// 256 项查找表：`table[b]` 为真表示字节 b 属于标签集合
pub struct TagSet {
    table: [bool; 256],
}

/// 全局唯一的标签集合
pub static TAG_SET: TagSet = TagSet::new();

impl TagSet {
    const fn new() -> Self {
        let mut table = [false; 256];
        let mut i = 0;
        while i < KNOWN_TAGS.len() {
            table[KNOWN_TAGS[i].0 as usize] = true;
            i += 1;
        }
        Self { table }
    }

    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        self.table[b as usize]
    }

    /// 统计切片中属于集合的字节数（按出现次数计，不去重）
    pub fn count_in(&self, bytes: &[u8]) -> usize {
        bytes.iter().filter(|&&b| self.contains(b)).count()
    }

    /// 按 `KNOWN_TAGS` 顺序统计各标签的出现次数（仅保留出现过的标签）
    pub fn histogram(&self, bytes: &[u8]) -> Vec<(&'static str, usize)> {
        let mut counts = [0usize; 256];
        for &b in bytes {
            counts[b as usize] += 1;
        }
        KNOWN_TAGS
            .iter()
            .filter(|(tag, _)| counts[*tag as usize] > 0)
            .map(|(tag, name)| (*name, counts[*tag as usize]))
            .collect()
    }
}
