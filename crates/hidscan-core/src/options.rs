//! 扫描选项与统计信息（模块）
use crate::error::ScanError;
use crate::tags::USAGE_PAGE;

/// 默认最小候选长度（字节）
pub const DEFAULT_MIN_LEN: usize = 32;
/// 默认最大候选长度（字节），也是单个起点的探测窗口大小
pub const DEFAULT_MAX_LEN: usize = 256;
/// 默认标签密度阈值：已识别标签字节数 / 候选长度
pub const DEFAULT_MIN_DENSITY: f64 = 0.2;

/// 报告输出格式
/// - Text：偏移 + 十六进制转储（参考格式）
/// - Json：流式 JSON 数组，便于脚本处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// 扫描选项
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 候选最小长度（含首尾）
    pub min_len: usize,
    /// 候选最大长度；探测窗口为 [start, start + max_len)
    pub max_len: usize,
    /// 标签密度阈值（0.0..=1.0），启发式调参常量而非协议值
    pub min_density: f64,
    /// 起始标签，默认 Usage Page（0x05）
    pub start_tag: u8,
    /// 最大文件大小（字节）；超过则拒绝读取
    pub max_file_size: Option<u64>,
    /// 报告格式
    pub format: ReportFormat,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            min_density: DEFAULT_MIN_DENSITY,
            start_tag: USAGE_PAGE,
            max_file_size: None,
            format: ReportFormat::Text,
        }
    }
}

impl ScanOptions {
    /// 在扫描前校验参数组合
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.min_len == 0 {
            return Err(ScanError::ZeroMinLen);
        }
        if self.min_len > self.max_len {
            return Err(ScanError::LengthRange { min_len: self.min_len, max_len: self.max_len });
        }
        if !self.min_density.is_finite() || !(0.0..=1.0).contains(&self.min_density) {
            return Err(ScanError::Density(self.min_density));
        }
        Ok(())
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub bytes_scanned: usize,
    /// 命中起始标签、进入窗口探测的次数
    pub starts_probed: usize,
    pub candidates_emitted: usize,
}
