//! 合理性评分：已识别标签字节的出现频率
use crate::tags::TAG_SET;

/// 候选切片的评分结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// 属于标签集合的字节数（按出现次数计）
    pub tag_bytes: usize,
    pub len: usize,
}

impl Score {
    pub fn of(bytes: &[u8]) -> Self {
        Self { tag_bytes: TAG_SET.count_in(bytes), len: bytes.len() }
    }

    pub fn density(&self) -> f64 {
        if self.len == 0 { return 0.0; }
        self.tag_bytes as f64 / self.len as f64
    }

    /// 浮点乘积直接与计数比较，不对阈值取整
    pub fn passes(&self, min_density: f64) -> bool {
        self.tag_bytes as f64 >= self.len as f64 * min_density
    }
}

/// 判定切片是否“像”一个报告描述符
pub fn is_plausible(bytes: &[u8], min_density: f64) -> bool {
    Score::of(bytes).passes(min_density)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_threshold_is_accepted() {
        let mut bytes = [0u8; 10];
        bytes[0] = 0x05;
        bytes[5] = 0xC0;
        assert_eq!(Score::of(&bytes).tag_bytes, 2);
        assert!(is_plausible(&bytes, 0.2));

        bytes[5] = 0x00;
        assert!(!is_plausible(&bytes, 0.2));
    }

    #[test]
    fn threshold_is_not_rounded() {
        // 11 * 0.2 = 2.2：2 个标签不够，3 个才够
        let mut bytes = [0u8; 11];
        bytes[0] = 0x05;
        bytes[1] = 0x09;
        assert!(!is_plausible(&bytes, 0.2));
        bytes[2] = 0x75;
        assert!(is_plausible(&bytes, 0.2));
    }

    #[test]
    fn density() {
        let s = Score::of(&[0x05, 0x00, 0x09, 0x00]);
        assert_eq!(s.density(), 0.5);
        assert_eq!(Score::of(&[]).density(), 0.0);
    }

    #[test]
    fn zero_threshold_accepts_anything() {
        assert!(is_plausible(&[0x00; 64], 0.0));
    }
}
