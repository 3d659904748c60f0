//! 错误类型
use thiserror::Error;

/// 扫描前即可判定的致命错误；I/O 错误由调用方以 anyhow 附带路径上下文传播
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("min_len must be at least 1")]
    ZeroMinLen,

    #[error("min_len ({min_len}) is greater than max_len ({max_len})")]
    LengthRange { min_len: usize, max_len: usize },

    #[error("min_density must be a finite value in 0.0..=1.0, got {0}")]
    Density(f64),

    #[error("file is {size} bytes, exceeds max_file_size of {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },
}
