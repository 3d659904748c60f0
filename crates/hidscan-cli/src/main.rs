use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hidscan_core::{scan_file_and_write, ReportFormat, ScanOptions, DEFAULT_MAX_LEN, DEFAULT_MIN_DENSITY, DEFAULT_MIN_LEN};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "hidscan", version, about = "Scan a binary file for USB HID Report Descriptor candidates")]
struct Cli {
    /// 待扫描的二进制文件（固件镜像、内存转储等）
    file: PathBuf,

    /// 候选最小长度（字节）
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    min_len: usize,

    /// 候选最大长度（字节），也是每个起点的探测窗口
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// 已识别标签字节占比阈值
    #[arg(long, default_value_t = DEFAULT_MIN_DENSITY)]
    min_density: f64,

    /// 起始标签（十六进制，例如 0x05 或 05）
    #[arg(long, default_value = "0x05", value_parser = parse_hex_byte)]
    start_tag: u8,

    /// 输出格式：text 或 json
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// 最大文件大小（单位字节）；超过则拒绝扫描
    #[arg(long)]
    max_file_size: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = parse_cli();

    let opts = ScanOptions {
        min_len: cli.min_len,
        max_len: cli.max_len,
        min_density: cli.min_density,
        start_tag: cli.start_tag,
        max_file_size: cli.max_file_size,
        format: match cli.format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        },
    };
    info!(file = ?cli.file, min_len = opts.min_len, max_len = opts.max_len, "starting scan");

    // 报告写到 stdout，日志写到 stderr
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = scan_file_and_write(&cli.file, &mut out, &opts).context("scan failed")?;
    out.flush().context("flush output")?;

    info!(
        bytes_scanned = stats.bytes_scanned,
        starts_probed = stats.starts_probed,
        candidates = stats.candidates_emitted,
        "scan finished"
    );
    Ok(())
}

/// 参数错误以状态码 1 退出；--help / --version 仍按 clap 默认处理
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 解析十六进制字节参数
fn parse_hex_byte(s: &str) -> Result<u8, String> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u8::from_str_radix(digits, 16).map_err(|e| format!("invalid hex byte `{s}`: {e}"))
}
