mod batch;
mod sink;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ocr::{Document, ModelConfig, OcrEngine};
use sink::Sink;

/// 输出格式枚举，决定识别结果的序列化方式。
#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    /// 百度 OCR 风格的缩进 JSON。
    Baidu,
    /// 逐行 CSV（text,left,top,width,height）。
    Csv,
    /// 与 baidu 结构相同的紧凑 JSON。
    Native,
}

/// 命令行参数：控制输入图像、输出目标与序列化格式。
#[derive(Parser, Debug)]
#[command(
    name = "ocrx",
    version,
    about = "OCR 工具，用于从图像中提取文本与位置信息"
)]
struct Args {
    /// 要处理的图像文件路径
    image: Option<PathBuf>,

    /// 指定保存 OCR 结果的文件路径；缺省时复制到剪贴板
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 指定输出格式（baidu、csv 或 native）
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Baidu)]
    format: OutputFormat,

    /// 将同一视觉行上的识别片段合并后再输出
    #[arg(short, long, default_value_t = false)]
    compact: bool,

    /// 指定要批处理的图像目录
    #[arg(short, long)]
    batch: Option<PathBuf>,

    /// PP-OCRv5 模型文件所在目录
    #[arg(long, default_value = "artifacts/ocr")]
    models: PathBuf,
}

/// 程序入口：解析参数并执行单图或批处理流程。
fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    let sink = Sink::from_output(args.output.clone());
    let config = ModelConfig::from_dir(&args.models);
    let mut engine = OcrEngine::new(config)?;

    if let Some(batch_dir) = args.batch.as_deref() {
        let results = batch::process_batch(&mut engine, batch_dir, |document| {
            format_document(document, args.format, args.compact)
        })?;
        anyhow::ensure!(!results.is_empty(), "批处理目录中没有可识别的图像");

        let json =
            serde_json::to_string_pretty(&results).context("无法将批处理结果编码为 JSON")?;
        sink.write(&json)?;

        match &sink {
            Sink::File(path) => println!("批处理结果已保存到 {}", path.display()),
            Sink::Clipboard => println!("批处理结果已复制到剪贴板"),
        }
    } else if let Some(image) = args.image.as_deref() {
        let document = engine.recognize_path(image)?;
        let formatted = format_document(&document, args.format, args.compact)?;
        sink.write(&formatted)?;

        match &sink {
            Sink::File(path) => println!("结果已保存到 {}", path.display()),
            Sink::Clipboard => println!("结果已复制到剪贴板"),
        }
    } else {
        anyhow::bail!("请指定图像路径或批处理目录");
    }

    Ok(())
}

/// 按选定格式序列化识别结果，可选地先做同行合并。
fn format_document(document: &Document, format: OutputFormat, compact: bool) -> Result<String> {
    let document = if compact {
        document.compact()
    } else {
        document.clone()
    };

    match format {
        OutputFormat::Baidu => document.to_json(),
        OutputFormat::Csv => document.to_csv(),
        OutputFormat::Native => document.to_raw(),
    }
}
