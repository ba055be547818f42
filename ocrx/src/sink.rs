use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use arboard::Clipboard;

/// 结果输出目标：写入文件，或复制到系统剪贴板。
#[derive(Debug)]
pub enum Sink {
    /// 写入指定路径的文件（UTF-8 文本）。
    File(PathBuf),
    /// 复制到操作系统剪贴板。
    Clipboard,
}

impl Sink {
    /// 根据 `--output` 参数选择输出目标；未指定时使用剪贴板。
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => Sink::File(path),
            None => Sink::Clipboard,
        }
    }

    /// 将格式化结果写入目标。失败立即返回错误，不做重试。
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            Sink::File(path) => fs::write(path, text)
                .with_context(|| format!("无法写入结果文件 {}", path.display())),
            Sink::Clipboard => {
                let mut clipboard = Clipboard::new().context("无法访问系统剪贴板")?;
                clipboard
                    .set_text(text.to_string())
                    .context("无法写入系统剪贴板")
            }
        }
    }
}
