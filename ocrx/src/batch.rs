use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ocr::{Document, OcrEngine};
use walkdir::WalkDir;

/// 过滤文件扩展名，仅允许 PNG/JPG/JPEG（不区分大小写）。
pub fn is_supported_image(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if ext == "png" || ext == "jpg" || ext == "jpeg"
    )
}

/// 递归收集目录下受支持的图像，返回（完整路径，相对路径）列表。
///
/// 相对路径统一使用 `/` 分隔符，作为批处理结果映射的键。
pub fn collect_images(batch_dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let mut images = Vec::new();

    for entry in WalkDir::new(batch_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|res| res.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_supported_image(path) {
            continue;
        }

        let relative = path
            .strip_prefix(batch_dir)
            .with_context(|| format!("无法计算相对路径：{}", path.display()))?;
        let rel_str = relative.to_string_lossy().replace('\\', "/");
        images.push((path.to_path_buf(), rel_str));
    }

    Ok(images)
}

/// 顺序处理目录中的所有图像，返回相对路径到格式化结果的有序映射。
///
/// 单个文件识别或格式化失败时输出警告并跳过，不会中断整个批处理。
pub fn process_batch<F>(
    engine: &mut OcrEngine,
    batch_dir: &Path,
    format: F,
) -> Result<BTreeMap<String, String>>
where
    F: Fn(&Document) -> Result<String>,
{
    anyhow::ensure!(
        batch_dir.is_dir(),
        "批处理路径必须是有效目录：{}",
        batch_dir.display()
    );

    let mut results = BTreeMap::new();
    for (path, relative) in collect_images(batch_dir)? {
        match engine
            .recognize_path(&path)
            .and_then(|document| format(&document))
        {
            Ok(formatted) => {
                results.insert(relative, formatted);
            }
            Err(err) => eprintln!("处理 {} 失败，已跳过：{err:?}", path.display()),
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::{collect_images, is_supported_image};
    use std::fs;
    use std::path::Path;

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(is_supported_image(Path::new("a.png")));
        assert!(is_supported_image(Path::new("a.JPG")));
        assert!(is_supported_image(Path::new("dir/b.Jpeg")));
        assert!(!is_supported_image(Path::new("b.txt")));
        assert!(!is_supported_image(Path::new("noext")));
        assert!(!is_supported_image(Path::new("archive.png.zip")));
    }

    #[test]
    fn collect_images_skips_unsupported_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();
        fs::write(dir.path().join("b.txt"), b"").unwrap();
        fs::write(dir.path().join("c.JPG"), b"").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/d.jpeg"), b"").unwrap();

        let images = collect_images(dir.path()).unwrap();
        let relatives: Vec<&str> = images.iter().map(|(_, rel)| rel.as_str()).collect();

        assert_eq!(relatives, vec!["a.png", "c.JPG", "nested/d.jpeg"]);
    }
}
