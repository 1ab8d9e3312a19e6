//! # 输出写入模块
//!
//! 输出文件与原图位于同一目录，文件名为 `<前缀><原文件名>`。
//! 文件句柄仅在写入阶段持有，返回前显式 flush，flush 失败同样视为错误。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{CropConfig, CropError, ImageCropper};

impl ImageCropper {
    /// 推导输出路径：`dir(input) + prefix + basename(input)`。
    ///
    /// # 示例
    /// ```rust
    /// use image_cropper::cropper::{CropConfig, ImageCropper};
    /// use std::path::Path;
    ///
    /// let output = ImageCropper::output_path_for(Path::new("photos/cat1.png"), &CropConfig::default())?;
    /// assert_eq!(output, Path::new("photos/cropped_cat1.png"));
    /// # Ok::<(), image_cropper::cropper::CropError>(())
    /// ```
    pub fn output_path_for(input: &Path, config: &CropConfig) -> Result<PathBuf, CropError> {
        let file_name = input.file_name().ok_or_else(|| {
            CropError::FileSystem(format!("无法从路径中获取文件名：{}", input.display()))
        })?;

        let mut output_name = std::ffi::OsString::from(&config.output_prefix);
        output_name.push(file_name);

        Ok(match input.parent() {
            Some(dir) => dir.join(output_name),
            None => PathBuf::from(output_name),
        })
    }

    /// 创建（或截断）输出文件并写入编码后的字节。
    pub(super) fn write_output(&self, output: &Path, bytes: &[u8]) -> Result<(), CropError> {
        let file = File::create(output).map_err(|e| {
            CropError::FileSystem(format!("无法创建输出文件 {}：{}", output.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .map_err(|e| CropError::FileSystem(format!("写入输出文件失败：{}", e)))?;
        writer
            .flush()
            .map_err(|e| CropError::FileSystem(format!("刷新输出文件失败：{}", e)))?;

        log::debug!("💾 已写入 {} bytes -> {}", bytes.len(), output.display());
        Ok(())
    }
}
