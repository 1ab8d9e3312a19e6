//! # 加载与嗅探模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验：先确认路径指向普通文件，再读入内存，
//! 最后通过文件签名（magic bytes）判定格式。扩展名不参与判定。

use std::path::Path;

use super::source::{RawImageData, SourceFormat};
use super::{CropError, ImageCropper};

impl ImageCropper {
    /// 从本地路径加载图片原始字节并嗅探格式。
    pub(super) fn load_from_file(&self, path: &Path) -> Result<RawImageData, CropError> {
        log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

        let metadata = std::fs::metadata(path).map_err(|e| {
            CropError::FileSystem(format!("无法读取文件信息 {}：{}", path.display(), e))
        })?;

        if !metadata.is_file() {
            return Err(CropError::FileSystem(format!(
                "不是普通文件：{}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            CropError::FileSystem(format!("无法读取图片文件 {}：{}", path.display(), e))
        })?;
        let format = Self::sniff_format(&bytes)?;

        log::debug!("🔍 嗅探格式：{}（{} bytes）", format, bytes.len());

        Ok(RawImageData { bytes, format })
    }

    /// 通过文件签名判定格式，仅接受 JPEG 与 PNG。
    pub(crate) fn sniff_format(bytes: &[u8]) -> Result<SourceFormat, CropError> {
        if bytes.is_empty() {
            return Err(CropError::UnsupportedType("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| CropError::UnsupportedType("无法识别文件类型".to_string()))?;

        SourceFormat::from_mime(kind.mime_type())
            .ok_or_else(|| CropError::UnsupportedType(kind.mime_type().to_string()))
    }
}
