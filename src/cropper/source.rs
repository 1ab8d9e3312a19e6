//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部请求”和“流水线中间结果”解耦：
//! - `CropRequest` 表示一次裁剪请求
//! - `RawImageData` 表示已加载、已嗅探格式但未解码的字节
//! - `CropOutcome` 表示一次成功裁剪的结果摘要

use std::fmt;
use std::path::PathBuf;

use image::ImageFormat;

/// 一次裁剪请求。
#[derive(Debug, Clone)]
pub struct CropRequest {
    /// 输入图片路径。
    pub input_path: PathBuf,
    /// 目标宽度（像素）。
    pub width: u32,
    /// 目标高度（像素）。
    pub height: u32,
}

impl CropRequest {
    pub fn new(input_path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            input_path: input_path.into(),
            width,
            height,
        }
    }
}

/// 可处理的源图片格式，由文件内容嗅探得到，与扩展名无关。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    /// 由 MIME 类型映射到格式，仅接受 `image/jpeg` 与 `image/png`。
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    pub(crate) fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// 加载阶段输出：原始字节与嗅探出的格式。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 嗅探得到的格式。
    pub(crate) format: SourceFormat,
}

/// 一次成功裁剪的结果摘要。
#[derive(Debug, Clone)]
pub struct CropOutcome {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub format: SourceFormat,
    /// 源图尺寸 `(width, height)`。
    pub source_dimensions: (u32, u32),
    /// 输出尺寸 `(width, height)`。
    pub cropped_dimensions: (u32, u32),
    /// 裁剪起点 `(x, y)`。
    pub origin: (u32, u32),
}
