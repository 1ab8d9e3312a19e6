//! # 解码、裁剪与编码流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → 子矩形 → 字节”的过程集中管理。
//! 源图尺寸不设上限，任何能解码的 JPEG/PNG 都按请求尺寸裁剪。
//!
//! ## 实现思路
//!
//! 1. 按嗅探格式选择解码器完整解码
//! 2. 按锚点计算起点，越界直接报错
//! 3. 按原格式编码到内存（PNG 无损，JPEG 最高质量）

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ColorType, DynamicImage, GenericImageView};
use std::borrow::Cow;

use super::source::{RawImageData, SourceFormat};
use super::{CropAnchor, CropConfig, CropError, ImageCropper};

impl ImageCropper {
    /// 使用与嗅探格式匹配的解码器解码原始字节。
    pub(super) fn decode(&self, raw: &RawImageData) -> Result<DynamicImage, CropError> {
        let decoded = image::load_from_memory_with_format(&raw.bytes, raw.format.image_format())
            .map_err(|e| CropError::Decode(format!("{} 解码失败：{}", raw.format, e)))?;

        log::debug!(
            "🧩 解码完成 - 格式: {} 尺寸: {}x{} 颜色: {:?}",
            raw.format,
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded)
    }

    /// 按锚点裁剪出 `width x height` 的子图。
    ///
    /// 返回裁剪结果与起点坐标。
    pub(crate) fn crop_image(
        image: &DynamicImage,
        anchor: CropAnchor,
        width: u32,
        height: u32,
    ) -> Result<(DynamicImage, (u32, u32)), CropError> {
        let (x, y) = anchor.resolve_origin(image.dimensions(), (width, height))?;
        // crop_imm 会静默截断越界区域，起点必须先经过 resolve_origin 校验
        Ok((image.crop_imm(x, y, width, height), (x, y)))
    }

    /// 按原格式将图像编码到内存。
    pub(crate) fn encode(
        image: &DynamicImage,
        format: SourceFormat,
        config: &CropConfig,
    ) -> Result<Vec<u8>, CropError> {
        let mut buffer = Vec::new();

        match format {
            SourceFormat::Png => {
                image
                    .write_with_encoder(PngEncoder::new(&mut buffer))
                    .map_err(|e| CropError::Encode(format!("PNG 编码失败：{}", e)))?;
            }
            SourceFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut buffer, config.jpeg_quality);
                Self::to_jpeg_compatible(image)
                    .write_with_encoder(encoder)
                    .map_err(|e| CropError::Encode(format!("JPEG 编码失败：{}", e)))?;
            }
        }

        Ok(buffer)
    }

    /// JPEG 编码器只接受 8 位灰度与 RGB，其余颜色类型先转换为 RGB8。
    fn to_jpeg_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
        match image.color() {
            ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
            other => {
                log::debug!("JPEG 编码前转换颜色类型：{:?} -> Rgb8", other);
                Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
            }
        }
    }
}
