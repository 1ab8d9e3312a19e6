//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `ImageCropper` 只负责流程编排与配置持有，不关心命令行与批处理策略。
//! 裁剪尺寸只来自 `CropRequest`，配置中只有锚点、编码与命名策略。
//! 处理链路固定为：
//! 1. 按路径加载原始字节并嗅探格式
//! 2. 解码
//! 3. 按锚点裁剪
//! 4. 按原格式编码到内存
//! 5. 写入输出文件
//!
//! 编码在写入之前完成，前面任何一步失败都不会留下输出文件。
//! 记录 `load/decode/crop/encode/write/total` 阶段耗时，便于性能诊断。

use std::time::Instant;

use image::GenericImageView;

use super::{CropConfig, CropError, CropOutcome, CropRequest};

/// 图片裁剪器。
pub struct ImageCropper {
    config: CropConfig,
}

impl ImageCropper {
    /// 根据配置创建裁剪器，配置非法时直接返回错误。
    ///
    /// # 示例
    /// ```rust
    /// use image_cropper::cropper::{CropAnchor, CropConfig, ImageCropper};
    ///
    /// let cropper = ImageCropper::new(CropConfig::default())?;
    /// assert_eq!(cropper.config().anchor, CropAnchor::TopLeft);
    /// # Ok::<(), image_cropper::cropper::CropError>(())
    /// ```
    pub fn new(config: CropConfig) -> Result<Self, CropError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// 处理主入口：读取、嗅探、解码、裁剪、编码并写出一个文件。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use image_cropper::cropper::{CropConfig, CropRequest, ImageCropper};
    ///
    /// let cropper = ImageCropper::new(CropConfig::default())?;
    /// let outcome = cropper.crop(&CropRequest::new("cat1.png", 400, 300))?;
    /// assert_eq!(outcome.cropped_dimensions, (400, 300));
    /// # Ok::<(), image_cropper::cropper::CropError>(())
    /// ```
    pub fn crop(&self, request: &CropRequest) -> Result<CropOutcome, CropError> {
        if request.width == 0 || request.height == 0 {
            return Err(CropError::InvalidConfig(format!(
                "裁剪尺寸必须为正整数：{}x{}",
                request.width, request.height
            )));
        }

        let config = &self.config;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = self.load_from_file(&request.input_path)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let decoded = self.decode(&raw)?;
        let source_dimensions = decoded.dimensions();
        let decode_elapsed = decode_start.elapsed();

        let crop_start = Instant::now();
        let (cropped, origin) =
            Self::crop_image(&decoded, config.anchor, request.width, request.height)?;
        drop(decoded);
        let crop_elapsed = crop_start.elapsed();

        let encode_start = Instant::now();
        let bytes = Self::encode(&cropped, raw.format, config)?;
        let encode_elapsed = encode_start.elapsed();

        let write_start = Instant::now();
        let output_path = Self::output_path_for(&request.input_path, config)?;
        self.write_output(&output_path, &bytes)?;
        let write_elapsed = write_start.elapsed();

        log::info!(
            "✅ 裁剪完成 - {} -> {} 格式: {} 源尺寸: {}x{} 起点: ({}, {}) 输出: {}x{}",
            request.input_path.display(),
            output_path.display(),
            raw.format,
            source_dimensions.0,
            source_dimensions.1,
            origin.0,
            origin.1,
            request.width,
            request.height
        );
        log::info!(
            "⏱️ load={}ms decode={}ms crop={}ms encode={}ms write={}ms total={}ms",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            crop_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            write_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(CropOutcome {
            input_path: request.input_path.clone(),
            output_path,
            format: raw.format,
            source_dimensions,
            cropped_dimensions: cropped.dimensions(),
            origin,
        })
    }
}
