//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `CropConfig`，保证运行时行为可观测、可测试。
//! 裁剪尺寸只属于单次请求（`CropRequest`），配置里只放跨文件不变的策略。
//! 裁剪锚点（top-left / center / 自定义坐标）作为显式配置项暴露，默认左上角。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用的配置。
//! - `validate` 在触碰任何文件之前拒绝非法参数。
//! - `CropAnchor` 负责锚点字符串解析与反向输出。
//! - `resolve_origin` 将锚点换算为源图中的裁剪起点，并做越界检查。

use std::fmt;
use std::str::FromStr;

use super::CropError;

/// JPEG 重新编码时使用的质量（1~100）。
pub const MAX_JPEG_QUALITY: u8 = 100;

/// 输出文件名前缀。
pub const DEFAULT_OUTPUT_PREFIX: &str = "cropped_";

/// 裁剪配置。
#[derive(Debug, Clone)]
pub struct CropConfig {
    /// 裁剪锚点。
    pub anchor: CropAnchor,
    /// JPEG 输出质量，固定为最高值以减少二次有损压缩。
    pub jpeg_quality: u8,
    /// 输出文件名前缀。
    pub output_prefix: String,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            anchor: CropAnchor::default(),
            jpeg_quality: MAX_JPEG_QUALITY,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
        }
    }
}

impl CropConfig {
    /// # 示例
    /// ```rust
    /// use image_cropper::cropper::{CropAnchor, CropConfig};
    ///
    /// let config = CropConfig::default().with_anchor(CropAnchor::Center);
    /// assert_eq!(config.anchor, CropAnchor::Center);
    /// assert_eq!(config.jpeg_quality, 100);
    /// ```
    pub fn with_anchor(mut self, anchor: CropAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// 校验配置是否可用。
    pub fn validate(&self) -> Result<(), CropError> {
        if !(1..=MAX_JPEG_QUALITY).contains(&self.jpeg_quality) {
            return Err(CropError::InvalidConfig(format!(
                "jpeg_quality 必须在 1~{} 之间",
                MAX_JPEG_QUALITY
            )));
        }
        if self.output_prefix.is_empty() {
            return Err(CropError::InvalidConfig("输出文件名前缀不能为空".to_string()));
        }
        Ok(())
    }
}

/// 裁剪锚点：裁剪矩形起点在源图中的参照位置。
///
/// - `TopLeft`：起点固定为 `(0, 0)`
/// - `Center`：矩形居中
/// - `Point`：显式指定起点坐标
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CropAnchor {
    #[default]
    TopLeft,
    Center,
    Point { x: u32, y: u32 },
}

impl CropAnchor {
    /// 计算裁剪起点。
    ///
    /// 矩形超出源图边界时返回 `Geometry` 错误，不做截断或填充。
    pub fn resolve_origin(
        self,
        source: (u32, u32),
        target: (u32, u32),
    ) -> Result<(u32, u32), CropError> {
        let (source_width, source_height) = source;
        let (width, height) = target;

        if width > source_width || height > source_height {
            return Err(CropError::Geometry(format!(
                "裁剪尺寸 {}x{} 超出源图尺寸 {}x{}",
                width, height, source_width, source_height
            )));
        }

        let (x, y) = match self {
            Self::TopLeft => (0, 0),
            Self::Center => ((source_width - width) / 2, (source_height - height) / 2),
            Self::Point { x, y } => (x, y),
        };

        let right = x.checked_add(width);
        let bottom = y.checked_add(height);
        match (right, bottom) {
            (Some(right), Some(bottom)) if right <= source_width && bottom <= source_height => {
                Ok((x, y))
            }
            _ => Err(CropError::Geometry(format!(
                "裁剪区域 ({}, {}) {}x{} 超出源图尺寸 {}x{}",
                x, y, width, height, source_width, source_height
            ))),
        }
    }
}

impl FromStr for CropAnchor {
    type Err = CropError;

    /// 从外部字符串解析锚点。
    ///
    /// 可选值：`top-left`、`center`、`X,Y`。
    fn from_str(anchor: &str) -> Result<Self, Self::Err> {
        let normalized = anchor.trim().to_lowercase();
        match normalized.as_str() {
            "top-left" | "topleft" => Ok(Self::TopLeft),
            "center" | "centre" => Ok(Self::Center),
            other => {
                let parsed = other.split_once(',').and_then(|(x, y)| {
                    Some(Self::Point {
                        x: x.trim().parse().ok()?,
                        y: y.trim().parse().ok()?,
                    })
                });
                parsed.ok_or_else(|| {
                    CropError::InvalidConfig(format!(
                        "未知裁剪锚点：{}（可选：top-left / center / X,Y）",
                        other
                    ))
                })
            }
        }
    }
}

impl fmt::Display for CropAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLeft => f.write_str("top-left"),
            Self::Center => f.write_str("center"),
            Self::Point { x, y } => write!(f, "{},{}", x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_top_left_and_max_quality() {
        let config = CropConfig::default();
        assert_eq!(config.anchor, CropAnchor::TopLeft);
        assert_eq!(config.jpeg_quality, 100);
        assert_eq!(config.output_prefix, "cropped_");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_quality_and_empty_prefix() {
        let mut config = CropConfig::default();
        config.jpeg_quality = 0;
        assert!(matches!(config.validate(), Err(CropError::InvalidConfig(_))));

        let mut config = CropConfig::default();
        config.output_prefix.clear();
        assert!(matches!(config.validate(), Err(CropError::InvalidConfig(_))));
    }

    #[test]
    fn anchor_parses_known_values() {
        assert_eq!("top-left".parse::<CropAnchor>().unwrap(), CropAnchor::TopLeft);
        assert_eq!(" Center ".parse::<CropAnchor>().unwrap(), CropAnchor::Center);
        assert_eq!(
            "12, 34".parse::<CropAnchor>().unwrap(),
            CropAnchor::Point { x: 12, y: 34 }
        );
        assert!("bottom".parse::<CropAnchor>().is_err());
        assert!("1,-2".parse::<CropAnchor>().is_err());
    }

    #[test]
    fn anchor_display_is_stable() {
        assert_eq!(CropAnchor::TopLeft.to_string(), "top-left");
        assert_eq!(CropAnchor::Center.to_string(), "center");
        assert_eq!(CropAnchor::Point { x: 3, y: 9 }.to_string(), "3,9");
    }

    #[test]
    fn anchor_round_trips_through_display() {
        for anchor in [
            CropAnchor::TopLeft,
            CropAnchor::Center,
            CropAnchor::Point { x: 5, y: 7 },
        ] {
            assert_eq!(anchor.to_string().parse::<CropAnchor>().unwrap(), anchor);
        }
    }

    #[test]
    fn resolve_origin_follows_anchor() {
        assert_eq!(
            CropAnchor::TopLeft.resolve_origin((800, 600), (400, 300)).unwrap(),
            (0, 0)
        );
        assert_eq!(
            CropAnchor::Center.resolve_origin((800, 600), (400, 300)).unwrap(),
            (200, 150)
        );
        assert_eq!(
            CropAnchor::Point { x: 100, y: 50 }
                .resolve_origin((800, 600), (400, 300))
                .unwrap(),
            (100, 50)
        );
    }

    #[test]
    fn resolve_origin_rejects_out_of_bounds() {
        assert!(matches!(
            CropAnchor::TopLeft.resolve_origin((100, 100), (101, 50)),
            Err(CropError::Geometry(_))
        ));
        assert!(matches!(
            CropAnchor::Point { x: 60, y: 0 }.resolve_origin((100, 100), (50, 50)),
            Err(CropError::Geometry(_))
        ));
        assert!(matches!(
            CropAnchor::Point { x: u32::MAX, y: 0 }.resolve_origin((100, 100), (1, 1)),
            Err(CropError::Geometry(_))
        ));
    }
}
