//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载裁剪链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

/// 裁剪处理统一错误类型。
///
/// 该类型会在批处理层被上转为 `AppError`，最终由 `main` 输出诊断信息。
#[derive(Debug, thiserror::Error)]
pub enum CropError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("不支持的图片类型：{0}")]
    UnsupportedType(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("裁剪区域错误：{0}")]
    Geometry(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),
}

