//! # 图片裁剪模块（cropper）
//!
//! ## 设计思路
//!
//! 该模块将“文件加载 → 格式嗅探 → 解码 → 裁剪 → 编码 → 写出”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：负责文件读取与签名嗅探
//! - `pipeline`：负责解码、裁剪与编码
//! - `writer`：负责输出路径推导与落盘
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! batch::run_batch
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（读取 + 嗅探 JPEG/PNG）
//!    ├─ pipeline.rs（解码 + 裁剪 + 编码）
//!    └─ writer.rs（cropped_<文件名> + flush）
//!    ↓
//! 返回 CropOutcome / CropError
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{CropAnchor, CropConfig, DEFAULT_OUTPUT_PREFIX, MAX_JPEG_QUALITY};
pub use error::CropError;
pub use handler::ImageCropper;
pub use source::{CropOutcome, CropRequest, SourceFormat};
