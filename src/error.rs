//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError`，区分“参数错误”“单个文件失败”“批处理存在失败”三类结果。
//! `main` 只需要打印错误并以非零状态退出。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - `Crop` 分支保留失败文件路径，并通过 `#[source]` 保留底层 `CropError`。

use std::path::PathBuf;

use crate::cropper::CropError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 命令行参数非法，此时尚未触碰任何文件
    #[error("参数错误: {0}")]
    Config(String),

    /// 某个文件裁剪失败
    #[error("处理 {} 失败: {source}", .path.display())]
    Crop {
        path: PathBuf,
        #[source]
        source: CropError,
    },

    /// `--keep-going` 模式下存在失败文件
    #[error("{failed}/{total} 个文件处理失败")]
    Batch { failed: usize, total: usize },
}

