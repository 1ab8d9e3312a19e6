//! # 图片裁剪工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs ── env_logger 初始化 + clap 解析 + 退出码         │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ cli::run(Args) -> Result<BatchReport, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ cli ──────── 参数校验 → RunPlan                        │
//! │  ├─ batch ────── 顺序处理 + 失败策略 (Abort / KeepGoing)   │
//! │  ├─ cropper ──── 读取·嗅探·解码·裁剪·编码·写出             │
//! │  └─ error ────── AppError (统一错误类型)                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`cli`] | 命令行参数定义与校验，整体运行入口 |
//! | [`batch`] | 逐个处理输入文件，默认遇错即停 |
//! | [`cropper`] | 单个文件的完整裁剪流水线 |
//! | [`error`] | 应用级错误类型 `AppError` |

pub mod batch;
pub mod cli;
pub mod cropper;
pub mod error;
