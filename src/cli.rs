//! 命令行模块
//!
//! # 设计思路
//!
//! 命令行只负责参数解析与校验，校验全部通过之后才会触碰文件。
//! 宽高以有符号整数接收，以便对 `--height=0`、`--height=-5` 给出统一的诊断信息。
//!
//! ```text
//! image-cropper --height=5000 --width=7000 <图片1> <图片2>
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::batch::{self, BatchReport, FailurePolicy};
use crate::cropper::{CropAnchor, CropConfig, CropRequest, ImageCropper};
use crate::error::AppError;

/// 将 JPEG/PNG 图片裁剪为固定尺寸，输出为同目录下的 `cropped_<原文件名>`
#[derive(Parser, Debug)]
#[command(name = "image-cropper", version, about, long_about = None)]
pub struct Args {
    /// 裁剪高度（正整数）
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// 裁剪宽度（正整数）
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// 裁剪锚点：top-left、center 或 X,Y
    #[arg(long, default_value = "top-left")]
    pub anchor: CropAnchor,

    /// 单个文件失败时继续处理其余文件，最后汇总
    #[arg(long)]
    pub keep_going: bool,

    /// 待裁剪的图片路径
    pub paths: Vec<PathBuf>,
}

/// 校验后的运行计划
///
/// 裁剪尺寸只保存在每个 `CropRequest` 中。
#[derive(Debug)]
pub struct RunPlan {
    pub config: CropConfig,
    pub requests: Vec<CropRequest>,
    pub policy: FailurePolicy,
}

impl Args {
    /// 校验参数并生成运行计划，依次检查高度、宽度与输入路径。
    pub fn into_plan(self) -> Result<RunPlan, AppError> {
        let height = positive_dimension(self.height, "高度")?;
        let width = positive_dimension(self.width, "宽度")?;

        if self.paths.is_empty() {
            return Err(AppError::Config("至少需要指定 1 张待裁剪的图片".to_string()));
        }

        let policy = if self.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::Abort
        };

        let requests = self
            .paths
            .into_iter()
            .map(|path| CropRequest::new(path, width, height))
            .collect();

        Ok(RunPlan {
            config: CropConfig::default().with_anchor(self.anchor),
            requests,
            policy,
        })
    }
}

fn positive_dimension(value: Option<i64>, name: &str) -> Result<u32, AppError> {
    match value {
        Some(v) if v > 0 => u32::try_from(v)
            .map_err(|_| AppError::Config(format!("裁剪{}过大：{}", name, v))),
        _ => Err(AppError::Config(format!("必须将裁剪{}指定为正整数", name))),
    }
}

/// 解析后的参数入口：校验、构建裁剪器并执行批处理。
pub fn run(args: Args) -> Result<BatchReport, AppError> {
    let plan = args.into_plan()?;
    let cropper =
        ImageCropper::new(plan.config).map_err(|e| AppError::Config(e.to_string()))?;

    if let Some(first) = plan.requests.first() {
        log::info!(
            "✂️ 开始裁剪 {} 个文件 - 目标尺寸: {}x{} 锚点: {} 策略: {:?}",
            plan.requests.len(),
            first.width,
            first.height,
            cropper.config().anchor,
            plan.policy
        );
    }

    batch::run_batch(&cropper, &plan.requests, plan.policy)?.into_result()
}
