//! # 图片裁剪工具 — 应用入口
//!
//! 本文件仅负责日志初始化、参数解析与退出码。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use clap::Parser;
use image_cropper::cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();

    match cli::run(args) {
        Ok(report) => {
            log::info!("🎉 全部完成，共输出 {} 个文件", report.succeeded());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
