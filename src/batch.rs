//! 批处理模块
//!
//! # 设计思路
//!
//! 逐个、顺序处理输入路径，每个文件的解码结果与输出句柄在进入下一个文件前释放。
//!
//! - `FailurePolicy::Abort`（默认）：遇到第一个失败立即返回，后续文件不再处理。
//! - `FailurePolicy::KeepGoing`：处理全部文件并汇总结果，存在失败时由
//!   [`BatchReport::into_result`] 转为 `AppError::Batch`。

use std::path::PathBuf;

use crate::cropper::{CropError, CropOutcome, CropRequest, ImageCropper};
use crate::error::AppError;

/// 批处理失败策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    #[default]
    Abort,
    KeepGoing,
}

/// 批处理结果汇总
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<CropOutcome>,
    pub failures: Vec<(PathBuf, CropError)>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.succeeded() + self.failed()
    }

    /// 存在失败文件时转换为错误。
    pub fn into_result(self) -> Result<Self, AppError> {
        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(AppError::Batch {
                failed: self.failed(),
                total: self.total(),
            })
        }
    }
}

/// 按顺序执行所有裁剪请求。
pub fn run_batch(
    cropper: &ImageCropper,
    requests: &[CropRequest],
    policy: FailurePolicy,
) -> Result<BatchReport, AppError> {
    let mut report = BatchReport::default();

    for request in requests {
        let path = request.input_path.as_path();
        match cropper.crop(request) {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(source) => match policy {
                FailurePolicy::Abort => {
                    return Err(AppError::Crop {
                        path: path.to_path_buf(),
                        source,
                    });
                }
                FailurePolicy::KeepGoing => {
                    log::warn!("⚠️ 跳过 {}：{}", path.display(), source);
                    report.failures.push((path.to_path_buf(), source));
                }
            },
        }
    }

    log::info!(
        "📊 批处理结束 - 成功: {} 失败: {} 共: {}",
        report.succeeded(),
        report.failed(),
        report.total()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cropper::CropConfig;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
    use std::path::Path;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = ImageBuffer::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        DynamicImage::ImageRgba8(img)
            .save_with_format(path, ImageFormat::Png)
            .expect("failed to write test png");
    }

    fn setup() -> (tempfile::TempDir, Vec<CropRequest>) {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"\x89PNG\r\n\x1a\ngarbage").expect("write failed");
        let good = dir.path().join("good.png");
        write_png(&good, 20, 20);
        let requests = vec![
            CropRequest::new(broken, 10, 10),
            CropRequest::new(good, 10, 10),
        ];
        (dir, requests)
    }

    #[test]
    fn abort_policy_stops_at_first_failure() {
        let (dir, requests) = setup();
        let cropper = ImageCropper::new(CropConfig::default()).expect("cropper init failed");

        let result = run_batch(&cropper, &requests, FailurePolicy::Abort);

        match result {
            Err(AppError::Crop { path, .. }) => assert_eq!(path, requests[0].input_path),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!dir.path().join("cropped_good.png").exists());
    }

    #[test]
    fn keep_going_policy_processes_remaining_files() {
        let (dir, requests) = setup();
        let cropper = ImageCropper::new(CropConfig::default()).expect("cropper init failed");

        let report =
            run_batch(&cropper, &requests, FailurePolicy::KeepGoing).expect("batch should finish");

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failures[0].0, requests[0].input_path);
        assert!(dir.path().join("cropped_good.png").exists());
        assert!(matches!(
            report.into_result(),
            Err(AppError::Batch { failed: 1, total: 2 })
        ));
    }

    #[test]
    fn all_success_report_converts_to_ok() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let first = dir.path().join("a.png");
        let second = dir.path().join("b.png");
        write_png(&first, 8, 8);
        write_png(&second, 8, 8);

        let cropper = ImageCropper::new(CropConfig::default()).expect("cropper init failed");
        let requests = [CropRequest::new(first, 4, 4), CropRequest::new(second, 4, 4)];
        let report = run_batch(&cropper, &requests, FailurePolicy::Abort)
            .expect("batch should succeed")
            .into_result()
            .expect("no failures expected");

        assert_eq!(report.succeeded(), 2);
        assert!(report.outcomes.iter().all(|o| o.cropped_dimensions == (4, 4)));
    }
}
