//! # 批量执行器
//!
//! 文件级并行：每个数据文件由一个 rayon 任务独立处理，
//! 单个文件内部的 q 点按顺序串行求值。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 线程池

use crate::error::{ParacrystalError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// 单个数据文件的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// 已写出结果文件，points 为求值的 q 点数
    Written { output: PathBuf, points: usize },
    /// 结果文件已存在
    Skipped { output: PathBuf },
    /// 读取、求值或写出失败
    Failed { input: PathBuf, reason: String },
}

/// 一次批量运行的汇总
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    /// 所有写出文件的 q 点总数
    pub points: usize,
    pub failures: Vec<(PathBuf, String)>,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Written { points, .. } => {
                self.written += 1;
                self.points += points;
            }
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { input, reason } => {
                self.failed += 1;
                self.failures.push((input, reason));
            }
        }
    }

    pub fn files(&self) -> usize {
        self.written + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 线程数（0 已解析为 CPU 数）
    jobs: usize,
    show_progress: bool,
}

impl BatchRunner {
    /// jobs = 0 表示使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        Self {
            jobs: if jobs == 0 { num_cpus::get() } else { jobs },
            show_progress: true,
        }
    }

    /// 不显示进度条
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理所有文件，失败不会中断其他文件
    pub fn run<F>(&self, files: &[PathBuf], process: F) -> Result<BatchSummary>
    where
        F: Fn(&PathBuf) -> FileOutcome + Sync + Send,
    {
        let start = Instant::now();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| ParacrystalError::Other(format!("Failed to build thread pool: {}", e)))?;

        let pb = if self.show_progress {
            progress::create_progress_bar(files.len() as u64, "Evaluating I(q)")
        } else {
            indicatif::ProgressBar::hidden()
        };

        // collect 保持输入顺序，失败列表因此与文件顺序一致
        let outcomes: Vec<FileOutcome> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let outcome = process(file);
                    pb.inc(1);
                    outcome
                })
                .collect()
        });
        pb.finish_and_clear();

        let mut summary = outcomes
            .into_iter()
            .fold(BatchSummary::default(), |mut summary, outcome| {
                summary.record(outcome);
                summary
            });
        summary.elapsed = start.elapsed();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_points_and_failures() {
        let files: Vec<PathBuf> = ["a.dat", "b.dat", "c.dat", "d.dat", "e.dat"]
            .iter()
            .map(PathBuf::from)
            .collect();

        let summary = BatchRunner::new(3)
            .quiet()
            .run(&files, |file| match file.to_str() {
                Some("a.dat") => FileOutcome::Written {
                    output: PathBuf::from("a_iq.csv"),
                    points: 10,
                },
                Some("b.dat") => FileOutcome::Written {
                    output: PathBuf::from("b_iq.csv"),
                    points: 5,
                },
                Some("c.dat") => FileOutcome::Skipped {
                    output: PathBuf::from("c_iq.csv"),
                },
                _ => FileOutcome::Failed {
                    input: file.clone(),
                    reason: "no q values found".to_string(),
                },
            })
            .unwrap();

        assert_eq!(summary.written, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.points, 15);
        assert_eq!(summary.files(), 5);
        let failed: Vec<_> = summary.failures.iter().map(|(p, _)| p.clone()).collect();
        assert_eq!(failed, vec![PathBuf::from("d.dat"), PathBuf::from("e.dat")]);
    }

    #[test]
    fn test_zero_jobs_uses_all_cpus() {
        assert_eq!(BatchRunner::new(0).jobs(), num_cpus::get());
        assert_eq!(BatchRunner::new(2).jobs(), 2);
    }

    #[test]
    fn test_empty_file_list() {
        let summary = BatchRunner::new(1)
            .quiet()
            .run(&[], |_| unreachable!())
            .unwrap();
        assert_eq!(summary.files(), 0);
    }
}
