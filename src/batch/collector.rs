//! # 数据文件收集器
//!
//! 输入可以是单个文件或目录。目录输入按文件名模式过滤，
//! 模式大小写不敏感（`*.dat` 也匹配 `RUN1.DAT`）。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{ParacrystalError, Result};

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// 数据文件收集器
pub struct FileCollector {
    root: PathBuf,
    patterns: Vec<Pattern>,
    recursive: bool,
}

impl FileCollector {
    /// 无模式时目录下所有文件都匹配
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 逗号分隔的多个 glob 模式，如 "*.dat,*.txt"
    pub fn with_pattern(mut self, patterns: &str) -> Result<Self> {
        let mut compiled = Vec::new();
        for raw in patterns.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = Pattern::new(raw).map_err(|e| {
                ParacrystalError::InvalidArgument(format!("Invalid pattern '{}': {}", raw, e))
            })?;
            compiled.push(pattern);
        }
        self.patterns = compiled;
        Ok(self)
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 匹配的文件，按路径排序。单文件输入不受模式限制。
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.root.is_file() {
            return vec![self.root.clone()];
        }
        if !self.root.is_dir() {
            return Vec::new();
        }

        let walker = WalkDir::new(&self.root)
            .max_depth(if self.recursive { usize::MAX } else { 1 })
            .sort_by_file_name();

        walker
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file() && self.accepts(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }

    fn accepts(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.patterns.is_empty()
            || self
                .patterns
                .iter()
                .any(|p| p.matches_with(name, MATCH_OPTIONS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_directory_patterns_and_recursion() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), "0.1,1").unwrap();
        fs::write(dir.path().join("a.dat"), "0.1 1").unwrap();
        fs::write(dir.path().join("RUN2.DAT"), "0.1 1").unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();
        fs::write(dir.path().join(".hidden.dat"), "0.1 1").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.dat"), "0.1 1").unwrap();

        let flat = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.dat, *.csv")
            .unwrap()
            .collect();
        assert_eq!(names(&flat), vec!["RUN2.DAT", "a.dat", "b.csv"]);

        let deep = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.dat")
            .unwrap()
            .recursive(true)
            .collect();
        assert_eq!(names(&deep), vec!["RUN2.DAT", "a.dat", "c.dat"]);
    }

    #[test]
    fn test_single_file_ignores_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("run1.abs");
        fs::write(&file, "0.1 1").unwrap();
        let files = FileCollector::new(file.clone())
            .with_pattern("*.dat")
            .unwrap()
            .collect();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_missing_root_and_bad_pattern() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileCollector::new(dir.path().join("missing")).collect().is_empty());
        assert!(FileCollector::new(PathBuf::from("."))
            .with_pattern("[unclosed")
            .is_err());
    }
}
