use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ioutils::{ensure_dir, ensure_file};

use super::operation::ScaffoldOperation;

/// Applies scaffold items under a fixed output root.
///
/// Every item is idempotent: existing targets are reported, never mutated.
/// In dry-run mode the filesystem is only inspected.
pub struct Executor {
    output_root: PathBuf,
    dry_run: bool,
}

impl Executor {
    pub fn new<P: AsRef<Path>>(output_root: P, dry_run: bool) -> Self {
        Self { output_root: output_root.as_ref().to_path_buf(), dry_run }
    }

    /// Creates a directory (with parents) relative to the output root.
    pub fn create_directory(&self, relative: &str) -> Result<ScaffoldOperation> {
        let target = self.output_root.join(relative);
        let target_exists = if self.dry_run {
            target.is_dir()
        } else {
            !ensure_dir(&target)?
        };
        Ok(ScaffoldOperation::CreateDirectory { target, target_exists })
    }

    /// Writes a rendered document relative to the output root, if absent.
    pub fn write_file(&self, relative: &str, content: String) -> Result<ScaffoldOperation> {
        let target = self.output_root.join(relative);
        let target_exists = if self.dry_run {
            target.exists()
        } else {
            !ensure_file(&target, &content)?
        };
        Ok(ScaffoldOperation::WriteFile { target, content, target_exists })
    }
}

/// Per-run tally of item outcomes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub dirs_created: usize,
    pub dirs_existing: usize,
    pub files_created: usize,
    pub files_existing: usize,
    pub failed: usize,
}

impl Report {
    pub fn record(&mut self, operation: &ScaffoldOperation) {
        match operation {
            ScaffoldOperation::CreateDirectory { target_exists, .. } => {
                if *target_exists {
                    self.dirs_existing += 1;
                } else {
                    self.dirs_created += 1;
                }
            }
            ScaffoldOperation::WriteFile { target_exists, .. } => {
                if *target_exists {
                    self.files_existing += 1;
                } else {
                    self.files_created += 1;
                }
            }
        }
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn directories_processed(&self) -> usize {
        self.dirs_created + self.dirs_existing
    }

    pub fn files_processed(&self) -> usize {
        self.files_created + self.files_existing
    }

    /// A run where not a single item succeeded.
    pub fn is_total_failure(&self) -> bool {
        self.failed > 0 && self.directories_processed() + self.files_processed() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_directory_reports_created_then_existing() {
        let root = tempfile::tempdir().unwrap();
        let executor = Executor::new(root.path(), false);

        let first = executor.create_directory("docs").unwrap();
        assert!(!first.skipped());
        assert!(root.path().join("docs").is_dir());

        let second = executor.create_directory("docs").unwrap();
        assert!(second.skipped());
    }

    #[test]
    fn write_file_reports_created_then_existing() {
        let root = tempfile::tempdir().unwrap();
        let executor = Executor::new(root.path(), false);

        let first = executor.write_file("README.md", "# Hello".to_string()).unwrap();
        assert!(!first.skipped());

        let second = executor.write_file("README.md", "# Other".to_string()).unwrap();
        assert!(second.skipped());
        assert_eq!(
            std::fs::read_to_string(root.path().join("README.md")).unwrap(),
            "# Hello"
        );
    }

    #[test]
    fn dry_run_touches_nothing() {
        let root = tempfile::tempdir().unwrap();
        let executor = Executor::new(root.path(), true);

        let dir_op = executor.create_directory("docs").unwrap();
        let file_op = executor.write_file("README.md", "# Hello".to_string()).unwrap();

        assert!(!dir_op.skipped());
        assert!(!file_op.skipped());
        assert!(!root.path().join("docs").exists());
        assert!(!root.path().join("README.md").exists());
    }

    #[test]
    fn report_tallies_outcomes() {
        let mut report = Report::default();
        report.record(&ScaffoldOperation::CreateDirectory {
            target: "docs".into(),
            target_exists: false,
        });
        report.record(&ScaffoldOperation::CreateDirectory {
            target: "scripts".into(),
            target_exists: true,
        });
        report.record(&ScaffoldOperation::WriteFile {
            target: "README.md".into(),
            content: String::new(),
            target_exists: false,
        });
        report.record_failure();

        assert_eq!(report.dirs_created, 1);
        assert_eq!(report.dirs_existing, 1);
        assert_eq!(report.files_created, 1);
        assert_eq!(report.files_existing, 0);
        assert_eq!(report.failed, 1);
        assert_eq!(report.directories_processed(), 2);
        assert_eq!(report.files_processed(), 1);
        assert!(!report.is_total_failure());
    }

    #[test]
    fn total_failure_requires_zero_successes() {
        let mut report = Report::default();
        report.record_failure();
        assert!(report.is_total_failure());
    }
}
