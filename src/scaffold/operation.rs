use std::path::PathBuf;

/// A single completed (or previewed) scaffold item.
///
/// `target_exists` records the state found on disk before the item ran;
/// an existing target means the item was skipped, never overwritten.
#[derive(Debug)]
pub enum ScaffoldOperation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    WriteFile { target: PathBuf, content: String, target_exists: bool },
}

impl ScaffoldOperation {
    /// Returns the target path for this operation, used for error context.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            ScaffoldOperation::CreateDirectory { target, .. } => target,
            ScaffoldOperation::WriteFile { target, .. } => target,
        }
    }

    /// Whether the target already existed and the item was skipped.
    pub fn skipped(&self) -> bool {
        match self {
            ScaffoldOperation::CreateDirectory { target_exists, .. } => *target_exists,
            ScaffoldOperation::WriteFile { target_exists, .. } => *target_exists,
        }
    }

    /// Gets the per-item status line describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            ScaffoldOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping directory '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Created directory '{}'", prefix, target.display())
                }
            }

            ScaffoldOperation::WriteFile { target, target_exists, .. } => {
                if *target_exists {
                    format!("{}Skipping '{}' (already exists)", prefix, target.display())
                } else {
                    format!("{}Created '{}'", prefix, target.display())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_directory_message_when_missing() {
        let target = PathBuf::from("/tmp/test/docs");
        let expected = format!("Created directory '{}'", &target.display());

        let op = ScaffoldOperation::CreateDirectory { target, target_exists: false };
        assert_eq!(op.get_message(false), expected);
        assert!(!op.skipped());
    }

    #[test]
    fn create_directory_skips_when_exists() {
        let target = PathBuf::from("/tmp/test/docs");
        let expected =
            format!("Skipping directory '{}' (already exists)", &target.display());

        let op = ScaffoldOperation::CreateDirectory { target, target_exists: true };
        assert_eq!(op.get_message(false), expected);
        assert!(op.skipped());
    }

    #[test]
    fn write_file_message_when_missing() {
        let target = PathBuf::from("/tmp/test/README.md");
        let expected = format!("Created '{}'", &target.display());

        let op = ScaffoldOperation::WriteFile {
            target,
            content: "".to_string(),
            target_exists: false,
        };
        assert_eq!(op.get_message(false), expected);
    }

    #[test]
    fn write_file_skips_when_exists() {
        let target = PathBuf::from("/tmp/test/credentials.md");
        let expected = format!("Skipping '{}' (already exists)", &target.display());

        let op = ScaffoldOperation::WriteFile {
            target,
            content: "".to_string(),
            target_exists: true,
        };
        assert_eq!(op.get_message(false), expected);
        assert!(op.skipped());
    }

    #[test]
    fn dry_run_messages_are_prefixed() {
        let target = PathBuf::from("/tmp/test/docs");
        let op = ScaffoldOperation::CreateDirectory { target, target_exists: false };

        let dry_run_message = op.get_message(true);
        let normal_message = op.get_message(false);

        assert!(dry_run_message.starts_with("[DRY RUN] "));
        assert!(!normal_message.starts_with("[DRY RUN] "));
        assert_eq!(dry_run_message, format!("[DRY RUN] {}", normal_message));
    }

    #[test]
    fn target_path_returns_target() {
        let target = PathBuf::from("/tmp/test/README.md");
        let op = ScaffoldOperation::WriteFile {
            target: target.clone(),
            content: "content".to_string(),
            target_exists: false,
        };
        assert_eq!(op.target_path(), &target);
    }
}
