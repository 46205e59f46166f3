//! The fixed skeleton manifest.
//!
//! Paths are relative to the output root and declared in the order they are
//! processed and reported. The declared order is for readable console output
//! only; recursive directory creation makes parent-before-child ordering a
//! non-issue.

pub mod templates;

/// A file to generate: where it goes and the template its content comes from.
#[derive(Debug, Clone, Copy)]
pub struct FileSpec {
    pub path: &'static str,
    pub template: &'static str,
}

/// Directories of the Phase 1 skeleton.
pub const DIRECTORIES: &[&str] = &[
    // Hardware
    "hardware/field_node",
    "hardware/gateway",
    "hardware/docs/wiring_diagrams",
    // Cloud Backend
    "cloud_backend/database/migrations",
    "cloud_backend/mqtt",
    "cloud_backend/docs",
    // Dashboard
    "dashboard/public",
    "dashboard/src/components",
    "dashboard/src/pages",
    "dashboard/src/services",
    // Gateway Firmware V2
    "gateway_firmware_v2",
    // Testing
    "testing/test_plans",
    "testing/test_data",
    "testing/results",
    // Documentation
    "docs",
    // Scripts
    "scripts",
];

/// Documents of the Phase 1 skeleton, in generation order.
pub const FILES: &[FileSpec] = &[
    FileSpec { path: "README.md", template: templates::ROOT_README },
    FileSpec { path: ".gitignore", template: templates::GITIGNORE },
    FileSpec { path: "credentials.md", template: templates::CREDENTIALS },
    FileSpec { path: ".env.example", template: templates::ENV_EXAMPLE },
    FileSpec { path: "docs/account_setup.md", template: templates::ACCOUNT_SETUP },
    FileSpec { path: "docs/project_plan.md", template: templates::PROJECT_PLAN },
    FileSpec { path: "docs/milestones.md", template: templates::MILESTONES },
    FileSpec {
        path: "cloud_backend/docs/architecture.md",
        template: templates::ARCHITECTURE,
    },
    FileSpec {
        path: "cloud_backend/database/README.md",
        template: templates::DATABASE_README,
    },
    FileSpec { path: "cloud_backend/mqtt/README.md", template: templates::MQTT_README },
    FileSpec {
        path: "gateway_firmware_v2/README.md",
        template: templates::GATEWAY_README,
    },
    FileSpec {
        path: "testing/test_plans/phase1_test_plan.md",
        template: templates::TEST_PLAN,
    },
    FileSpec { path: "dashboard/README.md", template: templates::DASHBOARD_README },
    FileSpec { path: "hardware/README.md", template: templates::HARDWARE_README },
    FileSpec { path: "scripts/README.md", template: templates::SCRIPTS_README },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn manifest_counts_match_the_skeleton() {
        assert_eq!(DIRECTORIES.len(), 16);
        assert_eq!(FILES.len(), 15);
    }

    #[test]
    fn no_duplicate_paths() {
        let dirs: HashSet<_> = DIRECTORIES.iter().collect();
        assert_eq!(dirs.len(), DIRECTORIES.len());

        let files: HashSet<_> = FILES.iter().map(|f| f.path).collect();
        assert_eq!(files.len(), FILES.len());
    }

    #[test]
    fn all_paths_are_relative() {
        for dir in DIRECTORIES {
            assert!(Path::new(dir).is_relative(), "absolute directory: {dir}");
        }
        for file in FILES {
            assert!(Path::new(file.path).is_relative(), "absolute file: {}", file.path);
        }
    }

    #[test]
    fn every_nested_file_parent_is_a_declared_directory() {
        for file in FILES {
            let parent = Path::new(file.path).parent().unwrap();
            if parent.as_os_str().is_empty() {
                continue; // root-level file
            }
            let covered = DIRECTORIES
                .iter()
                .any(|dir| Path::new(dir).starts_with(parent) || Path::new(dir) == parent);
            assert!(covered, "no declared directory covers parent of {}", file.path);
        }
    }

    #[test]
    fn no_template_is_empty() {
        for file in FILES {
            assert!(!file.template.is_empty(), "empty template for {}", file.path);
        }
    }

    #[test]
    fn mqtt_topic_placeholders_survive_in_architecture_doc() {
        assert!(templates::ARCHITECTURE.contains("data/{gateway_id}"));
        assert!(templates::ARCHITECTURE.contains("alerts/{farm_id}"));
    }
}
