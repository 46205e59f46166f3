use std::path::{Path, PathBuf};

use agriscaffold::cli::{run, Args};
use agriscaffold::manifest::{DIRECTORIES, FILES};

fn args_for(output_root: &Path) -> Args {
    Args {
        project_name: "AgriConnect".to_string(),
        author_name: "Test Author".to_string(),
        company_name: "AgriConnect".to_string(),
        output_root: output_root.to_path_buf(),
        verbose: 0,
        dry_run: false,
    }
}

fn generated_file_count(root: &Path) -> usize {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn one_run_produces_the_complete_skeleton() {
    let root = tempfile::tempdir().unwrap();

    let report = run(args_for(root.path())).unwrap();

    assert_eq!(report.dirs_created, DIRECTORIES.len());
    assert_eq!(report.dirs_existing, 0);
    assert_eq!(report.files_created, FILES.len());
    assert_eq!(report.files_existing, 0);
    assert_eq!(report.failed, 0);

    for directory in DIRECTORIES {
        assert!(root.path().join(directory).is_dir(), "missing directory {directory}");
    }
    for file in FILES {
        assert!(root.path().join(file.path).is_file(), "missing file {}", file.path);
    }
    assert_eq!(generated_file_count(root.path()), FILES.len());
}

#[test]
fn second_run_reports_everything_as_existing() {
    let root = tempfile::tempdir().unwrap();

    run(args_for(root.path())).unwrap();
    let second = run(args_for(root.path())).unwrap();

    assert_eq!(second.dirs_created, 0);
    assert_eq!(second.dirs_existing, DIRECTORIES.len());
    assert_eq!(second.files_created, 0);
    assert_eq!(second.files_existing, FILES.len());
    assert_eq!(second.failed, 0);
}

#[test]
fn running_twice_leaves_the_same_state_as_running_once() {
    let once = tempfile::tempdir().unwrap();
    let twice = tempfile::tempdir().unwrap();

    run(args_for(once.path())).unwrap();
    run(args_for(twice.path())).unwrap();
    run(args_for(twice.path())).unwrap();

    assert!(!dir_diff::is_different(once.path(), twice.path()).unwrap());
}

#[test]
fn generation_is_deterministic_for_identical_settings() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();

    run(args_for(a.path())).unwrap();
    run(args_for(b.path())).unwrap();

    assert!(!dir_diff::is_different(a.path(), b.path()).unwrap());
}

#[test]
fn pre_existing_credentials_survive_a_run() {
    let root = tempfile::tempdir().unwrap();
    let credentials = root.path().join("credentials.md");
    std::fs::write(&credentials, "my secret broker password").unwrap();

    let report = run(args_for(root.path())).unwrap();

    assert_eq!(
        std::fs::read_to_string(&credentials).unwrap(),
        "my secret broker password"
    );
    assert_eq!(report.files_existing, 1);
    assert_eq!(report.files_created, FILES.len() - 1);
    assert_eq!(report.failed, 0);
}

#[test]
fn dry_run_previews_without_writing() {
    let root = tempfile::tempdir().unwrap();
    let mut args = args_for(root.path());
    args.dry_run = true;

    let report = run(args).unwrap();

    assert_eq!(report.dirs_created, DIRECTORIES.len());
    assert_eq!(report.files_created, FILES.len());
    assert!(std::fs::read_dir(root.path()).unwrap().next().is_none());
}

#[test]
fn settings_are_rendered_into_the_documents() {
    let root = tempfile::tempdir().unwrap();
    let mut args = args_for(root.path());
    args.project_name = "TerraWatch".to_string();
    args.author_name = "Jane Farmer".to_string();

    run(args).unwrap();

    let readme = std::fs::read_to_string(root.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# TerraWatch"));
    assert!(!readme.contains("{{project_name}}"));
    assert!(readme.contains("**Author**: Jane Farmer"));

    let plan = std::fs::read_to_string(root.path().join("docs/project_plan.md")).unwrap();
    assert!(plan.contains("**Author:** Jane Farmer"));
    assert!(!plan.contains("{{date}}"));
}

#[test]
fn run_continues_past_an_obstructed_item() {
    let root = tempfile::tempdir().unwrap();
    // A file where a directory belongs makes that one item fail.
    std::fs::create_dir_all(root.path().join("hardware")).unwrap();
    std::fs::write(root.path().join("hardware/field_node"), "in the way").unwrap();

    let report = run(args_for(root.path())).unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.dirs_created, DIRECTORIES.len() - 1);
    assert_eq!(report.files_created, FILES.len());
    assert!(root.path().join("docs/project_plan.md").is_file());
}

#[test]
fn fatal_when_output_root_is_a_file() {
    let scratch = tempfile::tempdir().unwrap();
    let obstruction = scratch.path().join("not_a_dir");
    std::fs::write(&obstruction, "x").unwrap();

    let err = run(args_for(&obstruction)).unwrap_err();
    assert!(matches!(err, agriscaffold::error::Error::OutputRootError { .. }));
}

#[test]
fn output_root_is_created_when_missing() {
    let scratch = tempfile::tempdir().unwrap();
    let nested: PathBuf = scratch.path().join("deep/nested/root");

    let report = run(args_for(&nested)).unwrap();

    assert_eq!(report.failed, 0);
    assert!(nested.join("README.md").is_file());
}
