use crate::{
    cli::Args,
    config::Settings,
    constants::{BANNER_WIDTH, NEXT_STEPS},
    error::Result,
    ioutils::get_output_root,
    manifest::{DIRECTORIES, FILES},
    renderer::render,
    scaffold::executor::{Executor, Report},
};

/// Executes the complete skeleton generation workflow.
///
/// Directories first, then files, each in declared order. Per-item failures
/// are logged, counted and skipped over; only an unusable output root aborts
/// the run.
pub fn run(args: Args) -> Result<Report> {
    let settings = Settings::from_args(&args);
    let context = settings.to_context();

    let output_root = get_output_root(&args.output_root)?;
    log::debug!("Output root resolved to '{}'", output_root.display());

    let executor = Executor::new(&output_root, args.dry_run);
    let mut report = Report::default();

    print_banner(&format!("{} Project Structure Generator", settings.project_name));

    println!("Creating directories...");
    for directory in DIRECTORIES {
        match executor.create_directory(directory) {
            Ok(operation) => {
                println!("{}", operation.get_message(args.dry_run));
                report.record(&operation);
            }
            Err(e) => {
                log::error!("Failed to create directory '{directory}': {e}");
                report.record_failure();
            }
        }
    }

    println!("\nCreating files...");
    for file in FILES {
        let content = render(file.template, &context);
        match executor.write_file(file.path, content) {
            Ok(operation) => {
                println!("{}", operation.get_message(args.dry_run));
                report.record(&operation);
            }
            Err(e) => {
                log::error!("Failed to create file '{}': {e}", file.path);
                report.record_failure();
            }
        }
    }

    print_summary(&report, &settings);
    Ok(report)
}

fn print_banner(title: &str) {
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("  {title}");
    println!("{}\n", "=".repeat(BANNER_WIDTH));
}

fn print_summary(report: &Report, settings: &Settings) {
    print_banner("PROJECT STRUCTURE GENERATION COMPLETE");

    println!("Summary:");
    println!(
        "  Directories: {} created, {} already existed",
        report.dirs_created, report.dirs_existing
    );
    println!(
        "  Files:       {} created, {} already existed",
        report.files_created, report.files_existing
    );
    if report.failed > 0 {
        println!("  Failed:      {} item(s), see errors above", report.failed);
    }

    print_banner("NEXT STEPS");
    println!("{NEXT_STEPS}");
    print_banner(&format!("Ready to build {}!", settings.project_name));
}
