//! Constants used throughout the agriscaffold application

/// Default project name rendered into the generated documents.
pub const DEFAULT_PROJECT_NAME: &str = "AgriConnect";

/// Default author name rendered into the generated documents.
pub const DEFAULT_AUTHOR_NAME: &str = "DZE-KUM SHALOM CHOW";

/// Default company name rendered into the generated documents.
pub const DEFAULT_COMPANY_NAME: &str = "AgriConnect";

/// Default output root when none is given on the command line.
pub const DEFAULT_OUTPUT_ROOT: &str = ".";

/// Date format stamped into every generated document.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Banner width for the console report.
pub const BANNER_WIDTH: usize = 60;

/// Checklist printed after a completed run.
pub const NEXT_STEPS: &str = r#"1. Review the generated structure:
   - Check README.md files in each directory
   - Read docs/project_plan.md
   - Review docs/account_setup.md

2. Initialize Git repository:
   - git init
   - git add .
   - git commit -m 'Initial project structure'

3. Set up cloud accounts:
   - Follow docs/account_setup.md
   - Fill in credentials.md

4. Start Phase 1 development:
   - Begin with database schema design
   - Update docs/milestones.md weekly"#;

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

/// Placeholder keys recognized by the renderer.
pub mod placeholders {
    pub const PROJECT_NAME: &str = "project_name";
    pub const AUTHOR_NAME: &str = "author_name";
    pub const COMPANY_NAME: &str = "company_name";
    pub const DATE: &str = "date";
}
