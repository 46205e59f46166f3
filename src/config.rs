use chrono::Local;

use crate::cli::Args;
use crate::constants::{placeholders, DATE_FORMAT};
use crate::renderer::TemplateContext;

/// Values resolved once at the start of a run and reused for every template.
///
/// The date is captured here, not at render time, so that all documents
/// generated in a single run carry the same timestamp.
#[derive(Debug, Clone)]
pub struct Settings {
    pub project_name: String,
    pub author_name: String,
    pub company_name: String,
    pub date: String,
}

impl Settings {
    pub fn from_args(args: &Args) -> Self {
        Self {
            project_name: args.project_name.clone(),
            author_name: args.author_name.clone(),
            company_name: args.company_name.clone(),
            date: Local::now().format(DATE_FORMAT).to_string(),
        }
    }

    /// Builds the substitution context the renderer consumes.
    pub fn to_context(&self) -> TemplateContext {
        let mut context = TemplateContext::new();
        context.insert(placeholders::PROJECT_NAME, self.project_name.as_str());
        context.insert(placeholders::AUTHOR_NAME, self.author_name.as_str());
        context.insert(placeholders::COMPANY_NAME, self.company_name.as_str());
        context.insert(placeholders::DATE, self.date.as_str());
        context
    }
}
