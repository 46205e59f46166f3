/// Handles argument parsing and run orchestration.
pub mod cli;

/// Run-time settings resolved once per invocation.
pub mod config;

/// Constants used throughout the application.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// The fixed directory and file manifest for the generated skeleton.
pub mod manifest;

/// Placeholder substitution for document templates.
pub mod renderer;

/// Idempotent scaffold operations and their execution.
pub mod scaffold;
