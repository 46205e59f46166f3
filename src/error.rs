use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Cannot proceed: output root '{output_root}' is not usable: {reason}.")]
    OutputRootError { output_root: String, reason: String },

    #[error("Path '{path}' exists but is not a directory.")]
    NotADirectory { path: String },

    #[error("Path '{path}' exists but is not a regular file.")]
    NotAFile { path: String },
}

/// Convenience type alias for Results with the scaffold Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
