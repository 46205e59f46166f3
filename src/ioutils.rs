use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ensures the output root exists and is a writable directory.
///
/// A missing root is created together with any missing parents. Anything
/// other than a usable directory at that path is fatal to the run.
pub fn get_output_root<P: AsRef<Path>>(output_root: P) -> Result<PathBuf> {
    let output_root = output_root.as_ref();
    if output_root.exists() {
        if !output_root.is_dir() {
            return Err(Error::OutputRootError {
                output_root: output_root.display().to_string(),
                reason: "path exists but is not a directory".to_string(),
            });
        }
    } else {
        std::fs::create_dir_all(output_root).map_err(|e| Error::OutputRootError {
            output_root: output_root.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(output_root.to_path_buf())
}

/// Creates a directory (with parents) if it does not exist.
///
/// # Returns
/// * `Ok(true)` - the directory was created
/// * `Ok(false)` - a directory already exists at the path, nothing was done
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        if !path.is_dir() {
            return Err(Error::NotADirectory { path: path.display().to_string() });
        }
        return Ok(false);
    }
    std::fs::create_dir_all(path).map_err(Error::IoError)?;
    Ok(true)
}

/// Writes UTF-8 content to a file only if nothing exists at the path.
///
/// An existing file is never touched, whatever its current contents. This is
/// what makes re-runs safe: a filled-in credentials.md survives regeneration.
///
/// # Returns
/// * `Ok(true)` - the file was written
/// * `Ok(false)` - something already exists at the path, nothing was done
pub fn ensure_file<P: AsRef<Path>>(path: P, content: &str) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        if path.is_dir() {
            return Err(Error::NotAFile { path: path.display().to_string() });
        }
        return Ok(false);
    }
    std::fs::write(path, content).map_err(Error::IoError)?;
    Ok(true)
}
