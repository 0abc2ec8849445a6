//! Discovery of the `.labs/` directory.
//!
//! The `.labs/` directory holds the optional `config.yaml`. It is found by
//! walking up from the working directory, so the exercises can be run from
//! anywhere inside a project that carries one.

use std::path::{Path, PathBuf};

/// The name of the labs metadata directory.
const LABS_DIR_NAME: &str = ".labs";

/// The name of the environment variable that can override the labs directory.
const LABS_DIR_ENV: &str = "LABS_DIR";

/// Walk up the directory tree from `start` looking for a `.labs/` directory.
///
/// The `LABS_DIR` environment variable is checked first. Returns `None` if
/// the filesystem root is reached without finding one.
///
/// # Examples
///
/// ```no_run
/// use labs_config::labs_dir::find_labs_dir;
/// use std::path::Path;
///
/// if let Some(dir) = find_labs_dir(Path::new(".")) {
///     println!("Found labs dir at {}", dir.display());
/// }
/// ```
pub fn find_labs_dir(start: &Path) -> Option<PathBuf> {
    let from_env = std::env::var_os(LABS_DIR_ENV)
        .map(PathBuf::from)
        .filter(|dir| dir.is_dir());
    if from_env.is_some() {
        return from_env;
    }

    let start = start.canonicalize().ok()?;
    start
        .ancestors()
        .map(|dir| dir.join(LABS_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}
