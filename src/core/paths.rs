//! Path and pattern helpers shared by the discovery passes.
//!
//! - [`expand_home`]: replace a single leading `~` with the home directory
//! - [`should_ignore`]: glob-match a path's base name against ignore patterns

use crate::core::dirs::get_home_directory;
use crate::core::error::Result;
use glob::Pattern;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Only the first `~` is replaced and only when the path starts with it;
/// every other path is returned unchanged without touching the environment.
///
/// # Examples
/// ```no_run
/// use lazytf::core::paths::expand_home;
///
/// let projects = expand_home("~/Projects")?;
/// assert!(projects.ends_with("Projects"));
/// # Ok::<(), lazytf::LazyTfError>(())
/// ```
pub fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix('~') {
        Some(rest) => {
            let home = get_home_directory()?;
            Ok(PathBuf::from(format!("{}{}", home.display(), rest)))
        }
        None => Ok(PathBuf::from(path)),
    }
}

/// Returns true when the base name of `path` matches any ignore pattern.
///
/// Malformed patterns never match.
pub fn should_ignore(path: &Path, ignore_patterns: &[String]) -> bool {
    let Some(base_name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    ignore_patterns.iter().any(|pattern| match Pattern::new(pattern) {
        Ok(glob) => glob.matches(base_name),
        Err(e) => {
            log::debug!("Ignoring malformed pattern '{pattern}': {e}");
            false
        }
    })
}
