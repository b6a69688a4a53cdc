use crate::core::error::{LazyTfError, Result};
use std::path::PathBuf;

/// Directory holding `config.json`, following each platform's convention.
pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => get_home_directory()?.join(".config"),
        },
        "macos" => get_home_directory()?.join("Library/Application Support"),
        _ => dirs::config_dir().ok_or(LazyTfError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("lazytf"))
}

pub fn get_home_directory() -> Result<PathBuf> {
    dirs::home_dir().ok_or(LazyTfError::HomeDirectoryNotFound)
}

/// Location of the AWS CLI shared config file (`~/.aws/config`).
pub fn get_aws_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("AWS_CONFIG_FILE") {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    Ok(get_home_directory()?.join(".aws").join("config"))
}
