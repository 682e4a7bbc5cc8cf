//! Platform directories for configuration and logs.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/tokenbridge` | `~/.local/share/tokenbridge` |
//! | macOS | `~/Library/Application Support/tokenbridge` | Same as config |
//! | Windows | `%APPDATA%/tokenbridge` | `%LOCALAPPDATA%/tokenbridge` |

use std::fs;
use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::eyre::eyre;

/// Application name used for directory naming.
pub const APP_NAME: &str = "tokenbridge";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "tokenbridge.log";

/// Path of the configuration file. The directory is not created.
///
/// # Errors
///
/// Returns an error if the platform has no configuration directory.
pub fn config_file() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| {
        eyre!(
            "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
        )
    })?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE_NAME);
    Ok(path)
}

/// Data directory, created if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be determined or created.
pub fn data_dir() -> Result<PathBuf> {
    let mut path = dirs::data_dir().ok_or_else(|| eyre!("Could not find data directory"))?;
    path.push(APP_NAME);
    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Path of the log file inside [`data_dir`].
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined or created.
pub fn log_file() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name() {
        if let Ok(path) = config_file() {
            assert!(path.ends_with("tokenbridge/config.json"));
        }
    }

    #[test]
    fn test_log_file_lives_in_data_dir() {
        if let (Ok(log), Ok(data)) = (log_file(), data_dir()) {
            assert_eq!(log.parent(), Some(data.as_path()));
            assert_eq!(log.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
        }
    }
}
